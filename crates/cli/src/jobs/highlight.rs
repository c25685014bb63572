//! Terminal highlighting of grep matches.

use colored::Colorize;
use ji_client::JobRef;

use super::pattern::SearchPattern;

/// Lines of `xml` containing the pattern, in document order.
pub fn matching_lines<'a>(
    xml: &'a str,
    pattern: &'a SearchPattern,
) -> impl Iterator<Item = &'a str> + 'a {
    xml.lines().filter(move |line| pattern.is_match(line))
}

/// Render each match in `line` white on red when `color` is set.
pub fn highlight_matches(line: &str, pattern: &SearchPattern, color: bool) -> String {
    if !color || pattern.is_empty() {
        return line.to_string();
    }
    pattern
        .as_regex()
        .replace_all(line, |caps: &regex::Captures<'_>| {
            caps[0].white().on_red().to_string()
        })
        .into_owned()
}

/// `<display name> (<url>): <line>`, or `<url>: <line>` without a display name.
pub fn format_hit_line(job: &JobRef, line: &str) -> String {
    match job.display_name() {
        Some(name) => format!("{} ({}): {}", name, job.url, line),
        None => format!("{}: {}", job.url, line),
    }
}
