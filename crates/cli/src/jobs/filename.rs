//! File names derived from job titles.

/// Extension appended to every saved configuration.
pub const CONFIG_EXTENSION: &str = ".xml";

const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Turn a title into a relative file name.
///
/// Forbidden characters are dropped, whitespace runs become one `-`, and
/// leading/trailing hyphens are trimmed before `.xml` is appended (unless
/// already present).
pub fn create_valid_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + CONFIG_EXTENSION.len());
    let mut in_whitespace = false;
    for c in title.chars().filter(|c| !FORBIDDEN.contains(c)) {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            name.push(c);
        }
    }

    let mut name = name.trim_matches('-').to_string();
    if !name.ends_with(CONFIG_EXTENSION) {
        name.push_str(CONFIG_EXTENSION);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_examples() {
        assert_eq!(create_valid_filename("Web CI"), "Web-CI.xml");
        assert_eq!(create_valid_filename("  a \t b  "), "a-b.xml");
        assert_eq!(create_valid_filename("team/deploy: prod?"), "teamdeploy-prod.xml");
        assert_eq!(create_valid_filename("job.xml"), "job.xml");
        assert_eq!(
            create_valid_filename("http://jenkins/job/x/"),
            "httpjenkinsjobx.xml"
        );
    }

    #[test]
    fn test_forbidden_removed_before_whitespace_collapse() {
        assert_eq!(create_valid_filename("a | b"), "a-b.xml");
    }

    #[test]
    fn test_only_hyphens() {
        assert_eq!(create_valid_filename("---"), ".xml");
    }

    proptest! {
        #[test]
        fn prop_no_forbidden_characters(title in ".{0,40}") {
            let name = create_valid_filename(&title);
            prop_assert!(!name.contains(FORBIDDEN));
            prop_assert!(!name.chars().any(char::is_whitespace));
        }

        #[test]
        fn prop_no_edge_hyphens_and_one_extension(title in "[a-z -]{0,20}") {
            let name = create_valid_filename(&title);
            let stem = name.strip_suffix(CONFIG_EXTENSION).unwrap();
            prop_assert!(!stem.starts_with('-'));
            prop_assert!(!stem.ends_with('-'));
            prop_assert!(!stem.ends_with(CONFIG_EXTENSION));
        }

        #[test]
        fn prop_idempotent(title in ".{0,40}") {
            let once = create_valid_filename(&title);
            prop_assert_eq!(create_valid_filename(&once), once.clone());
        }
    }
}
