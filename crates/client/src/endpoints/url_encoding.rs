//! URL construction for Jenkins job paths.
//!
//! Jenkins addresses a job nested in folders as `/job/<folder>/job/<name>`.
//! Each segment of a full name is percent-encoded on its own so that spaces,
//! `#`, `?` and similar characters in job names cannot change the request.
//!
//! # Example
//!
//! ```
//! use ji_client::endpoints::url_encoding::job_path;
//!
//! assert_eq!(job_path("team/web ci").unwrap(), "/job/team/job/web%20ci");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

use crate::error::{ClientError, Result};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus characters that are problematic in
/// Jenkins job URLs or could cause path traversal.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Split a full job name into its non-empty `/`-separated segments.
fn segments(full_name: &str) -> impl Iterator<Item = &str> {
    full_name.split('/').filter(|s| !s.is_empty())
}

/// Build the URL path of a job from its full name (`folder/name`).
///
/// # Errors
///
/// Returns [`ClientError::InvalidRequest`] when the name has no segments, and
/// for `.`/`..` segments which Jenkins would resolve relative to the parent.
pub fn job_path(full_name: &str) -> Result<String> {
    let mut path = String::new();
    for segment in segments(full_name) {
        if segment == "." || segment == ".." {
            return Err(ClientError::InvalidRequest(format!(
                "invalid job name segment '{}' in '{}'",
                segment, full_name
            )));
        }
        path.push_str("/job/");
        path.push_str(&encode_path_segment(segment));
    }

    if path.is_empty() {
        return Err(ClientError::InvalidRequest(
            "job name must not be empty".to_string(),
        ));
    }
    Ok(path)
}

/// Path of the folder containing a job, or the root (`""`) for top-level jobs.
pub fn folder_path(folder: Option<&str>) -> Result<String> {
    match folder {
        Some(name) if segments(name).next().is_some() => job_path(name),
        _ => Ok(String::new()),
    }
}

/// Split `a/b/c` into (`Some("a/b")`, `"c"`); `c` into (`None`, `"c"`).
pub fn split_parent(full_name: &str) -> (Option<String>, String) {
    let parts: Vec<&str> = segments(full_name).collect();
    match parts.split_last() {
        Some((leaf, [])) => (None, (*leaf).to_string()),
        Some((leaf, parents)) => (Some(parents.join("/")), (*leaf).to_string()),
        None => (None, String::new()),
    }
}
