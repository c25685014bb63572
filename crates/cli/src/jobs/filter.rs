//! Skip and match decisions for jobs in a walk.

use ji_client::JobRef;

use super::pattern::SearchPattern;

/// True iff the job is disabled and disabled jobs are not shown.
///
/// Jobs that report no disabled flag are never excluded.
pub fn is_excluded(job: &JobRef, show_disabled: bool) -> bool {
    job.is_disabled() && !show_disabled
}

/// True iff the pattern occurs in `text`.
pub fn matches(pattern: &SearchPattern, text: &str) -> bool {
    pattern.is_match(text)
}
