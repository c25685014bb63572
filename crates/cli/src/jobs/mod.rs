//! Job-level building blocks shared by the commands.
//!
//! Responsibilities:
//! - Build search patterns and test them against names and configuration.
//! - Decide which jobs a walk skips.
//! - Turn job titles into file names and persist configuration XML.
//! - Read and validate XML before upload.
//! - Highlight matches in configuration lines.
//!
//! Does NOT handle:
//! - Talking to the server beyond [`ji_client::JenkinsApi`] calls.
//! - Iteration order or failure isolation (see the command handlers).

pub mod filename;
pub mod filter;
pub mod highlight;
pub mod pattern;
pub mod writer;
pub mod xml;

pub use filter::{is_excluded, matches};
pub use pattern::SearchPattern;
pub use writer::{WriteOptions, WriteOutcome, write_config};
pub use xml::read_xml;
