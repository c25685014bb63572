//! Reading and validating job configuration XML before upload.
//!
//! Parsing uses `roxmltree`, which rejects DTDs, so entity-expansion payloads
//! fail validation instead of being expanded. The parsed tree is discarded;
//! callers upload the original text.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::JobError;

/// Source designator meaning standard input.
pub const STDIN_SENTINEL: &str = "-";

/// Read XML from a file, or from `stdin` when `source` is `-`, and validate it.
pub async fn read_xml<R: Read>(source: &str, mut stdin: R) -> Result<String> {
    let content = if source == STDIN_SENTINEL {
        let mut content = String::new();
        stdin
            .read_to_string(&mut content)
            .context("Failed to read XML from standard input")?;
        content
    } else {
        let path = Path::new(source);
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?
    };

    validate_xml(&content)?;
    Ok(content)
}

/// Check that `content` is a well-formed XML document.
///
/// A `<!DOCTYPE>` is accepted, but entity declarations in it are refused.
pub fn validate_xml(content: &str) -> Result<(), JobError> {
    if declares_entities(content) {
        return Err(JobError::InvalidXml(
            "entity declarations are not allowed".to_string(),
        ));
    }
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    roxmltree::Document::parse_with_options(content, options)
        .map(|_| ())
        .map_err(|e| JobError::InvalidXml(e.to_string()))
}

/// True if the document type declaration has an internal subset declaring entities.
fn declares_entities(content: &str) -> bool {
    let Some(start) = content.find("<!DOCTYPE") else {
        return false;
    };
    let decl = &content[start..];
    let subset_start = match (decl.find('['), decl.find('>')) {
        (Some(open), Some(close)) if open < close => open,
        _ => return false,
    };
    let subset = &decl[subset_start..];
    let subset = match subset.find("]>").or_else(|| subset.find(']')) {
        Some(end) => &subset[..end],
        None => subset,
    };
    subset.contains("<!ENTITY")
}
