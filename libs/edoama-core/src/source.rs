//! Extraction of the dictionary payload embedded in the published site.
//!
//! The dictionary page ships its data as a `const dictionaryData = {…};`
//! object literal inside a script tag. Fetching the page belongs to the
//! embedding application; this module turns fetched page text into a
//! [`Dictionary`].

use sha2::{Digest, Sha256};

use crate::error::{Result, SourceError};
use crate::types::Dictionary;

/// Name of the variable the page assigns its dictionary object to.
const PAYLOAD_MARKER: &str = "dictionaryData";

/// Extract and parse the embedded dictionary object from page text.
pub fn extract_embedded(page: &str) -> Result<Dictionary> {
    let payload = embedded_object(page).ok_or(SourceError::PayloadNotFound)?;
    let dictionary: Dictionary = serde_json::from_str(payload)?;
    tracing::debug!(entries = dictionary.len(), "parsed embedded dictionary payload");
    Ok(dictionary)
}

/// SHA-256 hex fingerprint of the page text, for callers that cache a parsed
/// snapshot keyed by source content.
pub fn fingerprint(page: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(page.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Slice the balanced `{…}` literal assigned to [`PAYLOAD_MARKER`].
///
/// Brace depth is tracked outside string literals, so meanings containing
/// braces do not cut the payload short.
fn embedded_object(page: &str) -> Option<&str> {
    let marker = page.find(PAYLOAD_MARKER)?;
    let after = &page[marker + PAYLOAD_MARKER.len()..];
    let assign = after.find('=')?;
    let open = after[assign..].find('{')?;
    let object = &after[assign + open..];

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in object.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&object[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
