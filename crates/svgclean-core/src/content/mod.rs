//! SVG content cleaning.
//!
//! Removes inline `<text>` elements (collecting their bodies as an attribution
//! note), pins `preserveAspectRatio` on the root `<svg>` tag and rewrites every
//! `viewBox` to a fixed 100x100 box. Works on raw text with regular
//! expressions; the input is never parsed as XML, so malformed markup passes
//! through untouched.

mod patterns;

use patterns::{TEXT_ELEMENT, VIEW_BOX};

/// Note body used when an icon carries no `<text>` elements.
pub const NO_ATTRIBUTION: &str = "No attribution detail";

/// Replacement value for every `viewBox` attribute.
pub const NORMALIZED_VIEW_BOX: &str = "0 0 100 100";

/// Value inserted as `preserveAspectRatio` on the first `<svg` tag.
pub const ASPECT_RATIO: &str = "xMidYMid meet";

const SVG_OPEN: &str = "<svg";

/// Output of [`clean`] for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanResult {
    /// `"<file_name>: <bodies>"` or `"<file_name>: No attribution detail"`.
    pub attribution: String,
    /// Cleaned SVG markup.
    pub content: String,
}

/// Output of [`clean_bytes`]: the markup stays raw so non-UTF-8 bytes survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedBytes {
    pub attribution: String,
    pub content: Vec<u8>,
}

/// Clean one icon's markup. `file_name` only prefixes the attribution note.
pub fn clean(content: &str, file_name: &str) -> CleanResult {
    let cleaned = clean_bytes(content.as_bytes(), file_name);
    // Every rewrite splits or inserts at ASCII boundaries, so UTF-8 input stays UTF-8.
    CleanResult {
        attribution: cleaned.attribution,
        content: String::from_utf8_lossy(&cleaned.content).into_owned(),
    }
}

/// Byte-level [`clean`]. Bytes outside the rewritten spans are copied through
/// untouched; captured `<text>` bodies are decoded lossily for the note.
pub fn clean_bytes(content: &[u8], file_name: &str) -> CleanedBytes {
    let mut note = format!("{file_name}: ");
    let mut found = false;
    for caps in TEXT_ELEMENT.captures_iter(content) {
        found = true;
        note.push_str(&String::from_utf8_lossy(&caps[1]));
        note.push(' ');
    }
    if !found {
        note.push_str(NO_ATTRIBUTION);
    }

    let stripped = TEXT_ELEMENT.replace_all(content, &b""[..]);
    let with_aspect = insert_aspect_ratio(&stripped);
    let replacement = format!("viewBox=\"{NORMALIZED_VIEW_BOX}\"");
    let cleaned = VIEW_BOX.replace_all(&with_aspect, replacement.as_bytes());

    CleanedBytes {
        attribution: note.trim().to_string(),
        content: cleaned.into_owned(),
    }
}

/// Insert `preserveAspectRatio` right after the first `<svg` tag name.
fn insert_aspect_ratio(content: &[u8]) -> Vec<u8> {
    let open = SVG_OPEN.as_bytes();
    let Some(at) = content.windows(open.len()).position(|w| w == open) else {
        return content.to_vec();
    };
    let attr = format!(" preserveAspectRatio=\"{ASPECT_RATIO}\"");
    let split = at + open.len();
    let mut out = Vec::with_capacity(content.len() + attr.len());
    out.extend_from_slice(&content[..split]);
    out.extend_from_slice(attr.as_bytes());
    out.extend_from_slice(&content[split..]);
    out
}

#[cfg(test)]
mod tests;
