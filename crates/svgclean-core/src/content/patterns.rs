//! Compiled patterns shared by every `clean` call.
//!
//! Both run on raw bytes with Unicode mode off, so `.` matches any byte and
//! icons in legacy encodings pass through unchanged.

use regex::bytes::Regex;
use std::sync::LazyLock;

/// `<text ...>body</text>`, non-greedy, body may span lines.
pub(super) static TEXT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s-u)<text.*?>(.*?)</text>").unwrap());

/// Any double-quoted `viewBox` value.
pub(super) static VIEW_BOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?-u)viewBox="[^"]*""#).unwrap());
