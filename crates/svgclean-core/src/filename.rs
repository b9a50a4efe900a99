//! Output filename derivation for downloaded icon packs.
//!
//! Vendor icon files are named `<vendor>-<name>-<uid>.svg` (e.g.
//! `noun-sunrise-abc123.svg`). The vendor prefix is always dropped; the uid
//! is kept or dropped on request.

const SVG_EXT: &str = ".svg";

/// Normalizes an icon filename. Pure function of its inputs.
///
/// The name is split on `-` at most twice. With three segments the first is
/// discarded; `keep_uid` returns `<second>-<rest>`, otherwise `<second>.svg`.
/// Names with fewer than two hyphens come back unchanged.
///
/// # Examples
///
/// - `normalize("noun-sunrise-abc123.svg", true)` → `"sunrise-abc123.svg"`
/// - `normalize("noun-sunrise-abc123.svg", false)` → `"sunrise.svg"`
/// - `normalize("icon.svg", false)` → `"icon.svg"`
pub fn normalize(file_name: &str, keep_uid: bool) -> String {
    let mut parts = file_name.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_vendor), Some(name), Some(rest)) => {
            if keep_uid {
                format!("{name}-{rest}")
            } else {
                format!("{name}{SVG_EXT}")
            }
        }
        _ => file_name.to_string(),
    }
}
