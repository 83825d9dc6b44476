//! Flat rendering for the array form
//!
//! Linked and persistent trees render themselves via `Display`
//! (depth-indented); the array form is a plain slot listing.

use std::fmt::Display;

/// Render heap-ordered slots as a flat listing
///
/// Unset slots print as `_`. A complete tree has none, so the output of
/// the array builder always lists `2^h − 1` values.
pub fn render_slots<T: Display>(slots: &[Option<T>]) -> String {
    let rendered: Vec<String> = slots
        .iter()
        .map(|slot| match slot {
            Some(value) => value.to_string(),
            None => "_".to_string(),
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}
