//! Display formatting for raw creature fields.
//!
//! All functions are pure. Heights and weights arrive as integer tenths of
//! their display unit, so they are formatted exactly without going through
//! floating point.

use crate::SpeciesName;
use crate::error::CoreError;

/// Separator used between type labels in a joined type list.
pub const TYPE_SEPARATOR: &str = ", ";

/// Uppercase the first character, leaving the rest untouched.
///
/// Returns an empty string for empty input.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a height in decimeters as meters with one decimal (`17` -> `1.7m`).
pub fn format_height(decimeters: u32) -> String {
    format!("{}m", tenths(decimeters))
}

/// Format a weight in hectograms as kilograms with one decimal (`690` -> `69.0kg`).
pub fn format_weight(hectograms: u32) -> String {
    format!("{}kg", tenths(hectograms))
}

fn tenths(value: u32) -> String {
    format!("{}.{}", value / 10, value % 10)
}

/// Capitalize each type name and join them with `", "`, keeping input order.
pub fn join_types<S: AsRef<str>>(type_names: &[S]) -> String {
    type_names
        .iter()
        .map(|t| capitalize(t.as_ref()))
        .collect::<Vec<_>>()
        .join(TYPE_SEPARATOR)
}

/// Split a joined type list back into its labels.
///
/// An empty display string yields no labels.
pub fn split_types(types_display: &str) -> Vec<&str> {
    if types_display.is_empty() {
        return Vec::new();
    }
    types_display.split(TYPE_SEPARATOR).collect()
}

/// Find the first name whose language code equals `language_code`.
pub fn find_localized_name<'a>(
    names: &'a [SpeciesName],
    language_code: &str,
) -> Result<&'a str, CoreError> {
    names
        .iter()
        .find(|n| n.language == language_code)
        .map(|n| n.name.as_str())
        .ok_or_else(|| CoreError::not_found(language_code))
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
