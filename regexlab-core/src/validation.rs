//! Input checks shared by every entry point.
//!
//! Lengths are measured in characters.

use crate::error::{RegexLabError, Result};

/// Longest accepted pattern
pub const MAX_PATTERN_LEN: usize = 1000;
/// Longest accepted test text
pub const MAX_TEXT_LEN: usize = 10_000;
/// Longest accepted flag string
pub const MAX_FLAGS_LEN: usize = 10;
/// Longest accepted generation description
pub const MAX_DESCRIPTION_LEN: usize = 500;
/// Longest accepted total of generation examples
pub const MAX_EXAMPLES_LEN: usize = 1000;
/// Longest accepted training answer
pub const MAX_ANSWER_LEN: usize = 1000;

/// Fail if `value` is empty; whitespace counts as content
pub fn non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RegexLabError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Fail if `value` is longer than `max` characters
pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(RegexLabError::validation(
            field,
            format!("must be at most {max} characters, got {len}"),
        ));
    }
    Ok(())
}

/// Fail if an id is zero
pub fn positive_id(field: &'static str, id: u32) -> Result<()> {
    if id == 0 {
        return Err(RegexLabError::validation(field, "must be at least 1"));
    }
    Ok(())
}

/// Check a pattern: present and within the length limit
pub fn pattern(value: &str) -> Result<()> {
    non_empty("pattern", value)?;
    max_len("pattern", value, MAX_PATTERN_LEN)
}
