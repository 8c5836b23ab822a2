//! Model response parsing

use crate::errors::{CoachError, Result};

/// Parse response text as a JSON array of tip strings
///
/// The text is taken verbatim: anything other than a non-empty array of
/// strings is an error.
pub fn parse_tips(text: &str) -> Result<Vec<String>> {
    let tips: Vec<String> = serde_json::from_str(text)?;

    if tips.is_empty() {
        return Err(CoachError::EmptyResponse);
    }

    Ok(tips)
}
