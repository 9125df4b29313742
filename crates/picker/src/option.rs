use serde::{Deserialize, Serialize};

use crate::error::PickerError;

/// One entry of a dropdown, as served by the option endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Text")]
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Decodes an option endpoint body. Server order is kept as-is.
pub fn decode_options(body: &str) -> Result<Vec<SelectOption>, PickerError> {
    let options: Option<Vec<SelectOption>> =
        serde_json::from_str(body).map_err(|e| PickerError::Decode(e.to_string()))?;
    Ok(options.unwrap_or_default())
}

/// Index of the last option carrying `wanted`.
///
/// Pre-selection after a fetch reassigns the selected index on every match,
/// so with duplicate values the last one wins.
pub fn last_match(options: &[SelectOption], wanted: &str) -> Option<usize> {
    options.iter().rposition(|o| o.value == wanted)
}

/// Index of the first value equal to `wanted`.
pub fn first_match<S: AsRef<str>>(values: &[S], wanted: &str) -> Option<usize> {
    values.iter().position(|v| v.as_ref() == wanted)
}
