use crate::error::PickerError;

/// Area and country codes decoded from a node's compound area id
/// (`<area>-<countrySuffix>-...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaPath {
    pub area: String,
    /// `<area>-<countrySuffix>`; `None` when the id has a single segment.
    pub country: Option<String>,
}

impl AreaPath {
    pub fn parse(node_area_id: &str) -> Result<Self, PickerError> {
        let mut segments = node_area_id.split('-');
        let area = segments.next().unwrap_or_default();
        if area.is_empty() {
            return Err(PickerError::InvalidAreaId(node_area_id.to_string()));
        }
        let country = segments.next().map(|suffix| format!("{area}-{suffix}"));
        Ok(Self {
            area: area.to_string(),
            country,
        })
    }
}
