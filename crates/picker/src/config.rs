//! Initialization parameters handed over by the host page.
//!
//! The page renders the currently active node into a small object and passes
//! it to `mount`; everything besides the two ids has a default matching the
//! stock page layout.

use serde::{Deserialize, Serialize};

use crate::area::AreaPath;
use crate::error::PickerError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Currently active node.
    #[serde(rename = "nodeID")]
    pub node_id: String,
    /// Compound `<area>-<country>-...` id of the active node.
    #[serde(rename = "nodeAreaID")]
    pub node_area_id: String,
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub elements: ElementIds,
    #[serde(default = "default_log_level", rename = "logLevel")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PageConfig {
    pub fn new(node_id: impl Into<String>, node_area_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            node_area_id: node_area_id.into(),
            endpoints: Endpoints::default(),
            elements: ElementIds::default(),
            log_level: default_log_level(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        serde_json::from_str(json).map_err(|e| PickerError::Config(e.to_string()))
    }

    pub fn area_path(&self) -> Result<AreaPath, PickerError> {
        AreaPath::parse(&self.node_area_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoints {
    pub country_options: String,
    pub node_options: String,
    pub change: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            country_options: "/web/getCountryOptions".to_string(),
            node_options: "/web/getNodeOptions".to_string(),
            change: "/change".to_string(),
        }
    }
}

/// DOM ids the picker binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub loader: String,
    pub area: String,
    pub country: String,
    pub node: String,
    /// Submit form; the form owning the node select when unset.
    pub form: Option<String>,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            loader: "loader".to_string(),
            area: "areaSelect".to_string(),
            country: "countrySelect".to_string(),
            node: "nodeSelect".to_string(),
            form: None,
        }
    }
}
