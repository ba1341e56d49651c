use serde::{Deserialize, Serialize};

use crate::error::RenderResult;

/// Presentation options for one rendered comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Label of the first structure.
    pub title1: String,
    /// Label of the second structure.
    pub title2: String,
    /// Only the first structure is meaningful: its column alone is shown and
    /// values missing from the second structure count as matching.
    pub no_second: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title1: "First".into(),
            title2: "Second".into(),
            no_second: false,
        }
    }
}

impl RenderOptions {
    /// Options for showing a single structure.
    pub fn single() -> Self {
        Self {
            no_second: true,
            ..Default::default()
        }
    }

    /// Parse options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> RenderResult<Self> {
        Ok(toml::from_str(text)?)
    }
}
