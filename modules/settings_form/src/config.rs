//! Configuration for the settings form module

use serde::Deserialize;

/// Settings form module configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Feature flags for the module
    #[serde(default)]
    pub feature_flags: Vec<String>,

    /// Tab assumed when a submission carries no tab context
    #[serde(default = "default_tab")]
    pub default_tab: String,

    /// Section assumed when a submission carries no section context
    #[serde(default = "default_section")]
    pub default_section: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feature_flags: Vec::new(),
            default_tab: default_tab(),
            default_section: default_section(),
        }
    }
}

fn default_tab() -> String {
    "general".to_string()
}

fn default_section() -> String {
    "main".to_string()
}
