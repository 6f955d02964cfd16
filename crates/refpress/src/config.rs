//! Site chrome configuration.
//!
//! The chrome is everything the page shell shares across pages: site name,
//! masthead navigation, footer navigation, asset base path, and copyright.
//! Loaded once per generation run from a YAML file, or defaulted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, prefixed to every page title.
    pub site_name: String,
    /// Meta description emitted in every page head.
    pub description: String,
    /// Base path prepended to stylesheet/icon references, relative to the
    /// output pages (e.g. "..").
    pub asset_base: String,
    /// Masthead navigation links, in order.
    pub nav: Vec<NavLink>,
    /// Footer navigation links, in order.
    pub footer_nav: Vec<NavLink>,
    /// Copyright line rendered in the footer.
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "API Reference".to_string(),
            description: String::new(),
            asset_base: "..".to_string(),
            nav: Vec::new(),
            footer_nav: Vec::new(),
            copyright: String::new(),
        }
    }
}

/// Load a site configuration from a YAML file.
///
/// # Errors
///
/// Returns [`SiteError::Io`] if the file cannot be read,
/// or [`SiteError::Yaml`] if the YAML is malformed.
pub fn load_config(path: &Path) -> Result<SiteConfig, SiteError> {
    let content = std::fs::read_to_string(path)?;
    load_config_str(&content)
}

/// Load a site configuration from a YAML string.
pub fn load_config_str(yaml: &str) -> Result<SiteConfig, SiteError> {
    let config: SiteConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}
