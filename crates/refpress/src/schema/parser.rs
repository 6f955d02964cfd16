use std::path::Path;

use crate::error::SiteError;
use crate::schema::types::Module;

/// Parse a YAML module file into a [`Module`] struct.
///
/// # Errors
///
/// Returns [`SiteError::Io`] if the file cannot be read,
/// or [`SiteError::Yaml`] if the YAML is malformed.
pub fn parse_module(path: &Path) -> Result<Module, SiteError> {
    let content = std::fs::read_to_string(path)?;
    parse_module_str(&content)
}

/// Parse a YAML module from a string.
pub fn parse_module_str(yaml: &str) -> Result<Module, SiteError> {
    let module: Module = serde_yaml::from_str(yaml)?;
    Ok(module)
}
