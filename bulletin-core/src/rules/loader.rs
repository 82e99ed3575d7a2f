//! Rule file loader

use super::{RuleConfig, RuleSet};
use crate::error::{ConfigError, Result};
use std::fs;
use std::path::Path;

/// Parse rules from a TOML string
pub fn load_from_str(toml_str: &str) -> Result<RuleSet> {
    let config: RuleConfig = toml::from_str(toml_str)?;
    let rules = RuleSet::from_config(&config)?;

    log::debug!(
        "loaded rule set '{}' ({} conclusions, {} transitions)",
        rules.name(),
        rules.conclusions().len(),
        rules.transitions().len()
    );

    Ok(rules)
}

/// Load rules from a TOML file
pub fn load_from_file(path: &Path) -> Result<RuleSet> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_str(&content)
}
