// crates/blast-graph-config/src/config.rs
// ============================================================================
// Module: Blast Graph Configuration
// Description: Configuration loading and validation for the edge engine.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: blast-graph-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional; an empty file yields the built-in defaults.
//! Unknown keys and malformed values fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use blast_graph_core::DedupPolicy;
use blast_graph_core::EdgeBuilder;
use blast_graph_core::IdentifierGrammar;
use blast_graph_core::grammar::DEFAULT_BLOB_SUFFIXES;
use blast_graph_core::grammar::DEFAULT_VAULT_SUFFIXES;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "blast-graph.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "BLAST_GRAPH_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of suffixes per grammar table.
pub(crate) const MAX_SUFFIXES: usize = 64;
/// Maximum number of disabled adapter entries.
pub(crate) const MAX_DISABLED_ADAPTERS: usize = 256;
/// Maximum length of a DNS suffix.
const MAX_SUFFIX_LENGTH: usize = 253;
/// Maximum length of a DNS label.
const MAX_LABEL_LENGTH: usize = 63;
/// Maximum length of an item type name.
const MAX_ITEM_TYPE_LENGTH: usize = 128;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Blast graph engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlastGraphConfig {
    /// Identifier grammar configuration.
    #[serde(default)]
    pub grammar: GrammarConfig,
    /// Edge deduplication configuration.
    #[serde(default)]
    pub dedup: DedupConfig,
    /// Adapter selection configuration.
    #[serde(default)]
    pub adapters: AdaptersConfig,
}

impl BlastGraphConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The path is taken from `path`, else from [`CONFIG_ENV_VAR`], else
    /// [`DEFAULT_CONFIG_NAME`] in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        tracing::debug!(
            path = %resolved.display(),
            vault_suffixes = config.grammar.vault_suffixes.len(),
            blob_suffixes = config.grammar.blob_suffixes.len(),
            disabled_adapters = config.adapters.disabled.len(),
            "loaded blast graph config"
        );
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grammar.validate()?;
        self.adapters.validate()?;
        Ok(())
    }

    /// Returns the identifier grammar described by `[grammar]`.
    #[must_use]
    pub fn identifier_grammar(&self) -> IdentifierGrammar {
        IdentifierGrammar::new(&self.grammar.vault_suffixes, &self.grammar.blob_suffixes)
    }

    /// Returns an edge builder using the configured grammar and dedup policy.
    #[must_use]
    pub fn edge_builder(&self) -> EdgeBuilder {
        EdgeBuilder::new(self.identifier_grammar(), self.dedup.policy)
    }

    /// Returns true when the adapter for `item_type` is disabled.
    #[must_use]
    pub fn is_adapter_disabled(&self, item_type: &str) -> bool {
        self.adapters.disabled.iter().any(|disabled| disabled == item_type)
    }
}

/// Identifier grammar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarConfig {
    /// Host suffixes identifying secret stores.
    #[serde(default = "default_vault_suffixes")]
    pub vault_suffixes: Vec<String>,
    /// Host suffixes identifying blob-storage endpoints.
    #[serde(default = "default_blob_suffixes")]
    pub blob_suffixes: Vec<String>,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            vault_suffixes: default_vault_suffixes(),
            blob_suffixes: default_blob_suffixes(),
        }
    }
}

impl GrammarConfig {
    /// Validates both suffix tables.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_suffixes("grammar.vault_suffixes", &self.vault_suffixes)?;
        validate_suffixes("grammar.blob_suffixes", &self.blob_suffixes)?;
        Ok(())
    }
}

/// Edge deduplication configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DedupConfig {
    /// Identity used when suppressing duplicate edges.
    #[serde(default)]
    pub policy: DedupPolicy,
}

/// Adapter selection configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdaptersConfig {
    /// Item types whose adapters are not registered.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl AdaptersConfig {
    /// Validates the disabled list shape; names are checked by the registry.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.disabled.len() > MAX_DISABLED_ADAPTERS {
            return Err(ConfigError::Invalid("too many adapters.disabled entries".to_string()));
        }
        let mut seen = BTreeSet::new();
        for item_type in &self.disabled {
            if item_type.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "adapters.disabled entries must be non-empty".to_string(),
                ));
            }
            if item_type.len() > MAX_ITEM_TYPE_LENGTH {
                return Err(ConfigError::Invalid(format!(
                    "adapters.disabled entry exceeds {MAX_ITEM_TYPE_LENGTH} bytes"
                )));
            }
            if !seen.insert(item_type.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "adapters.disabled contains duplicate entry: {item_type}"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the default secret-store suffixes.
fn default_vault_suffixes() -> Vec<String> {
    DEFAULT_VAULT_SUFFIXES.iter().map(|suffix| (*suffix).to_string()).collect()
}

/// Returns the default blob-storage suffixes.
fn default_blob_suffixes() -> Vec<String> {
    DEFAULT_BLOB_SUFFIXES.iter().map(|suffix| (*suffix).to_string()).collect()
}

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a suffix table: bounded, non-empty, lowercase DNS suffixes.
fn validate_suffixes(field: &str, suffixes: &[String]) -> Result<(), ConfigError> {
    if suffixes.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if suffixes.len() > MAX_SUFFIXES {
        return Err(ConfigError::Invalid(format!("too many {field} entries (max {MAX_SUFFIXES})")));
    }
    let mut seen = BTreeSet::new();
    for suffix in suffixes {
        validate_suffix(field, suffix)?;
        if !seen.insert(suffix.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "{field} contains duplicate suffix: {suffix}"
            )));
        }
    }
    Ok(())
}

/// Validates a single DNS suffix.
fn validate_suffix(field: &str, suffix: &str) -> Result<(), ConfigError> {
    if suffix.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} entries must be non-empty")));
    }
    if suffix.len() > MAX_SUFFIX_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "{field} entry exceeds {MAX_SUFFIX_LENGTH} bytes"
        )));
    }
    if suffix.starts_with('.') {
        return Err(ConfigError::Invalid(format!(
            "{field} entry must not start with a dot: {suffix}"
        )));
    }
    if suffix.bytes().any(|byte| byte.is_ascii_uppercase()) {
        return Err(ConfigError::Invalid(format!("{field} entry must be lowercase: {suffix}")));
    }
    let labels_valid = suffix.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|byte| byte.is_ascii_alphanumeric() || byte == b'-')
    });
    if !labels_valid {
        return Err(ConfigError::Invalid(format!("{field} entry is not a dns suffix: {suffix}")));
    }
    Ok(())
}
