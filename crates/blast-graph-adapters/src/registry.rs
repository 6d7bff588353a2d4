// crates/blast-graph-adapters/src/registry.rs
// ============================================================================
// Module: Adapter Registry
// Description: Registry of resource adapters keyed by item type.
// Purpose: Route resource conversion by item type with one shared builder.
// Dependencies: blast-graph-config, blast-graph-core
// ============================================================================

//! ## Overview
//! The adapter registry owns one [`EdgeBuilder`] and the adapters for every
//! enabled resource kind. Rule tables are validated when an adapter is
//! registered, so conversion only fails on the resource being converted.
//!
//! # Invariants
//! - Item types are unique within the registry.
//! - Every registered adapter's rule table has passed validation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use blast_graph_config::BlastGraphConfig;
use blast_graph_core::EdgeBuilder;
use blast_graph_core::ItemType;
use blast_graph_core::RuleError;
use blast_graph_core::Scope;
use serde_json::Value;
use thiserror::Error;

use crate::adapter::ResourceAdapter;
use crate::item::AssembleError;
use crate::item::Item;
use crate::tables::builtin_adapters;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the adapter registry.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// No adapter is registered for the item type.
    #[error("no adapter registered for item type: {0}")]
    UnknownItemType(String),
    /// An adapter for the item type is already registered.
    #[error("adapter already registered: {0}")]
    DuplicateItemType(String),
    /// The adapter's rule table failed validation.
    #[error("invalid rule table for {item_type}: {source}")]
    InvalidRules {
        /// Item type of the rejected adapter.
        item_type: ItemType,
        /// First rule error.
        source: RuleError,
    },
    /// The resource could not be assembled into an item.
    #[error(transparent)]
    Assemble(#[from] AssembleError),
}

// ============================================================================
// SECTION: Adapter Registry
// ============================================================================

/// Resource adapters keyed by item type.
#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
    /// Adapters keyed by item type name.
    adapters: BTreeMap<String, ResourceAdapter>,
    /// Edge builder shared by every adapter.
    builder: EdgeBuilder,
}

impl AdapterRegistry {
    /// Creates an empty registry using `builder` for edge construction.
    #[must_use]
    pub const fn new(builder: EdgeBuilder) -> Self {
        Self {
            adapters: BTreeMap::new(),
            builder,
        }
    }

    /// Creates a registry with every built-in adapter and default settings.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] when a built-in rule table is invalid.
    pub fn with_builtin_adapters() -> Result<Self, AdapterError> {
        let mut registry = Self::new(EdgeBuilder::default());
        for adapter in builtin_adapters() {
            registry.register(adapter)?;
        }
        Ok(registry)
    }

    /// Creates a registry from configuration: the configured grammar and
    /// dedup policy, minus the disabled adapters.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::UnknownItemType`] when `adapters.disabled`
    /// names an item type with no built-in adapter.
    pub fn from_config(config: &BlastGraphConfig) -> Result<Self, AdapterError> {
        let adapters = builtin_adapters();
        if let Some(unknown) = config.adapters.disabled.iter().find(|disabled| {
            !adapters.iter().any(|adapter| adapter.item_type().as_str() == disabled.as_str())
        }) {
            return Err(AdapterError::UnknownItemType(unknown.clone()));
        }
        let mut registry = Self::new(config.edge_builder());
        for adapter in adapters {
            if config.is_adapter_disabled(adapter.item_type().as_str()) {
                tracing::debug!(item_type = %adapter.item_type(), "adapter disabled by config");
                continue;
            }
            registry.register(adapter)?;
        }
        Ok(registry)
    }

    /// Registers an adapter after validating its rule table.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] when the item type is already registered or
    /// the rule table is invalid.
    pub fn register(&mut self, adapter: ResourceAdapter) -> Result<(), AdapterError> {
        let key = adapter.item_type().as_str().to_string();
        if self.adapters.contains_key(&key) {
            return Err(AdapterError::DuplicateItemType(key));
        }
        adapter.validate().map_err(|source| AdapterError::InvalidRules {
            item_type: adapter.item_type().clone(),
            source,
        })?;
        self.adapters.insert(key, adapter);
        Ok(())
    }

    /// Returns the adapter for `item_type`.
    #[must_use]
    pub fn get(&self, item_type: &str) -> Option<&ResourceAdapter> {
        self.adapters.get(item_type)
    }

    /// Returns the registered item types in sorted order.
    pub fn item_types(&self) -> impl Iterator<Item = &str> {
        self.adapters.keys().map(String::as_str)
    }

    /// Returns the number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns true when no adapter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Returns the shared edge builder.
    #[must_use]
    pub const fn builder(&self) -> &EdgeBuilder {
        &self.builder
    }

    /// Converts a resource of `item_type` into an item.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::UnknownItemType`] when no adapter is
    /// registered, or [`AdapterError::Assemble`] when the resource lacks its
    /// identity.
    pub fn convert(
        &self,
        item_type: &str,
        resource: &Value,
        scope: &Scope,
    ) -> Result<Item, AdapterError> {
        let adapter = self
            .get(item_type)
            .ok_or_else(|| AdapterError::UnknownItemType(item_type.to_string()))?;
        Ok(adapter.to_item(resource, scope, &self.builder)?)
    }
}
