// crates/blast-graph-adapters/src/adapter.rs
// ============================================================================
// Module: Resource Adapter
// Description: Per-kind description of identity and link rules.
// Purpose: Assemble items from resource bodies with one shared code path.
// Dependencies: blast-graph-core, serde_json
// ============================================================================

//! ## Overview
//! A [`ResourceAdapter`] is data: the item type it produces, how the item's
//! unique attribute is derived, and the rule table locating its references.
//! [`ResourceAdapter::to_item`] is the item assembler shared by every kind.
//!
//! Invariants:
//! - A missing identity aborts conversion of that resource only.
//! - Edge construction itself never fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use blast_graph_core::CompositeKey;
use blast_graph_core::EdgeBuilder;
use blast_graph_core::ItemType;
use blast_graph_core::LinkRule;
use blast_graph_core::RuleError;
use blast_graph_core::Scope;
use blast_graph_core::grammar::ResourcePath;
use blast_graph_core::runtime::validate_rules;
use serde_json::Value;

use crate::item::AssembleError;
use crate::item::Item;

// ============================================================================
// SECTION: Identity
// ============================================================================

/// Source of an item's unique attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// The resource's top-level `name` field.
    Name,
    /// Values following each collection in the resource `id`, joined as a
    /// composite key (`vault|secret`).
    PathSegments(&'static [&'static str]),
}

impl Identity {
    /// Derives the unique attribute value from `resource`.
    fn unique_value(self, item_type: &ItemType, resource: &Value) -> Result<String, AssembleError> {
        match self {
            Self::Name => resource
                .get("name")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .ok_or_else(|| AssembleError::MissingName {
                    item_type: item_type.clone(),
                }),
            Self::PathSegments(collections) => {
                let missing = || AssembleError::MissingIdentity {
                    item_type: item_type.clone(),
                    collections: collections.join("/"),
                };
                let id = resource.get("id").and_then(Value::as_str).ok_or_else(missing)?;
                let path = ResourcePath::parse(id).ok_or_else(missing)?;
                let values = path.segment_values(collections);
                if values.is_empty() || values.len() != collections.len() {
                    return Err(missing());
                }
                Ok(CompositeKey::new(values).to_string())
            }
        }
    }
}

// ============================================================================
// SECTION: Resource Adapter
// ============================================================================

/// Declarative adapter for one resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceAdapter {
    /// Item type produced by this adapter.
    item_type: ItemType,
    /// Unique attribute derivation.
    identity: Identity,
    /// Link sites evaluated against each resource.
    rules: Vec<LinkRule>,
}

impl ResourceAdapter {
    /// Creates an adapter; the rule table is validated on registration.
    #[must_use]
    pub const fn new(item_type: ItemType, identity: Identity, rules: Vec<LinkRule>) -> Self {
        Self {
            item_type,
            identity,
            rules,
        }
    }

    /// Returns the produced item type.
    #[must_use]
    pub const fn item_type(&self) -> &ItemType {
        &self.item_type
    }

    /// Returns the identity derivation.
    #[must_use]
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    /// Returns the rule table.
    #[must_use]
    pub fn rules(&self) -> &[LinkRule] {
        &self.rules
    }

    /// Validates the rule table.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleError`] in declaration order.
    pub fn validate(&self) -> Result<(), RuleError> {
        validate_rules(&self.rules)
    }

    /// Converts a resource body into an item.
    ///
    /// # Errors
    ///
    /// Returns [`AssembleError`] when the body is not an object or lacks the
    /// fields forming the unique attribute.
    pub fn to_item(
        &self,
        resource: &Value,
        scope: &Scope,
        builder: &EdgeBuilder,
    ) -> Result<Item, AssembleError> {
        if !resource.is_object() {
            return Err(AssembleError::NotAnObject {
                item_type: self.item_type.clone(),
            });
        }
        let unique_attribute_value = self.identity.unique_value(&self.item_type, resource)?;
        let linked_item_queries = builder.build_edges(resource, scope, &self.rules);
        tracing::debug!(
            item_type = %self.item_type,
            unique_attribute = %unique_attribute_value,
            edges = linked_item_queries.len(),
            "assembled item"
        );
        Ok(Item {
            item_type: self.item_type.clone(),
            unique_attribute_value,
            scope: scope.clone(),
            attributes: resource.clone(),
            linked_item_queries,
        })
    }
}
