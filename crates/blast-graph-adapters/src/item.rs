// crates/blast-graph-adapters/src/item.rs
// ============================================================================
// Module: Items
// Description: Canonical item produced from one provider resource.
// Purpose: Pair a resource body with its identity, scope, and edges.
// Dependencies: blast-graph-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! An [`Item`] is the unit handed to the discovery engine: the resource body
//! verbatim, the value that identifies it within its type and scope, and the
//! ordered, deduplicated edges to the items it references.

// ============================================================================
// SECTION: Imports
// ============================================================================

use blast_graph_core::ItemType;
use blast_graph_core::LinkEdge;
use blast_graph_core::Scope;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Item
// ============================================================================

/// Canonical item with typed outbound references.
///
/// # Invariants
/// - `unique_attribute_value` is non-empty.
/// - `linked_item_queries` holds no two edges sharing a dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item type of the described resource.
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Name or composite key identifying the item within its type and scope.
    pub unique_attribute_value: String,
    /// Scope the item lives in.
    pub scope: Scope,
    /// Resource body as returned by the provider.
    pub attributes: Value,
    /// Outbound edges in rule order.
    pub linked_item_queries: Vec<LinkEdge>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while assembling an item from a resource.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    /// Resource body is not a JSON object.
    #[error("{item_type} resource is not a json object")]
    NotAnObject {
        /// Item type being assembled.
        item_type: ItemType,
    },
    /// Mandatory name field is missing or empty.
    #[error("{item_type} resource is missing a non-empty `name`")]
    MissingName {
        /// Item type being assembled.
        item_type: ItemType,
    },
    /// Resource `id` does not carry the collections forming the unique key.
    #[error("{item_type} resource id does not contain {collections}")]
    MissingIdentity {
        /// Item type being assembled.
        item_type: ItemType,
        /// Required collections joined with `/`.
        collections: String,
    },
}
