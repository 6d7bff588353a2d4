// crates/blast-graph-core/src/core/edge.rs
// ============================================================================
// Module: Blast Graph Link Edges
// Description: Directed, typed, scoped references between items.
// Purpose: Model linked item queries and their blast propagation semantics.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A [`LinkEdge`] is a one-directional fact: "this item references a target of
//! type T, found by key K in scope S". Blast propagation flags are never picked
//! per edge; they derive from the [`Relationship`] between source and target,
//! always seen from the describing resource's point of view.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ItemType;
use crate::core::identifiers::LookupKey;
use crate::core::identifiers::Scope;

// ============================================================================
// SECTION: Lookup Method
// ============================================================================

/// How the consumer resolves the lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LookupMethod {
    /// The key identifies exactly one item.
    Exact,
    /// The key is a search query that may match many items.
    Search,
}

// ============================================================================
// SECTION: Blast Propagation
// ============================================================================

/// Directional impact flags attached to an edge.
///
/// # Invariants
/// - `impact_in`: a change to the target affects the source.
/// - `impact_out`: a change to the source affects the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlastPropagation {
    /// Target changes propagate to the source.
    #[serde(rename = "in")]
    pub impact_in: bool,
    /// Source changes propagate to the target.
    #[serde(rename = "out")]
    pub impact_out: bool,
}

/// Relationship kind between the described resource and the edge target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// Source consumes the target (VM references a disk).
    ConsumerOfProvider,
    /// Source depends on the target for encryption or identity.
    SecurityDependency,
    /// Source exposes discoverable children (account lists its containers).
    ParentOfChildren,
    /// Source is a child whose parent is fixed and required (database to server).
    ChildOfParent,
    /// Target consumes the source (disk to the VM managing it).
    UsedBy,
    /// Tightly coupled pair sharing a lifecycle (identity and its credentials).
    CoupledSibling,
    /// Bare network endpoint (IP, hostname, URL).
    NetworkEndpoint,
}

impl Relationship {
    /// Returns the fixed propagation flags for this relationship.
    #[must_use]
    pub const fn propagation(self) -> BlastPropagation {
        let (impact_in, impact_out) = match self {
            Self::ConsumerOfProvider | Self::SecurityDependency | Self::ChildOfParent => {
                (true, false)
            }
            Self::ParentOfChildren | Self::UsedBy => (false, true),
            Self::CoupledSibling | Self::NetworkEndpoint => (true, true),
        };
        BlastPropagation {
            impact_in,
            impact_out,
        }
    }
}

// ============================================================================
// SECTION: Link Edge
// ============================================================================

/// Directed reference from one item to another.
///
/// # Invariants
/// - Immutable once built; carries no reference back to the source resource.
/// - `scope` is path-derived whenever the referencing identifier carried one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkEdge {
    /// Item type of the target.
    #[serde(rename = "type")]
    pub target_type: ItemType,
    /// Lookup method the consumer uses.
    pub method: LookupMethod,
    /// Name or composite key of the target.
    #[serde(rename = "query")]
    pub lookup_key: LookupKey,
    /// Scope the target lives in.
    pub scope: Scope,
    /// Directional impact flags.
    #[serde(rename = "blast_propagation")]
    pub blast: BlastPropagation,
}

impl LinkEdge {
    /// Creates an edge whose propagation derives from the relationship kind.
    #[must_use]
    pub fn new(
        target_type: ItemType,
        method: LookupMethod,
        lookup_key: LookupKey,
        scope: Scope,
        relationship: Relationship,
    ) -> Self {
        Self {
            target_type,
            method,
            lookup_key,
            scope,
            blast: relationship.propagation(),
        }
    }
}
