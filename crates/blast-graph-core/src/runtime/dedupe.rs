// crates/blast-graph-core/src/runtime/dedupe.rs
// ============================================================================
// Module: Edge Deduplicator
// Description: Suppresses structurally identical edges.
// Purpose: Collapse multi-field references to the same target into one edge.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! A resource often names the same target through several fields (an active
//! key and a list of previous keys both living in one vault). Deduplication
//! runs once, after every rule has been evaluated, and keeps the first edge
//! seen for each key so emission order stays reproducible.
//!
//! Two key policies exist. [`DedupPolicy::TargetAndScope`] (the default)
//! includes the scope, so same-named targets in different groupings stay
//! distinct. [`DedupPolicy::TargetOnly`] keys on type, method, and lookup key
//! alone; with it, the first edge's scope wins.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::edge::LinkEdge;
use crate::core::edge::LookupMethod;
use crate::core::identifiers::ItemType;
use crate::core::identifiers::LookupKey;
use crate::core::identifiers::Scope;

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Identity used when deciding that two edges are duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// Key on `(target type, method, lookup key)`.
    TargetOnly,
    /// Key on `(target type, method, lookup key, scope)`.
    #[default]
    TargetAndScope,
}

/// Owned dedup key for one edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DedupKey {
    /// Target item type.
    target_type: ItemType,
    /// Lookup method.
    method: LookupMethod,
    /// Lookup key.
    lookup_key: LookupKey,
    /// Scope, when the policy includes it.
    scope: Option<Scope>,
}

impl DedupKey {
    /// Builds the key of `edge` under `policy`.
    fn of(edge: &LinkEdge, policy: DedupPolicy) -> Self {
        Self {
            target_type: edge.target_type.clone(),
            method: edge.method,
            lookup_key: edge.lookup_key.clone(),
            scope: match policy {
                DedupPolicy::TargetOnly => None,
                DedupPolicy::TargetAndScope => Some(edge.scope.clone()),
            },
        }
    }
}

// ============================================================================
// SECTION: Deduplication
// ============================================================================

/// Removes duplicate edges under the default policy, keeping first-seen order.
#[must_use]
pub fn dedupe(edges: Vec<LinkEdge>) -> Vec<LinkEdge> {
    dedupe_with(edges, DedupPolicy::default())
}

/// Removes duplicate edges under `policy`, keeping first-seen order.
#[must_use]
pub fn dedupe_with(mut edges: Vec<LinkEdge>, policy: DedupPolicy) -> Vec<LinkEdge> {
    let before = edges.len();
    let mut seen = HashSet::with_capacity(before);
    edges.retain(|edge| seen.insert(DedupKey::of(edge, policy)));
    if edges.len() < before {
        tracing::debug!(
            removed = before - edges.len(),
            kept = edges.len(),
            ?policy,
            "suppressed duplicate link edges"
        );
    }
    edges
}
