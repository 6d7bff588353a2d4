// crates/blast-graph-adapters/src/tables/mod.rs
// ============================================================================
// Module: Built-in Rule Tables
// Description: Link rule tables for the built-in resource kinds.
// Purpose: Declare every link site as data, grouped by provider service.
// Dependencies: blast-graph-core
// ============================================================================

//! ## Overview
//! Each submodule exposes one constructor per resource kind plus an
//! `adapters()` list. Tables only declare field paths and relationships;
//! traversal, absence handling, scope resolution, and deduplication live in
//! the core edge builder.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod compute;
pub mod identity;
pub mod keyvault;
pub mod network;
pub mod sql;
pub mod storage;

// ============================================================================
// SECTION: Imports
// ============================================================================

use blast_graph_core::ItemType;
use blast_graph_core::LinkRule;
use blast_graph_core::Relationship;
use blast_graph_core::runtime::Extraction;

use crate::adapter::ResourceAdapter;
use crate::item_types::PRIVATE_ENDPOINT;
use crate::item_types::USER_ASSIGNED_IDENTITY;

// ============================================================================
// SECTION: Shared Segment Lists
// ============================================================================

/// Composite key collections for subnets.
pub(crate) const SUBNET_SEGMENTS: &[&str] = &["virtualNetworks", "subnets"];

// ============================================================================
// SECTION: Shared Rules
// ============================================================================

/// Links the user-assigned identities attached to a resource; the identity
/// map is keyed by identity path.
pub(crate) fn user_assigned_identities() -> LinkRule {
    LinkRule::exact(
        "$.identity.userAssignedIdentities",
        Extraction::ResourceName,
        USER_ASSIGNED_IDENTITY,
        Relationship::SecurityDependency,
    )
    .from_keys()
}

/// Links the private endpoints approved on a resource.
pub(crate) fn private_endpoints() -> LinkRule {
    LinkRule::exact(
        "$.properties.privateEndpointConnections[*].properties.privateEndpoint.id",
        Extraction::ResourceName,
        PRIVATE_ENDPOINT,
        Relationship::ConsumerOfProvider,
    )
}

/// Exact resource-name rule for a consumed provider.
pub(crate) fn consumes(path: &str, target: ItemType) -> LinkRule {
    LinkRule::exact(path, Extraction::ResourceName, target, Relationship::ConsumerOfProvider)
}

/// Exact resource-name rule for an encryption or identity dependency.
pub(crate) fn secured_by(path: &str, target: ItemType) -> LinkRule {
    LinkRule::exact(path, Extraction::ResourceName, target, Relationship::SecurityDependency)
}

/// Exact resource-name rule for a resource that consumes this one.
pub(crate) fn used_by(path: &str, target: ItemType) -> LinkRule {
    LinkRule::exact(path, Extraction::ResourceName, target, Relationship::UsedBy)
}

/// Search rule listing the children of the named parent.
pub(crate) fn children(target: ItemType) -> LinkRule {
    LinkRule::search("$.name", Extraction::LiteralName, target, Relationship::ParentOfChildren)
}

// ============================================================================
// SECTION: Built-in Adapters
// ============================================================================

/// Returns every built-in adapter.
#[must_use]
pub fn builtin_adapters() -> Vec<ResourceAdapter> {
    let mut adapters = Vec::new();
    adapters.extend(compute::adapters());
    adapters.extend(keyvault::adapters());
    adapters.extend(network::adapters());
    adapters.extend(sql::adapters());
    adapters.extend(storage::adapters());
    adapters.extend(identity::adapters());
    adapters
}
