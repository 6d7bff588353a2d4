// crates/blast-graph-adapters/src/tables/storage.rs
// ============================================================================
// Module: Storage Rule Tables
// Description: Link rules for storage accounts and blob containers.
// Purpose: Declare storage endpoints, children, and encryption dependencies.
// Dependencies: blast-graph-core
// ============================================================================

//! ## Overview
//! Storage accounts expose one endpoint per service; every endpoint becomes a
//! DNS and an HTTP edge. Containers, shares, queues, and tables are keyed
//! `account|name` and found by search on the account name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use blast_graph_core::LinkRule;
use blast_graph_core::Relationship;
use blast_graph_core::runtime::Extraction;

use crate::adapter::Identity;
use crate::adapter::ResourceAdapter;
use crate::item_types::BLOB_CONTAINER;
use crate::item_types::FILE_SHARE;
use crate::item_types::KEYVAULT_VAULT;
use crate::item_types::QUEUE;
use crate::item_types::STORAGE_ACCOUNT;
use crate::item_types::SUBNET;
use crate::item_types::TABLE;
use crate::item_types::USER_ASSIGNED_IDENTITY;
use crate::tables::SUBNET_SEGMENTS;
use crate::tables::children;
use crate::tables::private_endpoints;
use crate::tables::secured_by;
use crate::tables::user_assigned_identities;

/// Composite key collections for blob containers.
const CONTAINER_SEGMENTS: &[&str] = &["storageAccounts", "containers"];

// ============================================================================
// SECTION: Adapters
// ============================================================================

/// Returns the storage adapters.
#[must_use]
pub fn adapters() -> Vec<ResourceAdapter> {
    vec![account(), blob_container()]
}

/// Storage account: children, service endpoints, encryption, network rules.
#[must_use]
pub fn account() -> ResourceAdapter {
    let endpoints = "$.properties.primaryEndpoints.*";
    let rules = vec![
        children(BLOB_CONTAINER),
        children(FILE_SHARE),
        children(QUEUE),
        children(TABLE),
        LinkRule::dns_from_url(endpoints),
        LinkRule::http_url(endpoints),
        LinkRule::exact(
            "$.properties.encryption.keyvaultproperties.keyvaulturi",
            Extraction::VaultName,
            KEYVAULT_VAULT,
            Relationship::SecurityDependency,
        ),
        secured_by(
            "$.properties.encryption.identity.userAssignedIdentity",
            USER_ASSIGNED_IDENTITY,
        ),
        user_assigned_identities(),
        LinkRule::exact(
            "$.properties.networkAcls.virtualNetworkRules[*].id",
            Extraction::PathSegments(SUBNET_SEGMENTS),
            SUBNET,
            Relationship::ConsumerOfProvider,
        ),
        LinkRule::ip_address("$.properties.networkAcls.ipRules[*].value"),
        private_endpoints(),
    ];
    ResourceAdapter::new(STORAGE_ACCOUNT, Identity::Name, rules)
}

/// Blob container keyed `account|container`.
#[must_use]
pub fn blob_container() -> ResourceAdapter {
    let rules = vec![LinkRule::exact(
        "$.id",
        Extraction::PathSegments(&["storageAccounts"]),
        STORAGE_ACCOUNT,
        Relationship::ChildOfParent,
    )];
    ResourceAdapter::new(BLOB_CONTAINER, Identity::PathSegments(CONTAINER_SEGMENTS), rules)
}
