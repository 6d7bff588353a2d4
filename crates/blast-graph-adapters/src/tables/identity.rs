// crates/blast-graph-adapters/src/tables/identity.rs
// ============================================================================
// Module: Identity Rule Tables
// Description: Link rules for managed identities and federated credentials.
// Purpose: Couple identities with the credentials federated onto them.
// Dependencies: blast-graph-core
// ============================================================================

//! ## Overview
//! An identity and its federated credentials share a lifecycle, so both
//! directions propagate. Credentials are keyed `identity|credential`.

use blast_graph_core::LinkRule;
use blast_graph_core::Relationship;
use blast_graph_core::runtime::Extraction;

use crate::adapter::Identity;
use crate::adapter::ResourceAdapter;
use crate::item_types::FEDERATED_IDENTITY_CREDENTIAL;
use crate::item_types::USER_ASSIGNED_IDENTITY;

/// Composite key collections for federated identity credentials.
const CREDENTIAL_SEGMENTS: &[&str] = &["userAssignedIdentities", "federatedIdentityCredentials"];

/// Returns the identity adapters.
#[must_use]
pub fn adapters() -> Vec<ResourceAdapter> {
    vec![user_assigned_identity(), federated_identity_credential()]
}

/// User-assigned identity: its federated credentials.
#[must_use]
pub fn user_assigned_identity() -> ResourceAdapter {
    let rules = vec![LinkRule::search(
        "$.name",
        Extraction::LiteralName,
        FEDERATED_IDENTITY_CREDENTIAL,
        Relationship::CoupledSibling,
    )];
    ResourceAdapter::new(USER_ASSIGNED_IDENTITY, Identity::Name, rules)
}

/// Federated identity credential: owning identity and token issuer.
#[must_use]
pub fn federated_identity_credential() -> ResourceAdapter {
    let rules = vec![
        LinkRule::exact(
            "$.id",
            Extraction::PathSegments(&["userAssignedIdentities"]),
            USER_ASSIGNED_IDENTITY,
            Relationship::CoupledSibling,
        ),
        LinkRule::dns_from_url("$.properties.issuer"),
        LinkRule::http_url("$.properties.issuer"),
    ];
    ResourceAdapter::new(
        FEDERATED_IDENTITY_CREDENTIAL,
        Identity::PathSegments(CREDENTIAL_SEGMENTS),
        rules,
    )
}
