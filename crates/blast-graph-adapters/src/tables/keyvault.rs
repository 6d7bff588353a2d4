// crates/blast-graph-adapters/src/tables/keyvault.rs
// ============================================================================
// Module: Key Vault Rule Tables
// Description: Link rules for vaults, secrets, and keys.
// Purpose: Declare key vault link sites and parent/child coupling.
// Dependencies: blast-graph-core
// ============================================================================

//! ## Overview
//! Secrets and keys are keyed `vault|name` because object names are only
//! unique within a vault. Vaults list their children by search on the vault
//! name; children point back at their vault through their own `id`.

use blast_graph_core::LinkRule;
use blast_graph_core::Relationship;
use blast_graph_core::runtime::Extraction;

use crate::adapter::Identity;
use crate::adapter::ResourceAdapter;
use crate::item_types::KEYVAULT_KEY;
use crate::item_types::KEYVAULT_SECRET;
use crate::item_types::KEYVAULT_VAULT;
use crate::item_types::SUBNET;
use crate::tables::SUBNET_SEGMENTS;
use crate::tables::children;
use crate::tables::private_endpoints;

/// Composite key collections for secrets.
const SECRET_SEGMENTS: &[&str] = &["vaults", "secrets"];
/// Composite key collections for keys.
const KEY_SEGMENTS: &[&str] = &["vaults", "keys"];

/// Returns the key vault adapters.
#[must_use]
pub fn adapters() -> Vec<ResourceAdapter> {
    vec![vault(), secret(), key()]
}

/// Key vault: children, endpoint, network rules, private endpoints.
#[must_use]
pub fn vault() -> ResourceAdapter {
    let rules = vec![
        children(KEYVAULT_SECRET),
        children(KEYVAULT_KEY),
        LinkRule::dns_from_url("$.properties.vaultUri"),
        LinkRule::http_url("$.properties.vaultUri"),
        LinkRule::exact(
            "$.properties.networkAcls.virtualNetworkRules[*].id",
            Extraction::PathSegments(SUBNET_SEGMENTS),
            SUBNET,
            Relationship::ConsumerOfProvider,
        ),
        LinkRule::ip_address("$.properties.networkAcls.ipRules[*].value"),
        private_endpoints(),
    ];
    ResourceAdapter::new(KEYVAULT_VAULT, Identity::Name, rules)
}

/// Key vault secret keyed `vault|secret`.
#[must_use]
pub fn secret() -> ResourceAdapter {
    let rules = vec![
        parent_vault(),
        LinkRule::http_url("$.properties.secretUri"),
        LinkRule::http_url("$.properties.secretUriWithVersion"),
    ];
    ResourceAdapter::new(KEYVAULT_SECRET, Identity::PathSegments(SECRET_SEGMENTS), rules)
}

/// Key vault key keyed `vault|key`.
#[must_use]
pub fn key() -> ResourceAdapter {
    let rules = vec![
        parent_vault(),
        LinkRule::http_url("$.properties.keyUri"),
        LinkRule::http_url("$.properties.keyUriWithVersion"),
    ];
    ResourceAdapter::new(KEYVAULT_KEY, Identity::PathSegments(KEY_SEGMENTS), rules)
}

/// Links a vault child to the vault named in its own `id`.
fn parent_vault() -> LinkRule {
    LinkRule::exact(
        "$.id",
        Extraction::PathSegments(&["vaults"]),
        KEYVAULT_VAULT,
        Relationship::ChildOfParent,
    )
}
