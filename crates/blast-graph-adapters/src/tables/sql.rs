// crates/blast-graph-adapters/src/tables/sql.rs
// ============================================================================
// Module: SQL Rule Tables
// Description: Link rules for SQL logical servers and databases.
// Purpose: Declare server/database coupling and encryption dependencies.
// Dependencies: blast-graph-core
// ============================================================================

//! ## Overview
//! Databases and elastic pools are keyed `server|name`. A server lists its
//! children by search on the server name; a database points back at its
//! server through its own `id`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use blast_graph_core::LinkRule;
use blast_graph_core::Relationship;
use blast_graph_core::grammar::VaultObjectKind;
use blast_graph_core::runtime::Extraction;
use blast_graph_core::runtime::Guard;

use crate::adapter::Identity;
use crate::adapter::ResourceAdapter;
use crate::item_types::KEYVAULT_KEY;
use crate::item_types::KEYVAULT_VAULT;
use crate::item_types::SQL_DATABASE;
use crate::item_types::SQL_ELASTIC_POOL;
use crate::item_types::SQL_SERVER;
use crate::item_types::USER_ASSIGNED_IDENTITY;
use crate::tables::children;
use crate::tables::private_endpoints;
use crate::tables::secured_by;
use crate::tables::user_assigned_identities;

// ============================================================================
// SECTION: Segment Lists
// ============================================================================

/// Composite key collections for databases.
const DATABASE_SEGMENTS: &[&str] = &["servers", "databases"];
/// Composite key collections for elastic pools.
const ELASTIC_POOL_SEGMENTS: &[&str] = &["servers", "elasticPools"];

// ============================================================================
// SECTION: Adapters
// ============================================================================

/// Returns the SQL adapters.
#[must_use]
pub fn adapters() -> Vec<ResourceAdapter> {
    vec![server(), database()]
}

/// SQL logical server: children, endpoint, identities, TDE protector.
#[must_use]
pub fn server() -> ResourceAdapter {
    let rules = vec![
        children(SQL_DATABASE),
        children(SQL_ELASTIC_POOL),
        LinkRule::dns_name("$.properties.fullyQualifiedDomainName"),
        user_assigned_identities(),
        secured_by("$.properties.primaryUserAssignedIdentityId", USER_ASSIGNED_IDENTITY),
        LinkRule::exact(
            "$.properties.keyId",
            Extraction::VaultName,
            KEYVAULT_VAULT,
            Relationship::SecurityDependency,
        ),
        LinkRule::exact(
            "$.properties.keyId",
            Extraction::VaultObject,
            KEYVAULT_KEY,
            Relationship::SecurityDependency,
        )
        .when(Guard::VaultObject(VaultObjectKind::Key)),
        private_endpoints(),
    ];
    ResourceAdapter::new(SQL_SERVER, Identity::Name, rules)
}

/// SQL database keyed `server|database`: server, pool, and copy sources.
#[must_use]
pub fn database() -> ResourceAdapter {
    let mut rules = vec![
        LinkRule::exact(
            "$.id",
            Extraction::PathSegments(&["servers"]),
            SQL_SERVER,
            Relationship::ChildOfParent,
        ),
        LinkRule::exact(
            "$.properties.elasticPoolId",
            Extraction::PathSegments(ELASTIC_POOL_SEGMENTS),
            SQL_ELASTIC_POOL,
            Relationship::ConsumerOfProvider,
        ),
    ];
    for source in [
        "$.properties.sourceDatabaseId",
        "$.properties.recoverableDatabaseId",
        "$.properties.restorableDroppedDatabaseId",
    ] {
        rules.push(LinkRule::exact(
            source,
            Extraction::PathSegments(DATABASE_SEGMENTS),
            SQL_DATABASE,
            Relationship::ConsumerOfProvider,
        ));
    }
    rules.push(user_assigned_identities());
    ResourceAdapter::new(SQL_DATABASE, Identity::PathSegments(DATABASE_SEGMENTS), rules)
}
