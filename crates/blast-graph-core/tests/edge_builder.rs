// crates/blast-graph-core/tests/edge_builder.rs
// ============================================================================
// Module: Edge Builder Tests
// Description: Tests for rule evaluation, scope assignment, and ordering.
// Purpose: Ensure declared link sites produce the expected edges.
// Dependencies: blast-graph-core, serde_json
// ============================================================================

//! ## Overview
//! Exercises the edge builder end to end: cross-grouping references, locator
//! decoding, deduplication across fields, null and absent elements, network
//! endpoints, guards, and object-key sources.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use blast_graph_core::DedupPolicy;
use blast_graph_core::EdgeBuilder;
use blast_graph_core::IdentifierGrammar;
use blast_graph_core::ItemType;
use blast_graph_core::LinkRule;
use blast_graph_core::LookupKey;
use blast_graph_core::LookupMethod;
use blast_graph_core::Relationship;
use blast_graph_core::Scope;
use blast_graph_core::grammar::VaultObjectKind;
use blast_graph_core::runtime::Extraction;
use blast_graph_core::runtime::Guard;
use blast_graph_core::runtime::build_edges;
use serde_json::Value;
use serde_json::json;

const VAULT: ItemType = ItemType::from_static("azure-keyvault-vault");
const SECRET: ItemType = ItemType::from_static("azure-keyvault-secret");
const DISK: ItemType = ItemType::from_static("azure-compute-disk");
const SNAPSHOT: ItemType = ItemType::from_static("azure-compute-snapshot");
const SUBNET: ItemType = ItemType::from_static("azure-network-subnet");
const IDENTITY: ItemType = ItemType::from_static("azure-managedidentity-user-assigned-identity");
const ACCOUNT: ItemType = ItemType::from_static("azure-storage-account");

fn current_scope() -> Scope {
    Scope::grouped("sub1", "rg-b")
}

fn vault_path(group: &str, name: &str) -> String {
    format!("/subscriptions/sub1/resourceGroups/{group}/providers/Microsoft.KeyVault/vaults/{name}")
}

#[test]
fn cross_grouping_path_uses_path_scope() {
    let rules = [LinkRule::exact(
        "$.properties.vaultId",
        Extraction::ResourceName,
        VAULT,
        Relationship::SecurityDependency,
    )];
    let resource = json!({ "properties": { "vaultId": vault_path("rg-a", "v1") } });

    let edges = build_edges(&resource, &current_scope(), &rules);

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].target_type, VAULT);
    assert_eq!(edges[0].lookup_key, LookupKey::name("v1"));
    assert_eq!(edges[0].scope.to_string(), "sub1.rg-a");
    assert!(edges[0].blast.impact_in);
    assert!(!edges[0].blast.impact_out);
}

#[test]
fn secret_locator_yields_composite_key_in_current_scope() {
    let builder = EdgeBuilder::new(
        IdentifierGrammar::default().with_vault_suffix("vault.example"),
        DedupPolicy::default(),
    );
    let rules = [LinkRule::exact(
        "$.properties.secretUrl",
        Extraction::VaultObject,
        SECRET,
        Relationship::SecurityDependency,
    )];
    let resource = json!({ "properties": { "secretUrl": "https://v1.vault.example/secrets/s1/ver" } });

    let edges = builder.build_edges(&resource, &current_scope(), &rules);

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].lookup_key, LookupKey::composite(["v1", "s1"]));
    assert_eq!(edges[0].scope, current_scope());
}

#[test]
fn two_fields_naming_one_vault_collapse_to_one_edge() {
    let rules = [
        LinkRule::exact(
            "$.properties.primaryVault.id",
            Extraction::ResourceName,
            VAULT,
            Relationship::SecurityDependency,
        ),
        LinkRule::exact(
            "$.properties.backupVault.id",
            Extraction::ResourceName,
            VAULT,
            Relationship::SecurityDependency,
        ),
    ];
    let resource = json!({
        "properties": {
            "primaryVault": { "id": vault_path("rg-b", "v1") },
            "backupVault": { "id": vault_path("rg-b", "v1") }
        }
    });

    let builder = EdgeBuilder::default();
    assert_eq!(builder.collect_edges(&resource, &current_scope(), &rules).len(), 2);

    let edges = builder.build_edges(&resource, &current_scope(), &rules);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].target_type, VAULT);
    assert_eq!(edges[0].method, LookupMethod::Exact);
    assert_eq!(edges[0].lookup_key, LookupKey::name("v1"));
}

#[test]
fn null_elements_are_skipped() {
    let rules = [LinkRule::exact(
        "$.properties.dataDisks[*].managedDisk.id",
        Extraction::ResourceName,
        DISK,
        Relationship::ConsumerOfProvider,
    )];
    let disk_id = "/subscriptions/sub1/resourceGroups/rg-b/providers/Microsoft.Compute/disks/data0";
    let resource = json!({
        "properties": { "dataDisks": [null, { "managedDisk": { "id": disk_id } }, { "lun": 2 }] }
    });

    let edges = build_edges(&resource, &current_scope(), &rules);

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].lookup_key, LookupKey::name("data0"));
}

#[test]
fn ip_literal_is_a_global_bidirectional_endpoint() {
    let rules = [LinkRule::ip_address("$.properties.ipAddress")];
    let resource = json!({ "properties": { "ipAddress": "10.0.0.1" } });

    let edges = build_edges(&resource, &current_scope(), &rules);

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].target_type, ItemType::IP);
    assert_eq!(edges[0].lookup_key, LookupKey::name("10.0.0.1"));
    assert_eq!(edges[0].scope, Scope::Global);
    assert_eq!(edges[0].scope.to_string(), "global");
    assert!(edges[0].blast.impact_in);
    assert!(edges[0].blast.impact_out);
}

#[test]
fn empty_identifier_yields_no_edges() {
    let rules = [
        LinkRule::exact(
            "$.properties.vaultId",
            Extraction::ResourceName,
            VAULT,
            Relationship::SecurityDependency,
        ),
        LinkRule::exact(
            "$.properties.vaultId",
            Extraction::PathSegments(&["vaults"]),
            VAULT,
            Relationship::SecurityDependency,
        ),
        LinkRule::exact(
            "$.properties.vaultId",
            Extraction::LiteralName,
            VAULT,
            Relationship::SecurityDependency,
        ),
        LinkRule::exact(
            "$.properties.vaultId",
            Extraction::VaultName,
            VAULT,
            Relationship::SecurityDependency,
        ),
        LinkRule::ip_address("$.properties.vaultId"),
        LinkRule::dns_name("$.properties.vaultId"),
        LinkRule::http_url("$.properties.vaultId"),
    ];
    for value in ["", "   "] {
        let resource = json!({ "properties": { "vaultId": value } });
        assert!(build_edges(&resource, &current_scope(), &rules).is_empty());
    }
}

#[test]
fn absence_at_every_level_yields_no_edges() {
    let rules = [LinkRule::exact(
        "$.properties.storageProfile.osDisk.managedDisk.id",
        Extraction::ResourceName,
        DISK,
        Relationship::ConsumerOfProvider,
    )];
    let resources = [
        Value::Null,
        json!({}),
        json!({ "properties": null }),
        json!({ "properties": {} }),
        json!({ "properties": { "storageProfile": { "osDisk": null } } }),
        json!({ "properties": { "storageProfile": { "osDisk": { "managedDisk": {} } } } }),
        json!({ "properties": { "storageProfile": { "osDisk": { "managedDisk": { "id": null } } } } }),
        json!({ "properties": { "storageProfile": { "osDisk": { "managedDisk": { "id": 42 } } } } }),
    ];
    for resource in &resources {
        assert!(build_edges(resource, &current_scope(), &rules).is_empty(), "resource {resource}");
    }
}

#[test]
fn emission_follows_rule_order_then_element_order() {
    let rules = [
        LinkRule::exact(
            "$.properties.dataDisks[*].id",
            Extraction::ResourceName,
            DISK,
            Relationship::ConsumerOfProvider,
        ),
        LinkRule::exact(
            "$.properties.osDisk.id",
            Extraction::ResourceName,
            DISK,
            Relationship::ConsumerOfProvider,
        ),
    ];
    let disk = |name: &str| {
        format!("/subscriptions/sub1/resourceGroups/rg-b/providers/Microsoft.Compute/disks/{name}")
    };
    let resource = json!({
        "properties": {
            "osDisk": { "id": disk("os") },
            "dataDisks": [{ "id": disk("d2") }, { "id": disk("d1") }]
        }
    });

    let names: Vec<String> = build_edges(&resource, &current_scope(), &rules)
        .into_iter()
        .map(|edge| edge.lookup_key.to_string())
        .collect();

    assert_eq!(names, vec!["d2", "d1", "os"]);
}

#[test]
fn collection_guard_distinguishes_disks_from_snapshots() {
    let rules = [
        LinkRule::exact(
            "$.properties.creationData.sourceResourceId",
            Extraction::ResourceName,
            DISK,
            Relationship::ConsumerOfProvider,
        )
        .when_collection("disks"),
        LinkRule::exact(
            "$.properties.creationData.sourceResourceId",
            Extraction::ResourceName,
            SNAPSHOT,
            Relationship::ConsumerOfProvider,
        )
        .when_collection("snapshots"),
    ];
    let snapshot = json!({
        "properties": { "creationData": { "sourceResourceId":
            "/subscriptions/sub1/resourceGroups/rg-b/providers/Microsoft.Compute/snapshots/disks-backup"
        } }
    });

    let edges = build_edges(&snapshot, &current_scope(), &rules);

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].target_type, SNAPSHOT);
    assert_eq!(edges[0].lookup_key, LookupKey::name("disks-backup"));
}

#[test]
fn path_segments_build_composite_keys() {
    let rules = [LinkRule::exact(
        "$.properties.ipConfigurations[*].properties.subnet.id",
        Extraction::PathSegments(&["virtualNetworks", "subnets"]),
        SUBNET,
        Relationship::ConsumerOfProvider,
    )];
    let resource = json!({
        "properties": { "ipConfigurations": [
            { "properties": { "subnet": { "id":
                "/subscriptions/sub2/resourceGroups/net/providers/Microsoft.Network/virtualNetworks/hub/subnets/app"
            } } },
            { "properties": { "subnet": { "id":
                "/subscriptions/sub2/resourceGroups/net/providers/Microsoft.Network/virtualNetworks/hub"
            } } }
        ] }
    });

    let edges = build_edges(&resource, &current_scope(), &rules);

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].lookup_key, LookupKey::composite(["hub", "app"]));
    assert_eq!(edges[0].scope, Scope::grouped("sub2", "net"));
}

#[test]
fn object_key_sources_read_identity_maps() {
    let rules = [LinkRule::exact(
        "$.identity.userAssignedIdentities",
        Extraction::ResourceName,
        IDENTITY,
        Relationship::SecurityDependency,
    )
    .from_keys()];
    let resource = json!({
        "identity": { "userAssignedIdentities": {
            "/subscriptions/sub1/resourceGroups/ids/providers/Microsoft.ManagedIdentity/userAssignedIdentities/app-id": {
                "principalId": "p"
            }
        } }
    });

    let edges = build_edges(&resource, &current_scope(), &rules);

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].lookup_key, LookupKey::name("app-id"));
    assert_eq!(edges[0].scope, Scope::grouped("sub1", "ids"));
}

#[test]
fn vault_object_guard_filters_by_kind() {
    let rules = [LinkRule::exact(
        "$.properties.urls[*]",
        Extraction::VaultName,
        VAULT,
        Relationship::SecurityDependency,
    )
    .when(Guard::VaultObject(VaultObjectKind::Key))];
    let resource = json!({
        "properties": { "urls": [
            "https://secrets-kv.vault.azure.net/secrets/s1",
            "https://keys-kv.vault.azure.net/keys/k1/v1"
        ] }
    });

    let edges = build_edges(&resource, &current_scope(), &rules);

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].lookup_key, LookupKey::name("keys-kv"));
}

#[test]
fn blob_and_url_extractions_decode_endpoints() {
    let rules = [
        LinkRule::search(
            "$.properties.diagnosticsProfile.bootDiagnostics.storageUri",
            Extraction::BlobAccount,
            ACCOUNT,
            Relationship::ConsumerOfProvider,
        ),
        LinkRule::dns_from_url("$.properties.diagnosticsProfile.bootDiagnostics.storageUri"),
        LinkRule::http_url("$.properties.diagnosticsProfile.bootDiagnostics.storageUri"),
    ];
    let uri = "https://diag01.blob.core.windows.net/";
    let resource = json!({
        "properties": { "diagnosticsProfile": { "bootDiagnostics": { "storageUri": uri } } }
    });

    let edges = build_edges(&resource, &current_scope(), &rules);

    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0].target_type, ACCOUNT);
    assert_eq!(edges[0].lookup_key, LookupKey::name("diag01"));
    assert_eq!(edges[0].scope, current_scope());
    assert_eq!(edges[1].target_type, ItemType::DNS);
    assert_eq!(edges[1].lookup_key, LookupKey::name("diag01.blob.core.windows.net"));
    assert_eq!(edges[1].scope, Scope::Global);
    assert_eq!(edges[2].target_type, ItemType::HTTP);
    assert_eq!(edges[2].lookup_key, LookupKey::name(uri));
}

#[test]
fn dns_from_url_skips_ip_hosts() {
    let rules = [LinkRule::dns_from_url("$.endpoint")];
    for endpoint in ["http://10.0.0.4:8080/health", "https://[2001:db8::1]/"] {
        let resource = json!({ "endpoint": endpoint });
        assert!(build_edges(&resource, &current_scope(), &rules).is_empty());
    }
}

#[test]
fn building_twice_is_identical() {
    let rules = [
        LinkRule::exact(
            "$.a[*]",
            Extraction::ResourceName,
            VAULT,
            Relationship::SecurityDependency,
        ),
        LinkRule::ip_address("$.ips[*]"),
    ];
    let resource = json!({
        "a": [vault_path("rg-a", "v1"), vault_path("rg-c", "v2"), vault_path("rg-a", "v1")],
        "ips": ["10.0.0.1", "not-an-ip", "10.0.0.2"]
    });
    let first = build_edges(&resource, &current_scope(), &rules);
    let second = build_edges(&resource, &current_scope(), &rules);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
    assert_eq!(first.len(), 4);
}
