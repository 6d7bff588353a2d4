// crates/blast-graph-adapters/tests/item_assembly.rs
// ============================================================================
// Module: Item Assembly Tests
// Description: Tests for unique attribute derivation and item shape.
// Purpose: Ensure conversion fails only on the resource's own identity.
// Dependencies: blast-graph-adapters, blast-graph-core, serde_json
// ============================================================================

//! ## Overview
//! Exercises identity derivation, assembly errors, and the serialized item.

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

mod common;

use blast_graph_adapters::AssembleError;
use blast_graph_adapters::Identity;
use blast_graph_adapters::ResourceAdapter;
use blast_graph_adapters::item_types::KEYVAULT_SECRET;
use blast_graph_adapters::item_types::VIRTUAL_MACHINE;
use blast_graph_adapters::tables::compute;
use blast_graph_adapters::tables::keyvault;
use blast_graph_core::EdgeBuilder;
use serde_json::json;

use crate::common::arm_id;
use crate::common::convert;
use crate::common::home_scope;

#[test]
fn name_identity_is_trimmed() {
    let item = convert(&compute::virtual_machine(), &json!({ "name": "  web-1 " }));
    assert_eq!(item.unique_attribute_value, "web-1");
    assert_eq!(item.scope, home_scope());
}

#[test]
fn missing_or_blank_name_is_rejected() {
    let adapter = compute::virtual_machine();
    let builder = EdgeBuilder::default();
    for resource in [json!({}), json!({ "name": "   " }), json!({ "name": 7 })] {
        let err = adapter.to_item(&resource, &home_scope(), &builder).unwrap_err();
        assert_eq!(
            err,
            AssembleError::MissingName {
                item_type: VIRTUAL_MACHINE,
            }
        );
    }
}

#[test]
fn non_object_resource_is_rejected() {
    let adapter = compute::disk();
    let err = adapter.to_item(&json!(["disk"]), &home_scope(), &EdgeBuilder::default()).unwrap_err();
    assert!(matches!(err, AssembleError::NotAnObject { .. }));
}

#[test]
fn path_identity_requires_every_collection() {
    let adapter = keyvault::secret();
    let builder = EdgeBuilder::default();
    let vault_only = json!({ "id": arm_id("rg-sec", "Microsoft.KeyVault", "vaults/kv1"), "name": "kv1" });
    let err = adapter.to_item(&vault_only, &home_scope(), &builder).unwrap_err();
    assert_eq!(
        err,
        AssembleError::MissingIdentity {
            item_type: KEYVAULT_SECRET,
            collections: "vaults/secrets".to_string(),
        }
    );
    let no_id = json!({ "name": "db-pass" });
    assert!(adapter.to_item(&no_id, &home_scope(), &builder).is_err());
}

#[test]
fn unresolvable_references_do_not_fail_conversion() {
    let vm = json!({
        "name": "web-1",
        "properties": {
            "storageProfile": { "osDisk": { "managedDisk": { "id": "not a path" } } },
            "networkProfile": { "networkInterfaces": [{ "id": 42 }, {}] },
            "diagnosticsProfile": { "bootDiagnostics": { "storageUri": "https://example.com/" } }
        }
    });
    let item = convert(&compute::virtual_machine(), &vm);
    assert_eq!(item.linked_item_queries.len(), 1);
    assert_eq!(item.linked_item_queries[0].lookup_key.to_string(), "example.com");
}

#[test]
fn item_keeps_attributes_and_serializes_edges() {
    let adapter = ResourceAdapter::new(VIRTUAL_MACHINE, Identity::Name, Vec::new());
    let resource = json!({ "name": "web-1", "location": "eastus" });
    let item = adapter.to_item(&resource, &home_scope(), &EdgeBuilder::default()).unwrap();
    assert_eq!(item.attributes, resource);

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["type"], "azure-compute-virtual-machine");
    assert_eq!(value["unique_attribute_value"], "web-1");
    assert_eq!(value["linked_item_queries"], json!([]));
}
