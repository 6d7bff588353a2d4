// crates/blast-graph-adapters/tests/common/mod.rs
// ============================================================================
// Module: Adapter Test Helpers
// Description: Shared fixtures for adapter integration tests.
// Purpose: Build resource ids and convert resources with default settings.
// Dependencies: blast-graph-adapters, blast-graph-core, serde_json
// ============================================================================

//! ## Overview
//! Provides resource id builders and edge lookups shared by the adapter
//! integration tests.

#![allow(
    dead_code,
    clippy::panic,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Shared helpers assert with panics and not every test uses every helper."
)]

use blast_graph_adapters::Item;
use blast_graph_adapters::ResourceAdapter;
use blast_graph_core::EdgeBuilder;
use blast_graph_core::ItemType;
use blast_graph_core::LinkEdge;
use blast_graph_core::LookupKey;
use blast_graph_core::LookupMethod;
use blast_graph_core::Scope;
use serde_json::Value;

/// Subscription used by fixtures.
pub const SUB: &str = "00000000-0000-0000-0000-000000000001";

/// Scope of the resource under conversion.
pub fn home_scope() -> Scope {
    Scope::grouped(SUB, "rg-home")
}

/// Builds an ARM resource id in `group`.
pub fn arm_id(group: &str, namespace: &str, rest: &str) -> String {
    format!("/subscriptions/{SUB}/resourceGroups/{group}/providers/{namespace}/{rest}")
}

/// Converts `resource` with default builder settings.
pub fn convert(adapter: &ResourceAdapter, resource: &Value) -> Item {
    adapter
        .to_item(resource, &home_scope(), &EdgeBuilder::default())
        .expect("resource converts")
}

/// Returns the edges of `item` targeting `target`.
pub fn edges_to<'a>(item: &'a Item, target: &ItemType) -> Vec<&'a LinkEdge> {
    item.linked_item_queries.iter().filter(|edge| &edge.target_type == target).collect()
}

/// Returns the single edge of `item` targeting `target`.
pub fn single_edge<'a>(item: &'a Item, target: &ItemType) -> &'a LinkEdge {
    let edges = edges_to(item, target);
    assert_eq!(edges.len(), 1, "expected one {target} edge, got {edges:?}");
    edges[0]
}

/// Asserts an edge's method, key, and scope.
pub fn assert_edge(edge: &LinkEdge, method: LookupMethod, key: &LookupKey, scope: &Scope) {
    assert_eq!(edge.method, method, "method of {edge:?}");
    assert_eq!(&edge.lookup_key, key, "key of {edge:?}");
    assert_eq!(&edge.scope, scope, "scope of {edge:?}");
}
