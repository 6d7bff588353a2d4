//! Identifier grammar property-based tests.
//!
//! ## Purpose
//! These tests feed randomized strings through every extractor and assert the
//! total-function contract: decoding never panics and malformed input decodes
//! to "no reference".
//!
//! ## What is covered
//! - Arbitrary strings through path, locator, and literal extractors.
//! - Scope fallback holds exactly when a path carries no scope.
//! - Composite key ordering for generated segment lists.
// crates/blast-graph-core/tests/proptest_grammar.rs
// ============================================================================
// Module: Grammar Property-Based Tests
// Description: Fuzz-like checks for identifier extractors and scope fallback.
// Purpose: Ensure extractors are total and scope resolution is consistent.
// ============================================================================

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
    reason = "Test-only assertions and helpers are permitted."
)]

use blast_graph_core::LookupKey;
use blast_graph_core::Scope;
use blast_graph_core::grammar::account_name_from_blob_uri;
use blast_graph_core::grammar::classify_identifier;
use blast_graph_core::grammar::container_and_child_from_locator_uri;
use blast_graph_core::grammar::dns_name_literal;
use blast_graph_core::grammar::hostname_from_uri;
use blast_graph_core::grammar::ip_address_literal;
use blast_graph_core::grammar::name_from_hierarchical_path;
use blast_graph_core::grammar::scope_from_hierarchical_path;
use blast_graph_core::grammar::segment_values_from_hierarchical_path;
use blast_graph_core::runtime::resolve_scope;
use proptest::prelude::*;

proptest! {
    #[test]
    fn extractors_never_panic(raw in ".{0,96}") {
        let _ = name_from_hierarchical_path(&raw);
        let _ = scope_from_hierarchical_path(&raw);
        let _ = segment_values_from_hierarchical_path(&raw, &["virtualNetworks", "subnets"]);
        let _ = container_and_child_from_locator_uri(&raw);
        let _ = hostname_from_uri(&raw);
        let _ = account_name_from_blob_uri(&raw);
        let _ = ip_address_literal(&raw);
        let _ = dns_name_literal(&raw);
        let _ = classify_identifier(&raw);
    }

    #[test]
    fn path_like_input_never_panics(raw in "(/[a-zA-Z0-9 ._-]{0,8}){0,10}/?") {
        let _ = name_from_hierarchical_path(&raw);
        let _ = scope_from_hierarchical_path(&raw);
        let values = segment_values_from_hierarchical_path(
            &raw,
            &["subscriptions", "resourceGroups", "providers"],
        );
        prop_assert!(values.len() <= 3);
    }

    #[test]
    fn scope_falls_back_iff_path_has_none(raw in "(/[a-zA-Z0-9]{1,6}){0,8}") {
        let fallback = Scope::grouped("fallback-sub", "fallback-rg");
        let resolved = resolve_scope(&raw, &fallback);
        match scope_from_hierarchical_path(&raw) {
            Some(scope) => prop_assert_eq!(resolved, scope),
            None => prop_assert_eq!(resolved, fallback),
        }
    }

    #[test]
    fn rooted_paths_resolve_to_their_own_scope(
        sub in "[a-z0-9-]{1,12}",
        group in "[a-zA-Z0-9_.-]{1,12}",
        name in "[a-z0-9-]{1,12}",
    ) {
        let path = format!("/subscriptions/{sub}/resourceGroups/{group}/providers/Microsoft.KeyVault/vaults/{name}");
        let fallback = Scope::grouped("other", "other");
        prop_assert_eq!(resolve_scope(&path, &fallback), Scope::grouped(sub, group));
        prop_assert_eq!(name_from_hierarchical_path(&path), Some(name.as_str()));
    }

    #[test]
    fn composite_keys_respect_segment_order(
        a in "[a-z]{1,6}",
        b in "[a-z]{1,6}",
        c in "[a-z]{1,6}",
    ) {
        prop_assume!(a != b);
        let forward = LookupKey::composite([a.clone(), b.clone(), c.clone()]);
        let swapped = LookupKey::composite([b, a, c]);
        prop_assert_ne!(forward, swapped);
    }
}
