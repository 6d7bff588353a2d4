// crates/blast-graph-core/tests/locator_grammar.rs
// ============================================================================
// Module: Locator Grammar Tests
// Description: Tests for locator URI, network literal, and shape decoding.
// Purpose: Ensure locator and endpoint identifiers decode as expected.
// Dependencies: blast-graph-core
// ============================================================================

//! ## Overview
//! Validates secret-store and blob-storage locators, the configurable suffix
//! tables, network literal recognizers, and identifier classification.

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

use std::net::IpAddr;
use std::net::Ipv4Addr;

use blast_graph_core::IdentifierGrammar;
use blast_graph_core::grammar::BlobLocator;
use blast_graph_core::grammar::IdentifierShape;
use blast_graph_core::grammar::VaultLocator;
use blast_graph_core::grammar::VaultObjectKind;
use blast_graph_core::grammar::account_name_from_blob_uri;
use blast_graph_core::grammar::classify_identifier;
use blast_graph_core::grammar::container_and_child_from_locator_uri;
use blast_graph_core::grammar::dns_name_literal;
use blast_graph_core::grammar::hostname_from_uri;
use blast_graph_core::grammar::ip_address_literal;

#[test]
fn vault_locator_decodes_kind_name_and_version() {
    let grammar = IdentifierGrammar::default();
    let locator = grammar
        .vault_locator("https://kv-prod.vault.azure.net/keys/disk-key/0123abcd")
        .expect("vault locator");
    assert_eq!(locator.vault, "kv-prod");
    let object = locator.object.expect("object");
    assert_eq!(object.kind, VaultObjectKind::Key);
    assert_eq!(object.name, "disk-key");
    assert_eq!(object.version.as_deref(), Some("0123abcd"));
}

#[test]
fn locator_parse_uses_default_suffixes() {
    let vault = VaultLocator::parse("https://kv-prod.vault.azure.net/secrets/db").expect("vault");
    assert_eq!(vault.object.map(|object| object.kind), Some(VaultObjectKind::Secret));
    assert!(VaultLocator::parse("https://kv-prod.vault.example/secrets/db").is_none());

    let blob = BlobLocator::parse("https://acct.blob.core.windows.net/logs").expect("blob");
    assert_eq!(blob.account, "acct");
    assert_eq!(blob.container.as_deref(), Some("logs"));
    assert!(blob.blob.is_none());
    assert!(BlobLocator::parse("https://acct.file.core.windows.net/logs").is_none());
}

#[test]
fn bare_vault_uri_has_no_object() {
    let locator = IdentifierGrammar::default()
        .vault_locator("https://kv-prod.vault.azure.net/")
        .expect("vault locator");
    assert_eq!(locator.vault, "kv-prod");
    assert!(locator.object.is_none());
}

#[test]
fn configured_suffix_decodes_secret_locator() {
    let grammar = IdentifierGrammar::default().with_vault_suffix("vault.example");
    assert_eq!(
        grammar.container_and_child("https://v1.vault.example/secrets/s1/ver"),
        Some(("v1".to_string(), "s1".to_string()))
    );
    assert!(
        IdentifierGrammar::default().vault_locator("https://v1.vault.example/secrets/s1").is_none()
    );
}

#[test]
fn suffix_matching_respects_label_boundaries() {
    let grammar = IdentifierGrammar::default();
    assert!(grammar.is_vault_host("kv.VAULT.azure.net"));
    assert!(!grammar.is_vault_host("vault.azure.net"));
    assert!(!grammar.is_vault_host("kvvault.azure.net"));
    assert!(!grammar.is_blob_host("acct.blob.core.windows.net.evil.example"));
}

#[test]
fn suffixes_normalize_on_construction() {
    let grammar = IdentifierGrammar::new([".Vault.Example", " "], ["BLOB.example"]);
    assert_eq!(grammar.vault_suffixes(), ["vault.example".to_string()]);
    assert_eq!(grammar.blob_suffixes(), ["blob.example".to_string()]);
}

#[test]
fn container_and_child_for_non_vault_hosts_uses_first_segment() {
    assert_eq!(
        container_and_child_from_locator_uri("https://acct.blob.core.windows.net/vhds/os.vhd"),
        Some(("acct".to_string(), "vhds".to_string()))
    );
    assert_eq!(
        container_and_child_from_locator_uri("https://kv.vault.azure.net/secrets/db-password"),
        Some(("kv".to_string(), "db-password".to_string()))
    );
    assert_eq!(container_and_child_from_locator_uri("https://kv.vault.azure.net/"), None);
    assert_eq!(container_and_child_from_locator_uri(""), None);
}

#[test]
fn blob_locator_decodes_account_container_and_blob() {
    let locator = IdentifierGrammar::default()
        .blob_locator("https://diag01.blob.core.windows.net/logs/2024/01/boot.log")
        .expect("blob locator");
    assert_eq!(locator.account, "diag01");
    assert_eq!(locator.container.as_deref(), Some("logs"));
    assert_eq!(locator.blob.as_deref(), Some("2024/01/boot.log"));

    assert_eq!(
        account_name_from_blob_uri("https://diag01.blob.core.windows.net/"),
        Some("diag01".to_string())
    );
    assert_eq!(account_name_from_blob_uri("https://diag01.file.core.windows.net/share"), None);
}

#[test]
fn hostname_extractor_handles_any_scheme() {
    assert_eq!(
        hostname_from_uri("https://api.contoso.com/v1"),
        Some("api.contoso.com".to_string()),
    );
    assert_eq!(
        hostname_from_uri("sftp://files.contoso.com"),
        Some("files.contoso.com".to_string()),
    );
    assert_eq!(hostname_from_uri("not a uri"), None);
    assert_eq!(hostname_from_uri(""), None);
}

#[test]
fn network_literals_are_recognized() {
    assert_eq!(ip_address_literal("10.0.0.1"), Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
    assert!(ip_address_literal("[2001:db8::1]").is_some());
    assert!(ip_address_literal("10.0.0.0/24").is_none());
    assert!(ip_address_literal("").is_none());

    assert_eq!(dns_name_literal("db.contoso.com."), Some("db.contoso.com"));
    assert_eq!(dns_name_literal("_sip._tcp.contoso.com"), Some("_sip._tcp.contoso.com"));
    assert!(dns_name_literal("localhost").is_none());
    assert!(dns_name_literal("10.0.0.1").is_none());
    assert!(dns_name_literal("-bad.contoso.com").is_none());
    assert!(dns_name_literal("has space.contoso.com").is_none());
}

#[test]
fn classification_picks_the_most_specific_shape() {
    assert!(matches!(
        classify_identifier("/subscriptions/s/resourceGroups/rg/providers/Microsoft.Compute/disks/d"),
        IdentifierShape::ResourcePath(_)
    ));
    assert!(matches!(
        classify_identifier("https://kv.vault.azure.net/secrets/s"),
        IdentifierShape::VaultLocator(_)
    ));
    assert!(matches!(
        classify_identifier("https://acct.blob.core.windows.net/c"),
        IdentifierShape::BlobEndpoint(_)
    ));
    assert!(matches!(
        classify_identifier("https://api.contoso.com/health"),
        IdentifierShape::HttpEndpoint(_)
    ));
    assert!(matches!(classify_identifier("10.1.2.3"), IdentifierShape::IpAddress(_)));
    assert!(matches!(classify_identifier("db.contoso.com"), IdentifierShape::Hostname(_)));
    assert_eq!(classify_identifier("just-a-name"), IdentifierShape::Opaque);
    assert_eq!(classify_identifier(""), IdentifierShape::Opaque);
}
