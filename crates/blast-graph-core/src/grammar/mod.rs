// crates/blast-graph-core/src/grammar/mod.rs
// ============================================================================
// Module: Identifier Grammar
// Description: Recognizers and extractors for embedded resource identifiers.
// Purpose: Decompose paths, locator URIs, and network literals without failing.
// Dependencies: url
// ============================================================================

//! ## Overview
//! Every extractor here is total: it returns a decoded value or `None` (or a
//! truncated list). Malformed and empty inputs mean "no reference" and never
//! surface as errors. The functions are usable standalone by mapping code that
//! needs one-off decoding outside a rule-table pass.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod classify;
pub mod locator;
pub mod network;
pub mod path;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use classify::IdentifierShape;
pub use classify::classify_identifier;
pub use classify::http_url;
pub use locator::BlobLocator;
pub use locator::DEFAULT_BLOB_SUFFIXES;
pub use locator::DEFAULT_VAULT_SUFFIXES;
pub use locator::IdentifierGrammar;
pub use locator::VaultLocator;
pub use locator::VaultObject;
pub use locator::VaultObjectKind;
pub use locator::account_name_from_blob_uri;
pub use locator::container_and_child_from_locator_uri;
pub use locator::hostname_from_uri;
pub use network::dns_name_literal;
pub use network::ip_address_literal;
pub use path::PathPair;
pub use path::ResourcePath;
pub use path::name_from_hierarchical_path;
pub use path::scope_from_hierarchical_path;
pub use path::segment_values_from_hierarchical_path;
