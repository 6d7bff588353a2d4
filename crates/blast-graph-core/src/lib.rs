// crates/blast-graph-core/src/lib.rs
// ============================================================================
// Module: Blast Graph Core
// Description: Reference resolution and dependency-edge construction.
// Purpose: Turn provider resource bodies into typed, scoped link edges.
// Dependencies: jsonpath_lib, serde, serde_json, thiserror, tracing, url
// ============================================================================

//! ## Overview
//! Blast Graph Core locates identifiers of other resources inside a resource
//! body, classifies their format, resolves the scope of each referenced
//! resource, and emits deduplicated [`LinkEdge`] values whose impact flags
//! derive from a closed set of [`Relationship`] kinds.
//!
//! The crate is split leaf-first:
//! - [`core`]: identifiers, scopes, lookup keys, and edges.
//! - [`grammar`]: total extractors for paths, locator URIs, and literals.
//! - [`runtime`]: rule tables, the edge builder, and the deduplicator.
//!
//! Invariants:
//! - Extractors never fail; malformed input means "no reference".
//! - Edge construction is pure and synchronous; all types are `Send + Sync`.
//!
//! ```
//! use blast_graph_core::ItemType;
//! use blast_graph_core::Relationship;
//! use blast_graph_core::Scope;
//! use blast_graph_core::runtime::Extraction;
//! use blast_graph_core::runtime::LinkRule;
//! use blast_graph_core::runtime::build_edges;
//! use serde_json::json;
//!
//! let rules = [LinkRule::exact(
//!     "$.properties.osDisk.managedDisk.id",
//!     Extraction::ResourceName,
//!     ItemType::from_static("azure-compute-disk"),
//!     Relationship::ConsumerOfProvider,
//! )];
//! let vm = json!({
//!     "properties": { "osDisk": { "managedDisk": {
//!         "id": "/subscriptions/s/resourceGroups/rg2/providers/Microsoft.Compute/disks/os"
//!     } } }
//! });
//! let edges = build_edges(&vm, &Scope::grouped("s", "rg1"), &rules);
//! assert_eq!(edges.len(), 1);
//! assert_eq!(edges[0].scope.to_string(), "s.rg2");
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod grammar;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::BlastPropagation;
pub use crate::core::COMPOSITE_KEY_SEPARATOR;
pub use crate::core::CompositeKey;
pub use crate::core::GLOBAL_SCOPE;
pub use crate::core::ItemType;
pub use crate::core::LinkEdge;
pub use crate::core::LookupKey;
pub use crate::core::LookupMethod;
pub use crate::core::Relationship;
pub use crate::core::Scope;
pub use grammar::IdentifierGrammar;
pub use runtime::DedupPolicy;
pub use runtime::EdgeBuilder;
pub use runtime::LinkRule;
pub use runtime::RuleError;
