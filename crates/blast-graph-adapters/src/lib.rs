// crates/blast-graph-adapters/src/lib.rs
// ============================================================================
// Module: Blast Graph Adapters
// Description: Built-in resource adapters, item assembly, and registry.
// Purpose: Convert provider resources into items with typed link edges.
// Dependencies: blast-graph-config, blast-graph-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate ships one declarative adapter per supported resource kind and a
//! registry that routes conversion by item type. Adapters hold only data: an
//! identity derivation and a rule table. Edge construction is delegated to
//! the core [`blast_graph_core::EdgeBuilder`].
//! Invariants:
//! - Rule tables are validated when adapters are registered.
//! - Conversion errors concern the resource being converted, never its references.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod adapter;
pub mod item;
pub mod item_types;
pub mod registry;
pub mod tables;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use adapter::Identity;
pub use adapter::ResourceAdapter;
pub use item::AssembleError;
pub use item::Item;
pub use registry::AdapterError;
pub use registry::AdapterRegistry;
pub use tables::builtin_adapters;
