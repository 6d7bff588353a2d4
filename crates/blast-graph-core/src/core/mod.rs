// crates/blast-graph-core/src/core/mod.rs
// ============================================================================
// Module: Blast Graph Data Model
// Description: Identifier and edge types shared by every component.
// Purpose: Group the immutable data model behind one module path.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Data model for items and their outbound edges.

pub mod edge;
pub mod identifiers;

pub use edge::BlastPropagation;
pub use edge::LinkEdge;
pub use edge::LookupMethod;
pub use edge::Relationship;
pub use identifiers::COMPOSITE_KEY_SEPARATOR;
pub use identifiers::CompositeKey;
pub use identifiers::GLOBAL_SCOPE;
pub use identifiers::ItemType;
pub use identifiers::LookupKey;
pub use identifiers::Scope;
