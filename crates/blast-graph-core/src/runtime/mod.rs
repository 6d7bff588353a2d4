// crates/blast-graph-core/src/runtime/mod.rs
// ============================================================================
// Module: Blast Graph Runtime
// Description: Scope resolution, rule evaluation, and deduplication.
// Purpose: Convert a resource body into an ordered edge list.
// Dependencies: crate::core, crate::grammar, jsonpath_lib, serde_json
// ============================================================================

//! ## Overview
//! Runtime components in data-flow order: [`rules`] declares link sites,
//! [`builder`] evaluates them, [`scope`] assigns target scopes, and
//! [`dedupe`] suppresses duplicates.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod builder;
pub mod dedupe;
pub mod rules;
pub mod scope;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builder::EdgeBuilder;
pub use builder::build_edges;
pub use dedupe::DedupPolicy;
pub use dedupe::dedupe;
pub use dedupe::dedupe_with;
pub use rules::Extraction;
pub use rules::FieldSource;
pub use rules::Guard;
pub use rules::LinkRule;
pub use rules::RuleError;
pub use rules::SourceMode;
pub use rules::validate_rules;
pub use scope::resolve_path_scope;
pub use scope::resolve_scope;
