// crates/blast-graph-core/src/runtime/scope.rs
// ============================================================================
// Module: Scope Resolver
// Description: Chooses the scope an edge target lives in.
// Purpose: Link resources across groupings and accounts correctly.
// Dependencies: crate::core, crate::grammar
// ============================================================================

//! ## Overview
//! A referenced resource may live in a different grouping, or even a different
//! account, than the resource being described. The resolver always prefers
//! the scope decoded from the referencing path and only falls back to the
//! current item's scope when the path carries none.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::Scope;
use crate::grammar::path::ResourcePath;
use crate::grammar::path::scope_from_hierarchical_path;

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Returns the scope decoded from `candidate_path`, or `fallback` when the
/// path carries no account/grouping pair.
#[must_use]
pub fn resolve_scope(candidate_path: &str, fallback: &Scope) -> Scope {
    scope_from_hierarchical_path(candidate_path).unwrap_or_else(|| fallback.clone())
}

/// Same as [`resolve_scope`] for an already parsed path.
#[must_use]
pub fn resolve_path_scope(path: &ResourcePath<'_>, fallback: &Scope) -> Scope {
    path.scope().unwrap_or_else(|| fallback.clone())
}
