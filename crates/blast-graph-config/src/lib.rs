// crates/blast-graph-config/src/lib.rs
// ============================================================================
// Module: Blast Graph Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for blast-graph.toml semantics.
// Dependencies: blast-graph-core, serde, toml
// ============================================================================

//! ## Overview
//! `blast-graph-config` defines the configuration model for the edge engine:
//! which host suffixes identify secret stores and blob endpoints, which dedup
//! key applies, and which adapters are disabled. Loading is strict and fails
//! closed on oversized, non-UTF-8, unknown, or malformed input.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;

#[cfg(test)]
mod tests;
