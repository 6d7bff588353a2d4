// crates/blast-graph-core/src/grammar/path.rs
// ============================================================================
// Module: Hierarchical Resource Paths
// Description: Parser and extractors for slash-delimited resource paths.
// Purpose: Decode names, scopes, and named segment values from resource ids.
// Dependencies: crate::core::identifiers
// ============================================================================

//! ## Overview
//! A hierarchical path is an ordered list of `(collection, instance)` pairs:
//!
//! ```text
//! /subscriptions/{sub}/resourceGroups/{rg}/providers/{Namespace}/vaults/{name}
//! ```
//!
//! [`ResourcePath`] parses the pairs once; every extractor in this module is a
//! thin view over it. Matching is done on pair collections rather than raw
//! substrings, so an instance that happens to be named `disks` can never be
//! mistaken for a collection.
//! Invariants:
//! - Malformed input yields `None` or a short list, never an error.
//! - Collection names compare ASCII case-insensitively.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::Scope;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Collection naming the owning account.
pub const ACCOUNT_COLLECTION: &str = "subscriptions";
/// Collection naming the grouping inside an account.
pub const GROUPING_COLLECTION: &str = "resourceGroups";
/// Collection whose instance is the provider namespace.
pub const PROVIDERS_COLLECTION: &str = "providers";

// ============================================================================
// SECTION: Resource Path
// ============================================================================

/// One `(collection, instance)` pair of a hierarchical path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPair<'a> {
    /// Collection name, e.g. `vaults`.
    pub collection: &'a str,
    /// Instance name within the collection.
    pub instance: &'a str,
}

/// Parsed hierarchical resource path borrowing from the raw identifier.
///
/// # Invariants
/// - Holds at least one pair.
/// - No collection or instance is empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath<'a> {
    /// Ordered pairs from the root.
    pairs: Vec<PathPair<'a>>,
}

impl<'a> ResourcePath<'a> {
    /// Parses a hierarchical path; returns `None` when `raw` is not one.
    ///
    /// The path must be rooted (leading `/`); a trailing slash is tolerated.
    /// URIs (anything carrying a scheme) and paths with an odd number of
    /// segments are rejected.
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.contains("://") {
            return None;
        }
        let body = trimmed.strip_prefix('/')?.trim_end_matches('/');
        if body.is_empty() {
            return None;
        }
        let segments: Vec<&str> = body.split('/').collect();
        if segments.len() % 2 != 0 {
            return None;
        }
        let mut pairs = Vec::with_capacity(segments.len() / 2);
        for chunk in segments.chunks_exact(2) {
            let [collection, instance] = chunk else {
                return None;
            };
            if collection.trim().is_empty() || instance.trim().is_empty() {
                return None;
            }
            pairs.push(PathPair {
                collection: *collection,
                instance: *instance,
            });
        }
        Some(Self {
            pairs,
        })
    }

    /// Returns the ordered pairs.
    #[must_use]
    pub fn pairs(&self) -> &[PathPair<'a>] {
        &self.pairs
    }

    /// Returns the final pair, which names the resource itself.
    #[must_use]
    pub fn last(&self) -> Option<PathPair<'a>> {
        self.pairs.last().copied()
    }

    /// Returns the resource's own name.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.last().map(|pair| pair.instance)
    }

    /// Returns the collection of the final pair (`disks`, `snapshots`, ...).
    #[must_use]
    pub fn final_collection(&self) -> Option<&'a str> {
        self.last().map(|pair| pair.collection)
    }

    /// Returns true when the final pair belongs to `collection`.
    #[must_use]
    pub fn is_collection(&self, collection: &str) -> bool {
        self.final_collection().is_some_and(|last| last.eq_ignore_ascii_case(collection))
    }

    /// Returns the collections following the provider namespace, in order.
    ///
    /// `.../providers/Microsoft.Compute/galleries/g1/images/def1` yields
    /// `["galleries", "images"]`. Empty when the path has no provider pair.
    #[must_use]
    pub fn resource_collections(&self) -> Vec<&'a str> {
        self.pairs
            .iter()
            .position(|pair| pair.collection.eq_ignore_ascii_case(PROVIDERS_COLLECTION))
            .map_or_else(Vec::new, |index| {
                self.pairs[index + 1..].iter().map(|pair| pair.collection).collect()
            })
    }

    /// Returns true when the collections after the provider namespace are
    /// exactly `collections`, so a gallery image definition
    /// (`galleries/images`) never passes for a managed image (`images`).
    #[must_use]
    pub fn is_resource_type(&self, collections: &[&str]) -> bool {
        let actual = self.resource_collections();
        actual.len() == collections.len()
            && actual
                .iter()
                .zip(collections)
                .all(|(left, right)| left.eq_ignore_ascii_case(right))
    }

    /// Returns the provider namespace (`Microsoft.KeyVault`) when present.
    #[must_use]
    pub fn provider_namespace(&self) -> Option<&'a str> {
        self.value_of(PROVIDERS_COLLECTION)
    }

    /// Returns the instance following the first occurrence of `collection`.
    #[must_use]
    pub fn value_of(&self, collection: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|pair| pair.collection.eq_ignore_ascii_case(collection))
            .map(|pair| pair.instance)
    }

    /// Returns instance values for each requested collection, in order.
    ///
    /// Each search starts after the previous match; the first collection not
    /// found truncates the result, so callers check the length before using
    /// values positionally.
    #[must_use]
    pub fn segment_values(&self, collections: &[&str]) -> Vec<&'a str> {
        let mut values = Vec::with_capacity(collections.len());
        let mut cursor = 0;
        for collection in collections {
            let found = self.pairs[cursor..]
                .iter()
                .position(|pair| pair.collection.eq_ignore_ascii_case(collection));
            let Some(offset) = found else {
                break;
            };
            values.push(self.pairs[cursor + offset].instance);
            cursor += offset + 1;
        }
        values
    }

    /// Returns the owning scope when the path is rooted at an account and a
    /// grouping; `None` otherwise.
    #[must_use]
    pub fn scope(&self) -> Option<Scope> {
        let [account, grouping, ..] = self.pairs.as_slice() else {
            return None;
        };
        if !account.collection.eq_ignore_ascii_case(ACCOUNT_COLLECTION)
            || !grouping.collection.eq_ignore_ascii_case(GROUPING_COLLECTION)
        {
            return None;
        }
        Some(Scope::grouped(account.instance, grouping.instance))
    }
}

// ============================================================================
// SECTION: Extractors
// ============================================================================

/// Returns the final segment's instance name, or `None` for malformed paths.
#[must_use]
pub fn name_from_hierarchical_path(path: &str) -> Option<&str> {
    ResourcePath::parse(path)?.name()
}

/// Returns the scope encoded in the path's leading account/grouping pairs.
#[must_use]
pub fn scope_from_hierarchical_path(path: &str) -> Option<Scope> {
    ResourcePath::parse(path)?.scope()
}

/// Returns the values following each requested collection, truncated at the
/// first collection that is not found.
#[must_use]
pub fn segment_values_from_hierarchical_path<'a>(
    path: &'a str,
    collections: &[&str],
) -> Vec<&'a str> {
    ResourcePath::parse(path).map_or_else(Vec::new, |parsed| parsed.segment_values(collections))
}
