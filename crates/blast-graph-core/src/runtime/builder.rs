// crates/blast-graph-core/src/runtime/builder.rs
// ============================================================================
// Module: Edge Builder
// Description: Evaluates link rules against a resource body.
// Purpose: Turn declared link sites into an ordered, deduplicated edge list.
// Dependencies: crate::core, crate::grammar, serde_json
// ============================================================================

//! ## Overview
//! The builder walks each [`LinkRule`] in declared order, decodes every
//! candidate its field source yields, assigns a scope, and emits one
//! [`LinkEdge`] per decoded identifier. Deduplication runs once over the
//! full list.
//!
//! Scope assignment depends on the extraction:
//! - path extractions prefer the scope decoded from the path itself;
//! - locator, blob, and literal extractions use the current item's scope;
//! - network endpoint extractions use [`Scope::Global`].
//!
//! # Invariants
//! - Building never fails; undecodable candidates are skipped.
//! - Output order is rule order, then element order, minus duplicates.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use serde_json::Value;

use crate::core::edge::LinkEdge;
use crate::core::identifiers::LookupKey;
use crate::core::identifiers::Scope;
use crate::grammar::classify::http_url;
use crate::grammar::locator::IdentifierGrammar;
use crate::grammar::locator::hostname_from_uri;
use crate::grammar::network::dns_name_literal;
use crate::grammar::network::ip_address_literal;
use crate::grammar::path::ResourcePath;
use crate::runtime::dedupe::DedupPolicy;
use crate::runtime::dedupe::dedupe_with;
use crate::runtime::rules::Extraction;
use crate::runtime::rules::Guard;
use crate::runtime::rules::LinkRule;
use crate::runtime::scope::resolve_path_scope;

/// Builder with the default grammar and dedup policy.
static DEFAULT_BUILDER: LazyLock<EdgeBuilder> = LazyLock::new(EdgeBuilder::default);

// ============================================================================
// SECTION: Edge Builder
// ============================================================================

/// Rule evaluator configured with an identifier grammar and a dedup policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeBuilder {
    /// Suffix tables used to decode locator URIs.
    grammar: IdentifierGrammar,
    /// Key used to suppress duplicate edges.
    dedup: DedupPolicy,
}

impl EdgeBuilder {
    /// Creates a builder from a grammar and a dedup policy.
    #[must_use]
    pub const fn new(grammar: IdentifierGrammar, dedup: DedupPolicy) -> Self {
        Self {
            grammar,
            dedup,
        }
    }

    /// Returns the shared builder with default settings.
    #[must_use]
    pub fn shared() -> &'static Self {
        &DEFAULT_BUILDER
    }

    /// Returns the identifier grammar.
    #[must_use]
    pub const fn grammar(&self) -> &IdentifierGrammar {
        &self.grammar
    }

    /// Returns the dedup policy.
    #[must_use]
    pub const fn dedup_policy(&self) -> DedupPolicy {
        self.dedup
    }

    /// Builds the ordered, deduplicated edge list for `resource`.
    #[must_use]
    pub fn build_edges(
        &self,
        resource: &Value,
        scope: &Scope,
        rules: &[LinkRule],
    ) -> Vec<LinkEdge> {
        let edges = dedupe_with(self.collect_edges(resource, scope, rules), self.dedup);
        tracing::debug!(
            rules = rules.len(),
            edges = edges.len(),
            scope = %scope,
            "built link edges"
        );
        edges
    }

    /// Builds every candidate edge without deduplication.
    #[must_use]
    pub fn collect_edges(
        &self,
        resource: &Value,
        scope: &Scope,
        rules: &[LinkRule],
    ) -> Vec<LinkEdge> {
        rules.iter().flat_map(|rule| self.evaluate_rule(resource, scope, rule)).collect()
    }

    /// Evaluates a single rule, returning its edges in element order.
    #[must_use]
    pub fn evaluate_rule(&self, resource: &Value, scope: &Scope, rule: &LinkRule) -> Vec<LinkEdge> {
        rule.source()
            .candidates(resource)
            .into_iter()
            .filter_map(|raw| {
                let decoded = self.decode(raw, scope, rule);
                if decoded.is_none() {
                    tracing::trace!(
                        path = rule.source().path(),
                        extraction = rule.extraction().label(),
                        candidate = raw,
                        "skipped undecodable identifier"
                    );
                }
                decoded
            })
            .map(|(lookup_key, target_scope)| {
                LinkEdge::new(
                    rule.target_type().clone(),
                    rule.method(),
                    lookup_key,
                    target_scope,
                    rule.relationship(),
                )
            })
            .collect()
    }

    /// Decodes one candidate into a lookup key and target scope.
    fn decode(&self, raw: &str, scope: &Scope, rule: &LinkRule) -> Option<(LookupKey, Scope)> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match rule.extraction() {
            Extraction::ResourceName => {
                let path = parse_guarded_path(raw, rule.guard())?;
                let name = path.name()?;
                Some((LookupKey::name(name), resolve_path_scope(&path, scope)))
            }
            Extraction::PathSegments(collections) => {
                let path = parse_guarded_path(raw, rule.guard())?;
                let values = path.segment_values(collections);
                if values.len() != collections.len() {
                    return None;
                }
                let key =
                    LookupKey::from_segments(values.into_iter().map(str::to_string).collect())?;
                Some((key, resolve_path_scope(&path, scope)))
            }
            Extraction::VaultName => {
                let locator = self.grammar.vault_locator(raw)?;
                if let Some(Guard::VaultObject(kind)) = rule.guard()
                    && locator.object.as_ref().map(|object| object.kind) != Some(kind)
                {
                    return None;
                }
                Some((LookupKey::name(locator.vault), scope.clone()))
            }
            Extraction::VaultObject => {
                let locator = self.grammar.vault_locator(raw)?;
                let object = locator.object?;
                if let Some(Guard::VaultObject(kind)) = rule.guard()
                    && object.kind != kind
                {
                    return None;
                }
                Some((LookupKey::composite([locator.vault, object.name]), scope.clone()))
            }
            Extraction::BlobAccount => {
                let account = self.grammar.account_name_from_blob_uri(raw)?;
                Some((LookupKey::name(account), scope.clone()))
            }
            Extraction::BlobContainer => {
                let locator = self.grammar.blob_locator(raw)?;
                let container = locator.container?;
                Some((LookupKey::composite([locator.account, container]), scope.clone()))
            }
            Extraction::LiteralName => Some((LookupKey::name(raw), scope.clone())),
            Extraction::IpAddress => {
                let ip = ip_address_literal(raw)?;
                Some((LookupKey::name(ip.to_string()), Scope::Global))
            }
            Extraction::DnsName => {
                let name = dns_name_literal(raw)?;
                Some((LookupKey::name(name), Scope::Global))
            }
            Extraction::DnsFromUrl => {
                let host = hostname_from_uri(raw)?;
                if ip_address_literal(&host).is_some() {
                    return None;
                }
                let name = dns_name_literal(&host)?;
                Some((LookupKey::name(name), Scope::Global))
            }
            Extraction::HttpUrl => {
                http_url(raw)?;
                Some((LookupKey::name(raw), Scope::Global))
            }
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses a hierarchical path and applies a path guard, if any.
fn parse_guarded_path<'a>(raw: &'a str, guard: Option<Guard>) -> Option<ResourcePath<'a>> {
    let path = ResourcePath::parse(raw)?;
    match guard {
        Some(Guard::Collection(collection)) if !path.is_collection(collection) => None,
        Some(Guard::ResourceType(collections)) if !path.is_resource_type(collections) => None,
        _ => Some(path),
    }
}

/// Builds edges with the default grammar and dedup policy.
#[must_use]
pub fn build_edges(resource: &Value, scope: &Scope, rules: &[LinkRule]) -> Vec<LinkEdge> {
    EdgeBuilder::shared().build_edges(resource, scope, rules)
}
