// crates/blast-graph-core/src/runtime/rules.rs
// ============================================================================
// Module: Link Rules
// Description: Declarative descriptions of where references live in a resource.
// Purpose: Express per-kind link sites as data instead of inline conditionals.
// Dependencies: crate::core, crate::grammar, jsonpath_lib, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`LinkRule`] states *where* to look (a `JSONPath` field source), *how* to
//! decode what it finds ([`Extraction`]), *what* to emit (target type and
//! lookup method), and the [`Relationship`] that fixes the blast propagation.
//! Rule tables are validated once at construction; evaluation never fails.
//!
//! ```
//! use blast_graph_core::ItemType;
//! use blast_graph_core::Relationship;
//! use blast_graph_core::runtime::Extraction;
//! use blast_graph_core::runtime::LinkRule;
//!
//! let rule = LinkRule::exact(
//!     "$.properties.storageProfile.dataDisks[*].managedDisk.id",
//!     Extraction::ResourceName,
//!     ItemType::from_static("azure-compute-disk"),
//!     Relationship::ConsumerOfProvider,
//! );
//! assert!(rule.validate().is_ok());
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use jsonpath_lib::select;
use serde_json::Value;
use thiserror::Error;

use crate::core::edge::LookupMethod;
use crate::core::edge::Relationship;
use crate::core::identifiers::ItemType;
use crate::grammar::locator::VaultObjectKind;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while validating rule declarations.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Field source is not a usable `JSONPath` expression.
    #[error("invalid field path `{path}`: {reason}")]
    InvalidPath {
        /// Offending path.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// Segment extraction or resource-type guard lists no collections.
    #[error("segment list for `{path}` names no collections")]
    EmptySegments {
        /// Field path of the rule.
        path: String,
    },
    /// Guard cannot apply to the rule's extraction.
    #[error("guard {guard} does not apply to {extraction} extraction at `{path}`")]
    IncompatibleGuard {
        /// Field path of the rule.
        path: String,
        /// Guard description.
        guard: String,
        /// Extraction description.
        extraction: &'static str,
    },
    /// Endpoint extraction targets a non-endpoint item type.
    #[error("{extraction} extraction at `{path}` must target `{expected}`, not `{actual}`")]
    MismatchedTarget {
        /// Field path of the rule.
        path: String,
        /// Extraction description.
        extraction: &'static str,
        /// Item type the extraction requires.
        expected: ItemType,
        /// Item type the rule declared.
        actual: ItemType,
    },
}

// ============================================================================
// SECTION: Field Sources
// ============================================================================

/// How selected nodes become candidate strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Each selected string value is a candidate.
    Values,
    /// Each key of each selected object is a candidate.
    ObjectKeys,
}

/// Location of candidate identifiers inside a resource.
///
/// # Invariants
/// - `path` is a `JSONPath` expression rooted at `$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSource {
    /// `JSONPath` expression selecting the candidate nodes.
    path: String,
    /// Candidate selection mode.
    mode: SourceMode,
}

impl FieldSource {
    /// Reads the string values selected by `path`.
    #[must_use]
    pub fn values(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: SourceMode::Values,
        }
    }

    /// Reads the keys of the objects selected by `path`.
    #[must_use]
    pub fn keys(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: SourceMode::ObjectKeys,
        }
    }

    /// Returns the `JSONPath` expression.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the selection mode.
    #[must_use]
    pub const fn mode(&self) -> SourceMode {
        self.mode
    }

    /// Returns the candidate strings found in `resource`, in document order.
    ///
    /// Absence at any level, `null` elements, and non-string values all yield
    /// no candidate. An unparsable path yields none as well; rule validation
    /// rejects those before evaluation.
    #[must_use]
    pub fn candidates<'v>(&self, resource: &'v Value) -> Vec<&'v str> {
        let Ok(nodes) = select(resource, &self.path) else {
            tracing::trace!(path = %self.path, "field path failed to evaluate");
            return Vec::new();
        };
        let mut candidates = Vec::new();
        for node in nodes {
            match (self.mode, node) {
                (SourceMode::Values, Value::String(value)) => candidates.push(value.as_str()),
                (SourceMode::ObjectKeys, Value::Object(map)) => {
                    candidates.extend(map.keys().map(String::as_str));
                }
                _ => {}
            }
        }
        candidates
    }
}

// ============================================================================
// SECTION: Extractions and Guards
// ============================================================================

/// Decoder applied to each candidate string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Hierarchical path; key is the final instance name; path-derived scope.
    ResourceName,
    /// Hierarchical path; key is the values following each collection, in
    /// order (a composite key when more than one); path-derived scope.
    PathSegments(&'static [&'static str]),
    /// Secret-store locator; key is the vault name; current scope.
    VaultName,
    /// Secret-store locator; key is `(vault, object)`; current scope.
    VaultObject,
    /// Blob endpoint; key is the storage account name; current scope.
    BlobAccount,
    /// Blob endpoint; key is `(account, container)`; current scope.
    BlobContainer,
    /// Value used verbatim as a name; current scope.
    LiteralName,
    /// Bare IP literal; global scope.
    IpAddress,
    /// Bare DNS name; global scope.
    DnsName,
    /// Host name of a URL (IP hosts excluded); global scope.
    DnsFromUrl,
    /// Whole HTTP(S) URL; global scope.
    HttpUrl,
}

impl Extraction {
    /// Returns a stable label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ResourceName => "resource_name",
            Self::PathSegments(_) => "path_segments",
            Self::VaultName => "vault_name",
            Self::VaultObject => "vault_object",
            Self::BlobAccount => "blob_account",
            Self::BlobContainer => "blob_container",
            Self::LiteralName => "literal_name",
            Self::IpAddress => "ip_address",
            Self::DnsName => "dns_name",
            Self::DnsFromUrl => "dns_from_url",
            Self::HttpUrl => "http_url",
        }
    }

    /// Returns the endpoint item type an extraction must target, if any.
    #[must_use]
    pub const fn endpoint_type(&self) -> Option<ItemType> {
        match self {
            Self::IpAddress => Some(ItemType::IP),
            Self::DnsName | Self::DnsFromUrl => Some(ItemType::DNS),
            Self::HttpUrl => Some(ItemType::HTTP),
            _ => None,
        }
    }

    /// Returns true for extractions that decode hierarchical paths.
    #[must_use]
    pub const fn is_path(&self) -> bool {
        matches!(self, Self::ResourceName | Self::PathSegments(_))
    }

    /// Returns true for extractions that decode secret-store locators.
    #[must_use]
    pub const fn is_vault(&self) -> bool {
        matches!(self, Self::VaultName | Self::VaultObject)
    }
}

/// Additional condition a decoded identifier must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Final collection of the path must match (case-insensitive).
    Collection(&'static str),
    /// Collections after the provider namespace must be exactly these
    /// (case-insensitive), e.g. `["galleries", "images"]`.
    ResourceType(&'static [&'static str]),
    /// Secret-store locator must address an object of this kind.
    VaultObject(VaultObjectKind),
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection(collection) => write!(f, "collection({collection})"),
            Self::ResourceType(collections) => {
                write!(f, "resource_type({})", collections.join("/"))
            }
            Self::VaultObject(kind) => write!(f, "vault_object({})", kind.as_str()),
        }
    }
}

// ============================================================================
// SECTION: Link Rule
// ============================================================================

/// Declarative link site for one resource kind.
///
/// # Invariants
/// - Propagation flags derive from `relationship`; they are not set per rule.
/// - Endpoint extractions always target the matching endpoint item type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRule {
    /// Where candidates are read from.
    source: FieldSource,
    /// How candidates are decoded.
    extraction: Extraction,
    /// Item type of emitted edges.
    target_type: ItemType,
    /// Lookup method of emitted edges.
    method: LookupMethod,
    /// Relationship kind fixing the propagation flags.
    relationship: Relationship,
    /// Optional post-decode condition.
    guard: Option<Guard>,
}

impl LinkRule {
    /// Creates a rule reading string values at `path`.
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        extraction: Extraction,
        target_type: ItemType,
        method: LookupMethod,
        relationship: Relationship,
    ) -> Self {
        Self {
            source: FieldSource::values(path),
            extraction,
            target_type,
            method,
            relationship,
            guard: None,
        }
    }

    /// Creates an exact-lookup rule.
    #[must_use]
    pub fn exact(
        path: impl Into<String>,
        extraction: Extraction,
        target_type: ItemType,
        relationship: Relationship,
    ) -> Self {
        Self::new(path, extraction, target_type, LookupMethod::Exact, relationship)
    }

    /// Creates a search-lookup rule.
    #[must_use]
    pub fn search(
        path: impl Into<String>,
        extraction: Extraction,
        target_type: ItemType,
        relationship: Relationship,
    ) -> Self {
        Self::new(path, extraction, target_type, LookupMethod::Search, relationship)
    }

    /// Links a bare IP literal.
    #[must_use]
    pub fn ip_address(path: impl Into<String>) -> Self {
        Self::exact(path, Extraction::IpAddress, ItemType::IP, Relationship::NetworkEndpoint)
    }

    /// Links a bare DNS name.
    #[must_use]
    pub fn dns_name(path: impl Into<String>) -> Self {
        Self::search(path, Extraction::DnsName, ItemType::DNS, Relationship::NetworkEndpoint)
    }

    /// Links the host name of a URL.
    #[must_use]
    pub fn dns_from_url(path: impl Into<String>) -> Self {
        Self::search(path, Extraction::DnsFromUrl, ItemType::DNS, Relationship::NetworkEndpoint)
    }

    /// Links a whole HTTP(S) URL.
    #[must_use]
    pub fn http_url(path: impl Into<String>) -> Self {
        Self::search(path, Extraction::HttpUrl, ItemType::HTTP, Relationship::NetworkEndpoint)
    }

    /// Reads object keys instead of string values at the rule's path.
    #[must_use]
    pub fn from_keys(mut self) -> Self {
        self.source = FieldSource::keys(self.source.path);
        self
    }

    /// Attaches a guard.
    #[must_use]
    pub fn when(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Requires the decoded path to end in `collection`.
    #[must_use]
    pub fn when_collection(self, collection: &'static str) -> Self {
        self.when(Guard::Collection(collection))
    }

    /// Requires the decoded path to name exactly this resource type.
    #[must_use]
    pub fn when_resource_type(self, collections: &'static [&'static str]) -> Self {
        self.when(Guard::ResourceType(collections))
    }

    /// Returns the field source.
    #[must_use]
    pub const fn source(&self) -> &FieldSource {
        &self.source
    }

    /// Returns the extraction.
    #[must_use]
    pub const fn extraction(&self) -> &Extraction {
        &self.extraction
    }

    /// Returns the target item type.
    #[must_use]
    pub const fn target_type(&self) -> &ItemType {
        &self.target_type
    }

    /// Returns the lookup method.
    #[must_use]
    pub const fn method(&self) -> LookupMethod {
        self.method
    }

    /// Returns the relationship kind.
    #[must_use]
    pub const fn relationship(&self) -> Relationship {
        self.relationship
    }

    /// Returns the guard, if any.
    #[must_use]
    pub const fn guard(&self) -> Option<Guard> {
        self.guard
    }

    /// Validates the rule declaration.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] when the path does not parse, a segment list is
    /// empty, a guard does not fit the extraction, or an endpoint extraction
    /// targets the wrong item type.
    pub fn validate(&self) -> Result<(), RuleError> {
        let path = self.source.path();
        if !path.starts_with('$') {
            return Err(RuleError::InvalidPath {
                path: path.to_string(),
                reason: "path must be rooted at `$`".to_string(),
            });
        }
        if let Err(err) = select(&Value::Object(serde_json::Map::new()), path) {
            return Err(RuleError::InvalidPath {
                path: path.to_string(),
                reason: err.to_string(),
            });
        }
        let empty_segments =
            matches!(&self.extraction, Extraction::PathSegments(list) if list.is_empty())
                || matches!(self.guard, Some(Guard::ResourceType(list)) if list.is_empty());
        if empty_segments {
            return Err(RuleError::EmptySegments {
                path: path.to_string(),
            });
        }
        if let Some(guard) = self.guard {
            let fits = match guard {
                Guard::Collection(_) | Guard::ResourceType(_) => self.extraction.is_path(),
                Guard::VaultObject(_) => self.extraction.is_vault(),
            };
            if !fits {
                return Err(RuleError::IncompatibleGuard {
                    path: path.to_string(),
                    guard: guard.to_string(),
                    extraction: self.extraction.label(),
                });
            }
        }
        if let Some(expected) = self.extraction.endpoint_type()
            && expected != self.target_type
        {
            return Err(RuleError::MismatchedTarget {
                path: path.to_string(),
                extraction: self.extraction.label(),
                expected,
                actual: self.target_type.clone(),
            });
        }
        Ok(())
    }
}

/// Validates every rule of a table.
///
/// # Errors
///
/// Returns the first [`RuleError`] encountered, in declaration order.
pub fn validate_rules(rules: &[LinkRule]) -> Result<(), RuleError> {
    rules.iter().try_for_each(LinkRule::validate)
}
