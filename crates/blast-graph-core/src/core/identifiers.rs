// crates/blast-graph-core/src/core/identifiers.rs
// ============================================================================
// Module: Blast Graph Identifiers
// Description: Item types, scopes, and lookup keys carried by link edges.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the identifiers every item and edge carries: the item
//! type of a target, the [`Scope`] it lives in, and the [`LookupKey`] used to
//! find it again. Scopes and lookup keys serialize as their rendered strings
//! (`"{account}.{grouping}"`, `"vault|secret"`) so the item schema layer can
//! embed them verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Delimiter joining composite key segments.
pub const COMPOSITE_KEY_SEPARATOR: char = '|';

/// Rendered name of the global scope used for network endpoints.
pub const GLOBAL_SCOPE: &str = "global";

// ============================================================================
// SECTION: Item Type
// ============================================================================

/// Item type naming the kind of resource an edge points at.
///
/// # Invariants
/// - Opaque UTF-8 string; comparisons are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemType(Cow<'static, str>);

impl ItemType {
    /// Bare IP address endpoint.
    pub const IP: Self = Self::from_static("ip");
    /// DNS name endpoint.
    pub const DNS: Self = Self::from_static("dns");
    /// HTTP(S) URL endpoint.
    pub const HTTP: Self = Self::from_static("http");

    /// Creates an item type from a static name (usable in constants).
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates an item type from an owned name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the item type as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ItemType {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for ItemType {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Scope
// ============================================================================

/// Scope qualifying where an item lives.
///
/// # Invariants
/// - `Grouped` renders as `"{account}.{grouping}"`; `Global` renders as `"global"`.
/// - Parsing splits on the first `.`, so grouping names may contain dots while
///   account identifiers may not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// Provider-independent scope for network endpoints.
    Global,
    /// Account plus grouping (subscription plus resource group).
    Grouped {
        /// Account identifier (subscription id).
        account: String,
        /// Grouping identifier (resource group name).
        grouping: String,
    },
}

impl Scope {
    /// Creates a grouped scope.
    #[must_use]
    pub fn grouped(account: impl Into<String>, grouping: impl Into<String>) -> Self {
        Self::Grouped {
            account: account.into(),
            grouping: grouping.into(),
        }
    }

    /// Parses a rendered scope string; returns `None` for malformed input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == GLOBAL_SCOPE {
            return Some(Self::Global);
        }
        let (account, grouping) = raw.split_once('.')?;
        if account.is_empty() || grouping.is_empty() {
            return None;
        }
        Some(Self::grouped(account, grouping))
    }

    /// Returns the account identifier for grouped scopes.
    #[must_use]
    pub fn account(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Grouped {
                account, ..
            } => Some(account),
        }
    }

    /// Returns the grouping identifier for grouped scopes.
    #[must_use]
    pub fn grouping(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Grouped {
                grouping, ..
            } => Some(grouping),
        }
    }

    /// Returns true for the global scope.
    #[must_use]
    pub const fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str(GLOBAL_SCOPE),
            Self::Grouped {
                account,
                grouping,
            } => write!(f, "{account}.{grouping}"),
        }
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid scope `{raw}`")))
    }
}

// ============================================================================
// SECTION: Lookup Keys
// ============================================================================

/// Ordered tuple of segment values used when a name alone is not unique.
///
/// # Invariants
/// - Segment order is fixed per target type; `(a, b)` and `(b, a)` are distinct.
/// - Renders segments joined by [`COMPOSITE_KEY_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeKey(Vec<String>);

impl CompositeKey {
    /// Creates a composite key from ordered segments.
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns the ordered segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the key has no segments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "{COMPOSITE_KEY_SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Key used by the consumer to look the target item up.
///
/// # Invariants
/// - Equality is structural: `Name("a|b")` and `Composite(a, b)` are distinct
///   in memory even though they render identically.
/// - The serialized form is the rendered string, which does not carry the
///   variant. Deserializing splits on [`COMPOSITE_KEY_SEPARATOR`], so a name
///   containing the separator reads back as a composite key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LookupKey {
    /// Bare resource name.
    Name(String),
    /// Multi-segment composite key.
    Composite(CompositeKey),
}

impl LookupKey {
    /// Creates a bare-name lookup key.
    #[must_use]
    pub fn name(value: impl Into<String>) -> Self {
        Self::Name(value.into())
    }

    /// Creates a composite lookup key from ordered segments.
    #[must_use]
    pub fn composite<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Composite(CompositeKey::new(segments))
    }

    /// Builds a key from extracted segment values: one value is a bare name,
    /// several form a composite key. Returns `None` for an empty list.
    #[must_use]
    pub fn from_segments(mut segments: Vec<String>) -> Option<Self> {
        match segments.len() {
            0 => None,
            1 => segments.pop().map(Self::Name),
            _ => Some(Self::Composite(CompositeKey(segments))),
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Composite(key) => fmt::Display::fmt(key, f),
        }
    }
}

impl From<CompositeKey> for LookupKey {
    fn from(value: CompositeKey) -> Self {
        Self::Composite(value)
    }
}

impl Serialize for LookupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reads the rendered form: any separator makes the key composite.
impl<'de> Deserialize<'de> for LookupKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.contains(COMPOSITE_KEY_SEPARATOR) {
            return Ok(Self::Composite(CompositeKey::new(raw.split(COMPOSITE_KEY_SEPARATOR))));
        }
        Ok(Self::Name(raw))
    }
}
