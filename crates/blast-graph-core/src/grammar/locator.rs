// crates/blast-graph-core/src/grammar/locator.rs
// ============================================================================
// Module: Locator URIs
// Description: Decoders for secret-store and blob-storage locator URIs.
// Purpose: Recover owning container, child name, and version from endpoints.
// Dependencies: url
// ============================================================================

//! ## Overview
//! Locator URIs encode the owning container in the host
//! (`{container}.{suffix}`) and the child in the path. Which suffixes count as
//! secret stores or blob endpoints is held by [`IdentifierGrammar`], so
//! sovereign clouds and test domains can be configured without code changes.
//! Locators never carry grouping information; callers scope their edges with
//! the scope of the resource under inspection.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use url::Url;

// ============================================================================
// SECTION: Default Suffixes
// ============================================================================

/// Secret-store host suffixes recognized out of the box.
pub const DEFAULT_VAULT_SUFFIXES: &[&str] = &[
    "vault.azure.net",
    "managedhsm.azure.net",
    "vault.azure.cn",
    "vault.usgovcloudapi.net",
    "vault.microsoftazure.de",
];

/// Blob-storage host suffixes recognized out of the box.
pub const DEFAULT_BLOB_SUFFIXES: &[&str] = &[
    "blob.core.windows.net",
    "blob.core.chinacloudapi.cn",
    "blob.core.usgovcloudapi.net",
    "blob.core.cloudapi.de",
];

/// Grammar with the default suffix tables, shared by the free functions.
static DEFAULT_GRAMMAR: LazyLock<IdentifierGrammar> = LazyLock::new(IdentifierGrammar::default);

// ============================================================================
// SECTION: Locator Types
// ============================================================================

/// Kind of object addressed inside a secret store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VaultObjectKind {
    /// `/secrets/{name}`.
    Secret,
    /// `/keys/{name}`.
    Key,
    /// `/certificates/{name}`.
    Certificate,
}

impl VaultObjectKind {
    /// Parses the path segment naming the object kind.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        if segment.eq_ignore_ascii_case("secrets") {
            Some(Self::Secret)
        } else if segment.eq_ignore_ascii_case("keys") {
            Some(Self::Key)
        } else if segment.eq_ignore_ascii_case("certificates") {
            Some(Self::Certificate)
        } else {
            None
        }
    }

    /// Returns the path segment naming this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secret => "secrets",
            Self::Key => "keys",
            Self::Certificate => "certificates",
        }
    }
}

/// Object addressed by a secret-store locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultObject {
    /// Object kind from the first path segment.
    pub kind: VaultObjectKind,
    /// Object name from the second path segment.
    pub name: String,
    /// Optional version from the third path segment.
    pub version: Option<String>,
}

/// Decoded secret-store locator such as
/// `https://{vault}.vault.azure.net/secrets/{name}/{version}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultLocator {
    /// Vault name (first host label).
    pub vault: String,
    /// Addressed object; `None` for a bare vault URI.
    pub object: Option<VaultObject>,
}

/// Decoded blob-storage locator such as
/// `https://{account}.blob.core.windows.net/{container}/{blob}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobLocator {
    /// Storage account name (first host label).
    pub account: String,
    /// Container name when present.
    pub container: Option<String>,
    /// Blob path inside the container when present.
    pub blob: Option<String>,
}

impl VaultLocator {
    /// Decodes a secret-store locator using the default suffix table.
    #[must_use]
    pub fn parse(uri: &str) -> Option<Self> {
        IdentifierGrammar::shared().vault_locator(uri)
    }
}

impl BlobLocator {
    /// Decodes a blob-storage locator using the default suffix table.
    #[must_use]
    pub fn parse(uri: &str) -> Option<Self> {
        IdentifierGrammar::shared().blob_locator(uri)
    }
}

// ============================================================================
// SECTION: Identifier Grammar
// ============================================================================

/// Suffix tables deciding how locator URIs are interpreted.
///
/// # Invariants
/// - Suffixes are stored lowercase without a leading dot.
/// - A host matches a suffix only on a label boundary and only when at least
///   one label precedes the suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierGrammar {
    /// Host suffixes identifying secret stores.
    vault_suffixes: Vec<String>,
    /// Host suffixes identifying blob endpoints.
    blob_suffixes: Vec<String>,
}

impl Default for IdentifierGrammar {
    fn default() -> Self {
        Self::new(DEFAULT_VAULT_SUFFIXES.iter().copied(), DEFAULT_BLOB_SUFFIXES.iter().copied())
    }
}

impl IdentifierGrammar {
    /// Creates a grammar from explicit suffix tables.
    #[must_use]
    pub fn new<V, B>(vault_suffixes: V, blob_suffixes: B) -> Self
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Self {
            vault_suffixes: vault_suffixes.into_iter().filter_map(normalize_suffix).collect(),
            blob_suffixes: blob_suffixes.into_iter().filter_map(normalize_suffix).collect(),
        }
    }

    /// Returns the shared grammar with default suffix tables.
    #[must_use]
    pub fn shared() -> &'static Self {
        &DEFAULT_GRAMMAR
    }

    /// Adds a secret-store suffix.
    #[must_use]
    pub fn with_vault_suffix(mut self, suffix: &str) -> Self {
        if let Some(suffix) = normalize_suffix(suffix) {
            self.vault_suffixes.push(suffix);
        }
        self
    }

    /// Adds a blob-storage suffix.
    #[must_use]
    pub fn with_blob_suffix(mut self, suffix: &str) -> Self {
        if let Some(suffix) = normalize_suffix(suffix) {
            self.blob_suffixes.push(suffix);
        }
        self
    }

    /// Returns the configured secret-store suffixes.
    #[must_use]
    pub fn vault_suffixes(&self) -> &[String] {
        &self.vault_suffixes
    }

    /// Returns the configured blob-storage suffixes.
    #[must_use]
    pub fn blob_suffixes(&self) -> &[String] {
        &self.blob_suffixes
    }

    /// Returns true when `host` belongs to a secret store.
    #[must_use]
    pub fn is_vault_host(&self, host: &str) -> bool {
        matching_prefix(host, &self.vault_suffixes).is_some()
    }

    /// Returns true when `host` belongs to blob storage.
    #[must_use]
    pub fn is_blob_host(&self, host: &str) -> bool {
        matching_prefix(host, &self.blob_suffixes).is_some()
    }

    /// Decodes a secret-store locator.
    #[must_use]
    pub fn vault_locator(&self, uri: &str) -> Option<VaultLocator> {
        let url = parse_url(uri)?;
        let host = url.host_str()?;
        let prefix = matching_prefix(host, &self.vault_suffixes)?;
        let vault = first_label(prefix)?;
        let segments = path_segments(&url);
        let object = match segments.as_slice() {
            [kind, name, rest @ ..] => VaultObjectKind::from_segment(kind).map(|kind| VaultObject {
                kind,
                name: (*name).to_string(),
                version: rest.first().map(|version| (*version).to_string()),
            }),
            _ => None,
        };
        Some(VaultLocator {
            vault,
            object,
        })
    }

    /// Decodes a blob-storage locator.
    #[must_use]
    pub fn blob_locator(&self, uri: &str) -> Option<BlobLocator> {
        let url = parse_url(uri)?;
        let host = url.host_str()?;
        let prefix = matching_prefix(host, &self.blob_suffixes)?;
        let account = first_label(prefix)?;
        let segments = path_segments(&url);
        let (container, blob) = match segments.split_first() {
            Some((container, rest)) => {
                let blob = if rest.is_empty() { None } else { Some(rest.join("/")) };
                (Some((*container).to_string()), blob)
            }
            None => (None, None),
        };
        Some(BlobLocator {
            account,
            container,
            blob,
        })
    }

    /// Returns the owning container and child name of a locator URI.
    ///
    /// For secret-store hosts the child is the object name following the
    /// kind segment; for any other host it is the first path segment.
    #[must_use]
    pub fn container_and_child(&self, uri: &str) -> Option<(String, String)> {
        if let Some(locator) = self.vault_locator(uri) {
            let object = locator.object?;
            return Some((locator.vault, object.name));
        }
        let url = parse_url(uri)?;
        let container = first_label(url.host_str()?)?;
        let child = path_segments(&url).first().map(|segment| (*segment).to_string())?;
        Some((container, child))
    }

    /// Returns the storage account of a blob-storage URI.
    #[must_use]
    pub fn account_name_from_blob_uri(&self, uri: &str) -> Option<String> {
        self.blob_locator(uri).map(|locator| locator.account)
    }
}

// ============================================================================
// SECTION: Extractors
// ============================================================================

/// Returns the owning container and child name using the default grammar.
#[must_use]
pub fn container_and_child_from_locator_uri(uri: &str) -> Option<(String, String)> {
    IdentifierGrammar::shared().container_and_child(uri)
}

/// Returns the host name of a URI, or `None` when it has none.
#[must_use]
pub fn hostname_from_uri(uri: &str) -> Option<String> {
    let url = parse_url(uri)?;
    let host = url.host_str()?;
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}

/// Returns the storage account of a blob-storage URI using the default grammar.
#[must_use]
pub fn account_name_from_blob_uri(uri: &str) -> Option<String> {
    IdentifierGrammar::shared().account_name_from_blob_uri(uri)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses an absolute URI, tolerating surrounding whitespace.
fn parse_url(uri: &str) -> Option<Url> {
    let trimmed = uri.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed).ok()
}

/// Returns the non-empty path segments of a URL.
fn path_segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|segments| segments.filter(|segment| !segment.is_empty()).collect())
        .unwrap_or_default()
}

/// Returns the host portion preceding the first matching suffix.
fn matching_prefix<'h>(host: &'h str, suffixes: &[String]) -> Option<&'h str> {
    suffixes.iter().find_map(|suffix| {
        let split = host.len().checked_sub(suffix.len() + 1)?;
        let (prefix, tail) = host.split_at_checked(split)?;
        let tail = tail.strip_prefix('.')?;
        if prefix.is_empty() || !tail.eq_ignore_ascii_case(suffix) {
            return None;
        }
        Some(prefix)
    })
}

/// Returns the first DNS label of a host, or `None` when it is empty.
fn first_label(host: &str) -> Option<String> {
    let label = host.split('.').next()?;
    if label.is_empty() {
        return None;
    }
    Some(label.to_string())
}

/// Normalizes a configured suffix: trimmed, lowercase, no leading dot.
fn normalize_suffix(suffix: impl AsRef<str>) -> Option<String> {
    let trimmed = suffix.as_ref().trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}
