// crates/blast-graph-core/src/grammar/classify.rs
// ============================================================================
// Module: Identifier Classification
// Description: Tagged-variant classifier over raw identifier strings.
// Purpose: Decide which identifier family a field value belongs to.
// Dependencies: crate::grammar, url
// ============================================================================

//! ## Overview
//! [`IdentifierGrammar::classify`] inspects a raw value once and returns the
//! most specific [`IdentifierShape`] it matches. Precedence, most specific
//! first: hierarchical path, secret-store locator, blob endpoint, other HTTP
//! endpoint, IP literal, DNS name, opaque.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::IpAddr;

use url::Url;

use crate::grammar::locator::BlobLocator;
use crate::grammar::locator::IdentifierGrammar;
use crate::grammar::locator::VaultLocator;
use crate::grammar::network::dns_name_literal;
use crate::grammar::network::ip_address_literal;
use crate::grammar::path::ResourcePath;

// ============================================================================
// SECTION: Shapes
// ============================================================================

/// Identifier family of a raw field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierShape<'a> {
    /// Hierarchical resource path.
    ResourcePath(ResourcePath<'a>),
    /// Secret-store locator URI.
    VaultLocator(VaultLocator),
    /// Blob-storage endpoint URI.
    BlobEndpoint(BlobLocator),
    /// Any other HTTP(S) URL.
    HttpEndpoint(Url),
    /// Bare IP address.
    IpAddress(IpAddr),
    /// Bare DNS host name.
    Hostname(&'a str),
    /// Empty, malformed, or unrecognized value.
    Opaque,
}

impl IdentifierGrammar {
    /// Classifies a raw identifier.
    #[must_use]
    pub fn classify<'a>(&self, raw: &'a str) -> IdentifierShape<'a> {
        if let Some(path) = ResourcePath::parse(raw) {
            return IdentifierShape::ResourcePath(path);
        }
        if let Some(locator) = self.vault_locator(raw) {
            return IdentifierShape::VaultLocator(locator);
        }
        if let Some(locator) = self.blob_locator(raw) {
            return IdentifierShape::BlobEndpoint(locator);
        }
        if let Some(url) = http_url(raw) {
            return IdentifierShape::HttpEndpoint(url);
        }
        if let Some(ip) = ip_address_literal(raw) {
            return IdentifierShape::IpAddress(ip);
        }
        if let Some(name) = dns_name_literal(raw) {
            return IdentifierShape::Hostname(name);
        }
        IdentifierShape::Opaque
    }
}

/// Classifies a raw identifier with the default grammar.
#[must_use]
pub fn classify_identifier(raw: &str) -> IdentifierShape<'_> {
    IdentifierGrammar::shared().classify(raw)
}

/// Parses `raw` as an absolute `http` or `https` URL with a host.
#[must_use]
pub fn http_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.host_str().filter(|host| !host.is_empty())?;
    Some(url)
}
