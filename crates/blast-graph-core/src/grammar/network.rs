// crates/blast-graph-core/src/grammar/network.rs
// ============================================================================
// Module: Network Literals
// Description: Recognizers for bare IP addresses and DNS names.
// Purpose: Decide whether a raw field value is a network endpoint.
// Dependencies: std::net
// ============================================================================

//! ## Overview
//! Resource fields frequently carry bare endpoints (`10.0.0.4`,
//! `db.example.net`). These recognizers accept exactly one shape each so a
//! value is never linked as both an IP and a DNS name. CIDR ranges are not
//! endpoints and are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::IpAddr;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum length of a DNS name in text form.
const MAX_DNS_NAME_BYTES: usize = 253;
/// Maximum length of a single DNS label.
const MAX_DNS_LABEL_BYTES: usize = 63;

// ============================================================================
// SECTION: Recognizers
// ============================================================================

/// Parses a bare IPv4 or IPv6 literal.
#[must_use]
pub fn ip_address_literal(raw: &str) -> Option<IpAddr> {
    let trimmed = raw.trim();
    let unbracketed =
        trimmed.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')).unwrap_or(trimmed);
    unbracketed.parse().ok()
}

/// Validates a bare DNS host name and returns it trimmed of a trailing dot.
///
/// Accepts letters, digits, hyphens, and underscores in labels of at most 63
/// bytes, requires at least two labels, and rejects anything that parses as
/// an IP address.
#[must_use]
pub fn dns_name_literal(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let name = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if name.is_empty() || name.len() > MAX_DNS_NAME_BYTES || ip_address_literal(name).is_some() {
        return None;
    }
    let mut labels = 0usize;
    for label in name.split('.') {
        if !is_dns_label(label) {
            return None;
        }
        labels += 1;
    }
    if labels < 2 {
        return None;
    }
    Some(name)
}

/// Returns true when `label` is a valid DNS label.
fn is_dns_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_DNS_LABEL_BYTES {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.bytes().all(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_')
}
