//! Strict validation of candidate tokens.

use crate::models::AddressRecord;
use std::net::IpAddr;

/// How prefix lengths are checked against the address family's bit width.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PrefixPolicy {
    /// Keep any non-negative prefix, e.g. `1.2.3.4/999`.
    #[default]
    Lenient,
    /// Reject prefixes wider than 32 (IPv4) or 128 (IPv6).
    Strict,
}

/// Turn a candidate token into an [`AddressRecord`], or `None` if it is not an
/// address or `address/prefix`.
///
/// A bare address becomes a host route. Rejection is silent; the caller drops
/// the token.
pub fn validate(token: &str, policy: PrefixPolicy) -> Option<AddressRecord> {
    if let Ok(addr) = token.parse::<IpAddr>() {
        return Some(AddressRecord::host(addr));
    }

    let parts: Vec<&str> = token.split('/').collect();
    if parts.len() != 2 {
        return None;
    }
    let addr: IpAddr = parts[0].parse().ok()?;
    let prefix: u16 = parts[1].parse().ok()?;
    let record = AddressRecord::with_prefix(addr, prefix);

    match policy {
        PrefixPolicy::Strict if !record.prefix_in_range() => None,
        _ => Some(record),
    }
}
