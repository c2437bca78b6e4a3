//! Domain models for cidr-sort.
//!
//! This module contains the core data structures used throughout the application:
//! - [`AddressRecord`] - IP address with prefix length
//! - [`Family`] - IPv4 / IPv6 tag
//! - [`MatchSpan`] - Location of a recognised token in the source text

mod record;
mod span;

// Re-export public types
pub use record::{AddressRecord, Family, MAX_LENGTH_V4, MAX_LENGTH_V6};
pub use span::MatchSpan;
