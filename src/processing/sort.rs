//! Canonical ordering of address records.

use crate::models::AddressRecord;

/// Sort records ascending: IPv4 before IPv6, then numerically by address, then
/// by prefix length. The sort is stable, duplicates are kept.
pub fn sort_records(mut records: Vec<AddressRecord>) -> Vec<AddressRecord> {
    records.sort();
    records
}
