//! Record counts reported alongside the rendered text.

use crate::models::{AddressRecord, Family};
use serde::Serialize;

/// Advisory counts of valid records, split by family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total: usize,
    pub v4: usize,
    pub v6: usize,
}

impl Summary {
    pub fn from_records(records: &[AddressRecord]) -> Summary {
        let v4 = records.iter().filter(|r| r.family() == Family::V4).count();
        Summary {
            total: records.len(),
            v4,
            v6: records.len() - v4,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "No addresses found");
        }
        let noun = if self.total == 1 { "address" } else { "addresses" };
        write!(
            f,
            "{} {noun} ({} IPv4, {} IPv6)",
            self.total, self.v4, self.v6
        )
    }
}
