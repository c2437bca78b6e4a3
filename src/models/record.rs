//! IP address and CIDR prefix record.
//!
//! Provides [`AddressRecord`], the validated `(address, prefix)` pair, and the
//! [`Family`] tag that decides its bit width and sort position.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::net::IpAddr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 address (32 bits).
pub const MAX_LENGTH_V4: u16 = 32;
/// Maximum prefix length for an IPv6 address (128 bits).
pub const MAX_LENGTH_V6: u16 = 128;

/// Address family. IPv4 sorts before IPv6.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub fn of(addr: &IpAddr) -> Family {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Number of bits in an address of this family.
    pub fn bit_width(self) -> u16 {
        match self {
            Family::V4 => MAX_LENGTH_V4,
            Family::V6 => MAX_LENGTH_V6,
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// An IP address with its prefix length.
///
/// A bare address is a host route: its prefix is the full width of the family.
/// The prefix is stored as parsed, so a record built under the lenient policy
/// may carry a prefix wider than [`Family::bit_width`].
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub struct AddressRecord {
    /// The IP address.
    pub addr: IpAddr,
    /// The prefix length.
    pub prefix: u16,
}

impl AddressRecord {
    /// A host route for `addr` (`/32` or `/128`).
    pub fn host(addr: IpAddr) -> AddressRecord {
        AddressRecord {
            addr,
            prefix: Family::of(&addr).bit_width(),
        }
    }

    pub fn with_prefix(addr: IpAddr, prefix: u16) -> AddressRecord {
        AddressRecord { addr, prefix }
    }

    /// Parse `"addr"` or `"addr/prefix"` strictly (prefix within the family width).
    pub fn new(addr_cidr: &str) -> Result<AddressRecord, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        let addr: IpAddr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        match parts.len() {
            1 => Ok(AddressRecord::host(addr)),
            2 => {
                let prefix: u16 = parts[1]
                    .parse()
                    .map_err(|_| format!("Invalid prefix length {}", parts[1]))?;
                let record = AddressRecord::with_prefix(addr, prefix);
                if !record.prefix_in_range() {
                    return Err(format!("Prefix length is too long: {addr_cidr}").into());
                }
                Ok(record)
            }
            _ => Err("Invalid address/prefix".into()),
        }
    }

    pub fn family(&self) -> Family {
        Family::of(&self.addr)
    }

    /// True when the prefix fits the address family's bit width.
    pub fn prefix_in_range(&self) -> bool {
        self.prefix <= self.family().bit_width()
    }

}

impl FromStr for AddressRecord {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressRecord::new(s)
    }
}

impl Serialize for AddressRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddressRecord {
    fn deserialize<D>(deserializer: D) -> Result<AddressRecord, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AddressRecord::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl std::fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

// IpAddr orders V4 before V6, then numerically (network byte order).
impl Ord for AddressRecord {
    fn cmp(&self, other: &AddressRecord) -> Ordering {
        self.addr
            .cmp(&other.addr)
            .then_with(|| self.prefix.cmp(&other.prefix))
    }
}

impl PartialOrd for AddressRecord {
    fn partial_cmp(&self, other: &AddressRecord) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
