//! A small test domain with deliberately optional fields.
//!
//! Organizations own an optional list of addresses and users carry an
//! optional zip code, so tests can exercise absent collections and absent
//! elements without inventing ad-hoc types each time.

use serde::{Deserialize, Serialize};

/// A postal address belonging to an [`Organization`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub id: u32,
    pub name: String,
}

/// An organization with an optional address list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Organization {
    pub id: u32,
    pub name: String,
    pub addresses: Option<Vec<Address>>,
}

/// A user whose zip code may be unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub zip_code: Option<String>,
}

/// A single address with a derived name.
#[must_use]
pub fn address(id: u32) -> Address {
    Address {
        id,
        name: format!("Address {id}"),
    }
}

/// An organization with two addresses, ids `id * 10 + 1` and `id * 10 + 2`.
#[must_use]
pub fn organization(id: u32) -> Organization {
    Organization {
        id,
        name: format!("Organization {id}"),
        addresses: Some(vec![address(id * 10 + 1), address(id * 10 + 2)]),
    }
}

/// An organization whose address list is absent.
#[must_use]
pub fn organization_without_addresses(id: u32) -> Organization {
    Organization {
        id,
        name: format!("Organization {id}"),
        addresses: None,
    }
}

/// Organizations with ids `1..=n`, each carrying two addresses.
#[must_use]
pub fn organizations(n: u32) -> Vec<Organization> {
    (1..=n).map(organization).collect()
}

/// Users with ids `1..=n` and no zip code set.
#[must_use]
pub fn users(n: u32) -> Vec<User> {
    (1..=n).map(|id| User { id, zip_code: None }).collect()
}

/// The numbers `1..=n`.
#[must_use]
pub fn natural_numbers(n: u32) -> Vec<u32> {
    (1..=n).collect()
}
