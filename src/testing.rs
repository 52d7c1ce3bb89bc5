//! Testing utilities for code built on the safe collection helpers.
//!
//! This module ships with the crate so downstream users can test their own
//! collection-handling code with the same tools the crate tests itself:
//!
//! - **Assertions**: compare produced collections with expected results
//! - **Builders**: construct test datasets fluently, in both the plain and
//!   the possibly-absent (`Option`) shape the helpers consume
//! - **Fixtures**: a small organization/address/user test domain with
//!   deliberately optional fields
//!
//! # Quick Start
//!
//! ```
//! use safestream::map;
//! use safestream::testing::*;
//!
//! let orgs = organizations(3);
//! let ids = map(Some(&orgs), |org| org.id);
//! assert_collections_equal(&ids, &[1, 2, 3]);
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
