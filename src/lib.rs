#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Integer hash strategies.
///
/// This module provides the three interchangeable key-to-slot mappings the
/// comparison harness measures against each other.
pub mod hash_fn;

pub mod hash_table;

pub use hash_fn::HashFn;
#[cfg(feature = "stats")]
pub use hash_table::ClusterStats;
pub use hash_table::HashTable;
pub use hash_table::Outcome;
