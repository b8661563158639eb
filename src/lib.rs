//! contact-table: a fixed-size, separately chained hash table mapping
//! contact names to phone numbers.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the table small enough to reason about in full while
//!   still giving callers stable access to stored entries.
//! - Layers:
//!   - ChainedHashMap<V>: structural map. A fixed array of buckets, each an
//!     insertion-ordered chain of slot keys into a generational arena.
//!     Owns hashing, insert-or-update, lookup, and ordered iteration.
//!   - ContactTable: public phone-book API over `ChainedHashMap<Contact>`
//!     (`insert`, `search`, `display`).
//!
//! Hashing
//! - A key's bucket is the sum of its Unicode scalar values modulo the
//!   bucket count. The sum is taken in `u64` before reduction, so it never
//!   overflows. The empty string is a valid key and lands in bucket 0.
//! - The scheme is deliberately simple and collides easily (any two
//!   anagrams share a bucket); chaining resolves collisions.
//!
//! Invariants
//! - At most one entry per key. Re-inserting a key replaces its value in
//!   place: same bucket, same chain position.
//! - Chains are in insertion order. Nothing is ordered across buckets
//!   beyond bucket index.
//! - The bucket count is at least 1 and fixed for the table's lifetime.
//!   Zero buckets is rejected at construction with
//!   `TableError::InvalidConfiguration`.
//!
//! Notes and non-goals
//! - Single-threaded; mutation goes through `&mut self`.
//! - No removal, no resizing or rehashing.
//! - Lookups that miss return `None`; absence is not an error.

pub mod chained_hash_map;
mod chained_hash_map_proptest;
pub mod config;
mod contact;
mod contact_table;
pub mod demo;
mod error;
pub mod logger;

// Public surface
pub use chained_hash_map::{char_sum_index, ChainedHashMap, Handle};
pub use config::{ConfigError, TableConfig};
pub use contact::Contact;
pub use contact_table::ContactTable;
pub use error::TableError;
