//! chain-hashtable: a fixed-bucket hash table of string keys with
//! per-bucket chaining, plus the containers it is built from.
//!
//! Internal Design:
//!
//! Layers
//! - `SlotHash`: pure key -> slot function. The default is Bob Jenkins'
//!   one-at-a-time hash; any `BuildHasher` can be adapted.
//! - `Chain<K, V>` (private): singly linked list whose nodes live in a
//!   `SlotMap` arena and link through generational keys. Head insertion is
//!   O(1); lookup is a linear scan.
//! - `Set<T>`: a chain of unique string keys. Keys are copied in; items are
//!   moved in and never inspected.
//! - `HashTable<T, H>`: `num_slots` sets built eagerly; every operation
//!   hashes the key and delegates to one set.
//! - `Counters`: an integer-keyed chain of counts.
//!
//! Constraints
//! - Fixed slot count, no rehash. Average chain length equals the load
//!   factor, which grows without bound as entries are added.
//! - No removal of single entries and no update in place: a duplicate
//!   insert fails and keeps the first item.
//! - Single-threaded by contract. No internal locking; share a table
//!   across threads behind an external `Mutex`.
//!
//! Ownership
//! - The table owns its buckets; a bucket owns its nodes and key copies.
//! - Items are owned by the container once inserted and leave through
//!   `delete`, which hands each to a caller-supplied destructor exactly
//!   once, or through ordinary drop. For borrowed item types (`T = &U`)
//!   the caller keeps the referent and nothing is released.
//!
//! Errors
//! - Invalid arguments and duplicate keys are reported as `Err` values and
//!   leave the container unchanged; nothing panics on bad input. A rejected
//!   insert returns its item inside `Rejected`.

mod chain;
pub mod counters;
pub mod error;
pub mod hash;
pub mod hashtable;
mod hashtable_proptest;
pub mod set;

/// Rendered by the `print_opt` helpers when there is no container.
pub const NULL_MARKER: &str = "(null)";

// Public surface
pub use counters::Counters;
pub use error::{CountersError, InsertError, NewTableError, Rejected};
pub use hash::{hash_jenkins, BuildHasherSlots, Jenkins, SlotHash};
pub use hashtable::HashTable;
pub use set::Set;
