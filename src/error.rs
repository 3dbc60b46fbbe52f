//! Error types returned by the containers.

use thiserror::Error;

/// Reasons an insert into a [`Set`](crate::Set) or
/// [`HashTable`](crate::HashTable) is rejected. The container is left
/// unchanged in every case.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    #[error("key must not be empty")]
    EmptyKey,
    #[error("key already present")]
    DuplicateKey,
}

/// A rejected insert. Carries the item back so the caller still owns it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct Rejected<T> {
    kind: InsertError,
    item: T,
}

impl<T> Rejected<T> {
    pub(crate) fn new(kind: InsertError, item: T) -> Self {
        Self { kind, item }
    }

    pub fn kind(&self) -> InsertError {
        self.kind
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    /// Take back the item that was not stored.
    pub fn into_inner(self) -> T {
        self.item
    }
}

/// Reasons [`HashTable::new`](crate::HashTable::new) cannot build a table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NewTableError {
    #[error("a hash table needs at least one slot")]
    ZeroSlots,
    #[error("could not allocate {num_slots} buckets")]
    Alloc {
        num_slots: usize,
        #[source]
        source: std::collections::TryReserveError,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CountersError {
    #[error("counter keys must be non-negative, got {0}")]
    NegativeKey(i32),
}
