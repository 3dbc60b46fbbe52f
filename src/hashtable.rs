//! HashTable: a fixed array of [`Set`] buckets addressed by a [`SlotHash`].
//!
//! Every operation hashes the key to a slot and delegates to that slot's
//! bucket. The slot count is fixed at construction and the table never
//! rehashes, so the load factor grows linearly with the number of entries.

use crate::error::{InsertError, NewTableError, Rejected};
use crate::hash::{Jenkins, SlotHash};
use crate::set::{self, Set};
use crate::NULL_MARKER;
use core::fmt;
use core::num::NonZeroUsize;
use log::{debug, trace};
use std::io;

#[derive(Debug)]
pub struct HashTable<T, H = Jenkins> {
    slot_hash: H,
    num_slots: NonZeroUsize,
    buckets: Vec<Set<T>>,
    len: usize,
}

impl<T> HashTable<T> {
    /// Build a table with `num_slots` empty buckets using the default
    /// [`Jenkins`] slot hash.
    pub fn new(num_slots: usize) -> Result<Self, NewTableError> {
        Self::with_slot_hasher(num_slots, Jenkins)
    }
}

impl<T, H> HashTable<T, H>
where
    H: SlotHash,
{
    /// Build a table whose keys are routed by `slot_hash`.
    ///
    /// All buckets are created up front. Fails with
    /// [`NewTableError::ZeroSlots`] for `num_slots == 0` and with
    /// [`NewTableError::Alloc`] when the bucket array cannot be reserved.
    pub fn with_slot_hasher(num_slots: usize, slot_hash: H) -> Result<Self, NewTableError> {
        let n = NonZeroUsize::new(num_slots).ok_or(NewTableError::ZeroSlots)?;
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(num_slots)
            .map_err(|source| NewTableError::Alloc { num_slots, source })?;
        buckets.extend((0..num_slots).map(|_| Set::new()));
        debug!("created hash table with {} slots", num_slots);
        Ok(Self {
            slot_hash,
            num_slots: n,
            buckets,
            len: 0,
        })
    }

    pub fn num_slots(&self) -> usize {
        self.num_slots.get()
    }

    /// Number of stored entries across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries per slot.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.num_slots.get() as f64
    }

    pub fn slot_hasher(&self) -> &H {
        &self.slot_hash
    }

    /// Index of the bucket `key` belongs to.
    pub fn slot_of(&self, key: &str) -> usize {
        let i = self.slot_hash.slot(key, self.num_slots);
        debug_assert!(i < self.num_slots.get(), "slot hash out of range: {i}");
        i % self.num_slots.get()
    }

    pub fn bucket(&self, index: usize) -> Option<&Set<T>> {
        self.buckets.get(index)
    }

    /// Buckets in slot order.
    pub fn buckets(&self) -> core::slice::Iter<'_, Set<T>> {
        self.buckets.iter()
    }

    /// Insert `item` under `key` in the key's bucket. Rejections are the
    /// bucket's: empty or duplicate keys leave the table unchanged and the
    /// item is returned in the error.
    pub fn insert(&mut self, key: &str, item: T) -> Result<(), Rejected<T>> {
        if key.is_empty() {
            trace!("rejected insert: {}", InsertError::EmptyKey);
            return Err(Rejected::new(InsertError::EmptyKey, item));
        }
        let slot = self.slot_of(key);
        match self.buckets[slot].insert(key, item) {
            Ok(()) => {
                self.len += 1;
                Ok(())
            }
            Err(e) => {
                trace!("rejected insert of {:?} into slot {}: {}", key, slot, e.kind());
                Err(e)
            }
        }
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        if key.is_empty() {
            return None;
        }
        self.buckets[self.slot_of(key)].find(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Call `visitor` once per stored pair: buckets in slot order, each
    /// bucket in its chain order.
    pub fn iterate<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, &T),
    {
        for bucket in &self.buckets {
            bucket.iterate(&mut visitor);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.len,
        }
    }

    /// Write one `{...}` block per bucket, each followed by a newline.
    pub fn print<W, F>(&self, out: &mut W, mut printer: F) -> io::Result<()>
    where
        W: io::Write + ?Sized,
        F: FnMut(&mut W, &str, &T) -> io::Result<()>,
    {
        for bucket in &self.buckets {
            bucket.print(&mut *out, &mut printer)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Like [`HashTable::print`], but renders [`NULL_MARKER`] on its own
    /// line when there is no table.
    pub fn print_opt<W, F>(table: Option<&Self>, out: &mut W, printer: F) -> io::Result<()>
    where
        W: io::Write + ?Sized,
        F: FnMut(&mut W, &str, &T) -> io::Result<()>,
    {
        match table {
            Some(t) => t.print(out, printer),
            None => {
                out.write_all(NULL_MARKER.as_bytes())?;
                out.write_all(b"\n")
            }
        }
    }

    /// Tear down the table. Each stored item is passed to `destructor`
    /// exactly once, bucket by bucket, before keys, nodes and the bucket
    /// array are released.
    pub fn delete<F>(self, mut destructor: F)
    where
        F: FnMut(T),
    {
        debug!(
            "deleting hash table: {} entries in {} slots",
            self.len, self.num_slots
        );
        for bucket in self.buckets {
            bucket.delete(&mut destructor);
        }
    }
}

impl<T: fmt::Display, H> fmt::Display for HashTable<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in &self.buckets {
            writeln!(f, "{bucket}")?;
        }
        Ok(())
    }
}

/// Iterator over every `(key, item)` in a [`HashTable`], slot order then
/// chain order.
pub struct Iter<'a, T> {
    buckets: core::slice::Iter<'a, Set<T>>,
    current: Option<set::Iter<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|it| it.next()) {
                self.remaining -= 1;
                return Some(entry);
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T, H: SlotHash> IntoIterator for &'a HashTable<T, H> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
