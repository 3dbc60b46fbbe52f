//! Set: an unordered collection of unique `(key, item)` pairs.
//!
//! Each key is copied into storage owned by the set; items are moved in and
//! never inspected. Inserting an existing key fails and leaves the stored
//! item in place. There is no removal of single entries: items leave the
//! set only through [`Set::delete`], [`IntoIterator`], or drop.

use crate::chain::{self, Chain};
use crate::error::{InsertError, Rejected};
use crate::NULL_MARKER;
use core::fmt;
use std::io;

#[derive(Debug)]
pub struct Set<T> {
    chain: Chain<Box<str>, T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Set<T> {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Insert `item` under a copy of `key`.
    ///
    /// Fails with [`InsertError::EmptyKey`] for `""` and with
    /// [`InsertError::DuplicateKey`] when `key` is already present. The set
    /// is unchanged on failure and `item` comes back inside the [`Rejected`].
    pub fn insert(&mut self, key: &str, item: T) -> Result<(), Rejected<T>> {
        if key.is_empty() {
            return Err(Rejected::new(InsertError::EmptyKey, item));
        }
        if self.chain.find(key).is_some() {
            return Err(Rejected::new(InsertError::DuplicateKey, item));
        }
        self.chain.push_front(Box::from(key), item);
        Ok(())
    }

    /// Item stored under `key`, compared byte for byte.
    pub fn find(&self, key: &str) -> Option<&T> {
        if key.is_empty() {
            return None;
        }
        self.chain.find(key).and_then(|k| self.chain.value(k))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub(crate) fn node_capacity(&self) -> usize {
        self.chain.capacity()
    }

    /// Call `visitor` once per entry. Any context the visitor needs is
    /// captured by the closure.
    pub fn iterate<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, &T),
    {
        for (key, item) in self.iter() {
            visitor(key, item);
        }
    }

    /// Entries in chain order (most recently inserted first). Callers must
    /// not rely on the order beyond every entry appearing once.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            it: self.chain.iter(),
        }
    }

    /// Write `{entry,entry,...}` to `out`, rendering each entry with
    /// `printer`. An empty set renders as `{}`.
    pub fn print<W, F>(&self, out: &mut W, mut printer: F) -> io::Result<()>
    where
        W: io::Write + ?Sized,
        F: FnMut(&mut W, &str, &T) -> io::Result<()>,
    {
        out.write_all(b"{")?;
        for (i, (key, item)) in self.iter().enumerate() {
            if i > 0 {
                out.write_all(b",")?;
            }
            printer(&mut *out, key, item)?;
        }
        out.write_all(b"}")
    }

    /// Like [`Set::print`], but renders [`NULL_MARKER`] when there is no set.
    pub fn print_opt<W, F>(set: Option<&Self>, out: &mut W, printer: F) -> io::Result<()>
    where
        W: io::Write + ?Sized,
        F: FnMut(&mut W, &str, &T) -> io::Result<()>,
    {
        match set {
            Some(s) => s.print(out, printer),
            None => out.write_all(NULL_MARKER.as_bytes()),
        }
    }

    /// Tear down the set, handing every item to `destructor` exactly once
    /// before the keys and nodes are released.
    pub fn delete<F>(self, mut destructor: F)
    where
        F: FnMut(T),
    {
        for (_key, item) in self.chain {
            destructor(item);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, item)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}={item}")?;
        }
        f.write_str("}")
    }
}

/// Iterator over `(key, item)` borrows of a [`Set`].
pub struct Iter<'a, T> {
    it: chain::Iter<'a, Box<str>, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(k, v)| (&**k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            it: self.it.clone(),
        }
    }
}

/// Owning iterator over the entries of a [`Set`].
pub struct IntoIter<T> {
    it: chain::IntoIter<Box<str>, T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = (String, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(k, v)| (k.into_string(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Set<T> {
    type Item = (String, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            it: self.chain.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
