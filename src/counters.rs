//! Counters: a set of counts keyed by non-negative integers.
//!
//! Same chaining scheme as [`Set`](crate::Set), but every key owns a count
//! instead of an item. `add` bumps a key's count (creating it at 1) and
//! `set` overwrites it. Keys are never removed.

use crate::chain::{self, Chain};
use crate::error::CountersError;
use crate::NULL_MARKER;
use core::fmt;
use std::io;

#[derive(Debug)]
pub struct Counters {
    chain: Chain<i32, u32>,
}

impl Default for Counters {
    fn default() -> Self {
        Self::new()
    }
}

impl Counters {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Increment the count for `key`, starting it at 1 when the key is new.
    /// Returns the updated count.
    pub fn add(&mut self, key: i32) -> Result<u32, CountersError> {
        if key < 0 {
            return Err(CountersError::NegativeKey(key));
        }
        if let Some(count) = self.chain.find(&key).and_then(|k| self.chain.value_mut(k)) {
            *count = count.saturating_add(1);
            return Ok(*count);
        }
        self.chain.push_front(key, 1);
        Ok(1)
    }

    /// Current count for `key`; 0 if the key is absent or negative.
    pub fn get(&self, key: i32) -> u32 {
        if key < 0 {
            return 0;
        }
        self.chain
            .find(&key)
            .and_then(|k| self.chain.value(k))
            .copied()
            .unwrap_or(0)
    }

    /// Set the count for `key`, creating the key if needed.
    pub fn set(&mut self, key: i32, count: u32) -> Result<(), CountersError> {
        if key < 0 {
            return Err(CountersError::NegativeKey(key));
        }
        match self.chain.find(&key).and_then(|k| self.chain.value_mut(k)) {
            Some(c) => *c = count,
            None => {
                self.chain.push_front(key, count);
            }
        }
        Ok(())
    }

    pub fn iterate<F>(&self, mut visitor: F)
    where
        F: FnMut(i32, u32),
    {
        for (key, count) in self.iter() {
            visitor(key, count);
        }
    }

    /// `(key, count)` pairs, most recently created key first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.chain.iter(),
        }
    }

    /// Write `{key=count,...}` to `out`.
    pub fn print<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write + ?Sized,
    {
        write!(out, "{self}")
    }

    pub fn print_opt<W>(counters: Option<&Self>, out: &mut W) -> io::Result<()>
    where
        W: io::Write + ?Sized,
    {
        match counters {
            Some(c) => c.print(out),
            None => out.write_all(NULL_MARKER.as_bytes()),
        }
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}={count}")?;
        }
        f.write_str("}")
    }
}

pub struct Iter<'a> {
    it: chain::Iter<'a, i32, u32>,
}

impl Iterator for Iter<'_> {
    type Item = (i32, u32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(k, c)| (*k, *c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
