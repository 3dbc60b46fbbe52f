//! Chain: singly linked list of unique keys stored in a slot arena.
//!
//! Nodes live in a `SlotMap` owned by the chain and link to each other
//! through generational keys, so there are no raw pointers and no manual
//! frees. New nodes become the head; lookups walk from the head. Both
//! `Set` and `Counters` are thin layers over this type.

use core::borrow::Borrow;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    next: Option<DefaultKey>,
}

#[derive(Debug)]
pub(crate) struct Chain<K, V> {
    // Created on first insert; an empty chain owns no heap memory.
    nodes: Option<SlotMap<DefaultKey, Node<K, V>>>,
    head: Option<DefaultKey>,
}

impl<K, V> Chain<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: None,
            head: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.as_ref().map_or(0, SlotMap::len)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Node slots currently allocated.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.as_ref().map_or(0, SlotMap::capacity)
    }

    /// Link a new node in front of the current head. Callers check for
    /// duplicates first.
    pub(crate) fn push_front(&mut self, key: K, value: V) -> DefaultKey {
        let next = self.head;
        let k = self
            .nodes
            .get_or_insert_with(SlotMap::with_key)
            .insert(Node { key, value, next });
        self.head = Some(k);
        k
    }

    fn node(&self, k: DefaultKey) -> Option<&Node<K, V>> {
        self.nodes.as_ref()?.get(k)
    }

    pub(crate) fn find<Q>(&self, q: &Q) -> Option<DefaultKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut cur = self.head;
        while let Some(k) = cur {
            let node = self.node(k)?;
            if node.key.borrow() == q {
                return Some(k);
            }
            cur = node.next;
        }
        None
    }

    pub(crate) fn value(&self, k: DefaultKey) -> Option<&V> {
        self.node(k).map(|n| &n.value)
    }

    pub(crate) fn value_mut(&mut self, k: DefaultKey) -> Option<&mut V> {
        self.nodes.as_mut()?.get_mut(k).map(|n| &mut n.value)
    }

    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: self.nodes.as_ref(),
            cur: self.head,
            remaining: self.len(),
        }
    }
}

/// Chain-order iterator, most recently inserted first.
pub(crate) struct Iter<'a, K, V> {
    nodes: Option<&'a SlotMap<DefaultKey, Node<K, V>>>,
    cur: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes?.get(self.cur?)?;
        self.cur = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            cur: self.cur,
            remaining: self.remaining,
        }
    }
}

/// Owning chain-order iterator. Nodes not yet yielded are dropped with it.
pub(crate) struct IntoIter<K, V> {
    nodes: Option<SlotMap<DefaultKey, Node<K, V>>>,
    cur: Option<DefaultKey>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.as_mut()?.remove(self.cur?)?;
        self.cur = node.next;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.nodes.as_ref().map_or(0, SlotMap::len);
        (n, Some(n))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> IntoIterator for Chain<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            nodes: self.nodes,
            cur: self.head,
        }
    }
}
