#[allow(unused_imports)]
use std::{boxed::Box, vec};

/// A pointer to a node, i.e. the index of its slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodePtr(usize);

impl NodePtr {
  #[inline]
  pub(crate) const fn new(slot: usize) -> Self {
    Self(slot)
  }

  #[inline]
  pub(crate) const fn slot(self) -> usize {
    self.0
  }
}

/// A forward link, `None` marks the end of a level.
pub(crate) type Link = Option<NodePtr>;

/// A key-value pair linked into the [`SkipList`](crate::SkipList).
///
/// The key and the forward links can only be changed by the skiplist itself,
/// the value can be overwritten through [`Node::value_mut`] or
/// [`Node::set_value`].
#[derive(Debug, Clone)]
pub struct Node<K, V> {
  key: K,
  value: V,
  /// `forward[i]` is the next node on level `i`.
  forward: Box<[Link]>,
}

impl<K, V> Node<K, V> {
  #[inline]
  pub(crate) fn new(key: K, value: V, level: usize) -> Self {
    Self {
      key,
      value,
      forward: vec![None; level + 1].into_boxed_slice(),
    }
  }

  /// Returns the key of the node.
  #[inline]
  pub const fn key(&self) -> &K {
    &self.key
  }

  /// Returns the value of the node.
  #[inline]
  pub const fn value(&self) -> &V {
    &self.value
  }

  /// Returns a mutable reference to the value of the node.
  #[inline]
  pub fn value_mut(&mut self) -> &mut V {
    &mut self.value
  }

  /// Replaces the value of the node, returning the old one.
  #[inline]
  pub fn set_value(&mut self, value: V) -> V {
    core::mem::replace(&mut self.value, value)
  }

  /// Returns the key and the value of the node.
  #[inline]
  pub const fn entry(&self) -> (&K, &V) {
    (&self.key, &self.value)
  }

  /// Returns the highest level this node is linked into.
  #[inline]
  pub fn level(&self) -> usize {
    self.forward.len() - 1
  }

  #[inline]
  pub(crate) fn next(&self, level: usize) -> Link {
    self.forward[level]
  }

  #[inline]
  pub(crate) fn set_next(&mut self, level: usize, next: Link) {
    self.forward[level] = next;
  }

  #[inline]
  pub(crate) fn into_entry(self) -> (K, V) {
    (self.key, self.value)
  }
}
