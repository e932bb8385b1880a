use core::iter::FusedIterator;

use crate::{arena::Arena, node::Link};

/// An iterator over the entries linked into one level of a
/// [`SkipList`](crate::SkipList), in ascending key order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
  arena: &'a Arena<K, V>,
  next: Link,
  level: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      arena: self.arena,
      next: self.next,
      level: self.level,
    }
  }
}

impl<'a, K, V> Iter<'a, K, V> {
  #[inline]
  pub(super) const fn new(arena: &'a Arena<K, V>, first: Link) -> Self {
    Self::new_at(arena, first, 0)
  }

  #[inline]
  pub(super) const fn new_at(arena: &'a Arena<K, V>, first: Link, level: usize) -> Self {
    Self {
      arena,
      next: first,
      level,
    }
  }

  /// Returns the level this iterator walks.
  #[inline]
  pub const fn level(&self) -> usize {
    self.level
  }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let arena = self.arena;
    let node = &arena[self.next?];
    self.next = node.next(self.level);
    Some(node.entry())
  }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys linked into one level of a
/// [`SkipList`](crate::SkipList), in ascending order.
#[derive(Debug)]
pub struct Keys<'a, K, V> {
  iter: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
  #[inline]
  pub(super) const fn new(iter: Iter<'a, K, V>) -> Self {
    Self { iter }
  }
}

impl<K, V> Clone for Keys<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      iter: self.iter.clone(),
    }
  }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
  type Item = &'a K;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.iter.next().map(|(k, _)| k)
  }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values linked into one level of a
/// [`SkipList`](crate::SkipList), in ascending order of their keys.
#[derive(Debug)]
pub struct Values<'a, K, V> {
  iter: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
  #[inline]
  pub(super) const fn new(iter: Iter<'a, K, V>) -> Self {
    Self { iter }
  }
}

impl<K, V> Clone for Values<'_, K, V> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      iter: self.iter.clone(),
    }
  }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
  type Item = &'a V;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.iter.next().map(|(_, v)| v)
  }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An owning iterator over the entries of a [`SkipList`](crate::SkipList), in
/// ascending key order.
#[derive(Debug)]
pub struct IntoIter<K, V> {
  arena: Arena<K, V>,
  next: Link,
  remaining: usize,
}

impl<K, V> IntoIter<K, V> {
  #[inline]
  pub(super) fn new(arena: Arena<K, V>, first: Link, len: usize) -> Self {
    Self {
      arena,
      next: first,
      remaining: len,
    }
  }
}

impl<K, V> Iterator for IntoIter<K, V> {
  type Item = (K, V);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let node = self.arena.dealloc(self.next?);
    self.next = node.next(0);
    self.remaining -= 1;
    Some(node.into_entry())
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
