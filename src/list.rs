use core::{borrow::Borrow, fmt};
#[allow(unused_imports)]
use std::{collections::BTreeMap, vec, vec::Vec};

use rand::{rngs::SmallRng, RngCore};

use crate::{
  arena::Arena,
  node::{Link, Node, NodePtr},
  Error, LevelGenerator, Options,
};

mod iterator;
pub use iterator::*;


/// A position in the skiplist: either the sentinel head or a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
  Head,
  Node(NodePtr),
}

/// A single-threaded ordered map based on skiplist.
///
/// Every key lives in exactly one node. Level `0` links all nodes in
/// ascending key order, each higher level links a random subset of the level
/// below it, which gives `O(log n)` expected lookups, insertions and removals.
///
/// The maximum level only ever grows: removing every node of the top level
/// leaves that level in place, empty.
///
/// `SkipList` does no synchronization of its own. To share one between
/// threads, wrap it in a lock.
pub struct SkipList<K, V, R = SmallRng> {
  arena: Arena<K, V>,
  /// Forward links of the sentinel head, one per level.
  /// `head.len() - 1` is the current maximum level.
  head: Vec<Link>,
  len: usize,
  generator: LevelGenerator<R>,
}

impl<K, V> Default for SkipList<K, V> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V> SkipList<K, V> {
  /// Creates an empty skiplist whose level generator is seeded from OS entropy.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::SkipList;
  ///
  /// let list = SkipList::<u64, u64>::new();
  /// assert!(list.is_empty());
  /// assert_eq!(list.level(), None);
  /// ```
  #[inline]
  pub fn new() -> Self {
    Self::with_options(Options::new())
  }

  /// Creates an empty skiplist with a deterministic level generator.
  #[inline]
  pub fn with_seed(seed: u64) -> Self {
    Self::with_options(Options::new().with_seed(Some(seed)))
  }

  /// Creates an empty skiplist according to the given options.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::{Options, SkipList};
  ///
  /// let list = SkipList::<u64, u64>::with_options(Options::new().with_capacity(128));
  /// assert!(list.capacity() >= 128);
  /// ```
  pub fn with_options(opts: Options) -> Self {
    let generator = match opts.seed() {
      Some(seed) => LevelGenerator::with_seed(seed),
      None => LevelGenerator::new(),
    };
    Self {
      arena: Arena::with_capacity(opts.capacity()),
      head: Vec::new(),
      len: 0,
      generator,
    }
  }
}

impl<K, V, R> SkipList<K, V, R> {
  /// Creates an empty skiplist drawing levels from the given generator.
  #[inline]
  pub fn with_generator(generator: LevelGenerator<R>) -> Self {
    Self {
      arena: Arena::with_capacity(0),
      head: Vec::new(),
      len: 0,
      generator,
    }
  }

  /// Returns the number of entries in the skiplist.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the skiplist is empty.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the current maximum level, or `None` if no node has ever been
  /// linked into the skiplist.
  ///
  /// The maximum level never decreases, not even when the nodes occupying it
  /// are removed.
  #[inline]
  pub fn level(&self) -> Option<usize> {
    self.head.len().checked_sub(1)
  }

  /// Returns the number of levels, i.e. the maximum level plus one.
  #[inline]
  pub fn height(&self) -> usize {
    self.head.len()
  }

  /// Returns the number of entries the skiplist can hold without reallocating.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.arena.capacity()
  }

  /// Removes every entry.
  ///
  /// The levels are kept, each of them left empty.
  pub fn clear(&mut self) {
    self.arena.clear();
    self.head.iter_mut().for_each(|link| *link = None);
    self.len = 0;

    #[cfg(feature = "tracing")]
    tracing::debug!(height = self.head.len(), "cleared skiplist");
  }

  /// Returns an iterator over the entries on level `0`, in ascending key order.
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter::new(&self.arena, self.head.first().copied().flatten())
  }

  /// Returns an iterator over the entries linked into `level`, in ascending
  /// key order.
  ///
  /// Returns [`Error::LevelOutOfRange`] if `level` is above [`SkipList::level`].
  #[inline]
  pub fn iter_level(&self, level: usize) -> Result<Iter<'_, K, V>, Error> {
    self
      .first_at(level)
      .map(|first| Iter::new_at(&self.arena, first, level))
  }

  /// Returns the keys linked into `level`, in ascending order.
  ///
  /// Returns [`Error::LevelOutOfRange`] if `level` is above [`SkipList::level`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::SkipList;
  ///
  /// let mut list = SkipList::with_seed(0);
  /// for k in [9, 3, 4, 2, 1] {
  ///   list.insert(k, ());
  /// }
  ///
  /// let keys: Vec<_> = list.keys(0).unwrap().copied().collect();
  /// assert_eq!(keys, [1, 2, 3, 4, 9]);
  /// ```
  #[inline]
  pub fn keys(&self, level: usize) -> Result<Keys<'_, K, V>, Error> {
    self.iter_level(level).map(Keys::new)
  }

  /// Returns the values linked into `level`, in ascending order of their keys.
  ///
  /// Returns [`Error::LevelOutOfRange`] if `level` is above [`SkipList::level`].
  #[inline]
  pub fn values(&self, level: usize) -> Result<Values<'_, K, V>, Error> {
    self.iter_level(level).map(Values::new)
  }

  /// Collects the entries linked into `level` into a map.
  ///
  /// Returns [`Error::LevelOutOfRange`] if `level` is above [`SkipList::level`].
  pub fn to_map(&self, level: usize) -> Result<BTreeMap<K, V>, Error>
  where
    K: Ord + Clone,
    V: Clone,
  {
    Ok(
      self
        .iter_level(level)?
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect(),
    )
  }

  /// Returns the node at position `index` (counting from `0`) on `level`.
  ///
  /// The walk takes `index` steps along `level`. An `index` at or past the
  /// number of nodes on that level yields `Ok(None)`.
  ///
  /// Returns [`Error::LevelOutOfRange`] if `level` is above [`SkipList::level`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::SkipList;
  ///
  /// let mut list = SkipList::with_seed(0);
  /// list.insert(20, "b");
  /// list.insert(10, "a");
  ///
  /// assert_eq!(list.get_index(1, 0).unwrap().map(|n| *n.key()), Some(20));
  /// assert!(list.get_index(2, 0).unwrap().is_none());
  /// assert!(list.get_index(0, list.height()).is_err());
  /// ```
  pub fn get_index(&self, index: usize, level: usize) -> Result<Option<&Node<K, V>>, Error> {
    let mut cur = self.first_at(level)?;
    for _ in 0..index {
      match cur {
        Some(ptr) => cur = self.arena[ptr].next(level),
        None => break,
      }
    }
    Ok(cur.map(|ptr| &self.arena[ptr]))
  }

  /// Returns a value which renders the level `0` values in order, e.g.
  /// `one->two->nil`.
  #[inline]
  pub fn show(&self) -> Show<'_, K, V, R> {
    Show { list: self }
  }

  /// Returns the first node linked into `level`.
  #[inline]
  fn first_at(&self, level: usize) -> Result<Link, Error> {
    self
      .head
      .get(level)
      .copied()
      .ok_or_else(|| Error::level_out_of_range(level, self.level()))
  }

  #[inline]
  fn next(&self, at: Cursor, level: usize) -> Link {
    match at {
      Cursor::Head => self.head[level],
      Cursor::Node(ptr) => self.arena[ptr].next(level),
    }
  }

  #[inline]
  fn set_next(&mut self, at: Cursor, level: usize, next: Link) {
    match at {
      Cursor::Head => self.head[level] = next,
      Cursor::Node(ptr) => self.arena[ptr].set_next(level, next),
    }
  }

  /// Grows the head so that `level` becomes the maximum level.
  fn grow(&mut self, level: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(from = ?self.level(), to = level, "skiplist max level grows");

    self.head.resize(level + 1, None);
  }
}

impl<K: Ord, V, R> SkipList<K, V, R> {
  /// Walks from the top level down to level `0`, calling `record` with the
  /// last position whose key is less than `key` on every level.
  ///
  /// Returns the node holding `key`, if any.
  fn search<Q>(&self, key: &Q, mut record: impl FnMut(usize, Cursor)) -> Option<NodePtr>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let mut x = Cursor::Head;
    for level in (0..self.head.len()).rev() {
      while let Some(next) = self.next(x, level) {
        if self.arena[next].key().borrow() < key {
          x = Cursor::Node(next);
        } else {
          break;
        }
      }
      record(level, x);
    }

    if self.head.is_empty() {
      return None;
    }

    self
      .next(x, 0)
      .filter(|&ptr| self.arena[ptr].key().borrow() == key)
  }

  /// Returns the node holding `key`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::SkipList;
  ///
  /// let mut list = SkipList::new();
  /// list.insert(2, "Two");
  ///
  /// let node = list.find(&2).unwrap();
  /// assert_eq!(node.entry(), (&2, &"Two"));
  /// assert!(list.find(&3).is_none());
  /// ```
  #[inline]
  pub fn find<Q>(&self, key: &Q) -> Option<&Node<K, V>>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self
      .search(key, |_, _| {})
      .map(|ptr| &self.arena[ptr])
  }

  /// Returns the node holding `key`, whose value can be updated in place.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::SkipList;
  ///
  /// let mut list = SkipList::new();
  /// list.insert(10, "Hello");
  ///
  /// *list.find_mut(&10).unwrap().value_mut() = "Update";
  /// assert_eq!(list.get(&10), Some(&"Update"));
  /// ```
  #[inline]
  pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Node<K, V>>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let ptr = self.search(key, |_, _| {})?;
    Some(&mut self.arena[ptr])
  }

  /// Returns the value for `key`.
  #[inline]
  pub fn get<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self.find(key).map(Node::value)
  }

  /// Returns a mutable reference to the value for `key`.
  #[inline]
  pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self.find_mut(key).map(Node::value_mut)
  }

  /// Returns `true` if the skiplist holds `key`.
  #[inline]
  pub fn contains_key<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self.find(key).is_some()
  }

  /// Removes `key`, returning its value.
  ///
  /// Removing an absent key is a no-op and returns `None`.
  #[inline]
  pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    self.remove_entry(key).map(|(_, v)| v)
  }

  /// Removes `key`, returning the stored key and value.
  ///
  /// The node is unlinked from every level it occupies before it is freed.
  /// The maximum level is left untouched.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::SkipList;
  ///
  /// let mut list = SkipList::new();
  /// list.insert(1, "One");
  /// list.insert(2, "Two");
  ///
  /// assert_eq!(list.remove_entry(&1), Some((1, "One")));
  /// assert_eq!(list.remove_entry(&5), None);
  /// assert_eq!(list.len(), 1);
  /// ```
  pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
  where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
  {
    let mut update = vec![Cursor::Head; self.head.len()];
    let target = self.search(key, |level, at| update[level] = at)?;

    for (level, &prev) in update.iter().enumerate() {
      if self.next(prev, level) != Some(target) {
        continue;
      }
      let next = self.arena[target].next(level);
      self.set_next(prev, level, next);
    }

    self.len -= 1;
    let node = self.arena.dealloc(target);
    debug_assert_eq!(self.arena.len(), self.len);

    #[cfg(feature = "tracing")]
    tracing::trace!(level = node.level(), len = self.len, "removed node from skiplist");

    Some(node.into_entry())
  }
}

impl<K: Ord, V> SkipList<K, V> {
  /// Creates a skiplist holding every entry of `entries`, e.g. a `HashMap`.
  ///
  /// Later entries win over earlier ones with the same key. The level layout
  /// does not depend on the iteration order of `entries`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use std::collections::HashMap;
  /// use sklite::SkipList;
  ///
  /// let map = HashMap::from([(2, "b"), (1, "a")]);
  /// let list = SkipList::from_map(map);
  /// assert_eq!(list.keys(0).unwrap().copied().collect::<Vec<_>>(), [1, 2]);
  /// ```
  pub fn from_map(entries: impl IntoIterator<Item = (K, V)>) -> Self {
    let mut list = Self::new();
    list.extend(entries);
    list
  }
}

impl<K: Ord, V, R: RngCore> SkipList<K, V, R> {
  /// Inserts `value` for `key`.
  ///
  /// If `key` is already present, its value is overwritten in place and the
  /// old value is returned, so the skiplist never holds two nodes for one key.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::SkipList;
  ///
  /// let mut list = SkipList::new();
  /// assert_eq!(list.insert(9, "Nine"), None);
  /// assert_eq!(list.insert(9, "Three"), Some("Nine"));
  /// assert_eq!(list.len(), 1);
  /// ```
  pub fn insert(&mut self, key: K, value: V) -> Option<V> {
    let new_level = self.generator.random_level();
    if new_level >= self.head.len() {
      self.grow(new_level);
    }

    let mut update = vec![Cursor::Head; self.head.len()];
    if let Some(ptr) = self.search(&key, |level, at| update[level] = at) {
      return Some(self.arena[ptr].set_value(value));
    }

    let ptr = self.arena.alloc(Node::new(key, value, new_level));
    for (level, &prev) in update.iter().enumerate().take(new_level + 1) {
      let next = self.next(prev, level);
      self.arena[ptr].set_next(level, next);
      self.set_next(prev, level, Some(ptr));
    }

    self.len += 1;
    debug_assert_eq!(self.arena.len(), self.len);
    None
  }
}

impl<K: Ord, V, R: RngCore> Extend<(K, V)> for SkipList<K, V, R> {
  fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
    for (k, v) in iter {
      self.insert(k, v);
    }
  }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipList<K, V> {
  #[inline]
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    Self::from_map(iter)
  }
}

impl<'a, K, V, R> IntoIterator for &'a SkipList<K, V, R> {
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<K, V, R> IntoIterator for SkipList<K, V, R> {
  type Item = (K, V);
  type IntoIter = IntoIter<K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    let first = self.head.first().copied().flatten();
    IntoIter::new(self.arena, first, self.len)
  }
}

impl<K: fmt::Debug, V: fmt::Debug, R> fmt::Debug for SkipList<K, V, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

/// Renders the level `0` values of a [`SkipList`], see [`SkipList::show`].
pub struct Show<'a, K, V, R> {
  list: &'a SkipList<K, V, R>,
}

impl<K, V: fmt::Display, R> fmt::Display for Show<'_, K, V, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for v in self.list.iter().map(|(_, v)| v) {
      write!(f, "{v}->")?;
    }
    write!(f, "nil")
  }
}
