use core::ops::{Index, IndexMut};
#[allow(unused_imports)]
use std::vec::Vec;

use crate::node::{Node, NodePtr};

/// Owns every node of a skiplist.
///
/// Links between nodes are [`NodePtr`]s into the arena, none of them owns the
/// node it points to. A slot released by [`Arena::dealloc`] is recycled by the
/// next allocation.
#[derive(Debug)]
pub(crate) struct Arena<K, V> {
  slots: Vec<Option<Node<K, V>>>,
  freelist: Vec<NodePtr>,
}

impl<K, V> Arena<K, V> {
  #[inline]
  pub(crate) fn with_capacity(cap: usize) -> Self {
    Self {
      slots: Vec::with_capacity(cap),
      freelist: Vec::new(),
    }
  }

  /// Returns the number of live nodes.
  #[inline]
  pub(crate) fn len(&self) -> usize {
    self.slots.len() - self.freelist.len()
  }

  /// Returns the number of nodes the arena can hold without reallocating.
  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodePtr {
    match self.freelist.pop() {
      Some(ptr) => {
        self.slots[ptr.slot()] = Some(node);
        ptr
      }
      None => {
        self.slots.push(Some(node));
        NodePtr::new(self.slots.len() - 1)
      }
    }
  }

  /// Takes the node out of the arena and releases its slot.
  ///
  /// The caller must have unlinked the node from every level first.
  pub(crate) fn dealloc(&mut self, ptr: NodePtr) -> Node<K, V> {
    let node = self.slots[ptr.slot()]
      .take()
      .expect("node pointer must point to a live node");
    self.freelist.push(ptr);
    node
  }

  pub(crate) fn clear(&mut self) {
    self.slots.clear();
    self.freelist.clear();
  }
}

impl<K, V> Index<NodePtr> for Arena<K, V> {
  type Output = Node<K, V>;

  #[inline]
  fn index(&self, ptr: NodePtr) -> &Self::Output {
    self.slots[ptr.slot()]
      .as_ref()
      .expect("node pointer must point to a live node")
  }
}

impl<K, V> IndexMut<NodePtr> for Arena<K, V> {
  #[inline]
  fn index_mut(&mut self, ptr: NodePtr) -> &mut Self::Output {
    self.slots[ptr.slot()]
      .as_mut()
      .expect("node pointer must point to a live node")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_alloc_and_dealloc() {
    let mut arena = Arena::with_capacity(4);
    assert!(arena.capacity() >= 4);

    let a = arena.alloc(Node::new(1, "a", 0));
    let b = arena.alloc(Node::new(2, "b", 2));
    assert_eq!(arena.len(), 2);
    assert_eq!(arena[a].key(), &1);
    assert_eq!(arena[b].level(), 2);

    let (k, v) = arena.dealloc(a).into_entry();
    assert_eq!((k, v), (1, "a"));
    assert_eq!(arena.len(), 1);

    // released slots are recycled
    let c = arena.alloc(Node::new(3, "c", 1));
    assert_eq!(c, a);
    assert_eq!(arena[c].value(), &"c");
    assert_eq!(arena.len(), 2);

    arena.clear();
    assert_eq!(arena.len(), 0);
  }

  #[test]
  #[should_panic]
  fn test_dangling_pointer() {
    let mut arena = Arena::with_capacity(1);
    let a = arena.alloc(Node::new(1, (), 0));
    arena.dealloc(a);
    let _ = arena[a].key();
  }
}
