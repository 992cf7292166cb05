use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::compare::Greater;
use crate::slab::Ptr;

use super::{OrderedTree, Node};

/// A position in the in-order sequence of an [`OrderedTree`]
///
/// A cursor either points at a node or at the end marker, which sits both after the last node and
/// before the first one. Moving forward from the last node reaches the end marker and moving forward
/// again wraps around to the first node. Moving backward works the same way.
///
/// Two cursors are equal if they point at the same position of the same tree.
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let tree = OrderedTree::from_slice(&[2, 1, 3]);
/// let mut cursor = tree.cursor_front();
/// assert_eq!(cursor.key(), Some(&1));
///
/// cursor.move_next();
/// cursor.move_next();
/// assert_eq!(cursor.key(), Some(&3));
///
/// cursor.move_next();
/// assert!(cursor.is_end());
/// assert_eq!(cursor, tree.cursor_end());
///
/// cursor.move_next();
/// assert_eq!(cursor.key(), Some(&1));
/// ```
pub struct Cursor<'a, T, C = Greater> {
    tree: &'a OrderedTree<T, C>,
    current: Ptr,
}

impl<'a, T, C> Clone for Cursor<'a, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, C> Copy for Cursor<'a, T, C> {}

impl<'a, T, C> PartialEq for Cursor<'a, T, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.current == other.current
    }
}

impl<'a, T, C> Eq for Cursor<'a, T, C> {}

impl<'a, T: fmt::Debug, C> fmt::Debug for Cursor<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(&self.key())
            .finish()
    }
}

impl<'a, T, C> Cursor<'a, T, C> {
    pub(super) fn new(tree: &'a OrderedTree<T, C>, current: Ptr) -> Self {
        Self {tree, current}
    }

    /// Returns the node at the cursor, or `None` at the end marker
    pub fn current(&self) -> Option<Node<'a, T, C>> {
        self.current.non_null().map(|ptr| Node::new(self.tree, ptr))
    }

    /// Returns the key at the cursor, or `None` at the end marker
    pub fn key(&self) -> Option<&'a T> {
        self.current().map(|node| node.key())
    }

    /// Returns true if the cursor is at the end marker
    pub fn is_end(&self) -> bool {
        self.current.is_null()
    }

    /// Moves to the next node in order
    ///
    /// Moves to the end marker after the last node, and to the first node from the end marker.
    pub fn move_next(&mut self) {
        self.current = match self.current() {
            // Running off the end is not an error for a cursor
            Some(node) => node.successor().map_or(Ptr::null(), |next| next.ptr),
            None => self.tree.min_ptr(self.tree.root),
        };
    }

    /// Moves to the previous node in order
    ///
    /// Moves to the end marker before the first node, and to the last node from the end marker.
    pub fn move_prev(&mut self) {
        self.current = match self.current() {
            Some(node) => node.predecessor().map_or(Ptr::null(), |prev| prev.ptr),
            None => self.tree.max_ptr(self.tree.root),
        };
    }
}

/// An iterator over the keys of an [`OrderedTree`] in comparator order
///
/// Created by [`OrderedTree::iter`].
pub struct Iter<'a, T, C = Greater> {
    front: Cursor<'a, T, C>,
    back: Cursor<'a, T, C>,
    /// Number of keys between `front` and `back` inclusive
    remaining: usize,
}

impl<'a, T, C> Clone for Iter<'a, T, C> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T: fmt::Debug, C> fmt::Debug for Iter<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T, C> Iter<'a, T, C> {
    pub(super) fn new(tree: &'a OrderedTree<T, C>) -> Self {
        Self {
            front: tree.cursor_front(),
            back: tree.cursor_back(),
            remaining: tree.len(),
        }
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.front.key()?;
        self.front.move_next();
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, C> DoubleEndedIterator for Iter<'a, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.back.key()?;
        self.back.move_prev();
        self.remaining -= 1;
        Some(key)
    }
}

impl<'a, T, C> ExactSizeIterator for Iter<'a, T, C> {}

impl<'a, T, C> FusedIterator for Iter<'a, T, C> {}
