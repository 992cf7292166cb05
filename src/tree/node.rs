use std::fmt;
use std::ptr;

use crate::compare::{Compare, Greater};
use crate::error::TreeError;
use crate::slab::Ptr;

use super::{OrderedTree, InnerNode, IterPreorder, IterInorder, IterPostorder};

/// A shared handle to a node of an [`OrderedTree`]
///
/// Handles are cheap to copy and compare equal when they refer to the same node of the same tree.
pub struct Node<'a, T, C = Greater> {
    tree: &'a OrderedTree<T, C>,
    pub(super) ptr: Ptr,
}

impl<'a, T, C> Clone for Node<'a, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, C> Copy for Node<'a, T, C> {}

impl<'a, T, C> PartialEq for Node<'a, T, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.ptr == other.ptr
    }
}

impl<'a, T, C> Eq for Node<'a, T, C> {}

impl<'a, T: fmt::Debug, C> fmt::Debug for Node<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the children's keys, recursing would overflow the stack on deep trees
        f.debug_struct("Node")
            .field("key", self.key())
            .field("left", &self.left().map(|left| left.key()))
            .field("right", &self.right().map(|right| right.key()))
            .finish()
    }
}

impl<'a, T, C> Node<'a, T, C> {
    pub(super) fn new(tree: &'a OrderedTree<T, C>, ptr: Ptr) -> Self {
        Self {tree, ptr}
    }

    fn inner(&self) -> &'a InnerNode<T> {
        &self.tree.nodes[self.ptr]
    }

    fn wrap(&self, ptr: Ptr) -> Option<Self> {
        ptr.non_null().map(|ptr| Node::new(self.tree, ptr))
    }

    /// Returns the key stored in this node
    pub fn key(&self) -> &'a T {
        &self.inner().key
    }

    pub fn has_left(&self) -> bool {
        !self.inner().left.is_null()
    }

    pub fn has_right(&self) -> bool {
        !self.inner().right.is_null()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.inner().is_leaf()
    }

    /// Returns true if this node has no parent
    pub fn is_root(&self) -> bool {
        self.inner().parent.is_null()
    }

    /// Returns the left child, or `None` if there is none
    pub fn left(&self) -> Option<Self> {
        self.wrap(self.inner().left)
    }

    /// Returns the right child, or `None` if there is none
    pub fn right(&self) -> Option<Self> {
        self.wrap(self.inner().right)
    }

    /// Returns the parent, or `None` for the root
    pub fn parent(&self) -> Option<Self> {
        self.wrap(self.inner().parent)
    }

    /// Returns the leftmost node of the subtree rooted at this node
    pub fn min(&self) -> Self {
        Node::new(self.tree, self.tree.min_ptr(self.ptr))
    }

    /// Returns the rightmost node of the subtree rooted at this node
    pub fn max(&self) -> Self {
        Node::new(self.tree, self.tree.max_ptr(self.ptr))
    }

    /// Returns the node that comes right after this one in the whole tree
    ///
    /// Fails with [`TreeError::NotFound`] if this node holds the last key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_slice(&[8, 3, 2, 5, 6, 12, 15]);
    /// let six = tree.binary_search(&6).unwrap();
    /// assert_eq!(six.successor().map(|node| *node.key()), Ok(8));
    ///
    /// let last = tree.max().unwrap();
    /// assert!(last.successor().is_err());
    /// ```
    pub fn successor(&self) -> Result<Self, TreeError> {
        self.wrap(self.tree.successor_ptr(self.ptr))
            .ok_or_else(TreeError::not_found_unknown)
    }

    /// Returns the node that comes right before this one in the whole tree
    ///
    /// Fails with [`TreeError::NotFound`] if this node holds the first key.
    pub fn predecessor(&self) -> Result<Self, TreeError> {
        self.wrap(self.tree.predecessor_ptr(self.ptr))
            .ok_or_else(TreeError::not_found_unknown)
    }

    /// Counts the nodes of the subtree rooted at this node, including this node
    pub fn node_count(&self) -> usize {
        self.tree.subtree_node_count(self.ptr)
    }

    /// Counts the leaves of the subtree rooted at this node
    pub fn leaf_count(&self) -> usize {
        self.tree.subtree_leaf_count(self.ptr)
    }

    /// Returns the height of the subtree rooted at this node, at least 1
    pub fn height(&self) -> usize {
        self.tree.subtree_height(self.ptr)
    }

    /// Performs a pre-order traversal of the subtree rooted at this node
    pub fn iter_preorder(&self) -> IterPreorder<'a, T> {
        IterPreorder::new(&self.tree.nodes, self.ptr)
    }

    /// Performs an in-order traversal of the subtree rooted at this node
    pub fn iter_inorder(&self) -> IterInorder<'a, T> {
        IterInorder::new(&self.tree.nodes, self.ptr)
    }

    /// Performs a post-order traversal of the subtree rooted at this node
    pub fn iter_postorder(&self) -> IterPostorder<'a, T> {
        IterPostorder::new(&self.tree.nodes, self.ptr)
    }
}

/// A mutable handle to a node of an [`OrderedTree`]
///
/// Navigation consumes the handle, since only one mutable handle into a tree can exist at a time.
pub struct NodeMut<'a, T, C = Greater> {
    tree: &'a mut OrderedTree<T, C>,
    ptr: Ptr,
}

impl<'a, T: fmt::Debug, C> fmt::Debug for NodeMut<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeMut")
            .field("key", self.key())
            .field("left", &self.as_node().left().map(|left| left.key()))
            .field("right", &self.as_node().right().map(|right| right.key()))
            .finish()
    }
}

impl<'a, T, C> NodeMut<'a, T, C> {
    pub(super) fn new(tree: &'a mut OrderedTree<T, C>, ptr: Ptr) -> Self {
        Self {tree, ptr}
    }

    /// Returns the key stored in this node
    ///
    /// Keys cannot be modified in place since that could break the ordering of the tree.
    pub fn key(&self) -> &T {
        &self.tree.nodes[self.ptr].key
    }

    pub fn has_left(&self) -> bool {
        !self.tree.nodes[self.ptr].left.is_null()
    }

    pub fn has_right(&self) -> bool {
        !self.tree.nodes[self.ptr].right.is_null()
    }

    /// Borrows this handle as a shared handle
    pub fn as_node(&self) -> Node<'_, T, C> {
        Node::new(&*self.tree, self.ptr)
    }

    /// Converts this handle into a shared handle with the same lifetime
    pub fn into_node(self) -> Node<'a, T, C> {
        Node::new(self.tree, self.ptr)
    }

    /// Moves to the left child, or returns `None` if there is none
    pub fn left(self) -> Option<Self> {
        let left = self.tree.nodes[self.ptr].left;
        let tree = self.tree;
        left.non_null().map(move |ptr| NodeMut::new(tree, ptr))
    }

    /// Moves to the right child, or returns `None` if there is none
    pub fn right(self) -> Option<Self> {
        let right = self.tree.nodes[self.ptr].right;
        let tree = self.tree;
        right.non_null().map(move |ptr| NodeMut::new(tree, ptr))
    }

    /// Moves to the parent, or returns `None` for the root
    pub fn parent(self) -> Option<Self> {
        let parent = self.tree.nodes[self.ptr].parent;
        let tree = self.tree;
        parent.non_null().map(move |ptr| NodeMut::new(tree, ptr))
    }

    /// Removes this node and its entire subtree from the tree, returning the number of nodes
    /// that were freed
    ///
    /// The parent's link to this node is cleared. Removing the root empties the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from_slice(&[8, 3, 2, 5, 6, 12, 15]);
    /// let removed = tree.binary_search_mut(&3).unwrap().remove();
    /// assert_eq!(removed, 4);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn remove(self) -> usize {
        self.tree.remove_subtree(self.ptr)
    }
}

impl<'a, T, C: Compare<T>> NodeMut<'a, T, C> {
    /// Deletes only this node from the tree, relinking its children, and returns its key
    pub fn delete(self) -> T {
        self.tree.delete_node(self.ptr)
    }
}
