use std::iter::FusedIterator;

use crate::slab::{Ptr, Slab};

use super::InnerNode;

/// In-order traversal: the left subtree, then a node, then its right subtree
///
/// Yields the keys in comparator order.
pub struct IterInorder<'a, T> {
    nodes: &'a Slab<InnerNode<T>>,
    stack: Vec<Ptr>,
}

impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new(nodes: &'a Slab<InnerNode<T>>, root: Ptr) -> Self {
        let mut iter = Self {nodes, stack: Vec::new()};
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `ptr` and all of its left descendants
    fn push_left_spine(&mut self, ptr: Ptr) {
        let mut current = ptr;
        while let Some(ptr) = current.non_null() {
            self.stack.push(ptr);
            current = self.nodes[ptr].left;
        }
    }
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let top_ptr = self.stack.pop()?;
        let node = &nodes[top_ptr];
        self.push_left_spine(node.right);
        Some(&node.key)
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
