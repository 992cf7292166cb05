use std::iter::FusedIterator;

use crate::slab::{Ptr, Slab};

use super::InnerNode;

/// Pre-order traversal: a node, then its left subtree, then its right subtree
pub struct IterPreorder<'a, T> {
    nodes: &'a Slab<InnerNode<T>>,
    stack: Vec<Ptr>,
}

impl<'a, T> IterPreorder<'a, T> {
    pub(super) fn new(nodes: &'a Slab<InnerNode<T>>, root: Ptr) -> Self {
        Self {
            nodes,
            stack: root.non_null().into_iter().collect(),
        }
    }
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl<'a, T> Iterator for IterPreorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let top_ptr = self.stack.pop()?;
        let node = &self.nodes[top_ptr];
        self.stack.extend(node.right.non_null());
        self.stack.extend(node.left.non_null());
        Some(&node.key)
    }
}

impl<'a, T> FusedIterator for IterPreorder<'a, T> {}
