use std::iter::FusedIterator;

use crate::slab::{Ptr, Slab};

use super::InnerNode;

/// Post-order traversal: the left subtree, then the right subtree, then the node itself
pub struct IterPostorder<'a, T> {
    nodes: &'a Slab<InnerNode<T>>,
    stack: Vec<Ptr>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, T> IterPostorder<'a, T> {
    pub(super) fn new(nodes: &'a Slab<InnerNode<T>>, root: Ptr) -> Self {
        let mut stack = Vec::new();
        let mut current = root;
        while let Some(ptr) = current.non_null() {
            let current_node = &nodes[ptr];

            stack.extend(current_node.right.non_null());
            stack.push(ptr);

            current = current_node.left;
        }

        Self {nodes, stack}
    }
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, T> Iterator for IterPostorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut current_ptr) = self.stack.pop() {
            let mut node = &self.nodes[current_ptr];

            // If the top of the stack is the current node's right child
            match node.right.non_null() {
                Some(right) if self.stack.last().copied() == Some(right) => {
                    // Remove right from stack
                    self.stack.pop();

                    // Push the current pointer back onto the stack
                    self.stack.push(current_ptr);

                    current_ptr = right;
                    node = &self.nodes[current_ptr];
                },

                _ => return Some(&node.key),
            }

            loop {
                self.stack.extend(node.right.non_null());
                self.stack.push(current_ptr);

                match node.left.non_null() {
                    Some(ptr) => {
                        current_ptr = ptr;
                        node = &self.nodes[current_ptr];
                    },

                    None => break,
                }
            }
        }

        None
    }
}

impl<'a, T> FusedIterator for IterPostorder<'a, T> {}
