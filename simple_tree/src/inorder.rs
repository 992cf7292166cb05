use std::iter::FusedIterator;

use super::Node;

pub struct IterInorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut stack = Vec::new();
        let mut current = root;
        while let Some(current_node) = current {
            stack.push(current_node);
            current = current_node.left();
        }

        Self {stack}
    }
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        let mut current = node.right();
        while let Some(current_node) = current {
            self.stack.push(current_node);
            current = current_node.left();
        }

        Some(node.key())
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
