use std::cmp::Ordering;
use std::iter::FromIterator;

mod node;
mod preorder;
mod inorder;

pub use node::*;
pub use preorder::*;
pub use inorder::*;

/// A "simple" unbalanced BST that uses `Box` for internal storage and has no parent links
///
/// Keeps duplicates in the left subtree and replaces a deleted node that has two children with
/// the leftmost node of its right subtree, so for the same sequence of operations it ends up with
/// exactly the same shape as an `ordered_tree::OrderedTree`.
///
/// Used to test the `ordered_tree` crate
#[derive(Debug, Clone)]
pub struct SimpleTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for SimpleTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T: Ord> PartialEq for SimpleTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Trees with the same values may be shaped differently, so compare in sorted order
        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Ord> Eq for SimpleTree<T> {}

impl<T: Ord> SimpleTree<T> {
    /// Creates an empty `SimpleTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_tree::SimpleTree;
    /// let mut tree: SimpleTree<i32> = SimpleTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the tree
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns `true` if the tree contains the given value
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_tree::SimpleTree;
    ///
    /// let mut tree = SimpleTree::new();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(node.key()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return true,
            }
        }

        false
    }

    /// Inserts a value into the tree, equal values go to the left
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_tree::SimpleTree;
    ///
    /// let mut tree = SimpleTree::new();
    /// tree.insert(37);
    /// tree.insert(37);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.len += 1;

        let mut current = match self.root.as_deref_mut() {
            Some(root) => Some(root),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                return;
            },
        };

        while let Some(node) = current.take() {
            if value > *node.key() {
                if !node.has_right() {
                    node.set_right(Node::new(value));
                    break;
                }
                current = node.right_mut();
            } else {
                if !node.has_left() {
                    node.set_left(Node::new(value));
                    break;
                }
                current = node.left_mut();
            }
        }
    }

    /// Removes the first value equal to `value` found on the search path and returns it
    ///
    /// This method recurses once per level of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_tree::SimpleTree;
    ///
    /// let mut tree = SimpleTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = remove_from(&mut self.root, value)?;
        self.len -= 1;
        Some(removed)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf
    pub fn height(&self) -> usize {
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|root| (root, 1)).into_iter().collect();
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Clears the tree, removing all values
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<T> {
        IterPreorder::new(self.root())
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<T> {
        IterInorder::new(self.root())
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

fn remove_from<T: Ord>(link: &mut Option<Box<Node<T>>>, value: &T) -> Option<T> {
    let node = link.as_deref_mut()?;
    match value.cmp(node.key()) {
        Ordering::Less => remove_from(node.left_link(), value),
        Ordering::Greater => remove_from(node.right_link(), value),
        Ordering::Equal => {
            let node = link.take()?;
            let (replacement, key) = (*node).unlink();
            *link = replacement;
            Some(key)
        },
    }
}

impl<T: Ord> Extend<T> for SimpleTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SimpleTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
