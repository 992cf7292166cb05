mod node;
mod preorder;
mod inorder;
mod postorder;
mod cursor;

pub use node::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;
pub use cursor::*;

use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::compare::{Compare, Greater};
use crate::error::TreeError;
use crate::slab::{Ptr, Slab};

#[derive(Debug, Clone)]
struct InnerNode<T> {
    key: T,
    /// Non-owning link used only to walk upwards
    parent: Ptr,
    left: Ptr,
    right: Ptr,
}

impl<T> InnerNode<T> {
    fn new(key: T, parent: Ptr) -> Self {
        Self {
            key,
            parent,
            left: Ptr::null(),
            right: Ptr::null(),
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_null() && self.right.is_null()
    }
}

/// An unbalanced binary search tree (BST)
///
/// BST properties: For each node with key `k` and the tree's comparator `cmp`:
/// - Every key `x` in the left subtree has `!cmp.greater(x, k)` (ties go left)
/// - Every key `x` in the right subtree has `cmp.greater(x, k)`
///
/// Duplicate keys are allowed. Values are inserted exactly where the search for them ends, so the
/// shape of the tree depends only on the insertion order. No rebalancing is ever performed and
/// inserting sorted input produces a tree as deep as it is long.
///
/// Every node also keeps a link to its parent, which makes it possible to step from any node to its
/// successor or predecessor without a stack.
#[derive(Clone)]
pub struct OrderedTree<T, C = Greater> {
    nodes: Slab<InnerNode<T>>,
    root: Ptr,
    cmp: C,
}

impl<T, C: Default> Default for OrderedTree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

/// Lists the keys in pre-order, which is enough to rebuild the same shape by inserting them
impl<T: fmt::Debug, C> fmt::Debug for OrderedTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_preorder()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for OrderedTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        // Trees with the same keys can be shaped differently depending on insertion order, so
        // compare the sorted sequences instead of the structure.
        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().zip(other.iter_inorder()).all(|(a, b)| a.eq(b))
    }
}

impl<T: Eq, C> Eq for OrderedTree<T, C> {}

impl<T> OrderedTree<T> {
    /// Creates an empty `OrderedTree` ordered by `>`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    /// let mut tree: OrderedTree<i32> = OrderedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Greater)
    }

    /// Creates an empty tree with space for at least `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Greater)
    }

    /// Creates a tree holding a single value
    pub fn from_value(value: T) -> Self {
        let mut tree = Self::with_capacity(1);
        tree.root = tree.nodes.push(InnerNode::new(value, Ptr::null()));
        tree
    }
}

impl<T: PartialOrd + Clone> OrderedTree<T> {
    /// Creates a tree by inserting each value of the slice in order
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_slice(&[8, 3, 2, 5, 6, 12, 15]);
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.key(), Ok(&8));
    /// ```
    pub fn from_slice(values: &[T]) -> Self {
        let mut tree = Self::with_capacity(values.len());
        tree.extend(values.iter().cloned());
        tree
    }
}

impl<T, C> OrderedTree<T, C> {
    /// Creates an empty tree ordered by the given comparator
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: Slab::new(),
            root: Ptr::null(),
            cmp,
        }
    }

    /// Creates an empty tree ordered by the given comparator with space for at least `capacity`
    /// nodes
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: Ptr::null(),
            cmp,
        }
    }

    /// Returns the comparator that orders this tree
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of nodes in the tree
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.nodes.is_empty() == self.root.is_null());
        self.root.is_null()
    }

    /// Returns the number of nodes the tree can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the key stored at the root of the tree
    ///
    /// Fails with [`TreeError::NotFound`] if the tree is empty.
    pub fn key(&self) -> Result<&T, TreeError> {
        self.root()
            .map(|root| root.key())
            .ok_or_else(TreeError::not_found_unknown)
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom traversals. For a
    /// guaranteed ordering, use the various iteration methods.
    pub fn root(&self) -> Option<Node<'_, T, C>> {
        self.root.non_null().map(|ptr| Node::new(self, ptr))
    }

    /// Returns a mutable handle to the root node, or `None` if the tree is empty
    pub fn root_mut(&mut self) -> Option<NodeMut<'_, T, C>> {
        let root = self.root.non_null()?;
        Some(NodeMut::new(self, root))
    }

    /// Returns the node with the leftmost (smallest) key, or `None` if the tree is empty
    ///
    /// Time complexity: `O(height)`
    pub fn min(&self) -> Option<Node<'_, T, C>> {
        self.root().map(|root| root.min())
    }

    /// Returns the node with the rightmost (largest) key, or `None` if the tree is empty
    ///
    /// Time complexity: `O(height)`
    pub fn max(&self) -> Option<Node<'_, T, C>> {
        self.root().map(|root| root.max())
    }

    /// Counts the nodes reachable from the root
    ///
    /// Always equal to [`len`](Self::len), but computed by walking the tree.
    pub fn node_count(&self) -> usize {
        self.subtree_node_count(self.root)
    }

    /// Counts the nodes that have no children
    pub fn leaf_count(&self) -> usize {
        self.subtree_leaf_count(self.root)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf
    ///
    /// The empty tree has height 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<'_, T> {
        IterPreorder::new(&self.nodes, self.root)
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<'_, T> {
        IterInorder::new(&self.nodes, self.root)
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<'_, T> {
        IterPostorder::new(&self.nodes, self.root)
    }

    /// Returns an iterator over the keys in comparator order
    ///
    /// Unlike [`iter_inorder`](Self::iter_inorder), this steps from node to node through
    /// successor links and can also be consumed from the back.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self)
    }

    /// Returns a cursor pointing at the first node, or at the end marker if the tree is empty
    pub fn cursor_front(&self) -> Cursor<'_, T, C> {
        Cursor::new(self, self.min_ptr(self.root))
    }

    /// Returns a cursor pointing at the last node, or at the end marker if the tree is empty
    pub fn cursor_back(&self) -> Cursor<'_, T, C> {
        Cursor::new(self, self.max_ptr(self.root))
    }

    /// Returns a cursor pointing at the end marker
    pub fn cursor_end(&self) -> Cursor<'_, T, C> {
        Cursor::new(self, Ptr::null())
    }

    /// Removes every node from the tree
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = Ptr::null();
    }

    /// Follows left links from `ptr` until there are none, null if `ptr` is null
    fn min_ptr(&self, ptr: Ptr) -> Ptr {
        let mut current = ptr;
        while let Some(node) = self.nodes.get(current) {
            if node.left.is_null() {
                break;
            }
            current = node.left;
        }
        current
    }

    /// Follows right links from `ptr` until there are none, null if `ptr` is null
    fn max_ptr(&self, ptr: Ptr) -> Ptr {
        let mut current = ptr;
        while let Some(node) = self.nodes.get(current) {
            if node.right.is_null() {
                break;
            }
            current = node.right;
        }
        current
    }

    /// Returns the node that follows `ptr` in comparator order, or null if `ptr` is the last node
    fn successor_ptr(&self, ptr: Ptr) -> Ptr {
        let node = &self.nodes[ptr];
        if !node.right.is_null() {
            return self.min_ptr(node.right);
        }

        // Walk up while we are coming from a right subtree
        let mut child = ptr;
        let mut parent = node.parent;
        while let Some(parent_ptr) = parent.non_null() {
            let parent_node = &self.nodes[parent_ptr];
            if parent_node.right != child {
                break;
            }
            child = parent_ptr;
            parent = parent_node.parent;
        }

        parent
    }

    /// Returns the node that precedes `ptr` in comparator order, or null if `ptr` is the first node
    fn predecessor_ptr(&self, ptr: Ptr) -> Ptr {
        let node = &self.nodes[ptr];
        if !node.left.is_null() {
            return self.max_ptr(node.left);
        }

        // Walk up while we are coming from a left subtree
        let mut child = ptr;
        let mut parent = node.parent;
        while let Some(parent_ptr) = parent.non_null() {
            let parent_node = &self.nodes[parent_ptr];
            if parent_node.left != child {
                break;
            }
            child = parent_ptr;
            parent = parent_node.parent;
        }

        parent
    }

    fn subtree_node_count(&self, root: Ptr) -> usize {
        IterPreorder::new(&self.nodes, root).count()
    }

    fn subtree_leaf_count(&self, root: Ptr) -> usize {
        let mut stack: Vec<Ptr> = root.non_null().into_iter().collect();
        let mut leaves = 0;
        while let Some(ptr) = stack.pop() {
            let node = &self.nodes[ptr];
            if node.is_leaf() {
                leaves += 1;
            }
            stack.extend(node.right.non_null());
            stack.extend(node.left.non_null());
        }

        leaves
    }

    // Uses an explicit stack since degenerate trees can be as deep as they are long
    fn subtree_height(&self, root: Ptr) -> usize {
        let mut stack: Vec<(Ptr, usize)> = root.non_null().map(|ptr| (ptr, 1)).into_iter().collect();
        let mut height = 0;
        while let Some((ptr, depth)) = stack.pop() {
            height = height.max(depth);

            let node = &self.nodes[ptr];
            stack.extend(node.right.non_null().map(|ptr| (ptr, depth + 1)));
            stack.extend(node.left.non_null().map(|ptr| (ptr, depth + 1)));
        }

        height
    }

    /// Puts the subtree at `new` in the place of the subtree at `old`
    ///
    /// Only the link from `old`'s parent and `new`'s parent link are updated. The links of `old`
    /// itself are left untouched.
    fn transplant(&mut self, old: Ptr, new: Ptr) {
        let parent = self.nodes[old].parent;
        match parent.non_null() {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == old {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            },
        }

        if let Some(new) = self.nodes.get_mut(new) {
            new.parent = parent;
        }
    }

    /// Detaches the subtree at `ptr` from its parent and frees every node in it
    fn remove_subtree(&mut self, ptr: Ptr) -> usize {
        let parent = self.nodes[ptr].parent;
        match parent.non_null() {
            None => self.root = Ptr::null(),
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == ptr {
                    parent.left = Ptr::null();
                } else {
                    parent.right = Ptr::null();
                }
            },
        }

        let mut removed = 0;
        let mut stack = vec![ptr];
        while let Some(ptr) = stack.pop() {
            let node = self.nodes.remove(ptr);
            stack.extend(node.left.non_null());
            stack.extend(node.right.non_null());
            removed += 1;
        }

        debug!("removed subtree of {} nodes", removed);
        removed
    }
}

impl<T, C: Compare<T>> OrderedTree<T, C> {
    /// Inserts a value into the tree
    ///
    /// The value goes right of every key it is greater than and left of everything else, so equal
    /// values end up in the left subtree of the ones inserted before them.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(37);
    /// tree.insert(37);
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.is_present(&37));
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut parent = Ptr::null();
        let mut go_right = false;
        let mut depth = 0;

        let mut current = self.root;
        while let Some(ptr) = current.non_null() {
            let node = &self.nodes[ptr];
            go_right = self.cmp.greater(&value, &node.key);

            parent = ptr;
            current = if go_right { node.right } else { node.left };
            depth += 1;
        }

        let ptr = self.nodes.push(InnerNode::new(value, parent));
        match parent.non_null() {
            None => self.root = ptr,
            Some(parent) if go_right => self.nodes[parent].right = ptr,
            Some(parent) => self.nodes[parent].left = ptr,
        }

        trace!("inserted value at depth {}", depth);
    }

    /// Finds the first node on the search path whose key is equivalent to `value`
    fn find_ptr(&self, value: &T) -> Ptr {
        let mut current = self.root;
        while let Some(ptr) = current.non_null() {
            let node = &self.nodes[ptr];
            if self.cmp.equivalent(value, &node.key) {
                return ptr;
            }

            current = if self.cmp.greater(value, &node.key) {
                node.right
            } else {
                node.left
            };
        }

        Ptr::null()
    }

    /// Deletes the node at `ptr`, relinking its children, and returns its key
    ///
    /// A node with two children is normally replaced by its successor. If the successor has an
    /// equivalent parent inside the right subtree, moving it up would leave that key in its
    /// right subtree, so the predecessor takes the node's place instead.
    fn delete_node(&mut self, ptr: Ptr) -> T {
        let InnerNode {left, right, ..} = self.nodes[ptr];

        if left.is_null() {
            debug!("deleting node without a left child");
            self.transplant(ptr, right);
        } else if right.is_null() {
            debug!("deleting node without a right child");
            self.transplant(ptr, left);
        } else if self.successor_has_equivalent_parent(ptr, right) {
            let predecessor = self.max_ptr(left);
            debug!("deleting node with two children, replacing it with its predecessor");

            if self.nodes[predecessor].parent != ptr {
                // Detach the predecessor, its left subtree takes its place
                let predecessor_left = self.nodes[predecessor].left;
                self.transplant(predecessor, predecessor_left);

                self.nodes[predecessor].left = left;
                self.nodes[left].parent = predecessor;
            }

            self.transplant(ptr, predecessor);
            self.nodes[predecessor].right = right;
            self.nodes[right].parent = predecessor;
        } else {
            let successor = self.min_ptr(right);
            debug!("deleting node with two children, replacing it with its successor");

            if self.nodes[successor].parent != ptr {
                // Detach the successor, its right subtree takes its place
                let successor_right = self.nodes[successor].right;
                self.transplant(successor, successor_right);

                self.nodes[successor].right = right;
                self.nodes[right].parent = successor;
            }

            self.transplant(ptr, successor);
            self.nodes[successor].left = left;
            self.nodes[left].parent = successor;
        }

        // The children have been relinked elsewhere, only this node is freed
        self.nodes.remove(ptr).key
    }

    /// Returns true if the leftmost node of `right` (the right child of `ptr`) has a parent other
    /// than `ptr` holding an equivalent key
    ///
    /// Keys only grow going up the left spine, so the direct parent is the only candidate.
    fn successor_has_equivalent_parent(&self, ptr: Ptr, right: Ptr) -> bool {
        let successor = &self.nodes[self.min_ptr(right)];
        if successor.parent == ptr {
            return false;
        }

        self.cmp.equivalent(&successor.key, &self.nodes[successor.parent].key)
    }

    /// Returns the node holding a key equivalent to `value`
    ///
    /// Fails with [`TreeError::NotFound`] (carrying `value`) if no such key is in the tree.
    ///
    /// Time complexity: `O(height)`
    pub fn binary_search(&self, value: &T) -> Result<Node<'_, T, C>, TreeError>
        where T: fmt::Debug,
    {
        match self.find_ptr(value).non_null() {
            Some(ptr) => Ok(Node::new(self, ptr)),
            None => {
                trace!("{:?} is not in the tree", value);
                Err(TreeError::not_found(value))
            },
        }
    }

    /// Returns a mutable handle to the node holding a key equivalent to `value`
    ///
    /// Fails with [`TreeError::NotFound`] if no such key is in the tree.
    pub fn binary_search_mut(&mut self, value: &T) -> Result<NodeMut<'_, T, C>, TreeError>
        where T: fmt::Debug,
    {
        match self.find_ptr(value).non_null() {
            Some(ptr) => Ok(NodeMut::new(self, ptr)),
            None => Err(TreeError::not_found(value)),
        }
    }

    /// Returns `true` if the tree contains a key equivalent to `value`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_slice(&[8, 3, 12]);
    /// assert!(tree.is_present(&3));
    /// assert!(!tree.is_present(&4));
    /// ```
    pub fn is_present(&self, value: &T) -> bool {
        !self.find_ptr(value).is_null()
    }

    /// Deletes the node holding a key equivalent to `key` and returns the stored key
    ///
    /// Fails with [`TreeError::NotFound`] and leaves the tree unchanged if no such key is in the
    /// tree. When duplicates exist, the one closest to the root is deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from_slice(&[8, 3, 2, 5, 6, 12, 15]);
    /// assert_eq!(tree.delete_key(&8), Ok(8));
    /// assert!(!tree.is_present(&8));
    /// assert!(tree.delete_key(&14).is_err());
    /// ```
    pub fn delete_key(&mut self, key: &T) -> Result<T, TreeError>
        where T: fmt::Debug,
    {
        let ptr = match self.find_ptr(key).non_null() {
            Some(ptr) => ptr,
            None => return Err(TreeError::not_found(key)),
        };

        Ok(self.delete_node(ptr))
    }

    /// Returns `true` if the order and parent-link invariants hold for every node and every
    /// stored node is reachable from the root
    pub fn check_invariants(&self) -> bool {
        match self.root.non_null() {
            None => return self.nodes.is_empty(),
            Some(root) => match self.nodes.get(root) {
                Some(node) if node.parent.is_null() => {},
                _ => return false,
            },
        }

        // Each entry carries the bounds imposed by its ancestors: keys must be greater than the
        // lower bound and not greater than the upper bound
        let mut stack: Vec<(Ptr, Option<&T>, Option<&T>)> = vec![(self.root, None, None)];
        let mut visited = 0;
        while let Some((ptr, lower, upper)) = stack.pop() {
            let node = match self.nodes.get(ptr) {
                Some(node) => node,
                None => return false,
            };

            visited += 1;
            if visited > self.nodes.len() {
                // A cycle or a node linked from two places
                return false;
            }

            if let Some(lower) = lower {
                if !self.cmp.greater(&node.key, lower) {
                    return false;
                }
            }
            if let Some(upper) = upper {
                if self.cmp.greater(&node.key, upper) {
                    return false;
                }
            }

            if let Some(left) = node.left.non_null() {
                if self.nodes.get(left).map(|child| child.parent) != Some(ptr) {
                    return false;
                }
                stack.push((left, lower, Some(&node.key)));
            }
            if let Some(right) = node.right.non_null() {
                if self.nodes.get(right).map(|child| child.parent) != Some(ptr) {
                    return false;
                }
                stack.push((right, Some(&node.key), upper));
            }
        }

        visited == self.nodes.len()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Compare<T>> Extend<T> for OrderedTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for OrderedTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}
