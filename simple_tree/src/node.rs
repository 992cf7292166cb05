#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    key: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &T {
        &self.key
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    pub(crate) fn left_link(&mut self) -> &mut Option<Box<Self>> {
        &mut self.left
    }

    pub(crate) fn right_link(&mut self) -> &mut Option<Box<Self>> {
        &mut self.right
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_left(&mut self, new_node: Self) {
        debug_assert!(self.left.is_none());
        self.left = Some(Box::new(new_node));
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_right(&mut self, new_node: Self) {
        debug_assert!(self.right.is_none());
        self.right = Some(Box::new(new_node));
    }
}

impl<T: Ord> Node<T> {
    /// Takes this node out of its subtree, returning the subtree that should take its place and
    /// the key of this node
    ///
    /// A node with two children is replaced by the leftmost node of its right subtree, unless
    /// that node's parent holds an equal key. Then the rightmost node of its left subtree is used
    /// so the equal key does not end up to its right.
    pub(crate) fn unlink(self) -> (Option<Box<Self>>, T) {
        let Node {key, left, right} = self;
        match (left, right) {
            (None, right) => (right, key),
            (left, None) => (left, key),
            (Some(left), Some(right)) if right.min_has_equal_parent() => {
                let (mut predecessor, rest) = left.take_max();
                predecessor.left = rest;
                predecessor.right = Some(right);
                (Some(predecessor), key)
            },
            (Some(left), Some(right)) => {
                let (mut successor, rest) = right.take_min();
                successor.left = Some(left);
                successor.right = rest;
                (Some(successor), key)
            },
        }
    }

    /// Returns true if the leftmost node of this subtree is not its root and its parent holds an
    /// equal key
    fn min_has_equal_parent(&self) -> bool {
        let mut parent = self;
        let mut current = match self.left() {
            Some(left) => left,
            None => return false,
        };
        while let Some(left) = current.left() {
            parent = current;
            current = left;
        }

        parent.key == current.key
    }
}

impl<T> Node<T> {
    /// Detaches the leftmost node of this subtree, returning it and what remains of the subtree
    fn take_min(mut self: Box<Self>) -> (Box<Self>, Option<Box<Self>>) {
        match self.left.take() {
            None => {
                let right = self.right.take();
                (self, right)
            },

            Some(left) => {
                let (min, rest) = left.take_min();
                self.left = rest;
                (min, Some(self))
            },
        }
    }

    /// Detaches the rightmost node of this subtree, returning it and what remains of the subtree
    fn take_max(mut self: Box<Self>) -> (Box<Self>, Option<Box<Self>>) {
        match self.right.take() {
            None => {
                let left = self.left.take();
                (self, left)
            },

            Some(right) => {
                let (max, rest) = right.take_max();
                self.right = rest;
                (max, Some(self))
            },
        }
    }
}
