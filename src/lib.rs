//! An unbalanced binary search tree with parent links
//!
//! [`OrderedTree`] stores values in the order defined by a [`Compare`] relation, allows
//! duplicates, and can be walked in pre-order, in-order and post-order, stepped through with a
//! [`Cursor`](tree::Cursor), or written out as a text grid with [`render`].

pub mod compare;
pub mod render;
pub mod tree;

mod error;
mod slab;

pub use compare::{Compare, Greater, Less};
pub use error::TreeError;
pub use render::{Grid, GridWidth, RenderOptions};
pub use tree::OrderedTree;

/// Creates an [`OrderedTree`] ordered by `>` by inserting the given values in order
///
/// # Examples
///
/// ```
/// use ordered_tree::ordered_tree;
///
/// let tree = ordered_tree![8, 3, 12];
/// assert_eq!(tree.key(), Ok(&8));
/// ```
#[macro_export(local_inner_macros)]
macro_rules! ordered_tree {
    (@single $($x:tt)*) => (());
    (@count $($rest:expr),*) => (<[()]>::len(&[$(ordered_tree!(@single $rest)),*]));

    ($($value:expr,)+) => { ordered_tree!($($value),+) };
    ($($value:expr),*) => {
        {
            let _cap = ordered_tree!(@count $($value),*);
            let mut _tree = $crate::OrderedTree::with_capacity(_cap);
            $(
                _tree.insert($value);
            )*
            _tree
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn ordered_tree_macro() {
        let tree = ordered_tree! {
            1,
            3,
            2, // trailing comma
        };

        let items: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&items, &[1, 2, 3]);
        assert_eq!(tree.key(), Ok(&1));

        // No trailing comma
        let tree = ordered_tree![99];

        let items: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&items, &[99]);

        // Duplicates are kept
        let tree = ordered_tree![4, 4, 4];
        assert_eq!(tree.len(), 3);

        // Zero items
        let tree = ordered_tree!();

        let items: Vec<i32> = tree.iter_inorder().copied().collect();
        assert!(items.is_empty());
    }
}
