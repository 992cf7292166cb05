//! The order relation used to place values in an [`OrderedTree`](crate::OrderedTree)
//!
//! A comparator answers a single question: does `a` sort to the right of `b`? Values for which
//! the answer is `true` go into the right subtree, everything else (including ties) goes into the
//! left subtree.

use std::fmt;

/// A strict order relation with "greater-than" semantics
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` sorts to the right of `b`
    fn greater(&self, a: &T, b: &T) -> bool;

    /// Returns `true` if neither value sorts to the right of the other
    ///
    /// This is the notion of key equality used by searches and deletions.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.greater(a, b) && !self.greater(b, a)
    }
}

impl<'a, T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &'a C {
    fn greater(&self, a: &T, b: &T) -> bool {
        (**self).greater(a, b)
    }

    fn equivalent(&self, a: &T, b: &T) -> bool {
        (**self).equivalent(a, b)
    }
}

/// The default relation: `a > b`, so in-order traversal yields ascending values
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// The reversed relation: `a < b`, so in-order traversal yields descending values
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Adapts a closure `Fn(&T, &T) -> bool` with "greater-than" semantics into a [`Compare`]
///
/// Created with [`by`].
#[derive(Clone, Copy, Default)]
pub struct CompareFn<F>(pub F);

impl<F> fmt::Debug for CompareFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompareFn").field(&"..").finish()
    }
}

impl<T: ?Sized, F> Compare<T> for CompareFn<F>
    where F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Creates a comparator from a closure that returns `true` when its first argument sorts to the
/// right of its second argument
///
/// # Examples
///
/// ```
/// use ordered_tree::{OrderedTree, compare};
///
/// // Order strings by length
/// let mut tree = OrderedTree::with_comparator(compare::by(|a: &String, b: &String| a.len() > b.len()));
/// tree.insert("ccc".to_string());
/// tree.insert("a".to_string());
/// tree.insert("bb".to_string());
///
/// let values: Vec<_> = tree.iter().map(String::as_str).collect();
/// assert_eq!(values, ["a", "bb", "ccc"]);
/// ```
pub fn by<T: ?Sized, F>(f: F) -> CompareFn<F>
    where F: Fn(&T, &T) -> bool,
{
    CompareFn(f)
}
