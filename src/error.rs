use std::fmt;

use thiserror::Error;

/// Errors produced by [`OrderedTree`](crate::OrderedTree) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A key was requested that does not exist in the tree
    ///
    /// Raised by searches and deletions for an absent key, by `key()` on an empty tree and by
    /// `successor()`/`predecessor()` on the last/first node. Carries the searched value when one
    /// was available.
    #[error("value searched does not exist in the tree")]
    NotFound {
        value: Option<String>,
    },

    /// The tree is too tall to be laid out in a grid
    #[error("tree of height {height} exceeds the render limit of {limit}")]
    TooTall {
        height: usize,
        limit: usize,
    },
}

impl TreeError {
    /// A `NotFound` error for the given searched value
    pub fn not_found<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        TreeError::NotFound {value: Some(format!("{:?}", value))}
    }

    /// A `NotFound` error with no value attached
    pub fn not_found_unknown() -> Self {
        TreeError::NotFound {value: None}
    }

    /// Returns a description of the value that caused the error
    pub fn info(&self) -> String {
        match self {
            TreeError::NotFound {value: Some(value)} => {
                format!("the value that raised the error is {}", value)
            },
            TreeError::NotFound {value: None} => String::from("unknown value"),
            TreeError::TooTall {height, ..} => format!("height {}", height),
        }
    }

    /// Returns true if this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NotFound {..})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = TreeError::not_found(&14);
        assert_eq!(err.to_string(), "value searched does not exist in the tree");
        assert_eq!(err.info(), "the value that raised the error is 14");
        assert!(err.is_not_found());

        let err = TreeError::not_found("Tokyo");
        assert_eq!(err.info(), "the value that raised the error is \"Tokyo\"");

        let err = TreeError::not_found_unknown();
        assert_eq!(err.info(), "unknown value");

        let err = TreeError::TooTall {height: 40, limit: 10};
        assert_eq!(err.to_string(), "tree of height 40 exceeds the render limit of 10");
        assert!(!err.is_not_found());
    }
}
