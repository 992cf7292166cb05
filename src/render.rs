//! Text rendering of an [`OrderedTree`] as a grid of labels
//!
//! Each level of the tree becomes a row. The root sits in the middle column of the first row and
//! each subtree is laid out recursively in the half of the columns on its side, so a node's
//! descendants always stay within the columns between its neighbours.

use std::convert::TryFrom;
use std::fmt;

use log::warn;

use crate::error::TreeError;
use crate::tree::{Node, OrderedTree};

/// Trees taller than this are never laid out, whatever [`RenderOptions::max_height`] says
///
/// A grid this tall already has over a million cells.
pub const HEIGHT_LIMIT: usize = 16;

/// The number of columns used for a tree of height `h`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridWidth {
    /// `2^h - 1` columns: every parent is centered exactly above its children
    Odd,
    /// `2^h` columns
    Even,
}

impl Default for GridWidth {
    fn default() -> Self {
        GridWidth::Odd
    }
}

impl GridWidth {
    /// Returns the number of columns for a tree of the given height, or `None` if it would not fit
    /// in a `usize`
    pub fn columns(self, height: usize) -> Option<usize> {
        let full = 1usize.checked_shl(u32::try_from(height).ok()?)?;
        match self {
            GridWidth::Odd => Some(full - 1),
            GridWidth::Even => Some(full),
        }
    }
}

/// Controls how a tree is laid out and written
///
/// # Examples
///
/// ```
/// use ordered_tree::{OrderedTree, RenderOptions};
///
/// let tree = OrderedTree::from_slice(&[2, 1, 3]);
/// let options = RenderOptions::default().separator("-").pad(false);
/// assert_eq!(tree.display(&options).to_string(), "-2-\n1--3\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    width: GridWidth,
    separator: String,
    empty_label: String,
    max_height: usize,
    pad: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: GridWidth::default(),
            separator: String::from(" "),
            empty_label: String::from("empty tree"),
            max_height: 10,
            pad: true,
        }
    }
}

impl RenderOptions {
    pub fn width(mut self, width: GridWidth) -> Self {
        self.width = width;
        self
    }

    /// Sets the text written between two cells of a row
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the line written in place of an empty tree
    pub fn empty_label(mut self, empty_label: impl Into<String>) -> Self {
        self.empty_label = empty_label.into();
        self
    }

    /// Sets the tallest tree that will be laid out
    ///
    /// The number of columns doubles with every level, so this should stay small. Values above
    /// [`HEIGHT_LIMIT`] act like [`HEIGHT_LIMIT`].
    pub fn max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// Sets whether every cell is padded with spaces to the width of the widest label
    pub fn pad(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }
}

/// A tree laid out in rows (one per level) and columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Option<String>>>,
    separator: String,
    pad: bool,
}

impl Grid {
    /// Lays out the tree using the `Display` implementation of its keys
    pub fn build<T: fmt::Display, C>(tree: &OrderedTree<T, C>, options: &RenderOptions) -> Result<Self, TreeError> {
        Self::build_with(tree, options, |key| key.to_string())
    }

    /// Lays out the tree using `stringify` to produce the label of each key
    pub fn build_with<T, C, F>(tree: &OrderedTree<T, C>, options: &RenderOptions, mut stringify: F) -> Result<Self, TreeError>
        where F: FnMut(&T) -> String,
    {
        let height = tree.height();
        let limit = options.max_height.min(HEIGHT_LIMIT);
        let too_tall = TreeError::TooTall {height, limit};
        if height > limit {
            warn!("not rendering tree of height {} (limit {})", height, limit);
            return Err(too_tall);
        }
        let columns = options.width.columns(height).ok_or(too_tall)?;

        let mut cells = vec![vec![None; columns]; height];
        fill(tree.root(), &mut cells, 0, 0, columns, &mut stringify);

        Ok(Self {
            cells,
            separator: options.separator.clone(),
            pad: options.pad,
        })
    }

    /// Returns the number of rows, which is the height of the tree
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of columns in each row
    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    /// Returns the label in the given cell, or `None` if the cell is blank or out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.cells.get(row)?.get(column)?.as_deref()
    }

    /// Returns the column of every label in the given row, in order
    pub fn occupied(&self, row: usize) -> Vec<usize> {
        self.cells.get(row).map_or_else(Vec::new, |row| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_some())
                .map(|(column, _)| column)
                .collect()
        })
    }
}

/// Places `node` at the middle of the columns `[offset, width)` of row `level`, then its subtrees
/// in each half
fn fill<T, C, F>(
    node: Option<Node<'_, T, C>>,
    cells: &mut [Vec<Option<String>>],
    level: usize,
    offset: usize,
    width: usize,
    stringify: &mut F,
) where F: FnMut(&T) -> String {
    let node = match node {
        Some(node) => node,
        None => return,
    };

    let column = (offset + width) / 2;
    if let Some(cell) = cells.get_mut(level).and_then(|row| row.get_mut(column)) {
        *cell = Some(stringify(node.key()));
    }

    fill(node.left(), cells, level + 1, offset, column, stringify);
    fill(node.right(), cells, level + 1, (offset + width + 1) / 2, width, stringify);
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = if self.pad {
            self.cells.iter()
                .flatten()
                .flatten()
                .map(|label| label.chars().count())
                .max()
                .unwrap_or(0)
        } else {
            0
        };

        for row in &self.cells {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str(&self.separator);
                }

                let label = cell.as_deref().unwrap_or("");
                line.push_str(label);
                for _ in label.chars().count()..cell_width {
                    line.push(' ');
                }
            }

            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

/// Helper for writing a tree with `format!` and `{}`
///
/// Created by [`OrderedTree::display`].
pub struct TreeDisplay<'a, T, C> {
    tree: &'a OrderedTree<T, C>,
    options: &'a RenderOptions,
}

impl<'a, T: fmt::Display, C> fmt::Display for TreeDisplay<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tree.is_empty() {
            return writeln!(f, "{}", self.options.empty_label);
        }

        match Grid::build(self.tree, self.options) {
            Ok(grid) => fmt::Display::fmt(&grid, f),
            Err(err) => writeln!(f, "<{}>", err),
        }
    }
}

impl<T, C> OrderedTree<T, C> {
    /// Returns an object that writes the tree with the given options
    pub fn display<'a>(&'a self, options: &'a RenderOptions) -> TreeDisplay<'a, T, C> {
        TreeDisplay {tree: self, options}
    }

    /// Lays out the tree in a grid, see [`Grid::build`]
    pub fn render(&self, options: &RenderOptions) -> Result<Grid, TreeError>
        where T: fmt::Display,
    {
        Grid::build(self, options)
    }
}

impl<T: fmt::Display, C> fmt::Display for OrderedTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(&RenderOptions::default()), f)
    }
}
