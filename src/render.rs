//! Text renderings of a tree, built only from `children()` and values.

use std::fmt::{self, Display};

use itertools::Itertools;
use termtree::Tree as TermTree;
use tracing::instrument;

use crate::domain::{NodeId, Tree};

pub trait TreeRender {
    fn to_tree_string(&self) -> TermTree<String>;
}

impl<T: Display> TreeRender for Tree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> TermTree<String> {
        fn build<T: Display>(tree: &Tree<T>, id: NodeId) -> TermTree<String> {
            let node = &tree[id];
            let leaves: Vec<_> = node.children().iter().map(|&c| build(tree, c)).collect();
            TermTree::new(node.value().to_string()).with_leaves(leaves)
        }
        build(self, self.root())
    }
}

/// Pre-order values separated by single spaces, e.g. `* 3 + 1 2`.
pub fn prefix<T: Display>(tree: &Tree<T>) -> String {
    tree.iter().map(|(_, value)| value).join(" ")
}

/// Arithmetic-style rendering: a leaf prints its value, an inner node prints
/// its children in parentheses, separated by its own value.
///
/// `*(3, +(1, 2))` renders as `(3*(1+2))`.
pub fn infix<T: Display>(tree: &Tree<T>) -> Infix<'_, T> {
    Infix { tree }
}

pub struct Infix<'a, T> {
    tree: &'a Tree<T>,
}

impl<T: Display> Infix<'_, T> {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        let node = &self.tree[id];
        if node.is_leaf() {
            return write!(f, "{}", node.value());
        }
        f.write_str("(")?;
        for (i, &child) in node.children().iter().enumerate() {
            if i > 0 {
                write!(f, "{}", node.value())?;
            }
            self.write_node(f, child)?;
        }
        f.write_str(")")
    }
}

impl<T: Display> Display for Infix<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.tree.root())
    }
}
