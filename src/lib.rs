//! Ordered rose tree with parent lookup and resumable pre-order cursors.
//!
//! ```
//! use yatree::Tree;
//!
//! let sum = Tree::new("+").with_child("1").with_child("2");
//! let product = Tree::new("*").with_child("3").with_subtree(sum);
//!
//! let values: Vec<_> = product.iter().map(|(_, v)| *v).collect();
//! assert_eq!(values, ["*", "3", "+", "1", "2"]);
//! assert_eq!(yatree::render::infix(&product).to_string(), "(3*(1+2))");
//! ```

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod util;

pub use domain::{Cursor, Node, NodeId, Tree, TreeError, TreeId, TreeResult};
