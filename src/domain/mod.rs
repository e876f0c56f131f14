//! Domain layer: the tree, its nodes and cursors
//!
//! Pure in-memory data structure, no I/O.

pub mod cursor;
pub mod error;
pub mod iter;
pub mod node;
pub mod tree;

pub use cursor::Cursor;
pub use error::{TreeError, TreeResult};
pub use iter::{Ancestors, Children, Preorder};
pub use node::{Node, NodeId};
pub use tree::{Tree, TreeId};
