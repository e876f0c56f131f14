//! Resumable pre-order cursor.
//!
//! A [`Cursor`] is a position, not a borrow: it records the tree it belongs
//! to, the node it was started from and the child indices leading from that
//! node to the current one. Every operation re-resolves the path against the
//! tree, so the tree can be mutated between calls. A path that no longer
//! resolves (a child list got shorter, or a subtree was grafted elsewhere)
//! fails with [`TreeError::ChildOutOfRange`] instead of reaching the wrong
//! memory.
//!
//! The end position is the single index one past the last child of the
//! cursor root, `[children(root).len()]`. It is never nested, so comparing
//! against end is O(1) whatever the depth of the tree.

use tracing::{instrument, trace};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node::{Node, NodeId};
use crate::domain::tree::{Tree, TreeId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor {
    tree: TreeId,
    root: NodeId,
    path: Vec<usize>,
}

impl Cursor {
    fn new(tree: TreeId, root: NodeId, path: Vec<usize>) -> Self {
        Self { tree, root, path }
    }

    /// Node the cursor descends from.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Child indices from the cursor root to the current position.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Distance from the cursor root; 0 at the root itself.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    fn check<T>(&self, tree: &Tree<T>) -> TreeResult<()> {
        if self.tree != tree.id() {
            return Err(TreeError::ForeignCursor);
        }
        Ok(())
    }

    /// True once the cursor sits on the end sentinel of its root.
    pub fn is_end<T>(&self, tree: &Tree<T>) -> bool {
        match self.path.as_slice() {
            [index] => *index >= tree.children(self.root).len(),
            _ => false,
        }
    }

    // ids from the cursor root down to the current node, one per path level plus the root
    fn lineage<T>(&self, tree: &Tree<T>) -> TreeResult<Vec<NodeId>> {
        self.check(tree)?;
        let mut current = tree.node(self.root).map(|_| self.root)?;
        let mut lineage = Vec::with_capacity(self.path.len() + 1);
        lineage.push(current);
        for &index in &self.path {
            current = tree.child(current, index)?;
            lineage.push(current);
        }
        Ok(lineage)
    }

    /// Resolves the current position to a node id.
    pub fn resolve<T>(&self, tree: &Tree<T>) -> TreeResult<NodeId> {
        let lineage = self.lineage(tree)?;
        // lineage always holds at least the cursor root
        Ok(lineage[lineage.len() - 1])
    }

    pub fn get<'a, T>(&self, tree: &'a Tree<T>) -> TreeResult<&'a Node<T>> {
        let id = self.resolve(tree)?;
        tree.node(id)
    }

    pub fn value<'a, T>(&self, tree: &'a Tree<T>) -> TreeResult<&'a T> {
        self.get(tree).map(Node::value)
    }

    /// Moves to the pre-order successor.
    ///
    /// Descends into the first child when there is one, otherwise climbs
    /// until a level with a next sibling is found. When the climb runs out
    /// of levels the cursor lands on end. Advancing from end fails with
    /// [`TreeError::CursorAtEnd`].
    #[instrument(level = "trace", skip(self, tree), fields(path = ?self.path))]
    pub fn advance<T>(&mut self, tree: &Tree<T>) -> TreeResult<()> {
        self.check(tree)?;
        if self.is_end(tree) {
            return Err(TreeError::CursorAtEnd);
        }
        let lineage = self.lineage(tree)?;

        let current = lineage[lineage.len() - 1];
        if !tree.children(current).is_empty() {
            self.path.push(0);
            trace!(path = ?self.path, "Descended to first child");
            return Ok(());
        }

        while let Some(&index) = self.path.last() {
            let parent = lineage[self.path.len() - 1];
            if index + 1 < tree.children(parent).len() {
                if let Some(last) = self.path.last_mut() {
                    *last += 1;
                }
                trace!(path = ?self.path, "Moved to next sibling");
                return Ok(());
            }
            self.path.pop();
        }

        self.path.push(tree.children(self.root).len());
        trace!(path = ?self.path, "Reached end");
        Ok(())
    }

    /// Advances `n` times, stopping at the first failure.
    pub fn advance_by<T>(&mut self, tree: &Tree<T>, n: usize) -> TreeResult<()> {
        for _ in 0..n {
            self.advance(tree)?;
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Cursor on the root, the first pre-order position.
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.id(), self.root(), Vec::new())
    }

    /// End sentinel of the whole tree.
    ///
    /// Computed from the current child count of the root: appending to the
    /// root moves the end position.
    pub fn end(&self) -> Cursor {
        let len = self.children(self.root()).len();
        Cursor::new(self.id(), self.root(), vec![len])
    }

    /// First position of a walk over the subtree rooted at `node`.
    pub fn begin_at(&self, node: NodeId) -> TreeResult<Cursor> {
        self.node(node)?;
        Ok(Cursor::new(self.id(), node, Vec::new()))
    }

    /// End sentinel of a walk over the subtree rooted at `node`.
    pub fn end_at(&self, node: NodeId) -> TreeResult<Cursor> {
        let len = self.node(node)?.children().len();
        Ok(Cursor::new(self.id(), node, vec![len]))
    }

    /// Appends `value` below `parent` and returns a whole-tree cursor on the
    /// new child, ready to resume a walk from there.
    pub fn put(&mut self, parent: NodeId, value: T) -> TreeResult<Cursor> {
        let child = self.append(parent, value)?;
        self.cursor_at(child)
    }

    /// Whole-tree cursor positioned on `node`, its path rebuilt from the
    /// parent links.
    pub fn cursor_at(&self, node: NodeId) -> TreeResult<Cursor> {
        let path = self.path_of(node)?;
        Ok(Cursor::new(self.id(), self.root(), path))
    }
}
