use std::iter::FusedIterator;

use crate::domain::cursor::Cursor;
use crate::domain::error::TreeResult;
use crate::domain::node::NodeId;
use crate::domain::tree::Tree;

/// Pre-order iterator driven by a [`Cursor`] from begin to end.
///
/// Borrows the tree, so the structure cannot change underneath it.
pub struct Preorder<'a, T> {
    tree: &'a Tree<T>,
    cursor: Option<Cursor>,
}

impl<'a, T> Preorder<'a, T> {
    fn new(tree: &'a Tree<T>, cursor: Cursor) -> Self {
        Self {
            tree,
            cursor: Some(cursor),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        if cursor.is_end(self.tree) {
            self.cursor = None;
            return None;
        }
        let id = cursor.resolve(self.tree).ok()?;
        let value = self.tree.value(id)?;
        if cursor.advance(self.tree).is_err() {
            self.cursor = None;
        }
        Some((id, value))
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

/// Direct children of a node, left to right.
pub struct Children<'a, T> {
    tree: &'a Tree<T>,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a, T> Children<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, node: NodeId) -> Self {
        Self {
            tree,
            ids: tree.children(node).iter(),
        }
    }

    /// Yields the children's values instead of their ids.
    pub fn values(self) -> impl Iterator<Item = &'a T> + 'a {
        let tree = self.tree;
        self.ids.filter_map(move |&id| tree.value(id))
    }
}

impl<T> Iterator for Children<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<T> ExactSizeIterator for Children<'_, T> {}

/// Walks parent links upward, ending with the root.
pub struct Ancestors<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
}

impl<'a, T> Ancestors<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, node: NodeId) -> Self {
        Self {
            tree,
            next: tree.parent(node),
        }
    }
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

impl<T> Tree<T> {
    /// Pre-order iterator over the whole tree.
    pub fn iter(&self) -> Preorder<'_, T> {
        Preorder::new(self, self.begin())
    }

    /// Pre-order iterator over the subtree rooted at `node`.
    pub fn iter_from(&self, node: NodeId) -> TreeResult<Preorder<'_, T>> {
        Ok(Preorder::new(self, self.begin_at(node)?))
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = (NodeId, &'a T);
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
