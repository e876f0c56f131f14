use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};

use generational_arena::Arena;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::iter::{Ancestors, Children};
use crate::domain::node::{Node, NodeId};

/// Identity of a tree, fresh for every tree including clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(Uuid);

impl TreeId {
    fn new() -> Self {
        TreeId(Uuid::new_v4())
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered rose tree backed by a generational arena.
///
/// The arena owns every node; children are held as ordered id lists and the
/// parent link is a plain id, so there is no ownership cycle. A tree always
/// has exactly one root, created together with the tree.
#[derive(Debug)]
pub struct Tree<T> {
    /// Identity used to match cursors against their tree
    id: TreeId,
    /// Arena storage for all nodes of this tree
    arena: Arena<Node<T>>,
    /// Id of the root node
    root: NodeId,
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            id: TreeId::new(),
            arena: self.arena.clone(),
            root: self.root,
        }
    }
}

impl<T> Tree<T> {
    /// Creates a tree consisting of a single root node.
    pub fn new(value: T) -> Self {
        let mut arena = Arena::new();
        let root = NodeId(arena.insert(Node::new(value, None, 0)));
        Self {
            id: TreeId::new(),
            arena,
            root,
        }
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the tree, root included.
    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.arena.contains(node.0)
    }

    pub fn get(&self, node: NodeId) -> Option<&Node<T>> {
        self.arena.get(node.0)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut Node<T>> {
        self.arena.get_mut(node.0)
    }

    pub(crate) fn node(&self, node: NodeId) -> TreeResult<&Node<T>> {
        self.get(node).ok_or(TreeError::UnknownNode(node))
    }

    pub fn value(&self, node: NodeId) -> Option<&T> {
        self.get(node).map(Node::value)
    }

    pub fn value_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.get_mut(node).map(Node::value_mut)
    }

    /// Parent of `node`; None for the root and for ids foreign to this tree.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(Node::parent)
    }

    /// Ordered children of `node`; empty for leaves and for foreign ids.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(Node::children).unwrap_or(&[])
    }

    /// The `index`-th child of `node`.
    pub fn child(&self, node: NodeId, index: usize) -> TreeResult<NodeId> {
        let children = self.node(node)?.children();
        children
            .get(index)
            .copied()
            .ok_or(TreeError::ChildOutOfRange {
                index,
                len: children.len(),
            })
    }

    pub fn iter_children(&self, node: NodeId) -> Children<'_, T> {
        Children::new(self, node)
    }

    /// Parent, grandparent, ... up to and including the root.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_, T> {
        Ancestors::new(self, node)
    }

    /// Appends a new leaf holding `value` as the last child of `parent`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn append(&mut self, parent: NodeId, value: T) -> TreeResult<NodeId> {
        self.node(parent)?;
        Ok(self.attach(parent, value))
    }

    /// Appends a new leaf to the root and returns the tree for chaining.
    pub fn push(&mut self, value: T) -> &mut Self {
        let root = self.root;
        self.attach(root, value);
        self
    }

    /// By-value form of [`Tree::push`] for builder expressions.
    pub fn with_child(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Moves the whole of `subtree` below `parent` as its last child.
    ///
    /// Every node of `subtree` is re-inserted into this arena, so the ids it
    /// issued are not valid here. Returns the new id of the grafted root.
    #[instrument(level = "trace", skip(self, subtree))]
    pub fn append_tree(&mut self, parent: NodeId, subtree: Tree<T>) -> TreeResult<NodeId> {
        self.node(parent)?;
        Ok(self.adopt(parent, subtree))
    }

    /// Moves `subtree` below the root and returns the receiver for chaining.
    pub fn concat(&mut self, subtree: Tree<T>) -> &mut Self {
        let root = self.root;
        self.adopt(root, subtree);
        self
    }

    /// By-value form of [`Tree::concat`] for builder expressions.
    pub fn with_subtree(mut self, subtree: Tree<T>) -> Self {
        self.concat(subtree);
        self
    }

    /// Relocates the subtree rooted at `node` to the end of `parent`'s
    /// children, within this tree.
    ///
    /// The former siblings of `node` are renumbered so their recorded child
    /// index matches their new position.
    #[instrument(level = "trace", skip(self))]
    pub fn graft(&mut self, parent: NodeId, node: NodeId) -> TreeResult<NodeId> {
        self.node(parent)?;
        let old_parent = self.node(node)?.parent.ok_or(TreeError::CannotMoveRoot)?;
        if parent == node || self.ancestors(parent).any(|a| a == node) {
            return Err(TreeError::CyclicGraft { node, parent });
        }

        let old_index = self.arena[node.0].child_index;
        let siblings = &mut self.arena[old_parent.0].children;
        siblings.remove(old_index);
        let shifted: Vec<NodeId> = siblings[old_index..].to_vec();
        for (offset, sibling) in shifted.into_iter().enumerate() {
            self.arena[sibling.0].child_index = old_index + offset;
        }

        let new_index = self.arena[parent.0].children.len();
        self.arena[parent.0].children.push(node);
        let moved = &mut self.arena[node.0];
        moved.parent = Some(parent);
        moved.child_index = new_index;

        debug!(?node, ?old_parent, ?parent, new_index, "Grafted subtree");
        Ok(node)
    }

    /// Child indices leading from the root down to `node`.
    pub fn path_of(&self, node: NodeId) -> TreeResult<Vec<usize>> {
        let mut path = Vec::new();
        let mut current = self.node(node)?;
        while let Some(parent) = current.parent {
            path.push(current.child_index);
            current = self.node(parent)?;
        }
        path.reverse();
        Ok(path)
    }

    /// Number of levels; a root-only tree has depth 1.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 1)];
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for &child in self.children(id) {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }

    /// Ids of all leaf nodes, in pre-order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.iter()
            .map(|(id, _)| id)
            .filter(|&id| self.children(id).is_empty())
            .collect()
    }

    /// Calls `f` on every value of the subtree rooted at `start`, in
    /// pre-order: `start` first, then each child subtree left to right.
    pub fn traverse<F>(&self, start: NodeId, mut f: F) -> TreeResult<()>
    where
        F: FnMut(&T),
    {
        self.traverse_nodes(start, |_, node| f(&node.value))
    }

    /// Pre-order visit of the subtree rooted at `start`, exposing whole nodes.
    pub fn traverse_nodes<F>(&self, start: NodeId, mut f: F) -> TreeResult<()>
    where
        F: FnMut(NodeId, &Node<T>),
    {
        self.node(start)?;
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = &self.arena[id.0];
            f(id, node);
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(())
    }

    /// Like [`Tree::traverse`], with mutable access to the values.
    ///
    /// The visitor sees values only; the child lists it walks stay untouched.
    pub fn traverse_mut<F>(&mut self, start: NodeId, mut f: F) -> TreeResult<()>
    where
        F: FnMut(&mut T),
    {
        self.node(start)?;
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = &mut self.arena[id.0];
            f(&mut node.value);
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(())
    }

    // `parent` must be a node of this tree.
    fn attach(&mut self, parent: NodeId, value: T) -> NodeId {
        let child_index = self.arena[parent.0].children.len();
        let child = NodeId(self.arena.insert(Node::new(value, Some(parent), child_index)));
        self.arena[parent.0].children.push(child);
        child
    }

    // `parent` must be a node of this tree.
    fn adopt(&mut self, parent: NodeId, subtree: Tree<T>) -> NodeId {
        let Tree {
            id: source,
            mut arena,
            root,
        } = subtree;
        let moved = arena.len();

        let mut grafted_root = None;
        let mut stack = vec![(root, parent)];
        while let Some((old_id, new_parent)) = stack.pop() {
            let Some(old) = arena.remove(old_id.0) else {
                continue;
            };
            let new_id = self.attach(new_parent, old.value);
            grafted_root.get_or_insert(new_id);
            for &child in old.children.iter().rev() {
                stack.push((child, new_id));
            }
        }

        debug!(%source, dest = %self.id, moved, "Concatenated subtree");
        // the source root is always present, so the first pop inserts it
        grafted_root.unwrap_or(parent)
    }
}

/// `a += b` is [`Tree::concat`].
impl<T> AddAssign<Tree<T>> for Tree<T> {
    fn add_assign(&mut self, subtree: Tree<T>) {
        self.concat(subtree);
    }
}

/// `a + b` is [`Tree::with_subtree`].
impl<T> Add<Tree<T>> for Tree<T> {
    type Output = Tree<T>;

    fn add(self, subtree: Tree<T>) -> Self::Output {
        self.with_subtree(subtree)
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = Node<T>;

    fn index(&self, node: NodeId) -> &Self::Output {
        &self.arena[node.0]
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, node: NodeId) -> &mut Self::Output {
        &mut self.arena[node.0]
    }
}
