use generational_arena::Index;

/// Handle of a node inside the tree that issued it.
///
/// Ids are only meaningful for their own tree; using one with another tree
/// is reported as [`TreeError::UnknownNode`](crate::domain::TreeError::UnknownNode)
/// or resolves to an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) Index);

/// Tree node stored in the arena of a [`Tree`](crate::domain::Tree).
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// User payload
    pub value: T,
    /// Id of the parent node, None for the root
    pub(crate) parent: Option<NodeId>,
    /// Position of this node in its parent's children, 0 for the root
    pub(crate) child_index: usize,
    /// Ordered ids of the child nodes
    pub(crate) children: Vec<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, parent: Option<NodeId>, child_index: usize) -> Self {
        Self {
            value,
            parent,
            child_index,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Position of this node within its parent's children.
    pub fn child_index(&self) -> usize {
        self.child_index
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
