//! Node implementation
//!
//! A node pairs an identity with an immutable value and remembers which
//! graph it belongs to by that graph's id.

use super::types::{GraphId, NodeId};

/// A vertex holding a value of type `T`
///
/// Nodes are created by [`Graph::insert`](super::Graph::insert) and friends;
/// the value cannot be changed afterwards. Replacing a value means removing
/// the node and inserting a new one.
#[derive(Debug, Clone)]
pub struct Node<T> {
    id: NodeId,
    graph: GraphId,
    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, graph: GraphId, value: T) -> Self {
        Node { id, graph, value }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Id of the graph that owns this node
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Take the value out of a removed node
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Node<T> {}

impl<T> std::hash::Hash for Node<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
