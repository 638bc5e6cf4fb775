//! Undirected edge implementation
//!
//! An edge connects a fixed, unordered set of node ids. Standard edges join
//! two distinct nodes, but the set may hold one id (self-loop) or more than
//! two (hyper-edge); the store only requires that it is non-empty.

use super::types::{EdgeId, IdSet, NodeId};
use std::cmp::Ordering;

/// An undirected edge carrying a weight of type `W`
///
/// Unweighted graphs use `W = ()`.
#[derive(Debug, Clone)]
pub struct Edge<W = ()> {
    id: EdgeId,
    nodes: IdSet<NodeId>,
    weight: W,
}

impl Edge<()> {
    /// Create an unweighted edge
    pub fn new(id: EdgeId, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        Edge::weighted(id, (), nodes)
    }
}

impl<W: PartialEq + PartialOrd> Edge<W> {
    /// Create an edge with a weight
    pub fn weighted(id: EdgeId, weight: W, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        Edge {
            id,
            nodes: nodes.into_iter().collect(),
            weight,
        }
    }

    /// Order two edges by weight; `None` when the weights are incomparable
    pub fn cmp_weight(&self, other: &Edge<W>) -> Option<Ordering> {
        self.weight.partial_cmp(&other.weight)
    }
}

impl<W> Edge<W> {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Ids of every node this edge touches
    pub fn node_ids(&self) -> &IdSet<NodeId> {
        &self.nodes
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Number of distinct endpoints
    pub fn arity(&self) -> usize {
        self.nodes.len()
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Check if this edge connects two specific nodes (order is irrelevant)
    pub fn connects(&self, node1: NodeId, node2: NodeId) -> bool {
        self.touches(node1) && self.touches(node2)
    }

    pub fn is_self_loop(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Endpoints other than `node`
    pub fn opposite(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied().filter(move |&id| id != node)
    }
}

impl<W> PartialEq for Edge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<W> Eq for Edge<W> {}

impl<W> std::hash::Hash for Edge<W> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
