//! Read-only queries over the graph's indices

use super::edge::Edge;
use super::node::Node;
use super::store::{Graph, GraphError, GraphResult, ValueGroup};
use super::types::{EdgeId, GraphId, IdSet, NodeId};
use serde::Serialize;

/// Summary counts for a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub graph_id: GraphId,
    pub node_count: usize,
    pub edge_count: usize,
    /// Number of value groups under the graph's comparer
    pub distinct_values: usize,
    /// Sum of adjacency set sizes divided by node count
    pub average_degree: f64,
    /// Nodes with no edges
    pub isolated_nodes: usize,
}

impl<T, W> Graph<T, W> {
    /// Look up a node by id
    pub fn select(&self, id: NodeId) -> GraphResult<&Node<T>> {
        self.nodes.get(&id).ok_or(GraphError::UnknownNode(id))
    }

    pub fn select_nodes(
        &self,
        ids: impl IntoIterator<Item = NodeId>,
    ) -> GraphResult<Vec<&Node<T>>> {
        ids.into_iter().map(|id| self.select(id)).collect()
    }

    pub fn select_edge(&self, id: EdgeId) -> GraphResult<&Edge<W>> {
        self.edges.get(&id).ok_or(GraphError::UnknownEdge(id))
    }

    pub fn select_edges(
        &self,
        ids: impl IntoIterator<Item = EdgeId>,
    ) -> GraphResult<Vec<&Edge<W>>> {
        ids.into_iter().map(|id| self.select_edge(id)).collect()
    }

    fn value_group(&self, value: &T) -> Option<&ValueGroup> {
        let hash = self.comparer.hash(value);
        self.values.get(&hash)?.iter().find(|group| {
            group
                .first()
                .and_then(|first| self.nodes.get(first))
                .is_some_and(|node| self.comparer.equals(node.value(), value))
        })
    }

    /// First-registered node holding `value`
    pub fn select_value(&self, value: &T) -> GraphResult<&Node<T>> {
        self.value_group(value)
            .and_then(|group| group.first())
            .and_then(|id| self.nodes.get(id))
            .ok_or(GraphError::UnknownValue)
    }

    /// One node per value, in input order
    pub fn select_values(&self, values: &[T]) -> GraphResult<Vec<&Node<T>>> {
        values.iter().map(|value| self.select_value(value)).collect()
    }

    /// Every node holding `value`, in registration order
    pub fn select_all(&self, value: &T) -> GraphResult<Vec<&Node<T>>> {
        let group = self.value_group(value).ok_or(GraphError::UnknownValue)?;
        Ok(group.iter().filter_map(|id| self.nodes.get(id)).collect())
    }

    /// Every node holding any of `values`, grouped per value in input order
    ///
    /// Fails with `UnknownValue` if any value has no node, before collecting anything.
    pub fn select_all_of(&self, values: &[T]) -> GraphResult<Vec<&Node<T>>> {
        let groups = values
            .iter()
            .map(|value| self.value_group(value).ok_or(GraphError::UnknownValue))
            .collect::<GraphResult<Vec<_>>>()?;

        Ok(groups
            .into_iter()
            .flat_map(|group| group.iter())
            .filter_map(|id| self.nodes.get(id))
            .collect())
    }

    /// Nodes sharing an edge with `id`, never including `id` itself
    pub fn select_adjacent_to(&self, id: NodeId) -> GraphResult<IdSet<NodeId>> {
        let touching = self.select_connected_to(id)?;
        Ok(touching
            .iter()
            .filter_map(|edge_id| self.edges.get(edge_id))
            .flat_map(|edge| edge.opposite(id))
            .collect())
    }

    /// Edges touching a node
    pub fn select_connected_to(&self, id: NodeId) -> GraphResult<&IdSet<EdgeId>> {
        self.adjacency.get(&id).ok_or(GraphError::UnknownNode(id))
    }

    /// Nodes an edge connects
    pub fn select_connected_by(&self, id: EdgeId) -> GraphResult<&IdSet<NodeId>> {
        self.select_edge(id).map(Edge::node_ids)
    }

    /// True when some edge joins two distinct nodes `a` and `b`
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        a != b
            && self.adjacency.get(&a).is_some_and(|touching| {
                touching
                    .iter()
                    .filter_map(|edge_id| self.edges.get(edge_id))
                    .any(|edge| edge.touches(b))
            })
    }

    /// Number of edges touching a node
    pub fn degree(&self, id: NodeId) -> GraphResult<usize> {
        self.select_connected_to(id).map(|touching| touching.len())
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    pub fn contains_value(&self, value: &T) -> bool {
        self.value_group(value).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes, in no particular order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.values()
    }

    /// All edges, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> {
        self.edges.values()
    }

    pub fn statistics(&self) -> GraphStatistics {
        let node_count = self.nodes.len();
        let total_degree: usize = self.adjacency.values().map(|touching| touching.len()).sum();
        let average_degree = if node_count == 0 {
            0.0
        } else {
            total_degree as f64 / node_count as f64
        };

        GraphStatistics {
            graph_id: self.id,
            node_count,
            edge_count: self.edges.len(),
            distinct_values: self.values.values().map(Vec::len).sum(),
            average_degree,
            isolated_nodes: self.adjacency.values().filter(|touching| touching.is_empty()).count(),
        }
    }
}
