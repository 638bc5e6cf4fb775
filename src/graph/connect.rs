//! Chained "connect these nodes to those values" helper
//!
//! Builds on the store's edge insert. Pairs that are already adjacent are
//! skipped, so repeating a connection never creates a parallel edge, and a
//! node is never connected to itself.
//!
//! ```
//! use graphtheory::graph::Graph;
//!
//! let mut graph = Graph::<i32>::new();
//! let sources = graph.insert_all([1, 2]).unwrap();
//! graph.insert_all([3, 4, 5]).unwrap();
//!
//! graph
//!     .connect_all(sources)
//!     .unwrap()
//!     .to(&[3, 4])
//!     .unwrap()
//!     .then_to(&[5])
//!     .unwrap();
//!
//! assert_eq!(graph.edge_count(), 6);
//! ```

use super::edge::Edge;
use super::store::{Graph, GraphError, GraphResult};
use super::types::{EdgeId, IdSet, NodeId};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use tracing::debug;

/// Edge ids in creation order
pub type EdgeSet = IndexSet<EdgeId, FxBuildHasher>;

fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl<T> Graph<T> {
    /// Connect `source` to the first node holding each target value
    ///
    /// A target resolving to `source` itself is skipped; self-loops have to
    /// be inserted directly with [`add_edge`](Graph::add_edge).
    pub fn connect_one_to_many(&mut self, source: NodeId, targets: &[T]) -> GraphResult<EdgeSet> {
        self.connect_many_to_many(&[source], targets)
    }

    /// Connect every source to the first node holding each target value
    ///
    /// Sources and targets are resolved before any edge is inserted.
    pub fn connect_many_to_many(&mut self, sources: &[NodeId], targets: &[T]) -> GraphResult<EdgeSet> {
        let pairs = self.plan_connections(sources, targets)?;
        self.connect_pairs(&pairs)
    }

    /// Start a connection chain from one node
    pub fn connect(&mut self, source: NodeId) -> GraphResult<Connection<'_, T>> {
        self.connect_all([source])
    }

    /// Start a connection chain from the first node holding `value`
    pub fn connect_value(&mut self, value: &T) -> GraphResult<Connection<'_, T>> {
        let source = self.select_value(value)?.id();
        self.connect(source)
    }

    /// Start a connection chain from several nodes
    pub fn connect_all(
        &mut self,
        sources: impl IntoIterator<Item = NodeId>,
    ) -> GraphResult<Connection<'_, T>> {
        let sources: IndexSet<NodeId, FxBuildHasher> = sources.into_iter().collect();
        if let Some(&missing) = sources.iter().find(|id| !self.contains_node(**id)) {
            return Err(GraphError::UnknownNode(missing));
        }
        Ok(Connection {
            graph: self,
            sources: sources.into_iter().collect(),
            created: EdgeSet::default(),
        })
    }

    fn plan_connections(&self, sources: &[NodeId], targets: &[T]) -> GraphResult<Vec<(NodeId, NodeId)>> {
        let targets: Vec<NodeId> = self
            .select_values(targets)?
            .into_iter()
            .map(|node| node.id())
            .collect();

        let mut planned = IdSet::default();
        let mut pairs = Vec::new();
        for &source in sources {
            let adjacent = self.select_adjacent_to(source)?;
            for &target in &targets {
                if target == source || adjacent.contains(&target) {
                    continue;
                }
                if planned.insert(pair_key(source, target)) {
                    pairs.push((source, target));
                }
            }
        }
        Ok(pairs)
    }

    fn connect_pairs(&mut self, pairs: &[(NodeId, NodeId)]) -> GraphResult<EdgeSet> {
        let mut ids = EdgeSet::default();
        for _ in pairs {
            let id = self.next_edge_id();
            if self.contains_edge(id) || !ids.insert(id) {
                return Err(GraphError::DuplicateEdge(id));
            }
        }

        for (&id, &(source, target)) in ids.iter().zip(pairs) {
            self.insert_edge(Edge::new(id, [source, target]))?;
        }
        if !ids.is_empty() {
            debug!("Connected {} new pair(s) in graph {}", ids.len(), self.id());
        }
        Ok(ids)
    }
}

/// One step of a connection chain
///
/// Holds the graph mutably; calling [`to`](Connection::to) connects the
/// current sources and moves on to the nodes that were just linked.
#[derive(Debug)]
pub struct Connection<'g, T> {
    graph: &'g mut Graph<T>,
    sources: Vec<NodeId>,
    created: EdgeSet,
}

impl<'g, T> Connection<'g, T> {
    /// Connect every current source to `targets`
    ///
    /// The returned step's sources are, for every edge created here, its
    /// endpoints other than the source that created it. Targets that were
    /// already adjacent are therefore not carried forward.
    pub fn to(self, targets: &[T]) -> GraphResult<Connection<'g, T>> {
        let Connection { graph, sources, .. } = self;
        let pairs = graph.plan_connections(&sources, targets)?;
        let created = graph.connect_pairs(&pairs)?;

        let mut next: IndexSet<NodeId, FxBuildHasher> = IndexSet::default();
        for (&edge_id, &(source, _)) in created.iter().zip(&pairs) {
            let edge = graph.select_edge(edge_id)?;
            let mut endpoints: Vec<NodeId> = edge.opposite(source).collect();
            endpoints.sort();
            next.extend(endpoints);
        }

        Ok(Connection {
            graph,
            sources: next.into_iter().collect(),
            created,
        })
    }

    /// Same as [`to`](Connection::to); reads better further down a chain
    pub fn then_to(self, targets: &[T]) -> GraphResult<Connection<'g, T>> {
        self.to(targets)
    }

    /// Nodes the next step connects from
    pub fn sources(&self) -> &[NodeId] {
        &self.sources
    }

    /// Edges created by the step that produced this value
    pub fn created(&self) -> &EdgeSet {
        &self.created
    }

    pub fn graph(&self) -> &Graph<T> {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_one_to_many() {
        let mut graph = Graph::<i32>::new();
        let ids = graph.insert_all([1, 2, 3]).unwrap();

        let created = graph.connect_one_to_many(ids[0], &[2, 3]).unwrap();
        assert_eq!(created.len(), 2);
        assert!(graph.is_adjacent(ids[0], ids[1]));
        assert!(graph.is_adjacent(ids[0], ids[2]));
        assert!(!graph.is_adjacent(ids[1], ids[2]));
    }

    #[test]
    fn test_repeat_connect_is_noop() {
        let mut graph = Graph::<i32>::new();
        let ids = graph.insert_all([1, 2]).unwrap();

        graph.connect(ids[0]).unwrap().to(&[2]).unwrap();
        let again = graph.connect(ids[0]).unwrap().to(&[2]).unwrap();
        assert!(again.created().is_empty());
        assert!(again.sources().is_empty());

        // Reverse direction is the same undirected pair.
        graph.connect(ids[1]).unwrap().to(&[1]).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.select_adjacent_to(ids[0]).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_targets_connect_once() {
        let mut graph = Graph::<i32>::new();
        let ids = graph.insert_all([1, 2]).unwrap();

        let created = graph.connect_one_to_many(ids[0], &[2, 2, 2]).unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_connect_to_self_is_skipped() {
        let mut graph = Graph::<i32>::new();
        let a = graph.insert(1).unwrap();

        let created = graph.connect_one_to_many(a, &[1]).unwrap();
        assert!(created.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_unknown_target_mutates_nothing() {
        let mut graph = Graph::<i32>::new();
        let ids = graph.insert_all([1, 2]).unwrap();

        let result = graph.connect_one_to_many(ids[0], &[2, 99]);
        assert_eq!(result.unwrap_err(), GraphError::UnknownValue);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_unknown_source() {
        let mut graph = Graph::<i32>::new();
        graph.insert(1).unwrap();
        let missing = NodeId::new(31337);

        assert_eq!(graph.connect(missing).unwrap_err(), GraphError::UnknownNode(missing));
        assert_eq!(
            graph.connect_one_to_many(missing, &[1]).unwrap_err(),
            GraphError::UnknownNode(missing)
        );
    }

    #[test]
    fn test_many_to_many_among_sources() {
        let mut graph = Graph::<i32>::new();
        let ids = graph.insert_all([1, 2]).unwrap();

        // 1-2 planned from both sides must only be inserted once.
        let created = graph.connect_many_to_many(&ids, &[1, 2]).unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_chain_moves_to_targets() {
        let mut graph = Graph::<i32>::new();
        let ids = graph.insert_all([1, 2, 3, 4]).unwrap();

        let step = graph.connect_value(&1).unwrap().to(&[2, 3]).unwrap();
        assert_eq!(step.created().len(), 2);
        assert_eq!(step.sources().len(), 2);
        let step = step.then_to(&[4]).unwrap();
        assert_eq!(step.sources(), &[ids[3]]);
        assert_eq!(step.graph().edge_count(), 4);

        assert!(graph.is_adjacent(ids[1], ids[3]));
        assert!(graph.is_adjacent(ids[2], ids[3]));
        assert!(!graph.is_adjacent(ids[0], ids[3]));
    }

    #[test]
    fn test_chain_keeps_targets_among_sources() {
        let mut graph = Graph::<i32>::new();
        let ids = graph.insert_all([1, 2, 3]).unwrap();

        let step = graph.connect_all([ids[0], ids[1]]).unwrap().to(&[2, 3]).unwrap();
        // 1-2, 1-3, 2-3 created; 2 was reached from 1, so it carries on.
        assert_eq!(step.created().len(), 3);
        assert_eq!(step.sources().len(), 2);
        assert!(step.sources().contains(&ids[1]));
        assert!(step.sources().contains(&ids[2]));
        assert!(!step.sources().contains(&ids[0]));
    }

    #[test]
    fn test_chain_continues_from_reached_source() {
        let mut graph = Graph::<i32>::new();
        let ids = graph.insert_all([1, 2, 3, 4]).unwrap();

        graph
            .connect_all([ids[0], ids[1]])
            .unwrap()
            .to(&[2, 3])
            .unwrap()
            .then_to(&[4])
            .unwrap();

        assert!(graph.is_adjacent(ids[1], ids[3]));
        assert!(graph.is_adjacent(ids[2], ids[3]));
        assert!(!graph.is_adjacent(ids[0], ids[3]));
    }

    #[test]
    fn test_chain_skips_already_adjacent_targets() {
        let mut graph = Graph::<i32>::new();
        let ids = graph.insert_all([1, 2, 3]).unwrap();
        graph.connect(ids[0]).unwrap().to(&[2]).unwrap();

        let step = graph.connect(ids[0]).unwrap().to(&[2, 3]).unwrap();
        assert_eq!(step.created().len(), 1);
        assert_eq!(step.sources(), &[ids[2]]);
    }
}
