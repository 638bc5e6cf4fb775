//! In-memory graph storage implementation
//!
//! The store keeps four tables in step:
//! - nodes: NodeId -> Node
//! - edges: EdgeId -> Edge
//! - adjacency: NodeId -> set of EdgeId touching the node
//! - values: comparer hash -> groups of NodeId whose values are equivalent
//!
//! Every mutation validates its whole input before touching any table, so a
//! failed call leaves the graph exactly as it was.

use super::comparer::{NaturalComparer, ValueComparer};
use super::config::GraphConfig;
use super::edge::Edge;
use super::identity::IdentitySource;
use super::node::Node;
use super::types::{EdgeId, GraphId, IdSet, NodeId};
use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap};
use std::fmt;
use std::hash::Hash;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid identity: the nil UUID cannot be used as an id")]
    InvalidIdentity,

    #[error("Node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("Edge {0} already exists")]
    DuplicateEdge(EdgeId),

    #[error("Node {0} not found")]
    UnknownNode(NodeId),

    #[error("Edge {0} not found")]
    UnknownEdge(EdgeId),

    #[error("No node holds the requested value")]
    UnknownValue,

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl GraphError {
    /// True for either id collision variant
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, GraphError::DuplicateNode(_) | GraphError::DuplicateEdge(_))
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Node ids sharing one value, in registration order
pub(super) type ValueGroup = IndexSet<NodeId, FxBuildHasher>;

/// Undirected graph over values of type `T` with edge weights of type `W`
pub struct Graph<T, W = ()> {
    pub(super) id: GraphId,
    pub(super) nodes: FxHashMap<NodeId, Node<T>>,
    pub(super) edges: FxHashMap<EdgeId, Edge<W>>,
    pub(super) adjacency: FxHashMap<NodeId, IdSet<EdgeId>>,
    pub(super) values: FxHashMap<u64, Vec<ValueGroup>>,
    identity: Box<dyn IdentitySource>,
    pub(super) comparer: Box<dyn ValueComparer<T>>,
}

impl<T: Eq + Hash, W> Graph<T, W> {
    /// Create an empty graph with a random id and natural value equality
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_id(id: GraphId) -> Self {
        Self::with_config(GraphConfig::default().with_id(id))
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self::with_config_and_comparer(config, NaturalComparer)
    }
}

impl<T: Eq + Hash, W> Default for Graph<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> Graph<T, W> {
    /// Create an empty graph whose value lookups use `comparer`
    pub fn with_comparer(id: GraphId, comparer: impl ValueComparer<T> + 'static) -> Self {
        Self::with_config_and_comparer(GraphConfig::default().with_id(id), comparer)
    }

    pub fn with_config_and_comparer(
        config: GraphConfig,
        comparer: impl ValueComparer<T> + 'static,
    ) -> Self {
        let mut identity = config.identity.build();
        let id = config
            .id
            .unwrap_or_else(|| GraphId::new(identity.next_u64()));
        debug!("Created graph {} ({:?})", id, config.identity);

        Graph {
            id,
            nodes: FxHashMap::with_capacity_and_hasher(config.node_capacity, FxBuildHasher::default()),
            edges: FxHashMap::with_capacity_and_hasher(config.edge_capacity, FxBuildHasher::default()),
            adjacency: FxHashMap::with_capacity_and_hasher(config.node_capacity, FxBuildHasher::default()),
            values: FxHashMap::default(),
            identity,
            comparer: Box::new(comparer),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Draw a fresh node id from this graph's identity source
    pub fn next_node_id(&mut self) -> NodeId {
        NodeId::new(self.identity.next_u64())
    }

    /// Draw a fresh edge id from this graph's identity source
    pub fn next_edge_id(&mut self) -> EdgeId {
        EdgeId::new(self.identity.next_u64())
    }

    /// Insert a value as a new node with a fresh id
    ///
    /// Equal values are not merged: every call creates a distinct node.
    pub fn insert(&mut self, value: T) -> GraphResult<NodeId> {
        let id = self.next_node_id();
        self.insert_node(id, value)
    }

    /// Insert several values, returning their ids in input order
    ///
    /// Fresh ids are drawn and checked up front, so a collision inserts nothing.
    pub fn insert_all(&mut self, values: impl IntoIterator<Item = T>) -> GraphResult<Vec<NodeId>> {
        let values: Vec<T> = values.into_iter().collect();
        let mut ids = Vec::with_capacity(values.len());
        let mut seen = IdSet::default();
        for _ in 0..values.len() {
            let id = self.next_node_id();
            if self.nodes.contains_key(&id) || !seen.insert(id) {
                return Err(GraphError::DuplicateNode(id));
            }
            ids.push(id);
        }

        for (&id, value) in ids.iter().zip(values) {
            self.register_node(id, value);
        }
        Ok(ids)
    }

    /// Insert a value under an explicit id
    pub fn insert_node(&mut self, id: NodeId, value: T) -> GraphResult<NodeId> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.register_node(id, value);
        Ok(id)
    }

    fn register_node(&mut self, id: NodeId, value: T) {
        let hash = self.comparer.hash(&value);
        self.nodes.insert(id, Node::new(id, self.id, value));
        self.adjacency.insert(id, IdSet::default());

        let Graph {
            nodes,
            values,
            comparer,
            ..
        } = self;
        let value = nodes[&id].value();
        let groups = values.entry(hash).or_default();
        let existing = groups.iter_mut().find(|group| {
            group
                .first()
                .and_then(|first| nodes.get(first))
                .is_some_and(|node| comparer.equals(node.value(), value))
        });
        match existing {
            Some(group) => {
                group.insert(id);
            }
            None => {
                let mut group = ValueGroup::default();
                group.insert(id);
                groups.push(group);
            }
        }

        trace!("Inserted node {} into graph {}", id, self.id);
    }

    /// Insert a prepared edge
    ///
    /// The edge must touch at least one node, its id must be new, and every
    /// node it references must already be in the graph.
    pub fn insert_edge(&mut self, edge: Edge<W>) -> GraphResult<EdgeId> {
        if edge.node_ids().is_empty() {
            return Err(GraphError::InvalidArgument("edge must connect at least one node"));
        }
        let id = edge.id();
        if self.edges.contains_key(&id) {
            return Err(GraphError::DuplicateEdge(id));
        }
        if let Some(&missing) = edge.node_ids().iter().find(|node| !self.nodes.contains_key(*node)) {
            return Err(GraphError::UnknownNode(missing));
        }

        for &node in edge.node_ids() {
            self.adjacency.entry(node).or_default().insert(id);
        }
        trace!("Inserted edge {} touching {} node(s)", id, edge.arity());
        self.edges.insert(id, edge);
        Ok(id)
    }

    /// Create an edge with a fresh id between `nodes` and insert it
    pub fn add_edge(
        &mut self,
        nodes: impl IntoIterator<Item = NodeId>,
        weight: W,
    ) -> GraphResult<EdgeId>
    where
        W: PartialEq + PartialOrd,
    {
        let id = self.next_edge_id();
        self.insert_edge(Edge::weighted(id, weight, nodes))
    }

    /// Remove a node together with every edge touching it
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node<T>> {
        self.detach_node(id).ok_or(GraphError::UnknownNode(id))
    }

    /// Remove several nodes and their edges
    ///
    /// Every id is checked before anything is removed. Repeated ids are
    /// removed once.
    pub fn remove_nodes(
        &mut self,
        ids: impl IntoIterator<Item = NodeId>,
    ) -> GraphResult<Vec<Node<T>>> {
        let ids: IndexSet<NodeId, FxBuildHasher> = ids.into_iter().collect();
        if let Some(&missing) = ids.iter().find(|id| !self.nodes.contains_key(*id)) {
            return Err(GraphError::UnknownNode(missing));
        }

        let removed: Vec<Node<T>> = ids.into_iter().filter_map(|id| self.detach_node(id)).collect();
        debug!("Removed {} node(s) from graph {}", removed.len(), self.id);
        Ok(removed)
    }

    /// Remove a single edge; its nodes stay
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Edge<W>> {
        self.detach_edge(id).ok_or(GraphError::UnknownEdge(id))
    }

    /// Remove several edges after checking that all of them exist
    pub fn remove_edges(
        &mut self,
        ids: impl IntoIterator<Item = EdgeId>,
    ) -> GraphResult<Vec<Edge<W>>> {
        let ids: IndexSet<EdgeId, FxBuildHasher> = ids.into_iter().collect();
        if let Some(&missing) = ids.iter().find(|id| !self.edges.contains_key(*id)) {
            return Err(GraphError::UnknownEdge(missing));
        }

        let removed: Vec<Edge<W>> = ids.into_iter().filter_map(|id| self.detach_edge(id)).collect();
        debug!("Removed {} edge(s) from graph {}", removed.len(), self.id);
        Ok(removed)
    }

    fn detach_node(&mut self, id: NodeId) -> Option<Node<T>> {
        if !self.nodes.contains_key(&id) {
            return None;
        }

        // Cascade through the adjacency index first.
        if let Some(touching) = self.adjacency.remove(&id) {
            for edge_id in touching {
                self.detach_edge(edge_id);
            }
        }

        let node = self.nodes.remove(&id)?;
        let hash = self.comparer.hash(node.value());
        if let Some(groups) = self.values.get_mut(&hash) {
            if let Some(pos) = groups.iter().position(|group| group.contains(&id)) {
                groups[pos].shift_remove(&id);
                if groups[pos].is_empty() {
                    groups.swap_remove(pos);
                }
            }
            if groups.is_empty() {
                self.values.remove(&hash);
            }
        }

        trace!("Detached node {} from graph {}", id, self.id);
        Some(node)
    }

    fn detach_edge(&mut self, id: EdgeId) -> Option<Edge<W>> {
        let edge = self.edges.remove(&id)?;
        for node in edge.node_ids() {
            if let Some(adj) = self.adjacency.get_mut(node) {
                adj.remove(&id);
            }
        }
        trace!("Detached edge {} from graph {}", id, self.id);
        Some(edge)
    }

    /// Remove every node and edge; id, identity source and comparer are kept
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
        self.values.clear();
        debug!("Cleared graph {}", self.id);
    }
}

impl<T, W> fmt::Debug for Graph<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("id", &self.id)
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
