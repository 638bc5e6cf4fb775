//! GraphTheory
//!
//! An in-memory, generically typed, undirected graph container. It stores
//! nodes holding arbitrary values, edges joining sets of nodes, and the
//! adjacency between them, and keeps those tables consistent across every
//! insert and removal. Graph algorithms are left to the caller.
//!
//! # Model
//!
//! - Nodes, edges and graphs carry opaque 64-bit identities
//! - Several nodes may hold the same value; identity is the uniqueness key
//! - Edges are undirected and may carry a weight
//! - Removing a node removes every edge touching it
//! - Value lookups use a pluggable equality/hash strategy
//!
//! ## Example Usage
//!
//! ```rust
//! use graphtheory::graph::Graph;
//!
//! let mut graph = Graph::<&str>::new();
//!
//! // Insert values
//! let ids = graph.insert_all(["alice", "bob", "carol"]).unwrap();
//!
//! // Connect alice to bob and carol
//! graph.connect(ids[0]).unwrap().to(&["bob", "carol"]).unwrap();
//!
//! let neighbours = graph.select_adjacent_to(ids[0]).unwrap();
//! assert_eq!(neighbours.len(), 2);
//!
//! // Removing alice cascades to the edges touching it
//! graph.remove_node(ids[0]).unwrap();
//! assert_eq!(graph.edge_count(), 0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    Connection, Edge, EdgeId, Graph, GraphConfig, GraphError, GraphId, GraphResult,
    GraphStatistics, IdentityStrategy, Node, NodeId, ValueComparer,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
