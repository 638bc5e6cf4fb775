//! Core graph implementation
//!
//! This module implements an undirected graph container with:
//! - Nodes holding arbitrary values, duplicates allowed
//! - Undirected edges over a set of node ids, optionally weighted
//! - Adjacency and value-lookup indices kept consistent on every mutation
//! - Cascading removal of edges when a node is removed

pub mod comparer;
pub mod config;
pub mod connect;
pub mod edge;
pub mod identity;
pub mod node;
pub mod select;
pub mod store;
pub mod types;

// Re-export main types
pub use comparer::{FnComparer, NaturalComparer, ValueComparer};
pub use config::{GraphConfig, IdentityStrategy};
pub use connect::{Connection, EdgeSet};
pub use edge::Edge;
pub use identity::{IdentitySource, RandomIdentity, SequentialIdentity};
pub use node::Node;
pub use select::GraphStatistics;
pub use store::{Graph, GraphError, GraphResult};
pub use types::{EdgeId, GraphId, IdSet, NodeId};
