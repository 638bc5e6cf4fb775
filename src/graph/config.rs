//! Graph construction settings

use super::identity::{IdentitySource, RandomIdentity, SequentialIdentity};
use super::types::GraphId;
use serde::{Deserialize, Serialize};

/// How a graph draws ids for new nodes and edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStrategy {
    /// Random v4 UUIDs seeded from OS entropy
    #[default]
    Random,
    /// Random v4 UUIDs from a fixed seed
    Seeded(u64),
    /// Counter starting at `start`
    Sequential { start: u64 },
}

impl IdentityStrategy {
    pub fn build(&self) -> Box<dyn IdentitySource> {
        match *self {
            IdentityStrategy::Random => Box::new(RandomIdentity::new()),
            IdentityStrategy::Seeded(seed) => Box::new(RandomIdentity::seeded(seed)),
            IdentityStrategy::Sequential { start } => Box::new(SequentialIdentity::new(start)),
        }
    }
}

/// Graph configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Graph id (None = draw one from the identity strategy)
    pub id: Option<GraphId>,
    /// Source of node and edge ids
    pub identity: IdentityStrategy,
    /// Expected node count, used to pre-size the tables
    pub node_capacity: usize,
    /// Expected edge count, used to pre-size the tables
    pub edge_capacity: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: GraphId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_identity(mut self, identity: IdentityStrategy) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_capacity(mut self, nodes: usize, edges: usize) -> Self {
        self.node_capacity = nodes;
        self.edge_capacity = edges;
        self
    }
}
