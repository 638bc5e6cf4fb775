//! Identifier types for graphs, nodes and edges
//!
//! Every identifier wraps an opaque `u64`. Values are either supplied
//! verbatim, drawn from the graph's [`IdentitySource`](super::identity::IdentitySource),
//! or folded down from a 128-bit UUID.

use super::store::{GraphError, GraphResult};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unordered set of identifiers
pub type IdSet<K> = FxHashSet<K>;

/// Multiplier and seed of the UUID fold.
const FOLD_PRIME: u64 = 16_777_619;

/// Reduce a UUID to 64 bits.
///
/// Bytes are taken in the Microsoft GUID layout and folded left to right,
/// so the result depends on byte order. Not a cryptographic hash.
pub fn fold_uuid(uuid: &Uuid) -> u64 {
    uuid.to_bytes_le()
        .iter()
        .fold(FOLD_PRIME, |acc, &b| acc.wrapping_mul(FOLD_PRIME).wrapping_add(u64::from(b)))
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(id: u64) -> Self {
                $name(id)
            }

            /// Fresh identifier from a random v4 UUID
            pub fn random() -> Self {
                $name(fold_uuid(&Uuid::new_v4()))
            }

            /// Fold a UUID into an identifier. The nil UUID is rejected.
            pub fn from_uuid(uuid: Uuid) -> GraphResult<Self> {
                if uuid.is_nil() {
                    return Err(GraphError::InvalidIdentity);
                }
                Ok($name(fold_uuid(&uuid)))
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }

            /// Null-safe comparison of optional identifiers.
            ///
            /// Two absent ids are equal; an absent id never equals a present one.
            pub fn equals(lhs: Option<&Self>, rhs: Option<&Self>) -> bool {
                match (lhs, rhs) {
                    (Some(a), Some(b)) => a == b,
                    (None, None) => true,
                    _ => false,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                $name(id)
            }
        }

        impl TryFrom<Uuid> for $name {
            type Error = GraphError;

            fn try_from(uuid: Uuid) -> GraphResult<Self> {
                $name::from_uuid(uuid)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a graph
    GraphId
);

define_id!(
    /// Unique identifier for a node
    NodeId
);

define_id!(
    /// Unique identifier for an edge
    EdgeId
);
