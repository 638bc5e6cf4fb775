//! Identity sources
//!
//! Each graph owns the generator it draws node and edge ids from, so there
//! is no process-wide id state and tests can pin ids with a seed or counter.

use super::types::fold_uuid;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fmt;
use uuid::{Builder, Uuid};

/// Supplies fresh 64-bit identity values
pub trait IdentitySource: fmt::Debug {
    /// Draw the next 128-bit value
    fn next_uuid(&mut self) -> Uuid;

    /// Draw the next identity value, folded from [`next_uuid`](Self::next_uuid)
    fn next_u64(&mut self) -> u64 {
        loop {
            let uuid = self.next_uuid();
            if !uuid.is_nil() {
                return fold_uuid(&uuid);
            }
        }
    }
}

/// Random v4 UUIDs from a `StdRng`
pub struct RandomIdentity {
    rng: StdRng,
}

impl RandomIdentity {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        RandomIdentity {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        RandomIdentity {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomIdentity").finish_non_exhaustive()
    }
}

impl IdentitySource for RandomIdentity {
    fn next_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid()
    }
}

/// Plain counter; ids are the counter values
#[derive(Debug, Clone)]
pub struct SequentialIdentity {
    next: u64,
}

impl SequentialIdentity {
    pub fn new(start: u64) -> Self {
        SequentialIdentity { next: start }
    }
}

impl Default for SequentialIdentity {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdentitySource for SequentialIdentity {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::from_u64_pair(0, self.next_u64())
    }

    fn next_u64(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}
