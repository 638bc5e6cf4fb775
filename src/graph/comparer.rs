//! Value equality strategies for the value-lookup index
//!
//! A graph hashes node values into buckets and compares them with the
//! comparer it was constructed with. Implementations must keep the two
//! consistent: `equals(a, b)` implies `hash(a) == hash(b)`.

use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Equality and hashing applied to node values
pub trait ValueComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;

    fn hash(&self, value: &T) -> u64;
}

/// `Eq` + `Hash` of the value type itself
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalComparer;

impl<T: Eq + Hash + ?Sized> ValueComparer<T> for NaturalComparer {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash(&self, value: &T) -> u64 {
        let mut hasher = FxHasher::default();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

/// Comparer built from a pair of closures
///
/// ```
/// use graphtheory::graph::{FnComparer, ValueComparer};
///
/// let ci = FnComparer::new(
///     |a: &String, b: &String| a.eq_ignore_ascii_case(b),
///     |v: &String| v.len() as u64,
/// );
/// assert!(ci.equals(&"Ab".to_string(), &"aB".to_string()));
/// ```
pub struct FnComparer<E, H> {
    eq: E,
    hash: H,
}

impl<E, H> FnComparer<E, H> {
    pub fn new(eq: E, hash: H) -> Self {
        FnComparer { eq, hash }
    }
}

impl<T: ?Sized, E, H> ValueComparer<T> for FnComparer<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }

    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

impl<E, H> fmt::Debug for FnComparer<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparer")
    }
}
