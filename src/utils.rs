#[cfg(not(feature = "hashbrown"))]
pub use std::collections::{HashMap as Map, HashSet as Set};

#[cfg(feature = "hashbrown")]
pub use hashbrown::{HashMap as Map, HashSet as Set};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const INFINITY: f64 = f64::INFINITY;

/// Hop count of a vertex the source never reached. Plays the role of
/// positive infinity for the integer component of [`PathCost`].
pub const UNREACHABLE: usize = usize::MAX;

/// Accumulated weight and edge count of the path recorded for a vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathCost {
    pub weight: f64,
    pub hops: usize,
}

impl PathCost {
    pub const UNREACHED: PathCost = PathCost {
        weight: INFINITY,
        hops: UNREACHABLE,
    };

    pub fn new(weight: f64, hops: usize) -> Self {
        PathCost { weight, hops }
    }

    pub fn is_reachable(&self) -> bool {
        self.hops != UNREACHABLE
    }
}

/// Frontier entry. Field order is the heap order: hop count first, then
/// the vertex itself to break ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HopEntry<V> {
    pub hops: usize,
    pub vertex: V,
}

impl<V> HopEntry<V> {
    pub fn new(hops: usize, vertex: V) -> Self {
        HopEntry { hops, vertex }
    }
}

/// Result of [`crate::algo::shortest_shortest_path`].
pub type HopDistances<V> = Map<V, PathCost>;

/// Vertex -> parent in a shortest-hop-count tree. The root is never a key.
pub type ParentMap<V> = Map<V, V>;
