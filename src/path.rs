use crate::utils::ParentMap;
use log::warn;
use std::fmt::Display;
use std::hash::Hash;

/// Walks parent links back from `destination` and returns the vertices from
/// the root up to, but not including, `destination`.
///
/// Returns an empty path when `destination` has no parent, i.e. it is the
/// root or was never reached.
pub fn reconstruct_path<V>(parents: &ParentMap<V>, destination: &V) -> Vec<V>
where
    V: Eq + Hash + Clone,
{
    let mut path = Vec::new();
    let mut current = destination;

    while let Some(parent) = parents.get(current) {
        // A map from `bfs_path` never holds more links than keys.
        if path.len() == parents.len() {
            warn!("parent map contains a cycle, path truncated");
            break;
        }
        path.push(parent.clone());
        current = parent;
    }

    path.reverse();
    path
}

/// Same walk as [`reconstruct_path`], with the vertices concatenated.
pub fn path_string<V>(parents: &ParentMap<V>, destination: &V) -> String
where
    V: Eq + Hash + Clone + Display,
{
    reconstruct_path(parents, destination)
        .iter()
        .map(ToString::to_string)
        .collect()
}
