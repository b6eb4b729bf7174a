use crate::error::GraphError;
use crate::graph::Graph;
use crate::utils::{Map, ParentMap, Set};
use log::{debug, warn};
use std::collections::VecDeque;
use std::hash::Hash;

/// Breadth-first search from `source`, returning the parent of every vertex
/// reachable from it in a shortest-hop-count tree.
///
/// `source` itself is never a key, and unreachable vertices are absent.
/// Each vertex gets its parent once, when it is first discovered, so which
/// of several equally short parents is chosen depends on adjacency order.
pub fn bfs_path<V>(graph: &Graph<V>, source: &V) -> Result<ParentMap<V>, GraphError<V>>
where
    V: Eq + Hash + Clone,
{
    if !graph.contains_vertex(source) {
        return Err(GraphError::UnknownVertex(source.clone()));
    }

    let mut parents = ParentMap::new();
    let mut queue = VecDeque::new();
    queue.push_back(source.clone());

    while let Some(first) = queue.pop_front() {
        for node in graph.neighbors(&first)? {
            if node != source && !parents.contains_key(node) {
                parents.insert(node.clone(), first.clone());
                queue.push_back(node.clone());
            }
        }
    }

    debug!("bfs reached {} vertices besides the source", parents.len());
    Ok(parents)
}

/// Hop distance of every vertex in a parent map produced by [`bfs_path`],
/// source included at 0. Each depth is its parent's depth plus one, so every
/// link is followed once.
///
/// Vertices whose parent links run into a cycle (only possible in a
/// hand-built map) have no depth and are left out.
pub fn depths<V>(parents: &ParentMap<V>, source: &V) -> Map<V, usize>
where
    V: Eq + Hash + Clone,
{
    let mut depths = Map::new();
    depths.insert(source.clone(), 0);
    let mut cyclic: Set<&V> = Set::new();

    for start in parents.keys() {
        let mut stack = Vec::new();
        let mut on_stack: Set<&V> = Set::new();
        let mut current = start;

        let base = loop {
            if let Some(&depth) = depths.get(current) {
                break Some(depth);
            }
            let Some(parent) = parents.get(current) else {
                break Some(0);
            };
            if cyclic.contains(current) || !on_stack.insert(current) {
                break None;
            }
            stack.push(current);
            current = parent;
        };

        match base {
            Some(mut depth) => {
                for vertex in stack.into_iter().rev() {
                    depth += 1;
                    depths.insert(vertex.clone(), depth);
                }
            }
            None => {
                warn!(
                    "parent map contains a cycle, {} vertices left without depth",
                    stack.len()
                );
                cyclic.extend(stack);
            }
        }
    }

    depths
}
