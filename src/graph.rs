use crate::error::GraphError;
use crate::utils::{Map, Set};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<V> {
    pub to: V,
    pub weight: f64,
}

/// Directed graph with non-negative edge weights, keyed by vertex.
///
/// Graphs built through [`WeightedGraph::add_edge`] always contain every
/// endpoint as a key. [`WeightedGraph::from_adjacency`] takes the mapping as
/// given, so a target missing from the keys is only noticed when an
/// algorithm looks it up (or when [`WeightedGraph::validate`] is called).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedGraph<V: Eq + Hash> {
    adjacency: Map<V, Vec<Edge<V>>>,
}

impl<V: Eq + Hash + Clone> WeightedGraph<V> {
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: Map::new(),
        }
    }

    pub fn from_adjacency<I, E>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = (V, f64)>,
    {
        let adjacency = adjacency
            .into_iter()
            .map(|(vertex, edges)| {
                let edges = edges
                    .into_iter()
                    .map(|(to, weight)| Edge { to, weight })
                    .collect();
                (vertex, edges)
            })
            .collect();
        WeightedGraph { adjacency }
    }

    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.add_vertex(to.clone());
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, weight });
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|adj| adj.len()).sum()
    }

    /// Outgoing edges of `vertex`, or [`GraphError::UnknownVertex`] if it is
    /// not a key.
    pub fn neighbors(&self, vertex: &V) -> Result<&[Edge<V>], GraphError<V>> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    /// Checks that every edge target is a key and every weight is finite and
    /// non-negative.
    pub fn validate(&self) -> Result<(), GraphError<V>> {
        for (from, edges) in &self.adjacency {
            for edge in edges {
                if !self.adjacency.contains_key(&edge.to) {
                    return Err(GraphError::UnknownVertex(edge.to.clone()));
                }
                if !edge.weight.is_finite() || edge.weight < 0.0 {
                    return Err(GraphError::InvalidWeight {
                        from: from.clone(),
                        to: edge.to.clone(),
                        weight: edge.weight,
                    });
                }
            }
        }
        Ok(())
    }

    /// Same vertices and edges with the weights dropped.
    pub fn to_unweighted(&self) -> Graph<V> {
        let adjacency = self
            .adjacency
            .iter()
            .map(|(vertex, edges)| {
                let neighbors = edges.iter().map(|edge| edge.to.clone()).collect();
                (vertex.clone(), neighbors)
            })
            .collect();
        Graph { adjacency }
    }
}

impl<V: Eq + Hash + Clone> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Unweighted directed graph: vertex -> set of neighbors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph<V: Eq + Hash> {
    adjacency: Map<V, Set<V>>,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new() -> Self {
        Graph {
            adjacency: Map::new(),
        }
    }

    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let adjacency = adjacency
            .into_iter()
            .map(|(vertex, neighbors)| (vertex, neighbors.into_iter().collect()))
            .collect();
        Graph { adjacency }
    }

    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        self.add_vertex(to.clone());
        self.adjacency.entry(from).or_default().insert(to)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|adj| adj.len()).sum()
    }

    pub fn neighbors(&self, vertex: &V) -> Result<&Set<V>, GraphError<V>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    pub fn validate(&self) -> Result<(), GraphError<V>> {
        self.adjacency
            .values()
            .flatten()
            .find(|to| !self.adjacency.contains_key(*to))
            .map_or(Ok(()), |to| Err(GraphError::UnknownVertex(to.clone())))
    }
}

impl<V: Eq + Hash + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}
