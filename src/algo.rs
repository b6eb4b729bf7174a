use crate::error::GraphError;
use crate::graph::WeightedGraph;
use crate::utils::{HopDistances, HopEntry, INFINITY, Map, PathCost, UNREACHABLE};
use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Computes, for every vertex, the edge count of a fewest-hop path from
/// `source` and the total weight accumulated along the path that first
/// achieved that hop count.
///
/// The frontier is ordered by hop count only. Weights are carried along and
/// never reorder it, so the reported weight is not necessarily the minimum
/// over all paths: in `s -> c (4)` versus `s -> a -> c (1 + 1)`, vertex `c`
/// gets `(4, 1)`.
///
/// Vertices the source cannot reach keep [`PathCost::UNREACHED`].
///
/// Fails with [`GraphError::UnknownVertex`] if `source`, or the target of
/// an edge that is relaxed, is not a key of `graph`.
pub fn shortest_shortest_path<V>(
    graph: &WeightedGraph<V>,
    source: &V,
) -> Result<HopDistances<V>, GraphError<V>>
where
    V: Eq + Hash + Ord + Clone,
{
    let mut hops: Map<V, usize> = graph.vertices().map(|v| (v.clone(), UNREACHABLE)).collect();
    let mut weights: Map<V, f64> = graph.vertices().map(|v| (v.clone(), INFINITY)).collect();

    match hops.get_mut(source) {
        Some(h) => *h = 0,
        None => return Err(GraphError::UnknownVertex(source.clone())),
    }
    weights.insert(source.clone(), 0.0);

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(HopEntry::new(0, source.clone())));

    while let Some(Reverse(HopEntry { hops: dist, vertex })) = frontier.pop() {
        let base = weights[&vertex];

        for edge in graph.neighbors(&vertex)? {
            let known = hops
                .get_mut(&edge.to)
                .ok_or_else(|| GraphError::UnknownVertex(edge.to.clone()))?;

            if *known == UNREACHABLE || *known > dist + 1 {
                *known = dist + 1;
                weights.insert(edge.to.clone(), base + edge.weight);
                frontier.push(Reverse(HopEntry::new(dist + 1, edge.to.clone())));
            }
        }
    }

    let result: HopDistances<V> = hops
        .into_iter()
        .map(|(vertex, h)| {
            let weight = weights[&vertex];
            (vertex, PathCost::new(weight, h))
        })
        .collect();

    debug!(
        "hop-prioritized search visited {} of {} vertices",
        result.values().filter(|cost| cost.is_reachable()).count(),
        result.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> WeightedGraph<char> {
        WeightedGraph::from_adjacency([
            ('s', vec![('a', 1.0), ('c', 4.0)]),
            ('a', vec![('b', 2.0)]),
            ('b', vec![('c', 1.0), ('d', 4.0)]),
            ('c', vec![('d', 3.0)]),
            ('d', vec![]),
            ('e', vec![('d', 0.0)]),
        ])
    }

    #[test]
    fn test_reference_graph() {
        let result = shortest_shortest_path(&sample_graph(), &'s').unwrap();

        assert_eq!(result[&'s'], PathCost::new(0.0, 0));
        assert_eq!(result[&'a'], PathCost::new(1.0, 1));
        assert_eq!(result[&'b'], PathCost::new(3.0, 2));
        assert_eq!(result[&'c'], PathCost::new(4.0, 1));
        assert_eq!(result[&'d'], PathCost::new(7.0, 2));
        assert_eq!(result[&'e'], PathCost::UNREACHED);
    }

    #[test]
    fn test_fewer_hops_beats_lighter_path() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("s", "c", 10.0);
        graph.add_edge("s", "a", 1.0);
        graph.add_edge("a", "c", 1.0);

        let result = shortest_shortest_path(&graph, &"s").unwrap();
        assert_eq!(result[&"c"], PathCost::new(10.0, 1));
    }

    #[test]
    fn test_single_vertex() {
        let mut graph = WeightedGraph::new();
        graph.add_vertex(0usize);

        let result = shortest_shortest_path(&graph, &0).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[&0], PathCost::new(0.0, 0));
    }

    #[test]
    fn test_self_loop_and_cycle_back_to_source() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 0, 5.0);
        graph.add_edge(0, 1, 2.0);
        graph.add_edge(1, 0, 2.0);

        let result = shortest_shortest_path(&graph, &0).unwrap();
        assert_eq!(result[&0], PathCost::new(0.0, 0));
        assert_eq!(result[&1], PathCost::new(2.0, 1));
    }

    #[test]
    fn test_missing_source() {
        let graph = sample_graph();
        assert_eq!(
            shortest_shortest_path(&graph, &'x'),
            Err(GraphError::UnknownVertex('x'))
        );
    }

    #[test]
    fn test_missing_edge_target() {
        let graph = WeightedGraph::from_adjacency([('s', vec![('a', 1.0)])]);
        assert_eq!(
            shortest_shortest_path(&graph, &'s'),
            Err(GraphError::UnknownVertex('a'))
        );
    }

    #[test]
    fn test_idempotent() {
        let graph = sample_graph();
        let first = shortest_shortest_path(&graph, &'s').unwrap();
        let second = shortest_shortest_path(&graph, &'s').unwrap();
        assert_eq!(first, second);
    }
}
