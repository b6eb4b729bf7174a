use crate::algo::shortest_shortest_path;
use crate::error::GraphError;
use crate::graph::{Graph, WeightedGraph};
use crate::utils::HopDistances;
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers};
use std::hash::Hash;

/// Copies a petgraph graph into a [`WeightedGraph`] keyed by its node ids.
/// Every node becomes a key, including isolated ones.
pub fn weighted_from_petgraph<G>(graph: G) -> WeightedGraph<G::NodeId>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: Eq + Hash + Clone,
    G::EdgeWeight: Into<f64> + Copy,
{
    let mut ours = WeightedGraph::new();
    for node in graph.node_identifiers() {
        ours.add_vertex(node);
    }
    for edge in graph.edge_references() {
        ours.add_edge(edge.source(), edge.target(), (*edge.weight()).into());
    }
    ours
}

/// Copies the structure of a petgraph graph into a [`Graph`], ignoring
/// edge weights.
pub fn unweighted_from_petgraph<G>(graph: G) -> Graph<G::NodeId>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: Eq + Hash + Clone,
{
    let mut ours = Graph::new();
    for node in graph.node_identifiers() {
        ours.add_vertex(node);
    }
    for edge in graph.edge_references() {
        ours.add_edge(edge.source(), edge.target());
    }
    ours
}

/// Runs [`shortest_shortest_path`] on a petgraph graph, so it can be used
/// like any of the algorithms in `petgraph::algo`.
pub fn hop_paths<G>(
    graph: G,
    start: G::NodeId,
) -> Result<HopDistances<G::NodeId>, GraphError<G::NodeId>>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: Eq + Hash + Ord + Clone,
    G::EdgeWeight: Into<f64> + Copy,
{
    shortest_shortest_path(&weighted_from_petgraph(graph), &start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs_path;
    use crate::utils::PathCost;
    use petgraph::graph::DiGraph;

    #[test]
    fn hop_paths_with_petgraph() {
        let mut pg_graph = DiGraph::new();
        let a = pg_graph.add_node(());
        let b = pg_graph.add_node(());
        let c = pg_graph.add_node(());
        let d = pg_graph.add_node(());
        let isolated = pg_graph.add_node(());

        pg_graph.add_edge(a, b, 1.0);
        pg_graph.add_edge(a, c, 4.0);
        pg_graph.add_edge(b, c, 2.0);
        pg_graph.add_edge(b, d, 5.0);
        pg_graph.add_edge(c, d, 1.0);

        let result = hop_paths(&pg_graph, a).unwrap();

        assert_eq!(result[&c], PathCost::new(4.0, 1));
        assert_eq!(result[&d], PathCost::new(6.0, 2));
        assert_eq!(result[&isolated], PathCost::UNREACHED);
    }

    #[test]
    fn bfs_on_converted_petgraph() {
        let mut pg_graph = DiGraph::<(), ()>::new();
        let s = pg_graph.add_node(());
        let a = pg_graph.add_node(());
        let b = pg_graph.add_node(());
        pg_graph.add_edge(s, a, ());
        pg_graph.add_edge(a, b, ());

        let graph = unweighted_from_petgraph(&pg_graph);
        let parents = bfs_path(&graph, &s).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(parents[&a], s);
        assert_eq!(parents[&b], a);
    }
}
