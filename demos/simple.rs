use hop_sssp::{WeightedGraph, bfs_path, path_string, shortest_shortest_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A small road network where the cheapest route is not the shortest one
    let mut graph = WeightedGraph::new();
    graph.add_edge('s', 'a', 1.0);
    graph.add_edge('s', 'c', 4.0);
    graph.add_edge('a', 'b', 2.0);
    graph.add_edge('b', 'c', 1.0);
    graph.add_edge('b', 'd', 4.0);
    graph.add_edge('c', 'd', 3.0);
    graph.add_edge('e', 'd', 0.0);
    graph.validate()?;

    let costs = shortest_shortest_path(&graph, &'s')?;
    let mut sorted_costs: Vec<_> = costs.into_iter().collect();
    sorted_costs.sort_by_key(|&(v, _)| v);

    println!("Fewest-hop paths from s:");
    for (v, cost) in &sorted_costs {
        if cost.is_reachable() {
            println!("  {} -> weight {:.1}, {} edges", v, cost.weight, cost.hops);
        } else {
            println!("  {} -> ∞", v);
        }
    }

    let parents = bfs_path(&graph.to_unweighted(), &'s')?;
    println!("\nBFS routes from s:");
    for (v, _) in &sorted_costs {
        if parents.contains_key(v) {
            println!("  {}: {}{}", v, path_string(&parents, v), v);
        }
    }

    Ok(())
}
