use graphtheory::graph::{Graph, GraphConfig, IdentityStrategy};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("GraphTheory v{}", graphtheory::version());
    println!("==========================================");
    println!();

    demo_pentagon_star()?;
    demo_weighted()?;

    Ok(())
}

fn demo_pentagon_star() -> anyhow::Result<()> {
    println!("=== Demo 1: Pentagon star ===");
    let config = GraphConfig::new().with_identity(IdentityStrategy::Sequential { start: 1 });
    let mut graph = Graph::<u32>::with_config(config);

    graph.insert_all(0..10)?;
    // Outer cycle 1-2-3-4-5-1, then one spoke per cycle node
    for (from, to) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (1, 6), (2, 7), (3, 8), (4, 9), (5, 0)] {
        graph.connect_value(&from)?.to(&[to])?;
    }
    println!("✓ {} nodes, {} edges", graph.node_count(), graph.edge_count());

    let hub = graph.select_value(&1)?.id();
    let mut neighbours: Vec<u32> = graph
        .select_nodes(graph.select_adjacent_to(hub)?)?
        .into_iter()
        .map(|node| *node.value())
        .collect();
    neighbours.sort_unstable();
    println!("✓ Node 1 is adjacent to {:?}", neighbours);

    graph.remove_node(hub)?;
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "removed hub");
    println!("✓ After removing node 1: {} nodes, {} edges", graph.node_count(), graph.edge_count());

    println!("\nGraph Statistics:");
    println!("  {:?}", graph.statistics());
    Ok(())
}

fn demo_weighted() -> anyhow::Result<()> {
    println!("\n=== Demo 2: Weighted edges ===");
    let mut graph = Graph::<&str, f64>::new();

    let cities = graph.insert_all(["Paris", "Lyon", "Marseille"])?;
    graph.add_edge([cities[0], cities[1]], 465.0)?;
    graph.add_edge([cities[1], cities[2]], 315.0)?;

    for edge in graph.edges() {
        let names: Vec<&str> = graph
            .select_nodes(edge.node_ids().iter().copied())?
            .into_iter()
            .map(|node| *node.value())
            .collect();
        println!("✓ {:?} weighs {} km", names, edge.weight());
    }
    Ok(())
}
