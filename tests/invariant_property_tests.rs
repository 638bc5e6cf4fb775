//! Property-based checks that the graph's tables stay mutually consistent.
//!
//! Random insert/connect/remove sequences are replayed against a graph and
//! the referential invariants are asserted after every step.

use graphtheory::graph::{EdgeId, Graph, GraphConfig, GraphError, IdentityStrategy, NodeId};
use proptest::{
    collection::vec,
    prelude::{any, prop_assert, prop_assert_eq, prop_oneof, Just, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};
use std::collections::HashMap;

const PROP_CASES: u32 = 128;

#[derive(Debug, Clone)]
enum Op {
    Insert(u8),
    Connect(usize, usize),
    Hyper(Vec<usize>),
    RemoveNode(usize),
    RemoveNodes(Vec<usize>),
    RemoveEdge(usize),
    RemoveMissing,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..8).prop_map(Op::Insert),
        3 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::Connect(a, b)),
        1 => vec(any::<usize>(), 1..4).prop_map(Op::Hyper),
        1 => any::<usize>().prop_map(Op::RemoveNode),
        1 => vec(any::<usize>(), 0..3).prop_map(Op::RemoveNodes),
        1 => any::<usize>().prop_map(Op::RemoveEdge),
        1 => Just(Op::RemoveMissing),
    ]
}

fn pick<T: Copy>(items: &[T], index: usize) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[index % items.len()])
    }
}

fn live_nodes(graph: &Graph<u8>) -> Vec<NodeId> {
    let mut ids: Vec<NodeId> = graph.nodes().map(|node| node.id()).collect();
    ids.sort();
    ids
}

fn live_edges(graph: &Graph<u8>) -> Vec<EdgeId> {
    let mut ids: Vec<EdgeId> = graph.edges().map(|edge| edge.id()).collect();
    ids.sort();
    ids
}

fn check_invariants(graph: &Graph<u8>) -> Result<(), proptest::test_runner::TestCaseError> {
    // Adjacency entries point at live edges that contain the node.
    for node in graph.nodes() {
        for &edge_id in graph.select_connected_to(node.id()).unwrap() {
            let edge = graph.select_edge(edge_id);
            prop_assert!(edge.is_ok(), "adjacency of {} names missing {}", node.id(), edge_id);
            prop_assert!(edge.unwrap().touches(node.id()));
        }
        prop_assert!(!graph.select_adjacent_to(node.id()).unwrap().contains(&node.id()));
    }

    // No dangling edges, and every endpoint lists the edge.
    for edge in graph.edges() {
        prop_assert!(edge.arity() > 0);
        for &node_id in edge.node_ids() {
            prop_assert!(graph.contains_node(node_id));
            prop_assert!(graph.select_connected_to(node_id).unwrap().contains(&edge.id()));
        }
    }

    // Value buckets cover every node exactly once and hold matching values.
    let mut per_value: HashMap<u8, usize> = HashMap::new();
    for node in graph.nodes() {
        *per_value.entry(*node.value()).or_default() += 1;
    }
    let mut bucketed = 0;
    for (value, count) in &per_value {
        let nodes = graph.select_all(value).unwrap();
        prop_assert_eq!(nodes.len(), *count);
        prop_assert!(nodes.iter().all(|node| node.value() == value));
        bucketed += nodes.len();
    }
    prop_assert_eq!(bucketed, graph.node_count());
    prop_assert_eq!(graph.statistics().distinct_values, per_value.len());

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: PROP_CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn invariants_hold_after_every_step(ops in vec(op_strategy(), 1..60)) {
        let config = GraphConfig::new().with_identity(IdentityStrategy::Seeded(7));
        let mut graph = Graph::<u8>::with_config(config);

        for op in ops {
            let nodes = live_nodes(&graph);
            let edges = live_edges(&graph);
            let before = (graph.node_count(), graph.edge_count());

            match op {
                Op::Insert(value) => {
                    graph.insert(value).unwrap();
                    prop_assert_eq!(graph.node_count(), before.0 + 1);
                }
                Op::Connect(a, b) => {
                    if let (Some(a), Some(b)) = (pick(&nodes, a), pick(&nodes, b)) {
                        // Targets resolve to the first node holding the value.
                        let value = *graph.select(b).unwrap().value();
                        let target = graph.select_value(&value).unwrap().id();
                        let skip = a == target || graph.is_adjacent(a, target);

                        let created = graph.connect(a).unwrap().to(&[value]).unwrap().created().len();
                        prop_assert_eq!(created, usize::from(!skip));
                        prop_assert_eq!(graph.edge_count(), before.1 + created);
                        prop_assert!(a == target || graph.is_adjacent(a, target));
                    }
                }
                Op::Hyper(picks) => {
                    let members: Vec<NodeId> = picks.iter().filter_map(|&i| pick(&nodes, i)).collect();
                    if !members.is_empty() {
                        graph.add_edge(members, ()).unwrap();
                        prop_assert_eq!(graph.edge_count(), before.1 + 1);
                    }
                }
                Op::RemoveNode(i) => {
                    if let Some(id) = pick(&nodes, i) {
                        let degree = graph.degree(id).unwrap();
                        graph.remove_node(id).unwrap();
                        prop_assert_eq!(graph.node_count(), before.0 - 1);
                        prop_assert_eq!(graph.edge_count(), before.1 - degree);
                        prop_assert!(!graph.contains_node(id));
                    }
                }
                Op::RemoveNodes(picks) => {
                    let ids: Vec<NodeId> = picks.iter().filter_map(|&i| pick(&nodes, i)).collect();
                    let removed = graph.remove_nodes(ids.clone()).unwrap();
                    prop_assert!(ids.iter().all(|id| !graph.contains_node(*id)));
                    prop_assert_eq!(graph.node_count(), before.0 - removed.len());
                }
                Op::RemoveEdge(i) => {
                    if let Some(id) = pick(&edges, i) {
                        graph.remove_edge(id).unwrap();
                        prop_assert_eq!(graph.node_count(), before.0);
                        prop_assert_eq!(graph.edge_count(), before.1 - 1);
                    }
                }
                Op::RemoveMissing => {
                    let missing = NodeId::new(u64::MAX);
                    let mut batch = nodes.clone();
                    batch.push(missing);
                    prop_assert_eq!(graph.remove_nodes(batch).unwrap_err(), GraphError::UnknownNode(missing));
                    prop_assert_eq!((graph.node_count(), graph.edge_count()), before);
                }
            }

            check_invariants(&graph)?;
        }
    }
}
