/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_spanning;

use lib_spanning::spanning::algorithms::prim::{MSTOptions, MinimumSpanningTree, PrimMST};
use lib_spanning::spanning::algorithms::trace::PrimTraceRecord;
use lib_spanning::spanning::error::{SpanningError, SpanningResult};
use lib_spanning::spanning::graph_base::GraphBase;
use lib_spanning::spanning::graph_builder_base::GraphBuilderBase;
use lib_spanning::spanning::id_types::NodeId;
use lib_spanning::spanning::node::{NodeBase, NodeEdgeBase};
use lib_spanning::spanning::weighted_undirected_graph::WeightedUndirectedGraph;
use lib_spanning::spanning::weighted_undirected_graph_builder::{
    TWeightedUndirectedGraphBuilder, WeightedUndirectedGraphBuilder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

// labels A..K map to ids 0..10
const A: i64 = 0;
const B: i64 = 1;
const C: i64 = 2;
const D: i64 = 3;
const E: i64 = 4;
const F: i64 = 5;
const G: i64 = 6;
const H: i64 = 7;
const I: i64 = 8;
const J: i64 = 9;
const K: i64 = 10;

fn get_graph(idx: usize) -> SpanningResult<WeightedUndirectedGraph> {
    let v = match idx {
        // Triangle: A-B 8, A-K 3, B-K 7.
        0 => vec![(A, B, 8.0), (A, K, 3.0), (B, K, 7.0)],
        // Eleven node graph, every undirected edge listed once.
        1 => vec![
            (A, B, 8.0),
            (A, G, 9.0),
            (A, H, 10.0),
            (A, I, 6.0),
            (A, J, 12.0),
            (A, K, 3.0),
            (B, C, 10.0),
            (B, E, 2.0),
            (B, K, 7.0),
            (C, D, 9.0),
            (C, K, 5.0),
            (D, E, 13.0),
            (D, F, 12.0),
            (E, F, 10.0),
            (E, G, 6.0),
            (F, G, 8.0),
            (G, H, 7.0),
            (H, I, 3.0),
            (I, J, 10.0),
            (J, K, 8.0),
        ],
        // Single isolated node, expressed as a self-loop.
        2 => vec![(A, A, 0.0)],
        // Two triangles with no edge between them.
        3 => vec![
            (0, 1, 1.0),
            (1, 2, 2.0),
            (2, 0, 3.0),
            (3, 4, 1.0),
            (4, 5, 1.0),
            (5, 3, 1.0),
        ],
        // Square with a self-loop and all weights equal.
        4 => vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0), (2, 2, 0.5)],
        // Negative and fractional weights.
        5 => vec![(0, 1, -2.5), (1, 2, 0.25), (0, 2, -1.0), (2, 3, 4.0)],
        _ => return Err(SpanningError::Generic("Invalid index".to_string())),
    };
    WeightedUndirectedGraphBuilder {}.from_vector(v)
}

fn edge_tuples(tree: &MinimumSpanningTree) -> Vec<(i64, i64, f64)> {
    tree.edges.iter().map(|e| e.as_tuple()).collect()
}

fn reachable(graph: &WeightedUndirectedGraph, start: NodeId) -> HashSet<NodeId> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(id) = queue.pop_front() {
        for e in graph.get_node(id).get_edges() {
            if seen.insert(e.get_neighbor_id()) {
                queue.push_back(e.get_neighbor_id());
            }
        }
    }
    seen
}

fn find(parent: &mut Vec<usize>, x: usize) -> usize {
    let mut root = x;
    while parent[root] != root {
        root = parent[root];
    }
    let mut node = x;
    while parent[node] != root {
        let next = parent[node];
        parent[node] = root;
        node = next;
    }
    root
}

// Kruskal's algorithm restricted to the given node set, as an independent check.
fn kruskal_cost(graph: &WeightedUndirectedGraph, nodes: &HashSet<NodeId>) -> f64 {
    let ids: Vec<NodeId> = graph.get_ordered_node_ids();
    let index = |id: NodeId| ids.binary_search(&id).unwrap();
    let mut edges: Vec<(f64, usize, usize)> = Vec::new();
    for id in &ids {
        if !nodes.contains(id) {
            continue;
        }
        for e in graph.get_node(*id).get_edges() {
            if *id < e.get_neighbor_id() {
                edges.push((e.weight, index(*id), index(e.get_neighbor_id())));
            }
        }
    }
    edges.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    let mut parent: Vec<usize> = (0..ids.len()).collect();
    let mut cost = 0.0;
    for (weight, a, b) in edges {
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        if ra != rb {
            parent[ra] = rb;
            cost += weight;
        }
    }
    cost
}

fn assert_valid_tree(graph: &WeightedUndirectedGraph, tree: &MinimumSpanningTree) {
    let expected_nodes = reachable(graph, tree.start);
    assert_eq!(tree.len(), expected_nodes.len() - 1);

    let mut targets: HashSet<NodeId> = HashSet::new();
    for e in &tree.edges {
        assert!(targets.insert(e.target), "{} appears twice as a target", e.target);
        assert_eq!(graph.get_edge_weight(e.source, e.target), Some(e.weight));
    }
    assert!(!targets.contains(&tree.start));
    let covered: HashSet<NodeId> = tree.nodes().into_iter().collect();
    assert_eq!(covered, expected_nodes);

    let sum: f64 = tree.edges.iter().map(|e| e.weight).sum();
    assert_eq!(tree.total_cost, sum);
    assert_eq!(tree.total_cost, kruskal_cost(graph, &expected_nodes));
}

#[cfg(test)]
#[test]
fn test_triangle() {
    let graph = get_graph(0).unwrap();
    let tree = graph.get_mst(NodeId::from(A)).unwrap();
    assert_eq!(edge_tuples(&tree), vec![(A, K, 3.0), (K, B, 7.0)]);
    assert_eq!(tree.total_cost, 10.0);
    assert!(tree.contains_edge(NodeId::from(B), NodeId::from(K)));
    assert!(!tree.contains_edge(NodeId::from(A), NodeId::from(B)));
    assert_valid_tree(&graph, &tree);
}

#[cfg(test)]
#[test]
fn test_eleven_node_graph() {
    let graph = get_graph(1).unwrap();
    let tree = graph.get_mst(NodeId::from(A)).unwrap();
    assert_eq!(
        edge_tuples(&tree),
        vec![
            (A, K, 3.0),
            (K, C, 5.0),
            (A, I, 6.0),
            (I, H, 3.0),
            (H, G, 7.0),
            (G, E, 6.0),
            (E, B, 2.0),
            (G, F, 8.0),
            (K, J, 8.0),
            (C, D, 9.0),
        ]
    );
    assert_eq!(tree.total_cost, 57.0);
    assert_valid_tree(&graph, &tree);

    // any start node yields a tree of the same cost.
    for id in graph.get_ordered_node_ids() {
        let tree = graph.get_mst(id).unwrap();
        assert_eq!(tree.total_cost, 57.0);
        assert_valid_tree(&graph, &tree);
    }
}

#[cfg(test)]
#[test]
fn test_single_node() {
    let graph = get_graph(2).unwrap();
    let options = MSTOptions::new().require_full_coverage(true);
    let tree = graph
        .get_minimum_spanning_tree(NodeId::from(A), &options, None)
        .unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.total_cost, 0.0);
    assert_eq!(tree.nodes(), vec![NodeId::from(A)]);
}

#[cfg(test)]
#[test]
fn test_missing_start() {
    let graph = get_graph(0).unwrap();
    let err = graph.get_mst(NodeId::from(42)).unwrap_err();
    assert!(err.is_invalid_input());
}

#[cfg(test)]
#[test]
fn test_disconnected_graph() {
    let graph = get_graph(3).unwrap();
    let tree = graph.get_mst(NodeId::from(0)).unwrap();
    assert_eq!(edge_tuples(&tree), vec![(0, 1, 1.0), (1, 2, 2.0)]);
    assert_eq!(tree.total_cost, 3.0);
    assert_valid_tree(&graph, &tree);

    let options = MSTOptions::new().require_full_coverage(true);
    match graph.get_minimum_spanning_tree(NodeId::from(3), &options, None) {
        Err(SpanningError::IncompleteCoverage { visited, total }) => {
            assert_eq!(visited, 3);
            assert_eq!(total, 6);
        }
        other => panic!("expected IncompleteCoverage, got {:?}", other),
    }
}

#[cfg(test)]
#[test]
fn test_ties_and_self_loops() {
    let graph = get_graph(4).unwrap();
    let tree = graph.get_mst(NodeId::from(0)).unwrap();
    // equal weights: the smaller (source, target) pair is popped first.
    assert_eq!(
        edge_tuples(&tree),
        vec![(0, 1, 1.0), (0, 3, 1.0), (1, 2, 1.0)]
    );
    assert_valid_tree(&graph, &tree);
}

#[cfg(test)]
#[test]
fn test_negative_weights() {
    let graph = get_graph(5).unwrap();
    let tree = graph.get_mst(NodeId::from(3)).unwrap();
    assert_eq!(
        edge_tuples(&tree),
        vec![(3, 2, 4.0), (2, 0, -1.0), (0, 1, -2.5)]
    );
    assert_eq!(tree.total_cost, 0.5);
    assert_valid_tree(&graph, &tree);
}

#[cfg(test)]
#[test]
fn test_deterministic() {
    let graph = get_graph(1).unwrap();
    let first = graph.get_mst(NodeId::from(D)).unwrap();
    let second = graph.get_mst(NodeId::from(D)).unwrap();
    assert_eq!(first, second);

    let rebuilt = get_graph(1).unwrap();
    assert_eq!(rebuilt.get_mst(NodeId::from(D)).unwrap(), first);
}

#[cfg(test)]
#[test]
fn test_random_graphs_match_kruskal() {
    let mut rng = StdRng::seed_from_u64(12345);
    for n in 1..40 {
        for p in &[0.05, 0.2, 0.6] {
            let graph = WeightedUndirectedGraphBuilder {}
                .get_random_graph(n, *p, 10, &mut rng)
                .unwrap();
            let tree = graph.get_mst(NodeId::from(0)).unwrap();
            assert_valid_tree(&graph, &tree);
        }
    }
    for n in 2..20 {
        let graph = WeightedUndirectedGraphBuilder {}
            .get_complete_graph(n, 5, &mut rng)
            .unwrap();
        let tree = graph
            .get_minimum_spanning_tree(
                NodeId::from(0),
                &MSTOptions::new().require_full_coverage(true),
                None,
            )
            .unwrap();
        assert_eq!(tree.len() as u64, n - 1);
        assert_valid_tree(&graph, &tree);
    }
}

#[cfg(test)]
#[test]
fn test_generators_number_from_zero() {
    let mut rng = StdRng::seed_from_u64(7);
    let expected: Vec<NodeId> = (0..4i64).map(NodeId::from).collect();
    let complete = WeightedUndirectedGraphBuilder {}
        .get_complete_graph(4, 3, &mut rng)
        .unwrap();
    assert_eq!(complete.get_ordered_node_ids(), expected);
    assert_eq!(complete.count_edges(), 6);
    let random = WeightedUndirectedGraphBuilder {}
        .get_random_graph(4, 0.0, 3, &mut rng)
        .unwrap();
    assert_eq!(random.get_ordered_node_ids(), expected);
    let path = WeightedUndirectedGraphBuilder {}.get_path_graph(3, 1.0).unwrap();
    assert_eq!(path.get_ordered_node_ids(), expected);
}

#[cfg(test)]
#[test]
fn test_path_graph() {
    let graph = WeightedUndirectedGraphBuilder {}.get_path_graph(5, 2.0).unwrap();
    let tree = graph.get_mst(NodeId::from(5)).unwrap();
    assert_eq!(
        edge_tuples(&tree),
        vec![(5, 4, 2.0), (4, 3, 2.0), (3, 2, 2.0), (2, 1, 2.0), (1, 0, 2.0)]
    );
    assert_eq!(tree.total_cost, 10.0);
}

#[cfg(test)]
#[test]
fn test_observer_records() {
    let graph = get_graph(0).unwrap();
    let mut records: Vec<PrimTraceRecord> = Vec::new();
    let mut observer = |record: &PrimTraceRecord| records.push(record.clone());
    let traced = graph
        .get_minimum_spanning_tree(NodeId::from(A), &MSTOptions::default(), Some(&mut observer))
        .unwrap();
    assert_eq!(traced, graph.get_mst(NodeId::from(A)).unwrap());

    // initial state plus one record per visited node; the stale (8, A, B)
    // entry emits nothing when it is discarded.
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].step, 0);
    assert_eq!(records[0].visiting, None);
    assert!(records[0].visited.is_empty());
    assert_eq!(records[0].frontier.len(), 1);
    assert!(records[0].frontier[0].is_sentinel());

    assert_eq!(records[1].visiting, Some(NodeId::from(A)));
    let weights: Vec<f64> = records[1]
        .frontier
        .iter()
        .map(|e| e.weight.into_inner())
        .collect();
    assert_eq!(weights, vec![3.0, 8.0]);

    assert_eq!(records[2].visiting, Some(NodeId::from(K)));
    assert_eq!(records[2].visited, vec![NodeId::from(A), NodeId::from(K)]);
    let weights: Vec<f64> = records[2]
        .frontier
        .iter()
        .map(|e| e.weight.into_inner())
        .collect();
    assert_eq!(weights, vec![7.0, 8.0]);

    assert_eq!(records[3].visiting, Some(NodeId::from(B)));
    let visited: BTreeSet<NodeId> = records[3].visited.iter().cloned().collect();
    assert_eq!(visited.len(), 3);
    assert_eq!(records[3].frontier.len(), 1);
}

#[cfg(test)]
#[test]
fn test_cancellation() {
    let graph = get_graph(1).unwrap();
    let flag = Arc::new(AtomicBool::new(true));
    let options = MSTOptions::new().cancellation(flag);
    match graph.get_minimum_spanning_tree(NodeId::from(A), &options, None) {
        Err(SpanningError::Cancelled { visited }) => assert_eq!(visited, 0),
        other => panic!("expected Cancelled, got {:?}", other),
    }

    let options = MSTOptions::new().cancellation(Arc::new(AtomicBool::new(false)));
    let tree = graph
        .get_minimum_spanning_tree(NodeId::from(A), &options, None)
        .unwrap();
    assert_eq!(tree.total_cost, 57.0);
}

#[cfg(test)]
#[test]
fn test_parallel_starts() {
    let graph = get_graph(1).unwrap();
    let starts: Vec<NodeId> = graph.get_ordered_node_ids();
    let trees = graph.get_minimum_spanning_trees_from(&starts, &MSTOptions::default());
    assert_eq!(trees.len(), starts.len());
    for (start, tree) in starts.iter().zip(trees.into_iter()) {
        let tree = tree.unwrap();
        assert_eq!(tree.start, *start);
        assert_eq!(tree.total_cost, 57.0);
        assert_eq!(tree, graph.get_mst(*start).unwrap());
    }

    let results = graph.get_minimum_spanning_trees_from(&[NodeId::from(99)], &MSTOptions::default());
    assert!(results[0].as_ref().unwrap_err().is_invalid_input());
}
