/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate fxhash;
use crate::spanning::algorithms::prim::PrimMST;
use crate::spanning::graph_base::GraphBase;
use crate::spanning::id_types::NodeId;
use crate::spanning::node::{NodeBase, NodeEdgeBase, WeightedNode, WeightedNodeBase};

use fxhash::FxHashMap;
use std::collections::hash_map::Keys;

/// Keeps track of a weighted undirected graph. Every edge is stored on both of
/// its endpoints with the same weight.
#[derive(Debug)]
pub struct WeightedUndirectedGraph {
    pub nodes: FxHashMap<NodeId, WeightedNode>,
    pub ids: Vec<NodeId>,
}
impl GraphBase for WeightedUndirectedGraph {
    type NodeType = WeightedNode;

    fn get_ids(&self) -> &Vec<NodeId> {
        &self.ids
    }
    fn get_ids_iter(&self) -> Keys<NodeId, WeightedNode> {
        self.nodes.keys()
    }
    fn has_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }
    fn get_node(&self, node_id: NodeId) -> &WeightedNode {
        &self.nodes[&node_id]
    }
    /// self-loops count once, every other edge is seen from both endpoints.
    fn count_edges(&self) -> usize {
        let mut num_loops: usize = 0;
        let mut num_half_edges: usize = 0;
        for node in self.nodes.values() {
            if node.has_self_loop() {
                num_loops += 1;
                num_half_edges += node.neighbors.len() - 1;
            } else {
                num_half_edges += node.neighbors.len();
            }
        }
        num_loops + num_half_edges / 2
    }
    fn count_nodes(&self) -> usize {
        self.nodes.len()
    }
    fn create_empty() -> Self {
        WeightedUndirectedGraph {
            nodes: FxHashMap::default(),
            ids: Vec::new(),
        }
    }
}
impl WeightedUndirectedGraph {
    pub fn as_input_rows(&self, graph_key: &str) -> String {
        let mut rows: Vec<String> = Vec::new();
        for id in self.get_ordered_node_ids() {
            for e in self.nodes[&id].get_edges() {
                if id <= e.get_neighbor_id() {
                    rows.push(format!(
                        "{}\t{}\t{}\t{}",
                        graph_key,
                        id.value(),
                        e.get_neighbor_id().value(),
                        e.weight
                    ));
                }
            }
        }
        rows.join("\n")
    }
    pub fn get_node_degree(&self, id: NodeId) -> usize {
        self.nodes[&id].degree()
    }
    pub fn get_node_weight(&self, id: NodeId) -> f64 {
        self.nodes[&id].weight()
    }
    pub fn get_edge_weight(&self, source: NodeId, target: NodeId) -> Option<f64> {
        self.nodes.get(&source)?.get_edge_weight(target)
    }
}

impl PrimMST for WeightedUndirectedGraph {}
