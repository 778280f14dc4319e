/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::cmp::{Eq, PartialEq};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::spanning::id_types::NodeId;

pub trait NodeEdgeBase
where
    Self: Sized,
{
    fn get_neighbor_id(&self) -> NodeId;
}

pub trait NodeBase
where
    Self: Sized,
{
    type NodeEdgeType: NodeEdgeBase + Sized;

    fn get_id(&self) -> NodeId;
    fn get_edges(&self) -> Box<dyn Iterator<Item = &Self::NodeEdgeType> + '_>;
    fn degree(&self) -> usize;
}

/// Used to indicate a weighted edge leading to the neighbor of a node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedNodeEdge {
    pub target_id: NodeId,
    pub weight: f64,
}
impl NodeEdgeBase for WeightedNodeEdge {
    fn get_neighbor_id(&self) -> NodeId {
        self.target_id
    }
}
impl WeightedNodeEdge {
    pub fn new(target_id: NodeId, weight: f64) -> Self {
        Self { target_id, weight }
    }
}

pub trait WeightedNodeBase: NodeBase {
    /// sum of the weights of all edges incident to this node.
    fn weight(&self) -> f64;
    fn get_edge_weight(&self, neighbor_id: NodeId) -> Option<f64>;
}

/// A node in a weighted undirected graph. Edges are kept sorted by neighbor id
/// (one edge per neighbor), and `neighbors` mirrors their targets for
/// membership checks.
#[derive(Debug)]
pub struct WeightedNode {
    pub node_id: NodeId,
    pub edges: Vec<WeightedNodeEdge>,
    pub neighbors: BTreeSet<NodeId>,
}
impl Hash for WeightedNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id.hash(state);
    }
}
impl PartialEq for WeightedNode {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}
impl Eq for WeightedNode {}
impl NodeBase for WeightedNode {
    type NodeEdgeType = WeightedNodeEdge;

    fn get_id(&self) -> NodeId {
        self.node_id
    }
    fn get_edges(&self) -> Box<dyn Iterator<Item = &WeightedNodeEdge> + '_> {
        Box::new(self.edges.iter())
    }
    fn degree(&self) -> usize {
        self.edges.len()
    }
}
impl WeightedNodeBase for WeightedNode {
    fn weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
    fn get_edge_weight(&self, neighbor_id: NodeId) -> Option<f64> {
        self.edges
            .binary_search_by_key(&neighbor_id, |e| e.target_id)
            .ok()
            .map(|idx| self.edges[idx].weight)
    }
}
impl WeightedNode {
    pub fn new(node_id: NodeId, edges: Vec<WeightedNodeEdge>) -> Self {
        let mut edges = edges;
        edges.sort_by_key(|e| e.target_id);
        let neighbors = edges.iter().map(|e| e.target_id).collect();
        Self {
            node_id,
            edges,
            neighbors,
        }
    }
    pub fn has_self_loop(&self) -> bool {
        self.neighbors.contains(&self.node_id)
    }
}
