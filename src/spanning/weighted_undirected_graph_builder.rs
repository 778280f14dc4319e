/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::spanning::error::{SpanningError, SpanningResult};
use crate::spanning::graph_builder_base::GraphBuilderBase;
use crate::spanning::id_types::NodeId;
use crate::spanning::node::{WeightedNode, WeightedNodeEdge};
use crate::spanning::weighted_undirected_graph::WeightedUndirectedGraph;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
extern crate fxhash;
use fxhash::FxHashMap;

use rand::Rng;

pub type Adjacency = BTreeMap<NodeId, BTreeMap<NodeId, f64>>;

pub struct WeightedUndirectedGraphBuilder {}

pub trait TWeightedUndirectedGraphBuilder:
    GraphBuilderBase<GraphType = WeightedUndirectedGraph, RowType = (i64, i64, f64)>
{
    // Build a graph with a sequence of n + 1 vertices with an edge of the given
    // weight between each pair of successive vertices.
    fn get_path_graph(&mut self, n: u64, weight: f64) -> SpanningResult<Self::GraphType> {
        let mut v = Vec::new();
        for i in 0..n {
            v.push((i as i64, (i + 1) as i64, weight));
        }
        self.from_vector(v)
    }

    // Build a graph on vertices 0..n with every possible edge, each with an
    // integral random weight in 1..=max_weight. Needs n >= 2 to contain any node.
    fn get_complete_graph<R: Rng>(
        &mut self,
        n: u64,
        max_weight: u32,
        rng: &mut R,
    ) -> SpanningResult<Self::GraphType> {
        let mut v = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                v.push((i as i64, j as i64, rng.gen_range(1..=max_weight) as f64));
            }
        }
        self.from_vector(v)
    }

    // Builds an Erdos-Renyi graph on n vertices with edge probability p, with
    // integral random weights in 1..=max_weight. Every vertex gets a self-loop
    // row so that isolated vertices are still part of the graph.
    fn get_random_graph<R: Rng>(
        &mut self,
        n: u64,
        p: f64,
        max_weight: u32,
        rng: &mut R,
    ) -> SpanningResult<Self::GraphType> {
        let mut v = Vec::new();
        for i in 0..n {
            v.push((i as i64, i as i64, 0.0));
            for j in i + 1..n {
                if rng.gen::<f64>() < p {
                    v.push((i as i64, j as i64, rng.gen_range(1..=max_weight) as f64));
                }
            }
        }
        self.from_vector(v)
    }

    fn insert_half_edge(
        ids: &mut Adjacency,
        source: NodeId,
        target: NodeId,
        weight: f64,
    ) -> SpanningResult<()> {
        match ids.entry(source).or_insert_with(BTreeMap::new).entry(target) {
            Entry::Vacant(e) => {
                e.insert(weight);
                Ok(())
            }
            Entry::Occupied(e) if *e.get() == weight => Ok(()),
            Entry::Occupied(e) => Err(SpanningError::invalid_input(format!(
                "conflicting weights {} and {} for edge ({}, {})",
                e.get(),
                weight,
                source.value(),
                target.value()
            ))),
        }
    }

    fn get_node_ids(data: &[(i64, i64, f64)]) -> SpanningResult<Adjacency> {
        let mut ids: Adjacency = BTreeMap::new();
        for (id1, id2, weight) in data {
            if weight.is_nan() {
                return Err(SpanningError::invalid_input(format!(
                    "edge ({}, {}) has a NaN weight",
                    id1, id2
                )));
            }
            let (source, target) = (NodeId::from(*id1), NodeId::from(*id2));
            Self::insert_half_edge(&mut ids, source, target, *weight)?;
            Self::insert_half_edge(&mut ids, target, source, *weight)?;
        }
        Ok(ids)
    }

    fn get_nodes(ids: Adjacency) -> FxHashMap<NodeId, WeightedNode> {
        let mut nodes: FxHashMap<NodeId, WeightedNode> = FxHashMap::default();
        for (id, neighbors) in ids.into_iter() {
            let edges = neighbors
                .into_iter()
                .map(|(target_id, weight)| WeightedNodeEdge::new(target_id, weight))
                .collect();
            nodes.insert(id, WeightedNode::new(id, edges));
        }
        nodes
    }

    fn get_graph(ids: Adjacency) -> WeightedUndirectedGraph {
        let nodes = Self::get_nodes(ids);
        let mut node_ids: Vec<NodeId> = nodes.keys().cloned().collect();
        node_ids.sort();
        WeightedUndirectedGraph {
            ids: node_ids,
            nodes,
        }
    }

    // builds a graph from an explicit adjacency mapping, in which every edge is
    // expected to be listed from both of its endpoints with the same weight.
    fn from_adjacency(&mut self, adjacency: Adjacency) -> SpanningResult<WeightedUndirectedGraph> {
        for (id, neighbors) in &adjacency {
            for (neighbor_id, weight) in neighbors {
                if weight.is_nan() {
                    return Err(SpanningError::invalid_input(format!(
                        "edge ({}, {}) has a NaN weight",
                        id.value(),
                        neighbor_id.value()
                    )));
                }
                let reverse = adjacency
                    .get(neighbor_id)
                    .and_then(|reverse_neighbors| reverse_neighbors.get(id));
                match reverse {
                    Some(reverse_weight) if reverse_weight == weight => {}
                    Some(reverse_weight) => {
                        return Err(SpanningError::invalid_input(format!(
                            "edge ({}, {}) has weight {} but its reverse has weight {}",
                            id.value(),
                            neighbor_id.value(),
                            weight,
                            reverse_weight
                        )))
                    }
                    None => {
                        return Err(SpanningError::invalid_input(format!(
                            "edge ({}, {}) has no reverse edge",
                            id.value(),
                            neighbor_id.value()
                        )))
                    }
                }
            }
        }
        Ok(Self::get_graph(adjacency))
    }
}

impl TWeightedUndirectedGraphBuilder for WeightedUndirectedGraphBuilder {}
impl GraphBuilderBase for WeightedUndirectedGraphBuilder {
    type GraphType = WeightedUndirectedGraph;
    type RowType = (i64, i64, f64);

    // builds a graph from a vector of weighted edges. Edges only need to be
    // provided once (this being an undirected graph); repeating an edge is
    // fine as long as the weight is the same.
    fn from_vector(&mut self, data: Vec<(i64, i64, f64)>) -> SpanningResult<WeightedUndirectedGraph> {
        let ids = Self::get_node_ids(&data)?;
        Ok(Self::get_graph(ids))
    }
}
