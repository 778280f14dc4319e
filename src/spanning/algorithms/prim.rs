/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate fxhash;

use crate::spanning::algorithms::trace::{PrimObserver, PrimTraceRecord};
use crate::spanning::error::{SpanningError, SpanningResult};
use crate::spanning::graph_base::GraphBase;
use crate::spanning::id_types::NodeId;
use crate::spanning::node::{NodeBase, NodeEdgeBase, WeightedNode, WeightedNodeBase};
use core::cmp::Reverse;
use fxhash::FxHashSet;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// A candidate edge crossing from the tree to a node that may not be in it
/// yet. Ordered by weight, then source, then target.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierEntry {
    pub weight: OrderedFloat<f64>,
    pub source: NodeId,
    pub target: NodeId,
}
impl FrontierEntry {
    pub fn new(weight: f64, source: NodeId, target: NodeId) -> Self {
        Self {
            weight: OrderedFloat(weight),
            source,
            target,
        }
    }
    /// the seed entry for the start node, which adds it to the tree without
    /// producing an edge.
    pub fn is_sentinel(&self) -> bool {
        self.source == self.target
    }
}

/// Min-heap of frontier entries. Stale entries (whose target already joined
/// the tree) are left in place and skipped when popped.
pub type Frontier = BinaryHeap<Reverse<FrontierEntry>>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MSTEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}
impl MSTEdge {
    pub fn as_tuple(&self) -> (i64, i64, f64) {
        (self.source.value(), self.target.value(), self.weight)
    }
}

/// Edges in the order they were added to the tree, and their summed weight.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningTree {
    pub start: NodeId,
    pub edges: Vec<MSTEdge>,
    pub total_cost: f64,
}
impl MinimumSpanningTree {
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    /// start node followed by every edge target, in the order nodes joined the tree.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        nodes.push(self.start);
        nodes.extend(self.edges.iter().map(|e| e.target));
        nodes
    }
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges
            .iter()
            .any(|e| (e.source == a && e.target == b) || (e.source == b && e.target == a))
    }
}

#[derive(Clone, Debug)]
pub struct MSTOptions {
    /// fail with IncompleteCoverage unless every node is reachable from start.
    pub require_full_coverage: bool,
    /// re-check adjacency symmetry before running.
    pub validate_symmetry: bool,
    /// checked once per iteration; raising it stops the computation.
    pub cancellation: Option<Arc<AtomicBool>>,
}
impl Default for MSTOptions {
    fn default() -> Self {
        Self {
            require_full_coverage: false,
            validate_symmetry: true,
            cancellation: None,
        }
    }
}
impl MSTOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn require_full_coverage(mut self, require_full_coverage: bool) -> Self {
        self.require_full_coverage = require_full_coverage;
        self
    }
    pub fn validate_symmetry(mut self, validate_symmetry: bool) -> Self {
        self.validate_symmetry = validate_symmetry;
        self
    }
    pub fn cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancellation = Some(flag);
        self
    }
    fn is_cancelled(&self) -> bool {
        match &self.cancellation {
            Some(flag) => flag.load(Ordering::Relaxed),
            None => false,
        }
    }
}

pub trait PrimMST: GraphBase<NodeType = WeightedNode> {
    /// Verifies every neighbor exists and lists the reverse edge with an
    /// identical, non-NaN weight.
    fn check_symmetry(&self) -> SpanningResult<()> {
        for id in self.get_ordered_node_ids() {
            for e in self.get_node(id).get_edges() {
                let neighbor_id = e.get_neighbor_id();
                if e.weight.is_nan() {
                    return Err(SpanningError::invalid_input(format!(
                        "edge ({}, {}) has a NaN weight",
                        id.value(),
                        neighbor_id.value()
                    )));
                }
                let reverse_weight = if self.has_node(neighbor_id) {
                    self.get_node(neighbor_id).get_edge_weight(id)
                } else {
                    None
                };
                match reverse_weight {
                    Some(w) if w == e.weight => {}
                    Some(w) => {
                        return Err(SpanningError::invalid_input(format!(
                            "edge ({}, {}) has weight {} but its reverse has weight {}",
                            id.value(),
                            neighbor_id.value(),
                            e.weight,
                            w
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
        Ok(())
    }

    /// Prim's algorithm with a lazily-pruned frontier, grown from `start`.
    /// Returns the tree of the component reachable from `start`; with
    /// `require_full_coverage` an unreachable node is an error instead.
    fn get_minimum_spanning_tree(
        &self,
        start: NodeId,
        options: &MSTOptions,
        mut observer: Option<&mut dyn PrimObserver>,
    ) -> SpanningResult<MinimumSpanningTree> {
        if !self.has_node(start) {
            return Err(SpanningError::invalid_input(format!(
                "start node {} is not in the graph",
                start.value()
            )));
        }
        if options.validate_symmetry {
            self.check_symmetry()?;
        }

        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut edges: Vec<MSTEdge> = Vec::new();
        let mut total_cost: f64 = 0.0;
        let mut frontier: Frontier = BinaryHeap::new();
        frontier.push(Reverse(FrontierEntry::new(0.0, start, start)));

        let mut step: usize = 0;
        if let Some(obs) = observer.as_mut() {
            obs.observe(&PrimTraceRecord::snapshot(step, None, &visited, &frontier));
        }

        while let Some(Reverse(entry)) = frontier.pop() {
            if options.is_cancelled() {
                return Err(SpanningError::Cancelled {
                    visited: visited.len(),
                });
            }
            if visited.contains(&entry.target) {
                trace!("discarding stale frontier entry {:?}", entry);
                continue;
            }
            visited.insert(entry.target);
            if !entry.is_sentinel() {
                edges.push(MSTEdge {
                    source: entry.source,
                    target: entry.target,
                    weight: entry.weight.into_inner(),
                });
                total_cost += entry.weight.into_inner();
            }
            for e in self.get_node(entry.target).get_edges() {
                let neighbor_id = e.get_neighbor_id();
                if !visited.contains(&neighbor_id) {
                    frontier.push(Reverse(FrontierEntry::new(
                        e.weight,
                        entry.target,
                        neighbor_id,
                    )));
                }
            }
            step += 1;
            if let Some(obs) = observer.as_mut() {
                obs.observe(&PrimTraceRecord::snapshot(
                    step,
                    Some(entry.target),
                    &visited,
                    &frontier,
                ));
            }
        }

        let total = self.count_nodes();
        if options.require_full_coverage && visited.len() != total {
            return Err(SpanningError::IncompleteCoverage {
                visited: visited.len(),
                total,
            });
        }
        debug!(
            "spanning tree from {} covers {} of {} nodes with cost {}",
            start,
            visited.len(),
            total,
            total_cost
        );
        Ok(MinimumSpanningTree {
            start,
            edges,
            total_cost,
        })
    }

    fn get_mst(&self, start: NodeId) -> SpanningResult<MinimumSpanningTree> {
        self.get_minimum_spanning_tree(start, &MSTOptions::default(), None)
    }

    /// One independent computation per start node on the rayon pool. Results
    /// are in the order of `starts`.
    fn get_minimum_spanning_trees_from(
        &self,
        starts: &[NodeId],
        options: &MSTOptions,
    ) -> Vec<SpanningResult<MinimumSpanningTree>>
    where
        Self: Sync,
    {
        starts
            .par_iter()
            .map(|start| self.get_minimum_spanning_tree(*start, options, None))
            .collect()
    }
}
