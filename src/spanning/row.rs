/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::spanning::id_types::{GraphId, NodeId};
use std::fmt;

/// used to keep track of row input for weighted undirected graphs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedEdgeRow {
    pub graph_id: GraphId,
    pub source_id: NodeId,
    pub target_id: NodeId,
    pub weight: f64,
}
impl WeightedEdgeRow {
    /// this is the key used by each transformer.
    pub fn get_graph_id(&self) -> GraphId {
        self.graph_id
    }
    pub fn as_tuple(&self) -> (i64, i64, f64) {
        (self.source_id.value(), self.target_id.value(), self.weight)
    }
}
impl fmt::Display for WeightedEdgeRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "WeightedEdgeRow: {}\t{}\t{}\t{}",
            self.graph_id, self.source_id, self.target_id, self.weight
        )
    }
}
