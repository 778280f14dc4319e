/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate rand;
extern crate thiserror;

pub mod spanning;

pub use spanning::algorithms::prim::{
    FrontierEntry, MSTEdge, MSTOptions, MinimumSpanningTree, PrimMST,
};
pub use spanning::algorithms::trace::{PrimObserver, PrimTraceRecord, TracingObserver};
pub use spanning::error::{SpanningError, SpanningResult};
pub use spanning::graph_base::GraphBase;
pub use spanning::graph_builder_base::GraphBuilderBase;
pub use spanning::id_types::{GraphId, NodeId};
pub use spanning::input::Input;
pub use spanning::line_processor::{LineProcessorBase, WeightedLineProcessor};
pub use spanning::mst_transformer::MSTTransformer;
pub use spanning::output::Output;
pub use spanning::row::WeightedEdgeRow;
pub use spanning::transformer_base::TransformerBase;
pub use spanning::weighted_undirected_graph::WeightedUndirectedGraph;
pub use spanning::weighted_undirected_graph_builder::{
    TWeightedUndirectedGraphBuilder, WeightedUndirectedGraphBuilder,
};
