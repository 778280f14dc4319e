/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate serde_json;

use crate::spanning::algorithms::prim::{MSTOptions, MinimumSpanningTree, PrimMST};
use crate::spanning::algorithms::trace::{PrimObserver, TracingObserver};
use crate::spanning::error::{SpanningError, SpanningResult};
use crate::spanning::graph_base::GraphBase;
use crate::spanning::graph_builder_base::GraphBuilderBase;
use crate::spanning::id_types::{GraphId, NodeId};
use crate::spanning::line_processor::{LineProcessorBase, WeightedLineProcessor};
use crate::spanning::row::WeightedEdgeRow;
use crate::spanning::transformer_base::TransformerBase;
use crate::spanning::weighted_undirected_graph_builder::WeightedUndirectedGraphBuilder;
use clap::ArgMatches;
use serde_json::json;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tracing::{debug, error};

/// Builds one weighted graph per input key and prints its minimum spanning tree.
pub struct MSTTransformer {
    batch: Vec<WeightedEdgeRow>,
    line_processor: Arc<WeightedLineProcessor>,
    start_label: Option<String>,
    options: MSTOptions,
    long_format: bool,
    trace: bool,
}

impl MSTTransformer {
    pub fn new(
        start_label: Option<String>,
        require_full_coverage: bool,
        long_format: bool,
        trace: bool,
    ) -> Self {
        Self {
            batch: Vec::new(),
            line_processor: Arc::new(WeightedLineProcessor::new()),
            start_label,
            options: MSTOptions::new().require_full_coverage(require_full_coverage),
            long_format,
            trace,
        }
    }

    pub fn from_argmatches(matches: &ArgMatches) -> SpanningResult<Self> {
        let start_label: Option<String> = match matches.value_of("start") {
            Some(label) if label.is_empty() => {
                return Err(SpanningError::invalid_input("--start must not be empty"))
            }
            Some(label) => Some(label.to_string()),
            None => None,
        };
        Ok(MSTTransformer::new(
            start_label,
            matches.is_present("require_full_coverage"),
            matches.is_present("long_format"),
            matches.is_present("trace"),
        ))
    }

    fn label(&self, node_id: NodeId) -> SpanningResult<String> {
        self.line_processor.get_node_label(node_id)
    }

    // the --start label when given, otherwise the source of the batch's first row.
    fn resolve_start(&self) -> SpanningResult<NodeId> {
        match &self.start_label {
            Some(label) => self.line_processor.get_node_id(label)?.ok_or_else(|| {
                SpanningError::invalid_input(format!("start node {} is not in the graph", label))
            }),
            None => self
                .batch
                .first()
                .map(|row| row.source_id)
                .ok_or_else(SpanningError::err_none),
        }
    }

    pub fn format_tree(
        &self,
        original_id: &str,
        num_nodes: usize,
        tree: &MinimumSpanningTree,
    ) -> SpanningResult<Vec<String>> {
        if self.long_format {
            let mut lines: Vec<String> = Vec::with_capacity(tree.len() + 1);
            for e in &tree.edges {
                lines.push(format!(
                    "{}\t{}\t{}\t{}",
                    original_id,
                    self.label(e.source)?,
                    self.label(e.target)?,
                    e.weight
                ));
            }
            lines.push(format!("{}\ttotal_cost\t{}", original_id, tree.total_cost));
            return Ok(lines);
        }
        let mut edges = Vec::with_capacity(tree.len());
        for e in &tree.edges {
            edges.push(json!([self.label(e.source)?, self.label(e.target)?, e.weight]));
        }
        let stats = json!({
            "edges": edges,
            "total_cost": tree.total_cost,
            "num_nodes": num_nodes,
        });
        Ok(vec![format!("{}\t{}", original_id, stats)])
    }
}
impl Default for MSTTransformer {
    fn default() -> Self {
        MSTTransformer::new(None, false, false, false)
    }
}

impl TransformerBase for MSTTransformer {
    fn get_line_processor(&self) -> Arc<dyn LineProcessorBase> {
        self.line_processor.clone()
    }
    fn process_row(&mut self, row: WeightedEdgeRow) -> SpanningResult<()> {
        self.batch.push(row);
        Ok(())
    }
    fn reset(&mut self) -> SpanningResult<()> {
        self.batch.clear();
        Ok(())
    }

    fn process_batch(&mut self, graph_id: GraphId, output: &Sender<String>) -> SpanningResult<()> {
        let original_id = self.line_processor.get_original_id(graph_id)?;
        let tuples: Vec<(i64, i64, f64)> = self.batch.iter().map(|x| x.as_tuple()).collect();
        let mut builder = WeightedUndirectedGraphBuilder {};
        let result = builder.from_vector(tuples).and_then(|graph| {
            let start = self.resolve_start()?;
            // labels are interned across all graphs, so a known label may
            // still be absent from this one.
            if !graph.has_node(start) {
                return Err(SpanningError::invalid_input(format!(
                    "start node {} is not in graph {}",
                    self.label(start)?,
                    original_id
                )));
            }
            let line_processor = self.line_processor.clone();
            let mut tracer = TracingObserver::new(original_id.clone(), move |id: NodeId| {
                line_processor
                    .get_node_label(id)
                    .unwrap_or_else(|_| id.to_string())
            });
            let observer: Option<&mut dyn PrimObserver> = if self.trace {
                Some(&mut tracer)
            } else {
                None
            };
            let tree = graph.get_minimum_spanning_tree(start, &self.options, observer)?;
            Ok((graph.count_nodes(), tree))
        });
        let (num_nodes, tree) = result.map_err(|e| {
            error!("graph {}: {}", original_id, e);
            e
        })?;
        debug!(
            "graph {}: {} tree edges, total cost {}",
            original_id,
            tree.len(),
            tree.total_cost
        );
        for line in self.format_tree(&original_id, num_nodes, &tree)? {
            output
                .send(line)
                .map_err(|_| SpanningError::new("Output channel closed."))?;
        }
        Ok(())
    }
}
