/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::spanning::error::{SpanningError, SpanningResult};
use crate::spanning::id_types::GraphId;
use crate::spanning::input::Input;
use crate::spanning::line_processor::LineProcessorBase;
use crate::spanning::output::Output;
use crate::spanning::row::WeightedEdgeRow;
use std::io::prelude::*;
use std::sync::mpsc::{channel, Sender};
use std::sync::Arc;
use tracing::debug;

pub trait TransformerBase {
    fn get_line_processor(&self) -> Arc<dyn LineProcessorBase>;
    // logic for taking row and storing into self via side-effect
    fn process_row(&mut self, row: WeightedEdgeRow) -> SpanningResult<()>;
    // logic for processing batch of rows, once all rows are ready
    fn process_batch(&mut self, graph_id: GraphId, output: &Sender<String>) -> SpanningResult<()>;
    // reset transformer state after processing;
    fn reset(&mut self) -> SpanningResult<()>;

    // runs through lines ordered by graph_id, updates state accordingly
    // and runs process_batch when graph_id changes
    fn read_batches(&mut self, input: Input, output: &Sender<String>) -> SpanningResult<()> {
        let line_processor = self.get_line_processor();
        let mut current_graph_id: Option<GraphId> = None;
        let mut num_batches: usize = 0;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let row = line_processor.process_line(line)?;
            let new_graph_id: GraphId = row.get_graph_id();
            if let Some(some_current_graph_id) = current_graph_id {
                if new_graph_id != some_current_graph_id {
                    self.process_batch(some_current_graph_id, output)?;
                    num_batches += 1;
                    self.reset()?;
                }
            }
            current_graph_id = Some(new_graph_id);
            self.process_row(row)?;
        }
        match current_graph_id {
            Some(some_current_graph_id) => {
                self.process_batch(some_current_graph_id, output)?;
                num_batches += 1;
                debug!("processed {} graphs", num_batches);
                self.reset()
            }
            None => Err("No input rows!".into()),
        }
    }

    // main loop: batches are processed on the calling thread while a scoped
    // writer thread prints their lines in order.
    fn run(&mut self, input: Input, mut output: Output) -> SpanningResult<()> {
        let ret = crossbeam::scope(|scope| -> SpanningResult<()> {
            let (sender, receiver) = channel::<String>();
            let writer = scope.spawn(move |_| -> SpanningResult<()> {
                for line in receiver {
                    output.print(line)?;
                }
                Ok(())
            });
            let read_result = self.read_batches(input, &sender);
            // the writer drains the channel and exits once the sender is gone.
            drop(sender);
            let write_result = writer
                .join()
                .map_err(|_| SpanningError::new("Writer thread panicked."))?;
            read_result?;
            write_result
        });
        ret.map_err(|_| SpanningError::new("Transformer thread panicked."))?
    }
}
