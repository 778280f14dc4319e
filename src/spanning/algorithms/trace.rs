/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate fxhash;

use crate::spanning::algorithms::prim::{Frontier, FrontierEntry};
use crate::spanning::id_types::NodeId;
use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::debug;

/// State of a Prim computation at an iteration boundary. Step 0 is the state
/// right after seeding; every later step follows the visit of `visiting`.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimTraceRecord {
    pub step: usize,
    pub visiting: Option<NodeId>,
    /// sorted ascending.
    pub visited: Vec<NodeId>,
    /// sorted ascending, i.e. in pop order. May contain stale entries.
    pub frontier: Vec<FrontierEntry>,
}
impl PrimTraceRecord {
    pub fn snapshot(
        step: usize,
        visiting: Option<NodeId>,
        visited: &FxHashSet<NodeId>,
        frontier: &Frontier,
    ) -> Self {
        Self {
            step,
            visiting,
            visited: visited.iter().cloned().sorted().collect(),
            frontier: frontier.iter().map(|entry| entry.0).sorted().collect(),
        }
    }
}

/// Receives trace records synchronously from inside the Prim loop. Observers
/// see the state but cannot change it.
pub trait PrimObserver {
    fn observe(&mut self, record: &PrimTraceRecord);
}
impl<F> PrimObserver for F
where
    F: FnMut(&PrimTraceRecord),
{
    fn observe(&mut self, record: &PrimTraceRecord) {
        self(record)
    }
}

/// Logs every trace record at DEBUG level, one line each, rendering nodes
/// through `label`.
pub struct TracingObserver<'a> {
    graph_key: String,
    label: Box<dyn Fn(NodeId) -> String + 'a>,
}
impl<'a> TracingObserver<'a> {
    pub fn new<F>(graph_key: String, label: F) -> Self
    where
        F: Fn(NodeId) -> String + 'a,
    {
        Self {
            graph_key,
            label: Box::new(label),
        }
    }
    pub fn with_node_ids(graph_key: String) -> Self {
        Self::new(graph_key, |id: NodeId| id.value().to_string())
    }
    pub fn format_record(&self, record: &PrimTraceRecord) -> String {
        let visited = record.visited.iter().map(|id| (self.label)(*id)).join(", ");
        let frontier = record
            .frontier
            .iter()
            .map(|e| {
                format!(
                    "({}, {}, {})",
                    e.weight,
                    (self.label)(e.source),
                    (self.label)(e.target)
                )
            })
            .join(", ");
        let visiting = match record.visiting {
            Some(id) => format!("visiting node: {}", (self.label)(id)),
            None => "initial state".to_string(),
        };
        format!(
            "[{}] step {}: {} | visited: {{{}}} | frontier: [{}]",
            self.graph_key, record.step, visiting, visited, frontier
        )
    }
}
impl<'a> PrimObserver for TracingObserver<'a> {
    fn observe(&mut self, record: &PrimTraceRecord) {
        debug!("{}", self.format_record(record));
    }
}
