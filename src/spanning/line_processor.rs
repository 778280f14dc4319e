/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::spanning::error::{SpanningError, SpanningResult};
use crate::spanning::id_types::{GraphId, NodeId};
use crate::spanning::row::WeightedEdgeRow;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::sync::RwLock;

pub trait LineProcessorBase {
    fn process_line(&self, line: String) -> SpanningResult<WeightedEdgeRow>;
}

/// Assigns dense integer ids to string keys in the order they are first seen,
/// and keeps the reverse mapping for output.
struct KeyIndex {
    ids: RwLock<HashMap<String, i64>>,
    reverse_ids: RwLock<Vec<String>>,
}
impl KeyIndex {
    fn new() -> Self {
        Self {
            ids: RwLock::new(HashMap::new()),
            reverse_ids: RwLock::new(Vec::new()),
        }
    }
    fn record_new_key_or_return_current_one(&self, key: &str) -> SpanningResult<i64> {
        let mut ids = self.ids.write().map_err(|_| poisoned())?;
        let mut reverse_ids = self.reverse_ids.write().map_err(|_| poisoned())?;
        if let Some(id) = ids.get(key) {
            return Ok(*id);
        }
        let id = ids.len() as i64;
        ids.insert(key.to_string(), id);
        reverse_ids.push(key.to_string());
        Ok(id)
    }
    fn get(&self, key: &str) -> SpanningResult<Option<i64>> {
        let ids = self.ids.read().map_err(|_| poisoned())?;
        Ok(ids.get(key).cloned())
    }
    fn get_original(&self, local_id: i64) -> SpanningResult<String> {
        let reverse_ids = self.reverse_ids.read().map_err(|_| poisoned())?;
        usize::try_from(local_id)
            .ok()
            .and_then(|idx| reverse_ids.get(idx))
            .cloned()
            .ok_or_else(|| SpanningError::from(format!("Unknown local id: {}", local_id)))
    }
}

fn poisoned() -> SpanningError {
    SpanningError::new("Line processor lock poisoned.")
}

/// deals with processing lines and turning them into rows. Lines are of the
/// form `graph_key \t source_label \t target_label \t weight`. Graph keys and
/// node labels are interned separately.
pub struct WeightedLineProcessor {
    graph_keys: KeyIndex,
    node_labels: KeyIndex,
}
impl LineProcessorBase for WeightedLineProcessor {
    fn process_line(&self, line: String) -> SpanningResult<WeightedEdgeRow> {
        let vec: Vec<&str> = line.split('\t').collect();
        if vec.len() != 4 {
            return Err(SpanningError::invalid_input(format!(
                "expected 4 tab-separated fields, got {}: {:?}",
                vec.len(),
                line
            )));
        }
        let weight: f64 = vec[3].trim().parse::<f64>()?;
        let graph_id = GraphId::from(self.graph_keys.record_new_key_or_return_current_one(vec[0])?);
        let source_id = NodeId::from(self.node_labels.record_new_key_or_return_current_one(vec[1])?);
        let target_id = NodeId::from(self.node_labels.record_new_key_or_return_current_one(vec[2])?);
        Ok(WeightedEdgeRow {
            graph_id,
            source_id,
            target_id,
            weight,
        })
    }
}
impl WeightedLineProcessor {
    pub fn new() -> Self {
        Self {
            graph_keys: KeyIndex::new(),
            node_labels: KeyIndex::new(),
        }
    }
    pub fn get_original_id(&self, graph_id: GraphId) -> SpanningResult<String> {
        self.graph_keys.get_original(graph_id.value())
    }
    pub fn get_node_label(&self, node_id: NodeId) -> SpanningResult<String> {
        self.node_labels.get_original(node_id.value())
    }
    pub fn get_node_id(&self, label: &str) -> SpanningResult<Option<NodeId>> {
        Ok(self.node_labels.get(label)?.map(NodeId::from))
    }
}
impl Default for WeightedLineProcessor {
    fn default() -> Self {
        WeightedLineProcessor::new()
    }
}
