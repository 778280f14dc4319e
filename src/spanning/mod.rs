/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
pub mod algorithms;
pub mod error;
pub mod graph_base;
pub mod graph_builder_base;
pub mod id_types;
pub mod input;
pub mod line_processor;
pub mod mst_transformer;
pub mod node;
pub mod output;
pub mod row;
pub mod transformer_base;
pub mod weighted_undirected_graph;
pub mod weighted_undirected_graph_builder;
