/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::spanning::error::SpanningResult;
use crate::spanning::graph_base::GraphBase;

pub trait GraphBuilderBase
where
    Self: Sized,
    Self::GraphType: GraphBase,
{
    type GraphType;
    type RowType;

    fn from_vector(&mut self, data: Vec<Self::RowType>) -> SpanningResult<Self::GraphType>;
}
