/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
// https://blog.burntsushi.net/rust-error-handling/

use thiserror::Error;

pub type SpanningResult<T> = std::result::Result<T, SpanningError>;

#[derive(Debug, Error)]
pub enum SpanningError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Incomplete coverage: visited {visited} of {total} nodes")]
    IncompleteCoverage { visited: usize, total: usize },

    #[error("Computation cancelled after visiting {visited} nodes")]
    Cancelled { visited: usize },

    #[error("{0}")]
    Generic(String),

    #[error("I/O Error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseBool(#[from] std::str::ParseBoolError),

    #[error("Parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Parse error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("JSON error: {0}")]
    JSON(#[from] serde_json::Error),
}

impl SpanningError {
    pub fn new(msg: &str) -> Self {
        Self::Generic(msg.to_owned())
    }
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
    pub fn err_none() -> Self {
        Self::Generic("Unexpectedly empty Option encountered.".to_owned())
    }
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<String> for SpanningError {
    fn from(str: String) -> Self {
        SpanningError::Generic(str)
    }
}

impl From<&str> for SpanningError {
    fn from(str: &str) -> Self {
        SpanningError::Generic(str.to_owned())
    }
}
