/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::io::{self, Write};

use crate::spanning::error::SpanningResult;

/// Where result lines go: stdout, or an in-memory buffer (used by tests).
pub struct Output<'a> {
    destination: Option<&'a mut Vec<u8>>,
}

impl<'a> Output<'a> {
    pub fn console() -> Output<'a> {
        Output { destination: None }
    }
    pub fn string(text: &'a mut Vec<u8>) -> Output<'a> {
        Output {
            destination: Some(text),
        }
    }
    pub fn print(&mut self, text: String) -> SpanningResult<()> {
        match self.destination.as_mut() {
            Some(buffer) => {
                buffer.write_all(text.as_bytes())?;
                buffer.write_all(b"\n")?;
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(text.as_bytes())?;
                handle.write_all(b"\n")?;
                handle.flush()?;
            }
        }
        Ok(())
    }
}
