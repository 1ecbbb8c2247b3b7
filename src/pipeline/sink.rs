// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Record sinks

use std::io::Write;

use crate::errors::ScanError;

use super::record::PoolMetadata;

/// Destination for emitted records
///
/// A sink failure is fatal to the run.
pub trait RecordSink: Send {
    /// Emit one record
    fn emit(&mut self, record: &PoolMetadata) -> Result<(), ScanError>;
}

/// Writes each record as one line of JSON
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<std::io::Stdout> {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> RecordSink for JsonLinesSink<W> {
    fn emit(&mut self, record: &PoolMetadata) -> Result<(), ScanError> {
        serde_json::to_writer(&mut self.writer, record)
            .map_err(|e| ScanError::emit(record.id, e.to_string()))?;
        writeln!(self.writer).map_err(|e| ScanError::emit(record.id, e.to_string()))?;
        self.writer
            .flush()
            .map_err(|e| ScanError::emit(record.id, e.to_string()))
    }
}

impl<T: RecordSink + ?Sized> RecordSink for &mut T {
    fn emit(&mut self, record: &PoolMetadata) -> Result<(), ScanError> {
        (**self).emit(record)
    }
}
