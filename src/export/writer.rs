use std::io::Write;

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};

use crate::models::{ChirpRecord, CHIRP_COLUMNS};

/// CSV sink for CHIRP records. The header is written as soon as the writer is
/// created so even an export with no channels yields a loadable file.
pub struct ChirpWriter<W: Write> {
    inner: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> ChirpWriter<W> {
    /// Wrap `sink` in a comma-delimited writer quoting with `quote`, and emit
    /// the header row.
    pub fn new(sink: W, quote: u8) -> Result<Self> {
        let mut inner = WriterBuilder::new()
            .delimiter(b',')
            .quote(quote)
            .has_headers(false)
            .terminator(line_terminator())
            .from_writer(sink);

        inner
            .write_record(CHIRP_COLUMNS)
            .context("failed to write CSV header")?;

        Ok(Self {
            inner,
            rows_written: 0,
        })
    }

    /// Append one record. Columns follow the serde field order of
    /// [`ChirpRecord`], which matches the header.
    pub fn write(&mut self, record: &ChirpRecord) -> Result<()> {
        self.inner
            .serialize(record)
            .with_context(|| format!("failed to write CSV row {}", record.location))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Data rows written so far, header excluded.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Push buffered rows down to the sink without giving it up. Used on the
    /// failure path, where the sink should keep what was already written.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().context("failed to flush CSV output")
    }

    /// Flush and hand back the sink once the export is complete.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|err| err.into_error())
            .context("failed to flush CSV output")
    }
}

/// Platform line ending, matching what text-mode writers produce.
fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}
