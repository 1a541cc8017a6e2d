//! The export pipeline: project channel rows out of the store, map each one to
//! a CHIRP record, and stream the records to a CSV sink.

mod mapper;
mod profile;
mod squelch;
mod writer;

use std::io::Write;

use anyhow::Result;
use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::db::{count_channels, fetch_channel_rows};
use crate::models::ChannelRow;

pub use mapper::{map_channel, Megahertz};
pub use profile::{DuplexPolicy, ExportProfile};
pub use squelch::{parse_squelch, SquelchFields};
pub use writer::ChirpWriter;

/// Outcome of a completed export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Data rows in the output, header excluded.
    pub rows_written: usize,
}

/// Run the full export against an already loaded store.
pub fn run_export<W: Write>(
    conn: &Connection,
    profile: &ExportProfile,
    sink: W,
) -> Result<ExportSummary> {
    let rows = fetch_channel_rows(conn, profile.band)?;

    if let Some(band) = profile.band {
        let total = count_channels(conn)?;
        info!(
            low_hz = band.low_hz,
            high_hz = band.high_hz,
            excluded = total.saturating_sub(rows.len()),
            "band filter applied"
        );
    }
    info!(channels = rows.len(), "channels projected");

    export_channels(&rows, profile, sink)
}

/// Map and write `rows` in order, numbering them from 1.
///
/// A channel that fails its consistency check stops the export. Rows written
/// before it are still flushed to `sink`, so the output is left partial; the
/// caller gets the mapping error, which downcasts to
/// [`ExportError`](crate::ExportError).
pub fn export_channels<W: Write>(
    rows: &[ChannelRow],
    profile: &ExportProfile,
    sink: W,
) -> Result<ExportSummary> {
    let mut writer = ChirpWriter::new(sink, profile.quote)?;

    if let Err(err) = write_rows(&mut writer, rows, profile.duplex) {
        if let Err(flush_err) = writer.flush() {
            warn!(error = %flush_err, "partial output could not be flushed");
        }
        return Err(err);
    }

    let rows_written = writer.rows_written();
    writer.into_inner()?;

    Ok(ExportSummary { rows_written })
}

fn write_rows<W: Write>(
    writer: &mut ChirpWriter<W>,
    rows: &[ChannelRow],
    policy: DuplexPolicy,
) -> Result<()> {
    for (position, row) in rows.iter().enumerate() {
        let record = map_channel(position + 1, row, policy)?;
        debug!(
            location = %record.location,
            name = row.display_label(),
            frequency = %record.frequency,
            duplex = %record.duplex,
            "channel mapped"
        );
        writer.write(&record)?;
    }
    Ok(())
}
