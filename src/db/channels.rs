use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};

use crate::models::{ChannelRow, FrequencyAttrs};

/// Base and repeater columns for every channel. The SELECT list is fixed and
/// decoded by index in [`decode_channel`], so both must change together.
const SELECT_CHANNELS: &str = "SELECT
    c.label,
    c.notes,
    bf.center_hz,
    bf.bandwidth_hz,
    bf.modulation,
    bf.power_milliwatts,
    bf.squelch_mode,
    bf.squelch_ctcss_tone,
    rf.id,
    rf.center_hz,
    rf.bandwidth_hz,
    rf.modulation,
    rf.power_milliwatts,
    rf.squelch_mode,
    rf.squelch_ctcss_tone
FROM channel AS c
INNER JOIN frequency AS bf ON c.base_frequency_id = bf.id
LEFT JOIN frequency AS rf ON c.repeater_frequency_id = rf.id";

/// Column index of the first base-frequency field.
const BASE_COLUMN: usize = 2;
/// Column index of `rf.id`, which is NULL when the channel has no repeater.
const REPEATER_ID_COLUMN: usize = 8;

/// Inclusive range of base frequencies a channel must fall in to be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandFilter {
    /// Lowest exported base frequency in Hz, inclusive.
    pub low_hz: i64,
    /// Highest exported base frequency in Hz, inclusive.
    pub high_hz: i64,
}

impl BandFilter {
    /// 88 MHz through 480 MHz, the VHF/UHF span the target radios cover.
    pub const VHF_UHF: BandFilter = BandFilter {
        low_hz: 88_000_000,
        high_hz: 480_000_000,
    };
}

/// Join every channel to its base frequency and, when present, its repeater
/// frequency. With a `band`, channels whose base frequency falls outside it are
/// skipped by the query itself.
///
/// No ORDER BY is applied; SQLite returns rows in table order, which is stable
/// for a given seed script.
pub fn fetch_channel_rows(conn: &Connection, band: Option<BandFilter>) -> Result<Vec<ChannelRow>> {
    let rows = match band {
        Some(band) => {
            let sql = format!("{SELECT_CHANNELS}\nWHERE bf.center_hz >= ?1 AND bf.center_hz <= ?2");
            let mut stmt = conn
                .prepare(&sql)
                .context("failed to prepare banded channel query")?;
            let rows = stmt
                .query_map(params![band.low_hz, band.high_hz], decode_channel)
                .context("failed to iterate channels")?
                .collect::<Result<Vec<_>, _>>()
                .context("failed to decode channel rows")?;
            rows
        }
        None => {
            let mut stmt = conn
                .prepare(SELECT_CHANNELS)
                .context("failed to prepare channel query")?;
            let rows = stmt
                .query_map([], decode_channel)
                .context("failed to iterate channels")?
                .collect::<Result<Vec<_>, _>>()
                .context("failed to decode channel rows")?;
            rows
        }
    };

    Ok(rows)
}

/// Total number of stored channels, regardless of band.
pub fn count_channels(conn: &Connection) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM channel", [], |row| row.get(0))
        .context("failed to count channels")?;
    Ok(usize::try_from(count).unwrap_or_default())
}

fn decode_channel(row: &Row<'_>) -> rusqlite::Result<ChannelRow> {
    let repeater_id: Option<i64> = row.get(REPEATER_ID_COLUMN)?;
    let repeater = match repeater_id {
        Some(_) => Some(decode_frequency(row, REPEATER_ID_COLUMN + 1)?),
        None => None,
    };

    Ok(ChannelRow {
        label: row.get(0)?,
        notes: row.get(1)?,
        base: decode_frequency(row, BASE_COLUMN)?,
        repeater,
    })
}

/// Read the six frequency columns starting at `first`.
fn decode_frequency(row: &Row<'_>, first: usize) -> rusqlite::Result<FrequencyAttrs> {
    Ok(FrequencyAttrs {
        center_hz: row.get(first)?,
        bandwidth_hz: row.get(first + 1)?,
        modulation: row.get(first + 2)?,
        power_milliwatts: row.get(first + 3)?,
        squelch_mode: row.get(first + 4)?,
        squelch_ctcss_tone: row.get(first + 5)?,
    })
}
