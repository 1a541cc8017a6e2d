//! Export of a relational radio channel plan to the CSV layout that CHIRP
//! imports.
//!
//! The plan ships with the binary as a SQL script. It is loaded into a private
//! in-memory SQLite store, joined into one row per channel, mapped column by
//! column, and written out as CSV. Two export profiles exist because the
//! format has been produced two different ways; see [`ExportProfile`].
pub mod db;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;

/// Loading the channel plan and projecting it into rows.
pub use db::{fetch_channel_rows, load_database, open_bundled_database, BandFilter};

pub use error::ExportError;

/// The export pipeline and its configuration.
pub use export::{export_channels, run_export, DuplexPolicy, ExportProfile, ExportSummary};

pub use models::{ChannelRow, ChirpRecord, FrequencyAttrs, CHIRP_COLUMNS};
