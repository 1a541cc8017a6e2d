//! Persistence module split across logical submodules: loading the bundled
//! channel plan into memory, and projecting it into channel rows.

mod channels;
mod connection;

pub use channels::{count_channels, fetch_channel_rows, BandFilter};
pub use connection::{load_database, open_bundled_database, BUNDLED_SCHEMA};
