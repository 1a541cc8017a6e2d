//! Errors the export raises on its own, as opposed to SQLite, CSV, or I/O
//! failures which travel as `anyhow::Error` with context attached.

/// A channel whose repeater frequency cannot be expressed as a CHIRP duplex
/// pair. Either variant aborts the export.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExportError {
    /// Base and repeater frequencies use different modulations.
    #[error("channel {channel:?}: frequencies use different modulations ({base} vs {repeater})")]
    ModulationMismatch {
        channel: String,
        base: String,
        repeater: String,
    },

    /// Base and repeater frequencies use different bandwidths.
    #[error("channel {channel:?}: frequencies use different bandwidths ({base} Hz vs {repeater} Hz)")]
    BandwidthMismatch {
        channel: String,
        base: i64,
        repeater: i64,
    },
}
