use crate::db::BandFilter;

/// How a repeater pair is written to the `Duplex` and `Offset` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplexPolicy {
    /// `+`/`-` by the sign of `repeater - base`, offset is the distance in MHz.
    /// Simplex channels get an `Offset` of `0.0`.
    Sign,
    /// `split`, with the repeater frequency itself in the `Offset` column.
    /// Simplex channels get an `Offset` of `0.0000`.
    Split,
}

/// The knobs that differ between the two export variants. Both presets map
/// squelch descriptors the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportProfile {
    /// Only export channels whose base frequency falls inside this band.
    pub band: Option<BandFilter>,
    pub duplex: DuplexPolicy,
    /// Quote character for the CSV writer. The delimiter is always `,`.
    pub quote: u8,
}

impl ExportProfile {
    /// VHF/UHF channels only, signed offsets, double-quoted fields.
    pub const FILTERED: ExportProfile = ExportProfile {
        band: Some(BandFilter::VHF_UHF),
        duplex: DuplexPolicy::Sign,
        quote: b'"',
    };

    /// Every channel, split-frequency repeaters, pipe-quoted fields.
    pub const FULL: ExportProfile = ExportProfile {
        band: None,
        duplex: DuplexPolicy::Split,
        quote: b'|',
    };
}

impl Default for ExportProfile {
    fn default() -> Self {
        Self::FILTERED
    }
}
