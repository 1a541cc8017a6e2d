//! Typed records that mirror the two tables of the channel plan and the CHIRP
//! row they are flattened into. Rows are decoded into these structs right at
//! the query boundary so the mapper never looks fields up by name or position.

use serde::Serialize;

/// Column names of the CHIRP import format, in file order.
pub const CHIRP_COLUMNS: [&str; 18] = [
    "Location",
    "Name",
    "Frequency",
    "Duplex",
    "Offset",
    "Tone",
    "rToneFreq",
    "cToneFreq",
    "DtcsCode",
    "DtcsPolarity",
    "Mode",
    "TStep",
    "Skip",
    "Comment",
    "URCALL",
    "RPT1CALL",
    "RPT2CALL",
    "DVCODE",
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// The attributes of one `frequency` row as seen through the channel join.
pub struct FrequencyAttrs {
    /// Center frequency in Hz.
    pub center_hz: i64,
    /// Occupied bandwidth in Hz. Base and repeater must agree on it.
    pub bandwidth_hz: i64,
    /// Modulation name such as `FM` or `AM`, written to CHIRP verbatim.
    pub modulation: String,
    /// Transmit power in mW. CHIRP's layout has no power column, so this is
    /// carried through the join but not exported.
    pub power_milliwatts: Option<i64>,
    /// Coarse squelch kind (`tone`, `dcs`, `carrier`). The tone columns are
    /// derived from `squelch_ctcss_tone` instead, which carries the value.
    pub squelch_mode: Option<String>,
    /// Free-text tone descriptor, e.g. `100.0 PL` or `023 DL`.
    pub squelch_ctcss_tone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One denormalized channel: the channel's own columns plus its base frequency
/// and, for repeater pairs, the second frequency.
pub struct ChannelRow {
    /// Channel name, exported as `Name`.
    pub label: Option<String>,
    /// Free-text notes, exported as `Comment`.
    pub notes: Option<String>,
    pub base: FrequencyAttrs,
    /// `None` when the channel has no repeater frequency (left join missed).
    pub repeater: Option<FrequencyAttrs>,
}

impl ChannelRow {
    /// Display name used in log lines and error messages.
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => "<unnamed>",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// A single row of the CHIRP CSV. Every column is kept as text because the
/// target format mixes numbers, codes, and blanks freely.
pub struct ChirpRecord {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Frequency")]
    pub frequency: String,
    #[serde(rename = "Duplex")]
    pub duplex: String,
    #[serde(rename = "Offset")]
    pub offset: String,
    #[serde(rename = "Tone")]
    pub tone: String,
    #[serde(rename = "rToneFreq")]
    pub r_tone_freq: String,
    #[serde(rename = "cToneFreq")]
    pub c_tone_freq: String,
    #[serde(rename = "DtcsCode")]
    pub dtcs_code: String,
    #[serde(rename = "DtcsPolarity")]
    pub dtcs_polarity: String,
    #[serde(rename = "Mode")]
    pub mode: String,
    #[serde(rename = "TStep")]
    pub t_step: String,
    #[serde(rename = "Skip")]
    pub skip: String,
    #[serde(rename = "Comment")]
    pub comment: String,
    #[serde(rename = "URCALL")]
    pub urcall: String,
    #[serde(rename = "RPT1CALL")]
    pub rpt1call: String,
    #[serde(rename = "RPT2CALL")]
    pub rpt2call: String,
    #[serde(rename = "DVCODE")]
    pub dvcode: String,
}
