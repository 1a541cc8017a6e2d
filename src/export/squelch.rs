//! Tone-squelch fields derived from the free-text descriptor stored with a
//! frequency. The descriptor is loosely formatted (`100.0 PL`, `141.3PL`,
//! `023 DL`), so this only looks for the two marker suffixes and keeps
//! whatever precedes them.

/// The five CHIRP columns that describe tone squelch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquelchFields {
    pub tone: String,
    pub r_tone_freq: String,
    pub c_tone_freq: String,
    pub dtcs_code: String,
    pub dtcs_polarity: String,
}

impl Default for SquelchFields {
    /// CHIRP's own defaults for a channel with no squelch configured.
    fn default() -> Self {
        Self {
            tone: String::new(),
            r_tone_freq: "88.5".to_string(),
            c_tone_freq: "88.5".to_string(),
            dtcs_code: "023".to_string(),
            dtcs_polarity: "NN".to_string(),
        }
    }
}

/// Derive squelch columns from a descriptor.
///
/// A descriptor containing `PL` (any case) becomes CTCSS tone squelch with the
/// same tone for transmit and receive. One containing `DL` becomes DCS with
/// normal polarity. Anything else, including a missing or blank descriptor,
/// leaves the defaults. `PL` is checked first.
///
/// ```
/// use chirp_channel_export::export::parse_squelch;
///
/// let fields = parse_squelch(Some("100.0PL"));
/// assert_eq!(fields.tone, "TSQL");
/// assert_eq!(fields.r_tone_freq, "100.0");
/// ```
pub fn parse_squelch(descriptor: Option<&str>) -> SquelchFields {
    let mut fields = SquelchFields::default();

    let Some(descriptor) = descriptor.map(str::trim).filter(|d| !d.is_empty()) else {
        return fields;
    };

    let marker = descriptor.to_ascii_uppercase();
    if marker.contains("PL") {
        let tone = strip_marker(descriptor);
        fields.tone = "TSQL".to_string();
        fields.r_tone_freq = tone.clone();
        fields.c_tone_freq = tone;
    } else if marker.contains("DL") {
        fields.tone = "DTCS".to_string();
        fields.dtcs_code = strip_marker(descriptor);
        fields.dtcs_polarity = "NN".to_string();
    }

    fields
}

/// Drop the trailing two-character marker and any whitespace before it.
fn strip_marker(descriptor: &str) -> String {
    let mut chars = descriptor.chars();
    chars.next_back();
    chars.next_back();
    chars.as_str().trim().to_string()
}
