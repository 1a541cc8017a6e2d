//! Flattening of one joined channel row into a CHIRP record. Everything the
//! CHIRP file needs that the channel plan does not store is filled in here.

use std::fmt;

use crate::error::ExportError;
use crate::export::profile::DuplexPolicy;
use crate::export::squelch::parse_squelch;
use crate::models::{ChannelRow, ChirpRecord, FrequencyAttrs};

/// `Offset` written for simplex channels under [`DuplexPolicy::Sign`].
const SIGN_SIMPLEX_OFFSET: &str = "0.0";
/// `Offset` written for simplex channels under [`DuplexPolicy::Split`].
const SPLIT_SIMPLEX_OFFSET: &str = "0.0000";

/// A frequency in MHz, printed rounded to four decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Megahertz(f64);

impl Megahertz {
    /// Convert a stored Hz value.
    pub fn from_hz(hz: i64) -> Self {
        Self(hz as f64 / 1_000_000.0)
    }

    /// Unsigned distance between two frequencies. Taken on the integers so
    /// extreme stored values cannot overflow.
    pub fn between(a_hz: i64, b_hz: i64) -> Self {
        Self(a_hz.abs_diff(b_hz) as f64 / 1_000_000.0)
    }
}

impl fmt::Display for Megahertz {
    /// Four places rounded from the exact binary value (exact ties go to
    /// even), then trailing zeros removed down to one fractional digit:
    /// `146.52`, `0.6`, `446.0063`, `446.0312`, `0.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.4}", self.0);
        let trimmed = fixed.trim_end_matches('0');
        if trimmed.ends_with('.') {
            write!(f, "{trimmed}0")
        } else {
            f.write_str(trimmed)
        }
    }
}

/// Map the row at 1-based `location` into a CHIRP record.
///
/// Fails when the row pairs a repeater frequency whose modulation or bandwidth
/// differs from the base frequency; CHIRP has a single mode per memory, so
/// such a pair cannot be written.
pub fn map_channel(
    location: usize,
    row: &ChannelRow,
    policy: DuplexPolicy,
) -> Result<ChirpRecord, ExportError> {
    if let Some(repeater) = &row.repeater {
        check_repeater(row, repeater)?;
    }

    let (duplex, offset) = duplex_and_offset(&row.base, row.repeater.as_ref(), policy);
    let squelch = parse_squelch(row.base.squelch_ctcss_tone.as_deref());

    Ok(ChirpRecord {
        location: location.to_string(),
        name: row.label.clone().unwrap_or_default(),
        frequency: Megahertz::from_hz(row.base.center_hz).to_string(),
        duplex,
        offset,
        tone: squelch.tone,
        r_tone_freq: squelch.r_tone_freq,
        c_tone_freq: squelch.c_tone_freq,
        dtcs_code: squelch.dtcs_code,
        dtcs_polarity: squelch.dtcs_polarity,
        mode: row.base.modulation.clone(),
        comment: row.notes.clone().unwrap_or_default(),
        ..ChirpRecord::default()
    })
}

fn check_repeater(row: &ChannelRow, repeater: &FrequencyAttrs) -> Result<(), ExportError> {
    if row.base.modulation != repeater.modulation {
        return Err(ExportError::ModulationMismatch {
            channel: row.display_label().to_string(),
            base: row.base.modulation.clone(),
            repeater: repeater.modulation.clone(),
        });
    }

    if row.base.bandwidth_hz != repeater.bandwidth_hz {
        return Err(ExportError::BandwidthMismatch {
            channel: row.display_label().to_string(),
            base: row.base.bandwidth_hz,
            repeater: repeater.bandwidth_hz,
        });
    }

    Ok(())
}

fn duplex_and_offset(
    base: &FrequencyAttrs,
    repeater: Option<&FrequencyAttrs>,
    policy: DuplexPolicy,
) -> (String, String) {
    match (policy, repeater) {
        (DuplexPolicy::Sign, Some(repeater)) => {
            let direction = if repeater.center_hz >= base.center_hz { "+" } else { "-" };
            let distance = Megahertz::between(repeater.center_hz, base.center_hz);
            (direction.to_string(), distance.to_string())
        }
        (DuplexPolicy::Split, Some(repeater)) => (
            "split".to_string(),
            Megahertz::from_hz(repeater.center_hz).to_string(),
        ),
        (DuplexPolicy::Sign, None) => (String::new(), SIGN_SIMPLEX_OFFSET.to_string()),
        (DuplexPolicy::Split, None) => (String::new(), SPLIT_SIMPLEX_OFFSET.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequency(center_hz: i64, modulation: &str, bandwidth_hz: i64) -> FrequencyAttrs {
        FrequencyAttrs {
            center_hz,
            bandwidth_hz,
            modulation: modulation.to_string(),
            power_milliwatts: None,
            squelch_mode: None,
            squelch_ctcss_tone: None,
        }
    }

    fn channel(base: FrequencyAttrs, repeater: Option<FrequencyAttrs>) -> ChannelRow {
        ChannelRow {
            label: Some("Repeater A".to_string()),
            notes: None,
            base,
            repeater,
        }
    }

    #[test]
    fn megahertz_rounds_to_four_places() {
        assert_eq!(Megahertz::from_hz(146_520_000).to_string(), "146.52");
        assert_eq!(Megahertz::from_hz(446_006_250).to_string(), "446.0063");
        assert_eq!(Megahertz::from_hz(600_000).to_string(), "0.6");
        assert_eq!(Megahertz::from_hz(5_000_000).to_string(), "5.0");
        assert_eq!(Megahertz::from_hz(0).to_string(), "0.0");
        assert_eq!(Megahertz::from_hz(162_549_949).to_string(), "162.5499");
        assert_eq!(Megahertz::from_hz(-600_000).to_string(), "-0.6");
    }

    #[test]
    fn megahertz_ties_on_the_6250_hz_grid_round_to_even() {
        // PMR446 channels 3 and 8 are exact binary fractions on a tie.
        assert_eq!(Megahertz::from_hz(446_031_250).to_string(), "446.0312");
        assert_eq!(Megahertz::from_hz(446_093_750).to_string(), "446.0938");
    }

    #[test]
    fn offset_distance_does_not_overflow() {
        assert_eq!(Megahertz::between(147_120_000, 146_520_000).to_string(), "0.6");
        assert_eq!(Megahertz::between(146_520_000, 147_120_000).to_string(), "0.6");

        let extreme = map_channel(
            1,
            &channel(
                frequency(i64::MIN, "FM", 12_500),
                Some(frequency(i64::MAX, "FM", 12_500)),
            ),
            DuplexPolicy::Sign,
        )
        .unwrap();
        assert_eq!(extreme.duplex, "+");
        assert!(!extreme.offset.is_empty());
    }

    #[test]
    fn simplex_channel_under_sign_policy() {
        let row = channel(frequency(146_520_000, "FM", 12_500), None);
        let record = map_channel(3, &row, DuplexPolicy::Sign).unwrap();

        assert_eq!(record.location, "3");
        assert_eq!(record.name, "Repeater A");
        assert_eq!(record.frequency, "146.52");
        assert_eq!(record.duplex, "");
        assert_eq!(record.offset, "0.0");
        assert_eq!(record.mode, "FM");
        assert_eq!(record.comment, "");
        assert_eq!(record.t_step, "");
        assert_eq!(record.skip, "");
        assert_eq!(record.dvcode, "");
    }

    #[test]
    fn simplex_channel_under_split_policy() {
        let row = channel(frequency(146_520_000, "FM", 12_500), None);
        let record = map_channel(1, &row, DuplexPolicy::Split).unwrap();

        assert_eq!(record.duplex, "");
        assert_eq!(record.offset, "0.0000");
    }

    #[test]
    fn sign_policy_follows_repeater_direction() {
        let up = channel(
            frequency(146_520_000, "FM", 12_500),
            Some(frequency(147_120_000, "FM", 12_500)),
        );
        let record = map_channel(1, &up, DuplexPolicy::Sign).unwrap();
        assert_eq!((record.duplex.as_str(), record.offset.as_str()), ("+", "0.6"));

        let down = channel(
            frequency(146_940_000, "FM", 12_500),
            Some(frequency(146_340_000, "FM", 12_500)),
        );
        let record = map_channel(1, &down, DuplexPolicy::Sign).unwrap();
        assert_eq!((record.duplex.as_str(), record.offset.as_str()), ("-", "0.6"));

        let same = channel(
            frequency(146_520_000, "FM", 12_500),
            Some(frequency(146_520_000, "FM", 12_500)),
        );
        let record = map_channel(1, &same, DuplexPolicy::Sign).unwrap();
        assert_eq!((record.duplex.as_str(), record.offset.as_str()), ("+", "0.0"));
    }

    #[test]
    fn split_policy_writes_repeater_frequency() {
        let row = channel(
            frequency(462_550_000, "FM", 12_500),
            Some(frequency(467_550_000, "FM", 12_500)),
        );
        let record = map_channel(1, &row, DuplexPolicy::Split).unwrap();

        assert_eq!(record.duplex, "split");
        assert_eq!(record.offset, "467.55");
    }

    #[test]
    fn mismatched_modulation_is_rejected() {
        let row = channel(
            frequency(146_520_000, "FM", 12_500),
            Some(frequency(147_120_000, "AM", 12_500)),
        );

        let err = map_channel(1, &row, DuplexPolicy::Sign).unwrap_err();
        assert!(matches!(err, ExportError::ModulationMismatch { .. }));
    }

    #[test]
    fn mismatched_bandwidth_is_rejected_under_either_policy() {
        let row = channel(
            frequency(146_520_000, "FM", 12_500),
            Some(frequency(147_120_000, "FM", 25_000)),
        );

        for policy in [DuplexPolicy::Sign, DuplexPolicy::Split] {
            let err = map_channel(1, &row, policy).unwrap_err();
            assert_eq!(
                err,
                ExportError::BandwidthMismatch {
                    channel: "Repeater A".to_string(),
                    base: 12_500,
                    repeater: 25_000,
                }
            );
        }
    }

    #[test]
    fn squelch_comes_from_base_descriptor() {
        let mut base = frequency(442_100_000, "FM", 12_500);
        base.squelch_ctcss_tone = Some("023 DL".to_string());
        let mut repeater = frequency(447_100_000, "FM", 12_500);
        repeater.squelch_ctcss_tone = Some("100.0 PL".to_string());

        let record = map_channel(1, &channel(base, Some(repeater)), DuplexPolicy::Sign).unwrap();
        assert_eq!(record.tone, "DTCS");
        assert_eq!(record.dtcs_code, "023");
        assert_eq!(record.dtcs_polarity, "NN");
        assert_eq!(record.r_tone_freq, "88.5");
    }
}
