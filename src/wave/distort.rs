//! Per-frame waveform distortion of path text
//!
//! Every number in the baseline gets an additive offset built from three sine
//! terms. X-like and Y-like numbers use different weights and phase constants
//! so the outline wobbles instead of sliding as a block. The value itself feeds
//! the phase, which keeps neighbouring points from moving in unison.

use std::f64::consts::TAU;

use super::token::{Axis, PathToken, tokenize};
use crate::settings::WaveSettings;

/// Larger coordinates drift proportionally more: `1 + |v| * MAGNITUDE_GAIN`
const MAGNITUDE_GAIN: f64 = 0.002;

/// Rate at which the amplitude breathes between base +/- variation
const AMPLITUDE_RATE: f64 = 0.37;

/// Every written number carries a fraction so a following `.5` stays separate
pub const MIN_PRECISION_DIGITS: usize = 1;

/// Shape of the three sine terms for one axis
struct AxisWave {
    /// Term weights
    weights: [f64; 3],
    /// Multipliers applied to the configured frequencies
    freq_scale: [f64; 3],
    /// Phase contributed per unit of token value
    value_phase: [f64; 3],
    /// Phase contributed per path index
    index_phase: [f64; 3],
    /// Constant phase
    phase: [f64; 3],
}

const X_WAVE: AxisWave = AxisWave {
    weights: [1.0, 0.5, 0.25],
    freq_scale: [1.0, 1.0, 1.0],
    value_phase: [0.05, 0.11, 0.023],
    index_phase: [0.7, 1.3, 2.1],
    phase: [0.0, 0.0, 0.0],
};

const Y_WAVE: AxisWave = AxisWave {
    weights: [0.8, 0.6, 0.3],
    freq_scale: [1.13, 0.87, 1.21],
    value_phase: [0.07, 0.09, 0.031],
    index_phase: [0.9, 1.1, 1.7],
    phase: [1.7, 0.4, 2.3],
};

/// Unscaled offset for one number at time `t` (intensity not applied)
pub fn wave_offset(value: f64, axis: Axis, t: f64, path_index: usize, wave: &WaveSettings) -> f64 {
    let shape = match axis {
        Axis::X => &X_WAVE,
        Axis::Y => &Y_WAVE,
    };
    let p = path_index as f64;

    let sum: f64 = (0..3)
        .map(|k| {
            let arg = t * wave.frequencies[k] * shape.freq_scale[k]
                + value * shape.value_phase[k]
                + p * shape.index_phase[k]
                + shape.phase[k];
            shape.weights[k] * arg.sin()
        })
        .sum();

    let amplitude =
        wave.amplitude_base + wave.amplitude_variation * (t * AMPLITUDE_RATE + p * TAU / 7.0).sin();

    sum * amplitude * magnitude_gain(value)
}

#[inline]
pub fn magnitude_gain(value: f64) -> f64 {
    1.0 + value.abs() * MAGNITUDE_GAIN
}

/// Fixed-precision number text; never writes a negative zero
pub fn format_number(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

/// How a number attaches to the text right before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lead {
    /// Preceded by a separator, a command or nothing
    Free,
    /// `-` directly after a digit, `.` or `-` (as in `M1-2`): the sign is
    /// the only separator and has to stay
    Minus,
    /// `.` directly after a digit or `.` (as in `.5.5`): a leading digit
    /// would merge into the previous number
    Dot,
}

impl Lead {
    pub fn of(baseline: &str, token: &PathToken) -> Self {
        let bytes = baseline.as_bytes();
        let Some(&prev) = token.offset.checked_sub(1).and_then(|i| bytes.get(i)) else {
            return Lead::Free;
        };
        match bytes.get(token.offset) {
            Some(b'-') if prev.is_ascii_digit() || prev == b'.' || prev == b'-' => Lead::Minus,
            Some(b'.') if prev.is_ascii_digit() || prev == b'.' => Lead::Dot,
            _ => Lead::Free,
        }
    }
}

/// Number text that keeps the leading form `lead` requires.
///
/// `Minus` numbers stay non-positive and always print their sign (`-0.00`
/// included); `Dot` numbers stay in `[0, 1)` and drop the leading zero.
pub fn format_token(value: f64, lead: Lead, precision: usize) -> String {
    let precision = precision.max(MIN_PRECISION_DIGITS);
    match lead {
        Lead::Free => format_number(value, precision),
        Lead::Minus => format!("-{:.*}", precision, value.min(0.0).abs()),
        Lead::Dot => {
            let max = 1.0 - 10f64.powi(-(precision.min(15) as i32));
            let text = format_number(value.clamp(0.0, max), precision);
            match text.strip_prefix('0') {
                Some(rest) => rest.to_string(),
                None => text,
            }
        }
    }
}

/// Rebuild `baseline` with each token replaced by `replace(token)`
fn splice<F>(baseline: &str, tokens: &[PathToken], mut replace: F) -> String
where
    F: FnMut(&PathToken) -> String,
{
    let mut out = String::with_capacity(baseline.len() + tokens.len() * 4);
    let mut cursor = 0;
    for token in tokens {
        out.push_str(&baseline[cursor..token.offset]);
        out.push_str(&replace(token));
        cursor = token.offset + token.len;
    }
    out.push_str(&baseline[cursor..]);
    out
}

/// Distorts path text against an immutable baseline
#[derive(Debug, Clone, Default)]
pub struct PathWaveDistorter {
    pub wave: WaveSettings,
}

impl PathWaveDistorter {
    pub fn new(wave: WaveSettings) -> Self {
        Self { wave }
    }

    /// Distort a single path with no phase offset
    pub fn apply(&self, baseline: &str, time: f64, intensity: f64) -> String {
        self.apply_indexed(baseline, time, intensity, 0.0, 0)
    }

    /// Distort `baseline` at `time`.
    ///
    /// Only numeric substrings change; all other text is copied verbatim.
    /// Input without numbers comes back unchanged. Always pass the original
    /// baseline, never a previous result, or the offsets accumulate.
    /// Precision below [`MIN_PRECISION_DIGITS`] is raised to it. A number
    /// whose distorted value is not finite keeps its original text.
    pub fn apply_indexed(
        &self,
        baseline: &str,
        time: f64,
        intensity: f64,
        phase_offset: f64,
        path_index: usize,
    ) -> String {
        let tokens = tokenize(baseline);
        if tokens.is_empty() {
            return baseline.to_string();
        }

        let t = time + phase_offset;
        let precision = self.wave.precision_digits.max(MIN_PRECISION_DIGITS);

        splice(baseline, &tokens, |token| {
            let offset =
                wave_offset(token.value, token.axis(), t, path_index, &self.wave) * intensity;
            let value = token.value + offset;
            if !value.is_finite() {
                return baseline[token.span()].to_string();
            }
            format_token(value, Lead::of(baseline, token), precision)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(text: &str) -> Vec<f64> {
        tokenize(text).iter().map(|t| t.value).collect()
    }

    /// Non-numeric characters, in order
    fn skeleton(text: &str) -> String {
        let tokens = tokenize(text);
        splice(text, &tokens, |_| String::new())
    }

    #[test]
    fn test_zero_intensity_is_identity() {
        let distorter = PathWaveDistorter::default();
        for time in [0.0, 1.25, 17.0, -3.5] {
            assert_eq!(distorter.apply("M0,0 L10,10", time, 0.0), "M0.00,0.00 L10.00,10.00");
        }
    }

    #[test]
    fn test_no_numbers_unchanged() {
        let distorter = PathWaveDistorter::default();
        assert_eq!(distorter.apply("no numbers here", 2.0, 1.0), "no numbers here");
        assert_eq!(distorter.apply("", 2.0, 1.0), "");
    }

    #[test]
    fn test_distortion_moves_values_and_keeps_structure() {
        let distorter = PathWaveDistorter::default();
        let baseline = "M12.5,40 L-8,3.25 Z";
        let out = distorter.apply(baseline, 0.8, 1.0);

        assert_eq!(skeleton(&out), skeleton(baseline));
        let before = values(baseline);
        let after = values(&out);
        assert_eq!(before.len(), after.len());
        assert!(before.iter().zip(&after).any(|(a, b)| (a - b).abs() > 0.01));
        // Offsets stay within the wave's envelope
        let envelope = 1.75 * 2.0 * (1.0 + 40.0 * MAGNITUDE_GAIN) + 0.01;
        assert!(before.iter().zip(&after).all(|(a, b)| (a - b).abs() <= envelope));
    }

    #[test]
    fn test_repeated_frames_do_not_drift() {
        let distorter = PathWaveDistorter::default();
        let baseline = "M100,100 L200,50";
        let first = distorter.apply(baseline, 3.0, 1.0);
        for frame in 0..100 {
            distorter.apply(baseline, frame as f64 * 0.016, 1.0);
        }
        assert_eq!(distorter.apply(baseline, 3.0, 1.0), first);
    }

    #[test]
    fn test_phase_offset_equals_shifted_time() {
        let distorter = PathWaveDistorter::default();
        let baseline = "M5,6 L7,8";
        assert_eq!(
            distorter.apply_indexed(baseline, 1.0, 1.0, 0.5, 2),
            distorter.apply_indexed(baseline, 1.5, 1.0, 0.0, 2),
        );
    }

    #[test]
    fn test_path_index_desynchronizes() {
        let distorter = PathWaveDistorter::default();
        let baseline = "M5,6 L7,8";
        assert_ne!(
            distorter.apply_indexed(baseline, 1.0, 1.0, 0.0, 0),
            distorter.apply_indexed(baseline, 1.0, 1.0, 0.0, 1),
        );
    }

    #[test]
    fn test_axes_are_out_of_step() {
        let wave = WaveSettings::default();
        let x = wave_offset(10.0, Axis::X, 2.0, 0, &wave);
        let y = wave_offset(10.0, Axis::Y, 2.0, 0, &wave);
        assert!((x - y).abs() > 1e-6);
    }

    #[test]
    fn test_magnitude_gain() {
        assert_eq!(magnitude_gain(0.0), 1.0);
        assert!((magnitude_gain(-500.0) - 2.0).abs() < 1e-12);
        assert!(magnitude_gain(900.0) > magnitude_gain(90.0));
    }

    #[test]
    fn test_zero_amplitude_is_still() {
        let distorter = PathWaveDistorter::new(WaveSettings {
            amplitude_base: 0.0,
            amplitude_variation: 0.0,
            ..WaveSettings::default()
        });
        assert_eq!(distorter.apply("M3,4", 5.0, 2.0), "M3.00,4.00");
    }

    #[test]
    fn test_precision_setting() {
        let distorter = PathWaveDistorter::new(WaveSettings {
            precision_digits: 1,
            ..WaveSettings::default()
        });
        assert_eq!(distorter.apply("M1.44 2.66", 9.0, 0.0), "M1.4 2.7");
    }

    #[test]
    fn test_zero_precision_keeps_minus_separated_numbers() {
        let distorter = PathWaveDistorter::new(WaveSettings {
            precision_digits: 0,
            ..WaveSettings::default()
        });
        let out = distorter.apply("M1-0.4", 0.0, 0.0);
        assert_eq!(out, "M1.0-0.4");
        assert_eq!(tokenize(&out).len(), 2);
    }

    #[test]
    fn test_compact_forms_keep_their_numbers() {
        let distorter = PathWaveDistorter::default();
        for baseline in ["M1-2", "M.5.5", "L3.5Z", "M1..5", "M1.-5", "M--5", "M1-.5-.5"] {
            for time in [0.0, 0.7, 3.3] {
                let out = distorter.apply(baseline, time, 2.0);
                assert_eq!(tokenize(&out).len(), tokenize(baseline).len(), "{baseline} -> {out}");
                assert_eq!(skeleton(&out), skeleton(baseline), "{baseline} -> {out}");
            }
        }
    }

    #[test]
    fn test_lead_detection() {
        let text = "M1-2.5.5 -3";
        let leads: Vec<Lead> = tokenize(text).iter().map(|t| Lead::of(text, t)).collect();
        assert_eq!(leads, vec![Lead::Free, Lead::Minus, Lead::Dot, Lead::Free]);
    }

    #[test]
    fn test_format_token_keeps_leading_form() {
        assert_eq!(format_token(0.3, Lead::Minus, 2), "-0.00");
        assert_eq!(format_token(-1.256, Lead::Minus, 2), "-1.26");
        assert_eq!(format_token(0.25, Lead::Dot, 2), ".25");
        assert_eq!(format_token(-0.4, Lead::Dot, 2), ".00");
        assert_eq!(format_token(1.7, Lead::Dot, 2), ".99");
        assert_eq!(format_token(2.0, Lead::Free, 0), "2.0");
    }

    #[test]
    fn test_huge_digit_run_is_left_alone() {
        let distorter = PathWaveDistorter::default();
        let huge = "9".repeat(400);
        let baseline = format!("M{},5", huge);
        let out = distorter.apply(&baseline, 0.0, 0.0);
        assert_eq!(out, format!("M{},5.00", huge));
        assert!(!out.contains("NaN"));
        assert_eq!(tokenize(&out).len(), tokenize(&baseline).len());
    }

    #[test]
    fn test_non_finite_result_keeps_original_text() {
        let distorter = PathWaveDistorter::default();
        assert_eq!(distorter.apply("M3,4", 1.0, f64::NAN), "M3,4");
    }

    #[test]
    fn test_format_number_drops_negative_zero() {
        assert_eq!(format_number(-0.001, 2), "0.00");
        assert_eq!(format_number(-0.0, 2), "0.00");
        assert_eq!(format_number(-0.5, 2), "-0.50");
        assert_eq!(format_number(3.14159, 2), "3.14");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// Number text in the forms minified paths use: `12`, `1.5`, `.5`,
        /// each optionally negative
        fn number() -> impl Strategy<Value = String> {
            let body = prop_oneof![
                (0_u32..5000).prop_map(|n| n.to_string()),
                (0_u32..5000, 0_u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
                // Two fraction digits at most: a glued `.999` saturates at `.99`
                (0_u32..100).prop_map(|b| format!(".{b}")),
            ];
            (any::<bool>(), body).prop_map(|(neg, body)| if neg { format!("-{body}") } else { body })
        }

        /// Path text with packed commands and optional separators, so
        /// numbers often touch (`M1-2`, `.5.5`, `L3.5Z`)
        fn path() -> impl Strategy<Value = String> {
            let piece = (
                prop::sample::select(vec!["", "", "", ",", " ", "M", "L", "c", "Z", "."]),
                number(),
            )
                .prop_map(|(sep, num)| format!("{sep}{num}"));
            (prop::collection::vec(piece, 0..12), prop::sample::select(vec!["", "Z", " z"]))
                .prop_map(|(pieces, tail)| format!("{}{}", pieces.concat(), tail))
        }

        proptest! {
            #[test]
            fn structure_survives_distortion(
                baseline in path(),
                time in -100.0_f64..100.0,
                intensity in 0.0_f64..3.0,
                index in 0_usize..8,
            ) {
                let distorter = PathWaveDistorter::default();
                let out = distorter.apply_indexed(&baseline, time, intensity, 0.0, index);
                prop_assert_eq!(tokenize(&out).len(), tokenize(&baseline).len());
                prop_assert_eq!(skeleton(&out), skeleton(&baseline));
            }

            #[test]
            fn zero_intensity_matches_baseline(baseline in path(), time in -100.0_f64..100.0) {
                let distorter = PathWaveDistorter::default();
                let out = distorter.apply(&baseline, time, 0.0);
                for (a, b) in values(&baseline).iter().zip(values(&out)) {
                    prop_assert!((a - b).abs() <= 0.005 + 1e-9);
                }
            }
        }
    }
}
