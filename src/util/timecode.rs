// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Timecode parsing and formatting.
//!
//! This module converts between the human-readable `HH:MM:SS` labels shown
//! in the timestamp list and the numeric seconds offsets used by playback
//! and the submission payload.

use thiserror::Error;

/// Error raised when a timecode label cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeCodeError {
    #[error("malformed timecode label: {label}")]
    Format { label: String },
}

/// Parse an `HH:MM:SS` label into seconds.
///
/// Requires exactly three numeric fields with minutes and seconds in
/// [0, 59]. Hours are unbounded so labels past 99:59:59 still parse.
pub fn parse(label: &str) -> Result<f64, TimeCodeError> {
    let malformed = || TimeCodeError::Format {
        label: label.to_string(),
    };

    let fields: Vec<&str> = label.split(':').collect();
    if fields.len() != 3 {
        return Err(malformed());
    }

    let mut values = [0u32; 3];
    for (i, field) in fields.iter().enumerate() {
        if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        values[i] = field.parse().map_err(|_| malformed())?;
    }

    let [hours, minutes, seconds] = values;
    if minutes > 59 || seconds > 59 {
        return Err(malformed());
    }

    Ok(f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + f64::from(seconds))
}

/// Format seconds as a zero-padded `HH:MM:SS` label.
///
/// Fractional seconds are truncated; the hours field widens past two digits
/// instead of overflowing.
pub fn format(seconds: f64) -> String {
    let total = seconds.max(0.0).trunc() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Render seconds with two decimal places for the submission payload.
pub fn wire_seconds(seconds: f64) -> String {
    format!("{:.2}", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_simple_labels() {
        assert_eq!(parse("00:00:05").unwrap(), 5.0);
        assert_eq!(parse("00:01:05").unwrap(), 65.0);
        assert_eq!(parse("01:00:00").unwrap(), 3600.0);
        assert_eq!(parse("99:59:59").unwrap(), 359999.0);
    }

    #[test]
    fn test_parse_rejects_malformed_labels() {
        let malformed = [
            "00:00",       // too few fields
            "00:00:00:00", // too many fields
            "aa:00:00",    // non-numeric field
            "00:0a:00",
            "00:60:00", // minutes out of range
            "00:00:60", // seconds out of range
            "::",
            "",
            "00:00:-1",
        ];
        for label in malformed {
            assert!(
                matches!(parse(label), Err(TimeCodeError::Format { .. })),
                "expected {:?} to be rejected",
                label
            );
        }
    }

    #[test]
    fn test_format_zero_pads_fields() {
        assert_eq!(format(0.0), "00:00:00");
        assert_eq!(format(5.0), "00:00:05");
        assert_eq!(format(65.0), "00:01:05");
        assert_eq!(format(3661.0), "01:01:01");
    }

    #[test]
    fn test_format_truncates_fractional_seconds() {
        assert_eq!(format(5.99), "00:00:05");
    }

    #[test]
    fn test_format_widens_hours_past_two_digits() {
        assert_eq!(format(360000.0), "100:00:00");
        assert_eq!(parse("100:00:00").unwrap(), 360000.0);
    }

    #[test]
    fn test_wire_seconds_uses_two_decimals() {
        assert_eq!(wire_seconds(5.0), "5.00");
        assert_eq!(wire_seconds(65.0), "65.00");
        assert_eq!(wire_seconds(1.5), "1.50");
    }

    proptest! {
        #[test]
        fn roundtrip_integral_seconds(s in 0u32..360000u32) {
            let label = format(f64::from(s));
            prop_assert_eq!(parse(&label).unwrap(), f64::from(s));
        }

        #[test]
        fn roundtrip_well_formed_labels(h in 0u32..100u32, m in 0u32..60u32, s in 0u32..60u32) {
            let label = format!("{:02}:{:02}:{:02}", h, m, s);
            prop_assert_eq!(format(parse(&label).unwrap()), label);
        }
    }
}
