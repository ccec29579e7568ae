use std::fmt;

use crate::models::parse_or_zero;

/// Cardinal hemisphere of one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn letter(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    fn positive(is_latitude: bool) -> Self {
        if is_latitude {
            Hemisphere::North
        } else {
            Hemisphere::East
        }
    }
}

/// Degrees/minutes/seconds decomposition of a decimal coordinate.
/// `seconds` is already rounded to two decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct DmsParts {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl DmsParts {
    /// Zeroed parts with the axis default hemisphere, used when the decimal
    /// input cannot be parsed.
    pub fn empty(is_latitude: bool) -> Self {
        DmsParts {
            degrees: 0,
            minutes: 0,
            seconds: 0.0,
            hemisphere: Hemisphere::positive(is_latitude),
        }
    }
}

impl fmt::Display for DmsParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{}'{:.2}\"{}",
            self.degrees,
            self.minutes,
            self.seconds,
            self.hemisphere.letter()
        )
    }
}

/// Convert a signed decimal coordinate to DMS parts.
pub fn decimal_to_dms(value: f64, is_latitude: bool) -> DmsParts {
    if !value.is_finite() {
        return DmsParts::empty(is_latitude);
    }

    let absolute = value.abs();
    let degrees = absolute.floor();
    let minutes_float = (absolute - degrees) * 60.0;
    let minutes = minutes_float.floor();
    let seconds = round2((minutes_float - minutes) * 60.0);

    let hemisphere = match (is_latitude, value >= 0.0) {
        (true, true) => Hemisphere::North,
        (true, false) => Hemisphere::South,
        (false, true) => Hemisphere::East,
        (false, false) => Hemisphere::West,
    };

    DmsParts {
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds,
        hemisphere,
    }
}

/// Same as [`decimal_to_dms`] but over raw form text. Empty or non-numeric
/// input yields empty parts instead of an error.
pub fn decimal_text_to_dms(raw: &str, is_latitude: bool) -> DmsParts {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => decimal_to_dms(value, is_latitude),
        _ => DmsParts::empty(is_latitude),
    }
}

/// Convert raw DMS form fields back to a signed decimal coordinate, rounded
/// to six decimal places. Fields parse leniently (invalid → 0) and are
/// clamped to their valid ranges, so this never fails.
pub fn dms_to_decimal(
    degrees: &str,
    minutes: &str,
    seconds: &str,
    hemisphere: &str,
    is_latitude: bool,
) -> f64 {
    let max_degrees = if is_latitude { 90.0 } else { 180.0 };
    let degrees = parse_or_zero(degrees).clamp(0.0, max_degrees);
    let minutes = parse_or_zero(minutes).clamp(0.0, 59.0);
    let seconds = parse_or_zero(seconds).clamp(0.0, 59.9999);

    let mut decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    if negates(hemisphere) {
        decimal = -decimal;
    }
    round6(decimal)
}

// Only S and W flip the sign; anything else counts as the positive
// hemisphere.
fn negates(hemisphere: &str) -> bool {
    matches!(
        hemisphere.trim().chars().next().map(|c| c.to_ascii_uppercase()),
        Some('S') | Some('W')
    )
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
