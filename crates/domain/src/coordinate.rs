use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Number of fixed decimal places kept for every coordinate.
pub const COORDINATE_SCALE: i64 = 1_000_000;

/// Cache proximity tolerance (0.001 degree, roughly 100 m).
pub const PROXIMITY_TOLERANCE_E6: i64 = 1_000;

const MAX_LATITUDE_E6: i64 = 90 * COORDINATE_SCALE;
const MAX_LONGITUDE_E6: i64 = 180 * COORDINATE_SCALE;

/// A geographic point stored as fixed-precision micro-degrees.
///
/// Keeping integers instead of floats makes the tolerance window and the
/// heuristic bounding boxes exact: `-36.849` is always 1000 micro-degrees
/// away from `-36.848`, never `0.0009999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    latitude_e6: i64,
    longitude_e6: i64,
}

impl Coordinate {
    pub fn from_micro_degrees(latitude_e6: i64, longitude_e6: i64) -> Result<Self, DomainError> {
        if !(-MAX_LATITUDE_E6..=MAX_LATITUDE_E6).contains(&latitude_e6) {
            return Err(DomainError::InvalidCoordinate(format!(
                "latitude {} out of range [-90, 90]",
                format_e6(latitude_e6)
            )));
        }
        if !(-MAX_LONGITUDE_E6..=MAX_LONGITUDE_E6).contains(&longitude_e6) {
            return Err(DomainError::InvalidCoordinate(format!(
                "longitude {} out of range [-180, 180]",
                format_e6(longitude_e6)
            )));
        }
        Ok(Self {
            latitude_e6,
            longitude_e6,
        })
    }

    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let lat = degrees_to_e6(latitude, "latitude")?;
        let lon = degrees_to_e6(longitude, "longitude")?;
        Self::from_micro_degrees(lat, lon)
    }

    /// Parses two decimal strings exactly, without passing through `f64`.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, DomainError> {
        let lat = parse_decimal_e6(latitude)?;
        let lon = parse_decimal_e6(longitude)?;
        Self::from_micro_degrees(lat, lon)
    }

    pub fn latitude_e6(&self) -> i64 {
        self.latitude_e6
    }

    pub fn longitude_e6(&self) -> i64 {
        self.longitude_e6
    }

    pub fn latitude(&self) -> f64 {
        self.latitude_e6 as f64 / COORDINATE_SCALE as f64
    }

    pub fn longitude(&self) -> f64 {
        self.longitude_e6 as f64 / COORDINATE_SCALE as f64
    }

    /// Rectangular nearness: both axes within `tolerance_e6`, inclusive.
    pub fn is_within(&self, other: &Coordinate, tolerance_e6: i64) -> bool {
        (self.latitude_e6 - other.latitude_e6).abs() <= tolerance_e6
            && (self.longitude_e6 - other.longitude_e6).abs() <= tolerance_e6
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            format_e6(self.latitude_e6),
            format_e6(self.longitude_e6)
        )
    }
}

impl FromStr for Coordinate {
    type Err = DomainError;

    /// Accepts `"lat,lon"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s.split_once(',').ok_or_else(|| {
            DomainError::InvalidCoordinate(format!("expected 'latitude,longitude', got '{s}'"))
        })?;
        Self::parse(lat, lon)
    }
}

fn degrees_to_e6(value: f64, axis: &str) -> Result<i64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::InvalidCoordinate(format!(
            "{axis} must be a finite number"
        )));
    }
    let scaled = (value * COORDINATE_SCALE as f64).round();
    if scaled.abs() > (i64::MAX / 2) as f64 {
        return Err(DomainError::InvalidCoordinate(format!(
            "{axis} {value} out of range"
        )));
    }
    Ok(scaled as i64)
}

/// Parses a decimal literal into micro-degrees, rounding half away from zero
/// past the sixth fractional digit.
pub fn parse_decimal_e6(input: &str) -> Result<i64, DomainError> {
    let invalid = || DomainError::InvalidCoordinate(format!("'{input}' is not a decimal number"));

    let s = input.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    if int_part.len() > 6 {
        return Err(invalid());
    }

    let whole: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| invalid())?
    };

    let mut fraction: i64 = 0;
    for (i, b) in frac_part.bytes().take(6).enumerate() {
        fraction += i64::from(b - b'0') * 10_i64.pow(5 - i as u32);
    }
    if frac_part.len() > 6 && frac_part.as_bytes()[6] >= b'5' {
        fraction += 1;
    }

    let magnitude = whole * COORDINATE_SCALE + fraction;
    Ok(if negative { -magnitude } else { magnitude })
}

pub fn format_e6(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    let scale = COORDINATE_SCALE as u64;
    format!("{sign}{}.{:06}", abs / scale, abs % scale)
}
