//! # Geodesy Helpers
//!
//! Great-circle distance and initial bearing on a spherical Earth, and conversion of
//! speed over ground from knots. Independent of any parser state.

use core::str::FromStr;

#[cfg(not(feature = "f32"))]
use libm::{atan2, cos, sin, sqrt};
#[cfg(feature = "f32")]
use libm::{atan2f as atan2, cosf as cos, sinf as sin, sqrtf as sqrt};

use crate::{Error, Float};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: Float = 6371.0;

fn radians(degrees: Float) -> Float {
    degrees * (core::f64::consts::PI as Float) / 180.0
}

fn degrees(radians: Float) -> Float {
    radians * 180.0 / (core::f64::consts::PI as Float)
}

/// Haversine distance in meters between two points given in decimal degrees.
pub fn distance(lat1: Float, lon1: Float, lat2: Float, lon2: Float) -> Float {
    let d_lat = radians(lat2 - lat1);
    let d_lon = radians(lon2 - lon1);

    let a = sin(d_lat * 0.5) * sin(d_lat * 0.5)
        + sin(d_lon * 0.5) * sin(d_lon * 0.5) * cos(radians(lat1)) * cos(radians(lat2));

    EARTH_RADIUS_KM * 2.0 * atan2(sqrt(a), sqrt(1.0 - a)) * 1000.0
}

/// Initial bearing in degrees, `[0, 360)`, when travelling from point 1 to point 2.
///
/// 0 is north, 90 east, 180 south and 270 west.
pub fn bearing(lat1: Float, lon1: Float, lat2: Float, lon2: Float) -> Float {
    let (lat1, lat2) = (radians(lat1), radians(lat2));
    let d_lon = radians(lon2) - radians(lon1);

    let y = sin(d_lon) * cos(lat2);
    let x = cos(lat1) * sin(lat2) - sin(lat1) * cos(lat2) * cos(d_lon);

    let bearing = degrees(atan2(y, x));
    if bearing < 0.0 { bearing + 360.0 } else { bearing }
}

/// Distance in meters and initial bearing in degrees between two points.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::geodesy::distance_bearing;
///
/// // New York to Munich
/// let (meters, degrees) = distance_bearing(40.685721, -73.820465, 48.150906, 11.554176);
/// assert!((meters - 6_475_655.8).abs() < 100.0);
/// assert!((degrees - 51.4566).abs() < 0.01);
/// ```
pub fn distance_bearing(lat1: Float, lon1: Float, lat2: Float, lon2: Float) -> (Float, Float) {
    (
        distance(lat1, lon1, lat2, lon2),
        bearing(lat1, lon1, lat2, lon2),
    )
}

/// Units speed over ground can be converted to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpeedUnit {
    /// Kilometers per second, `km/s`
    KilometersPerSecond,
    /// Kilometers per hour, `km/h`
    KilometersPerHour,
    /// Meters per second, `m/s`
    MetersPerSecond,
    /// Meters per minute, `m/min`
    MetersPerMinute,
    /// Miles per second, `mi/s`
    MilesPerSecond,
    /// Miles per hour, `mph`
    MilesPerHour,
    /// Feet per second, `ft/s`
    FeetPerSecond,
    /// Feet per minute, `ft/min`
    FeetPerMinute,
    /// Pace in minutes per kilometer, `min/km`
    MinutesPerKilometer,
    /// Pace in seconds per kilometer, `s/km`
    SecondsPerKilometer,
    /// Pace in seconds per 100 meters, `s/100m`
    SecondsPer100Meters,
    /// Pace in minutes per mile, `min/mi`
    MinutesPerMile,
    /// Pace in seconds per mile, `s/mi`
    SecondsPerMile,
    /// Pace in seconds per 100 yards, `s/100yd`
    SecondsPer100Yards,
    /// Nautical miles per hour (knots), `kn`
    NauticalMilesPerHour,
}

impl SpeedUnit {
    /// Multiplier applied to a speed in knots.
    pub const fn factor(self) -> Float {
        match self {
            Self::KilometersPerSecond => 0.000514,
            Self::KilometersPerHour => 1.852,
            Self::MetersPerSecond => 0.5144,
            Self::MetersPerMinute => 30.87,
            Self::MilesPerSecond => 0.0003197,
            Self::MilesPerHour => 1.151,
            Self::FeetPerSecond => 1.688,
            Self::FeetPerMinute => 101.3,
            Self::MinutesPerKilometer => 32.4,
            Self::SecondsPerKilometer => 1944.0,
            Self::SecondsPer100Meters => 194.4,
            Self::MinutesPerMile => 52.14,
            Self::SecondsPerMile => 3128.0,
            Self::SecondsPer100Yards => 177.7,
            Self::NauticalMilesPerHour => 1.0,
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::KilometersPerSecond => "km/s",
            Self::KilometersPerHour => "km/h",
            Self::MetersPerSecond => "m/s",
            Self::MetersPerMinute => "m/min",
            Self::MilesPerSecond => "mi/s",
            Self::MilesPerHour => "mph",
            Self::FeetPerSecond => "ft/s",
            Self::FeetPerMinute => "ft/min",
            Self::MinutesPerKilometer => "min/km",
            Self::SecondsPerKilometer => "s/km",
            Self::SecondsPer100Meters => "s/100m",
            Self::MinutesPerMile => "min/mi",
            Self::SecondsPerMile => "s/mi",
            Self::SecondsPer100Yards => "s/100yd",
            Self::NauticalMilesPerHour => "kn",
        }
    }

    pub const ALL: [SpeedUnit; 15] = [
        Self::KilometersPerSecond,
        Self::KilometersPerHour,
        Self::MetersPerSecond,
        Self::MetersPerMinute,
        Self::MilesPerSecond,
        Self::MilesPerHour,
        Self::FeetPerSecond,
        Self::FeetPerMinute,
        Self::MinutesPerKilometer,
        Self::SecondsPerKilometer,
        Self::SecondsPer100Meters,
        Self::MinutesPerMile,
        Self::SecondsPerMile,
        Self::SecondsPer100Yards,
        Self::NauticalMilesPerHour,
    ];
}

impl FromStr for SpeedUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.abbreviation() == s)
            .ok_or(Error::UnknownSpeedUnit)
    }
}

/// Converts a speed in knots into `unit`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::geodesy::{SpeedUnit, to_speed};
///
/// assert!((to_speed(10.0, SpeedUnit::KilometersPerHour) - 18.52).abs() < 1e-6);
/// ```
pub fn to_speed(knots: Float, unit: SpeedUnit) -> Float {
    knots * unit.factor()
}

/// Converts a speed in knots into the unit named by its abbreviation, or 0 when the
/// name is not one of [`SpeedUnit::abbreviation`].
pub fn to_speed_named(knots: Float, unit: &str) -> Float {
    unit.parse::<SpeedUnit>()
        .map_or(0.0, |unit| to_speed(knots, unit))
}
