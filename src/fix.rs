//! # Published Fix
//!
//! The navigation state visible to callers. A field only changes when a sentence
//! that owns it passes checksum verification; everything else keeps its last value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Float;

/// UTC time of day as transmitted (whole seconds).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UtcTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// UTC date as transmitted, with a two-digit year.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UtcDate {
    pub day: u8,
    pub month: u8,
    pub year: u8,
}

/// One entry of the satellites-in-view list (GSV).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Satellite {
    /// PRN number
    pub id: u8,
    /// Elevation in degrees, 0 to 90
    pub elevation: u8,
    /// Azimuth in degrees from true north, 0 to 359
    pub azimuth: u16,
    /// Signal to noise ratio in dB-Hz, 0 when not tracking
    pub snr: u8,
}

macro_rules! numbered_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl TryFrom<u8> for $name {
            type Error = u8;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(Self::$variant),)*
                    other => Err(other),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                match value {
                    $($name::$variant => $code,)*
                }
            }
        }
    };
}

numbered_enum! {
    /// Quality of the GPS fix (GGA field 6)
    pub enum Quality {
        /// 0 - Fix not available
        0 => NoFix,
        /// 1 - GPS fix
        1 => GpsFix,
        /// 2 - Differential GPS fix
        2 => DgpsFix,
        /// 3 - PPS fix
        3 => PpsFix,
        /// 4 - Real Time Kinematic
        4 => Rtk,
        /// 5 - Float RTK
        5 => FloatRtk,
        /// 6 - Estimated (dead reckoning)
        6 => Estimated,
        /// 7 - Manual input mode
        7 => Manual,
        /// 8 - Simulation mode
        8 => Simulation,
    }
}

numbered_enum! {
    /// Fix Mode (GSA field 2)
    pub enum FixMode {
        /// 1 - No fix
        1 => NoFix,
        /// 2 - 2D Fix
        2 => Fix2D,
        /// 3 - 3D Fix
        3 => Fix3D,
    }
}

/// The published navigation state of a [`Gps`](crate::Gps) handle.
///
/// `N` is the capacity of the satellites-in-view list. The list always holds exactly
/// `N` descriptors; entries no GSV sentence has filled stay zeroed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Fix<const N: usize = 12> {
    // GGA
    /// Latitude in decimal degrees, negative south of the equator
    pub latitude: Float,
    /// Longitude in decimal degrees, negative west of Greenwich
    pub longitude: Float,
    /// Altitude above mean sea level in meters
    pub altitude: Float,
    /// Geoid separation in meters
    pub geo_sep: Float,
    /// Number of satellites used for the fix
    pub sats_in_use: u8,
    /// Raw fix quality code, see [`Fix::quality`]
    pub fix: u8,
    /// UTC time of the last GGA or `$PUBX,04` sentence
    pub time: UtcTime,

    // GSA
    /// Horizontal dilution of precision
    pub dop_h: Float,
    /// Vertical dilution of precision
    pub dop_v: Float,
    /// Position dilution of precision
    pub dop_p: Float,
    /// Raw fix mode code, see [`Fix::mode`]
    pub fix_mode: u8,
    /// PRNs of the satellites used for the fix, 0 for unused slots
    pub satellite_ids: [u8; 12],

    // GSV
    /// Number of satellites in view
    pub sats_in_view: u8,
    /// Always `N` entries, see [`Fix::satellites()`]
    pub(crate) satellites: heapless::Vec<Satellite, N>,

    // RMC
    /// `true` when the receiver reports the data as valid (status `A`)
    pub is_valid: bool,
    /// Speed over ground in knots
    pub speed: Float,
    /// Course over ground in degrees
    pub course: Float,
    /// Magnetic variation in degrees, negative to the west
    pub variation: Float,
    /// UTC date of the last RMC or `$PUBX,04` sentence
    pub date: UtcDate,

    // PUBX,04
    /// UTC time of week in seconds
    pub utc_tow: Float,
    /// UTC week number
    pub utc_wk: u16,
    /// Leap seconds
    pub leap_sec: u8,
    /// Receiver clock bias in nanoseconds
    pub clk_bias: u32,
    /// Receiver clock drift in nanoseconds per second
    pub clk_drift: Float,
    /// Time pulse granularity in nanoseconds
    pub tp_gran: u32,
}

impl<const N: usize> Default for Fix<N> {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            altitude: 0.0,
            geo_sep: 0.0,
            sats_in_use: 0,
            fix: 0,
            time: UtcTime::default(),
            dop_h: 0.0,
            dop_v: 0.0,
            dop_p: 0.0,
            fix_mode: 0,
            satellite_ids: [0; 12],
            sats_in_view: 0,
            satellites: core::iter::repeat_n(Satellite::default(), N).collect(),
            is_valid: false,
            speed: 0.0,
            course: 0.0,
            variation: 0.0,
            date: UtcDate::default(),
            utc_tow: 0.0,
            utc_wk: 0,
            leap_sec: 0,
            clk_bias: 0,
            clk_drift: 0.0,
            tp_gran: 0,
        }
    }
}

impl<const N: usize> Fix<N> {
    /// Typed view of [`Fix::fix`], [`None`] for codes outside the NMEA table.
    pub fn quality(&self) -> Option<Quality> {
        Quality::try_from(self.fix).ok()
    }

    /// Typed view of [`Fix::fix_mode`], [`None`] before any GSA sentence.
    pub fn mode(&self) -> Option<FixMode> {
        FixMode::try_from(self.fix_mode).ok()
    }

    /// All `N` satellite slots, in GSV order. Slots no GSV sentence has filled are zeroed.
    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// Satellites in view that have been described by a GSV sentence so far.
    pub fn satellites_in_view(&self) -> impl Iterator<Item = &Satellite> {
        self.satellites
            .iter()
            .take(usize::from(self.sats_in_view))
            .filter(|satellite| satellite.id != 0)
    }
}

#[cfg(feature = "time")]
mod calendar {
    use super::{Fix, UtcDate, UtcTime};
    use crate::Error;

    impl TryFrom<UtcTime> for time::Time {
        type Error = Error;

        fn try_from(value: UtcTime) -> Result<Self, Self::Error> {
            time::Time::from_hms(value.hours, value.minutes, value.seconds)
                .or(Err(Error::InvalidTime))
        }
    }

    impl TryFrom<UtcDate> for time::Date {
        type Error = Error;

        /// Two-digit years from 83 are taken as 19xx, the rest as 20xx.
        fn try_from(value: UtcDate) -> Result<Self, Self::Error> {
            let year = match value.year {
                83..=99 => 1900 + i32::from(value.year),
                _ => 2000 + i32::from(value.year),
            };
            let month = time::Month::try_from(value.month).or(Err(Error::InvalidDate))?;

            time::Date::from_calendar_date(year, month, value.day).or(Err(Error::InvalidDate))
        }
    }

    impl<const N: usize> Fix<N> {
        /// Combines the published date and time.
        pub fn date_time(&self) -> Result<time::PrimitiveDateTime, Error> {
            Ok(time::PrimitiveDateTime::new(
                self.date.try_into()?,
                self.time.try_into()?,
            ))
        }
    }
}
