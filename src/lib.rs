//! # NMEA 0183 Stream Parser
//!
//! A `no_std`, allocation-free parser for the NMEA 0183 sentences GPS receivers emit:
//! GGA, GSA, GSV, RMC and the u-blox `$PUBX,04` time report. Bytes are pushed in as
//! they arrive, one at a time from a UART interrupt or in chunks of any size, and the
//! decoded navigation state is published only once a sentence's checksum checks out.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_stream::{Gps, Statement};
//!
//! let mut gps: Gps = Gps::new();
//!
//! gps.process(b"$GPRMC,183729,A,3907.356,N,12102.482,W,000.0,360.0,080301,015.5,E*6F\r\n");
//!
//! let fix = gps.fix();
//! assert!(fix.is_valid);
//! assert_eq!((fix.date.day, fix.date.month, fix.date.year), (8, 3, 1));
//! ```
//!
//! ## Features
//!
//! - `f32`: use `f32` instead of `f64` for [`Float`]
//! - `serde`: `Serialize` / `Deserialize` for the published data types
//! - `time`: conversions of the published date and time into [`time`](https://docs.rs/time) types

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
pub mod custom;
pub mod error;
mod fix;
pub mod geodesy;
mod nmea0183;
mod parse;
pub mod parsing;
mod sentences;
mod statement;

pub use config::Config;
pub use custom::{CustomId, CustomKind, CustomValue, MAX_CUSTOM_TERMS};
pub use error::Error;
pub use fix::{Fix, FixMode, Quality, Satellite, UtcDate, UtcTime};
pub use geodesy::{SpeedUnit, distance_bearing, to_speed};
pub use nmea0183::*;
pub use nmea0183_stream_derive::TermDecode;
pub use parse::{FromTerm, TermDecode};
pub use statement::Statement;

/// Floating point type of every decoded real number.
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// Floating point type of every decoded real number.
#[cfg(feature = "f32")]
pub type Float = f32;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
