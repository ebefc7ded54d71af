//! # NMEA 0183 Stream Parser
//!
//! This module provides the [`Gps`] handle, a byte-at-a-time state machine for
//! NMEA 0183 sentences of the form `$HHHHH,D1,D2,...,Dn*CC\r\n`.
//!
//! - `$` starts a sentence and resets all working state
//! - `,` and `*` close a term, which is decoded right away into a staging area
//! - `\r` verifies the checksum and publishes the staged fields when it matches
//!
//! Bytes outside a sentence (such as the `\n`) are ignored.

use heapless::Vec;

use crate::{
    Config, CustomId, CustomKind, CustomValue, Error, Fix, Statement, TermDecode,
    custom::CustomTerms,
    parsing::checksum_digits,
    sentences::{Publish, Staging},
};

/// Maximum number of characters kept per term. Excess characters are dropped.
pub const TERM_CAPACITY: usize = 12;

/// Calculates the NMEA 0183 checksum of a sentence body.
///
/// The checksum is the XOR of every byte between the `$` and the `*`, both excluded.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::checksum;
///
/// let cc = checksum(b"GNGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,");
/// assert_eq!(cc, 0x6B);
/// ```
pub fn checksum(body: &[u8]) -> u8 {
    body.iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// State of the sentence in flight. Meaningless outside a sentence.
#[derive(Clone, Debug, Default, PartialEq)]
struct Working {
    in_sentence: bool,
    statement: Statement,
    tag: Vec<u8, TERM_CAPACITY>,
    term: Vec<u8, TERM_CAPACITY>,
    index: u8,
    star: bool,
    crc: u8,
    staging: Staging,
}

/// Incremental NMEA 0183 parser and the navigation state it publishes.
///
/// Feed bytes with [`Gps::process`], [`Gps::process_with`] or [`Gps::process_byte`] in
/// chunks of any size, and read the result with [`Gps::fix`]. Fields of the [`Fix`]
/// only change when a sentence owning them terminates with a matching checksum.
///
/// `N` is the capacity of the satellites-in-view list.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{Gps, Statement};
///
/// let mut gps: Gps = Gps::new();
/// let mut seen = Vec::new();
///
/// gps.process_with(
///     b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*75\r\n",
///     |statement| seen.push(statement),
/// );
///
/// assert_eq!(seen, [Statement::Gga]);
/// assert_eq!(gps.fix().sats_in_use, 5);
/// assert!((gps.fix().latitude - 39.1226).abs() < 1e-6);
/// ```
#[derive(Clone, Debug)]
pub struct Gps<const N: usize = 12> {
    fix: Fix<N>,
    config: Config,
    customs: CustomTerms,
    working: Working,
}

impl<const N: usize> Default for Gps<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Gps<N> {
    /// Creates a zeroed handle with the default [`Config`].
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Creates a zeroed handle.
    pub fn with_config(config: Config) -> Self {
        Self {
            fix: Fix::default(),
            config,
            customs: CustomTerms::default(),
            working: Working::default(),
        }
    }

    /// Zeroes the published fix, the sentence in flight and captured custom values.
    ///
    /// The configuration and custom term registrations are kept.
    pub fn reset(&mut self) {
        self.fix = Fix::default();
        self.working = Working::default();
        self.customs.clear_values();
    }

    /// The configuration the handle was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The published navigation state.
    pub fn fix(&self) -> &Fix<N> {
        &self.fix
    }

    /// Processes a run of bytes. Always returns `true`.
    pub fn process(&mut self, data: &[u8]) -> bool {
        self.process_with(data, |_| {})
    }

    /// Processes a run of bytes, calling `callback` once per terminated sentence.
    ///
    /// The callback sees the statement kind, or [`Statement::ChecksumFailure`] when the
    /// sentence was rejected. It runs after publication, so [`Gps::fix`] already holds
    /// the new values. Always returns `true`.
    pub fn process_with<F>(&mut self, data: &[u8], mut callback: F) -> bool
    where
        F: FnMut(Statement),
    {
        for &byte in data {
            if let Some(statement) = self.process_byte(byte) {
                callback(statement);
            }
        }

        true
    }

    /// Processes a single byte, returning the outcome when it terminates a sentence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_stream::{Gps, Statement};
    ///
    /// let mut gps: Gps = Gps::new();
    /// let sentence = b"$PGRMM,WGS84*06\r\n";
    ///
    /// let outcomes: Vec<_> = sentence.iter().filter_map(|&b| gps.process_byte(b)).collect();
    /// assert_eq!(outcomes, [Statement::ChecksumFailure]);
    /// ```
    pub fn process_byte(&mut self, byte: u8) -> Option<Statement> {
        match byte {
            b'$' => {
                self.begin();
                None
            }
            _ if !self.working.in_sentence => None,
            b'\r' => Some(self.terminate()),
            b',' | b'*' if !self.working.star => {
                self.end_term();
                if byte == b',' {
                    self.working.crc ^= byte;
                } else {
                    self.working.star = true;
                }
                None
            }
            _ => {
                if !self.working.star {
                    self.working.crc ^= byte;
                }
                // Overlong terms are truncated.
                let _ = self.working.term.push(byte);
                None
            }
        }
    }

    /// Registers a custom term capture, see [`CustomKind`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_stream::{CustomKind, CustomValue, Gps};
    ///
    /// let mut gps: Gps = Gps::new();
    /// let datum = gps.register_custom("$PGRMM", 1, CustomKind::Text).unwrap();
    ///
    /// gps.process(b"$PGRMM,WGS 84*06\r\n");
    /// assert!(matches!(gps.custom(datum), Some(CustomValue::Text(t)) if t == "WGS 84"));
    /// ```
    pub fn register_custom(
        &mut self,
        tag: &str,
        index: u8,
        kind: CustomKind,
    ) -> Result<CustomId, Error> {
        self.customs.register(tag, index, kind)
    }

    /// Removes a custom term registration. Returns `false` if it was not registered.
    ///
    /// The freed slot is reused by the next registration, but `id` keeps resolving to
    /// nothing.
    pub fn unregister_custom(&mut self, id: CustomId) -> bool {
        self.customs.unregister(id)
    }

    /// Last value captured for a custom term, if any.
    pub fn custom(&self, id: CustomId) -> Option<&CustomValue> {
        self.customs.value(id)
    }

    fn begin(&mut self) {
        self.working = Working {
            in_sentence: true,
            ..Default::default()
        };
        let _ = self.working.term.push(b'$');
        self.customs.begin();
    }

    fn end_term(&mut self) {
        let working = &mut self.working;

        match working.index {
            0 => {
                working.statement = Statement::from_tag(&working.term);
                working.tag = working.term.clone();
                working.staging = Staging::for_statement(working.statement, &self.config);
            }
            index => {
                if index == 1 && working.statement == Statement::Ubx {
                    working.statement = working.statement.refine(&working.term);
                    working.staging = Staging::for_statement(working.statement, &self.config);
                }
                working.staging.decode_term(index, &working.term);
            }
        }

        self.customs
            .decode_term(&working.tag, working.index, &working.term);

        working.index = working.index.saturating_add(1);
        working.term.clear();
    }

    fn terminate(&mut self) -> Statement {
        if !self.working.star {
            self.end_term();
        }
        self.working.in_sentence = false;

        let working = &self.working;
        let received = if working.star {
            checksum_digits(&working.term)
        } else {
            None
        };

        if self.config.verify_checksum_enabled() && received != Some(working.crc) {
            log::debug!(
                "{:?} rejected: checksum {:02X}, received {received:02X?}",
                working.statement,
                working.crc
            );
            return Statement::ChecksumFailure;
        }

        working.staging.publish(&mut self.fix);
        self.customs.commit();

        log::trace!("{:?} published", working.statement);
        working.statement
    }
}
