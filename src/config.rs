//! # Parser Configuration
//!
//! Selects which statements a [`Gps`](crate::Gps) handle decodes and whether checksums
//! are enforced.

/// Capability switches of a [`Gps`](crate::Gps) handle, built with method chaining.
///
/// Disabled statements are still recognized and reported, but nothing of theirs is
/// staged or published.
///
/// | Switch | Default |
/// |--------|---------|
/// | [`gga`](Config::gga), [`gsa`](Config::gsa), [`gsv`](Config::gsv), [`rmc`](Config::rmc) | on |
/// | [`gsv_satellites`](Config::gsv_satellites) | on |
/// | [`pubx`](Config::pubx), [`pubx_time`](Config::pubx_time) | off |
/// | [`verify_checksum`](Config::verify_checksum) | on |
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{Config, Gps};
///
/// let config = Config::new().gsv(false).pubx(true).pubx_time(true);
/// let gps: Gps = Gps::with_config(config);
/// assert!(gps.config().pubx_time_enabled());
/// ```
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) gga: bool,
    pub(crate) gsa: bool,
    pub(crate) gsv: bool,
    pub(crate) gsv_satellites: bool,
    pub(crate) rmc: bool,
    pub(crate) pubx: bool,
    pub(crate) pubx_time: bool,
    pub(crate) verify_checksum: bool,
}

impl Config {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            gga: true,
            gsa: true,
            gsv: true,
            gsv_satellites: true,
            rmc: true,
            pubx: false,
            pubx_time: false,
            verify_checksum: true,
        }
    }

    /// Decode GGA: position, altitude, fix quality and time.
    pub const fn gga(mut self, enabled: bool) -> Self {
        self.gga = enabled;
        self
    }

    /// Decode GSA: dilution of precision, fix mode and used satellite ids.
    pub const fn gsa(mut self, enabled: bool) -> Self {
        self.gsa = enabled;
        self
    }

    /// Decode GSV: satellites in view.
    pub const fn gsv(mut self, enabled: bool) -> Self {
        self.gsv = enabled;
        self
    }

    /// Decode the per-satellite details of GSV sentences.
    pub const fn gsv_satellites(mut self, enabled: bool) -> Self {
        self.gsv_satellites = enabled;
        self
    }

    /// Decode RMC: validity, speed, course, date and magnetic variation.
    pub const fn rmc(mut self, enabled: bool) -> Self {
        self.rmc = enabled;
        self
    }

    /// Recognize u-blox `$PUBX` sentences.
    pub const fn pubx(mut self, enabled: bool) -> Self {
        self.pubx = enabled;
        self
    }

    /// Decode the `$PUBX,04` time report. Needs [`Config::pubx`] as well.
    pub const fn pubx_time(mut self, enabled: bool) -> Self {
        self.pubx_time = enabled;
        self
    }

    /// Commit only sentences whose checksum matches.
    ///
    /// When disabled, every terminated sentence is committed.
    pub const fn verify_checksum(mut self, enabled: bool) -> Self {
        self.verify_checksum = enabled;
        self
    }

    /// Whether GGA sentences are decoded.
    pub const fn gga_enabled(&self) -> bool {
        self.gga
    }

    /// Whether GSA sentences are decoded.
    pub const fn gsa_enabled(&self) -> bool {
        self.gsa
    }

    /// Whether GSV sentences are decoded.
    pub const fn gsv_enabled(&self) -> bool {
        self.gsv
    }

    /// Whether GSV satellite details are decoded. Requires GSV decoding.
    pub const fn gsv_satellites_enabled(&self) -> bool {
        self.gsv && self.gsv_satellites
    }

    /// Whether RMC sentences are decoded.
    pub const fn rmc_enabled(&self) -> bool {
        self.rmc
    }

    /// Whether `$PUBX` sentences are decoded.
    pub const fn pubx_enabled(&self) -> bool {
        self.pubx
    }

    /// Whether `$PUBX,04` time reports are decoded. Requires `$PUBX` decoding.
    pub const fn pubx_time_enabled(&self) -> bool {
        self.pubx && self.pubx_time
    }

    /// Whether sentences with a bad checksum are rejected.
    pub const fn verify_checksum_enabled(&self) -> bool {
        self.verify_checksum
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
