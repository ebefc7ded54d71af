use nom::{
    Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::value,
    sequence::preceded,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of a sentence, as reported when it terminates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Statement {
    /// A well-formed sentence this parser does not decode
    #[default]
    Unknown,
    /// GGA - Global Positioning System Fix Data
    Gga,
    /// GSA - GNSS DOP and Active Satellites
    Gsa,
    /// GSV - GNSS Satellites in View
    Gsv,
    /// RMC - Recommended Minimum Specific GNSS Data
    Rmc,
    /// `$PUBX` - u-blox proprietary sentence other than the time report
    Ubx,
    /// `$PUBX,04` - u-blox time of day and clock information
    UbxTime,
    /// The sentence checksum did not match; nothing was published
    ChecksumFailure,
}

impl Statement {
    /// Classifies a sentence from its tag (term 0, including the `$`).
    ///
    /// Both the `GP` and `GN` talkers are accepted for the standard sentences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_stream::Statement;
    ///
    /// assert_eq!(Statement::from_tag(b"$GNGGA"), Statement::Gga);
    /// assert_eq!(Statement::from_tag(b"$PUBX"), Statement::Ubx);
    /// assert_eq!(Statement::from_tag(b"$GPRMB"), Statement::Unknown);
    /// ```
    pub fn from_tag(term: &[u8]) -> Self {
        let parsed: nom::IResult<&[u8], Self, ()> = alt((
            preceded(
                (char('$'), alt((tag("GP"), tag("GN")))),
                alt((
                    value(Self::Gga, tag("GGA")),
                    value(Self::Gsa, tag("GSA")),
                    value(Self::Gsv, tag("GSV")),
                    value(Self::Rmc, tag("RMC")),
                )),
            ),
            value(Self::Ubx, tag("$PUBX")),
        ))
        .parse(term);

        parsed.map_or(Self::Unknown, |(_, statement)| statement)
    }

    /// Refines [`Statement::Ubx`] from the message id in term 1.
    pub(crate) fn refine(self, message_id: &[u8]) -> Self {
        match self {
            Self::Ubx if message_id.starts_with(b"04") => Self::UbxTime,
            other => other,
        }
    }
}
