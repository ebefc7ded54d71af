//! # Parsing Utilities
//!
//! Decoders turning the raw bytes of a single term into numbers. They never fail:
//! malformed input decodes to whatever was accumulated before the first unexpected
//! byte, and an empty term decodes to zero.

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0, hex_digit1, space0},
    combinator::{all_consuming, opt, verify},
    number::complete::hex_u32,
    sequence::preceded,
};

use crate::Float;

type IResult<'a, O> = nom::IResult<&'a [u8], O, ()>;

/// Optional leading spaces, an optional `-` and a run of digits.
fn signed_digits(i: &[u8]) -> IResult<'_, (bool, &[u8])> {
    (
        preceded(space0, opt(char('-'))).map(|sign| sign.is_some()),
        digit0,
    )
        .parse(i)
}

fn digit_value(byte: u8) -> u8 {
    if byte.is_ascii_digit() { byte - b'0' } else { 0 }
}

/// Decodes a signed base-10 integer.
///
/// Leading spaces are skipped and parsing stops at the first non-digit.
/// Accumulation wraps on overflow.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::integer;
///
/// assert_eq!(integer(b"08"), 8);
/// assert_eq!(integer(b"  -42abc"), -42);
/// assert_eq!(integer(b""), 0);
/// ```
pub fn integer(term: &[u8]) -> i32 {
    let Ok((_, (negative, digits))) = signed_digits(term) else {
        return 0;
    };

    let value = digits.iter().fold(0i32, |value, &digit| {
        value
            .wrapping_mul(10)
            .wrapping_add(i32::from(digit_value(digit)))
    });

    if negative { value.wrapping_neg() } else { value }
}

/// Decodes a signed fixed-point number such as `-2660.664`.
///
/// Digits on both sides of the optional `.` accumulate into one value which is
/// divided by ten for every fractional digit.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::fixed_point;
///
/// assert_eq!(fixed_point(b"646.4"), 646.4);
/// assert_eq!(fixed_point(b"-24.1"), -24.1);
/// assert_eq!(fixed_point(b"12"), 12.0);
/// ```
pub fn fixed_point(term: &[u8]) -> Float {
    let parsed: IResult<'_, _> = (
        signed_digits,
        opt(char('.')),
        digit0,
    )
        .parse(term);

    let Ok((_, ((negative, whole), _, fraction))) = parsed else {
        return 0.0;
    };

    let accumulate = |value: Float, &digit: &u8| value * 10.0 + Float::from(digit_value(digit));
    let value = fraction
        .iter()
        .fold(whole.iter().fold(0.0, accumulate), accumulate);
    let power = fraction.iter().fold(1.0 as Float, |power, _| power * 10.0);

    let value = value / power;
    if negative { -value } else { value }
}

/// Decodes an NMEA `ddmm.mmmm` / `dddmm.mmmm` coordinate into decimal degrees.
///
/// The hemisphere is a separate term; see [`is_negative_hemisphere`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::coordinate;
///
/// let latitude = coordinate(b"3907.356");
/// assert!((latitude - 39.1226).abs() < 1e-6);
/// ```
pub fn coordinate(term: &[u8]) -> Float {
    let raw = fixed_point(term);
    let degrees = ((raw as i64) / 100) as Float;
    let minutes = raw - degrees * 100.0;

    degrees + minutes / 60.0
}

/// Splits a `hhmmss` or `ddmmyy` term into its three two-digit groups.
///
/// Missing or non-digit characters count as zero, and anything after the sixth
/// character (such as fractional seconds) is ignored.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::digit_pairs;
///
/// assert_eq!(digit_pairs(b"183730"), [18, 37, 30]);
/// assert_eq!(digit_pairs(b"073731.00"), [7, 37, 31]);
/// assert_eq!(digit_pairs(b"12"), [12, 0, 0]);
/// ```
pub fn digit_pairs(term: &[u8]) -> [u8; 3] {
    let mut pairs = [0u8; 3];

    for (pair, digits) in pairs.iter_mut().zip(term.chunks(2)) {
        *pair = digits
            .iter()
            .chain(core::iter::repeat(&b'0'))
            .take(2)
            .fold(0, |value, &digit| value * 10 + digit_value(digit));
    }

    pairs
}

/// Returns `true` when the hemisphere term names the south or west hemisphere.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::is_negative_hemisphere;
///
/// assert!(is_negative_hemisphere(b"W"));
/// assert!(is_negative_hemisphere(b"s"));
/// assert!(!is_negative_hemisphere(b"N"));
/// assert!(!is_negative_hemisphere(b""));
/// ```
pub fn is_negative_hemisphere(term: &[u8]) -> bool {
    matches!(term.first(), Some(b'S' | b's' | b'W' | b'w'))
}

/// Decodes the u-blox leap second count.
///
/// The count has two or three digits; a trailing `D` marks the receiver's
/// firmware default and is ignored.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::leap_seconds;
///
/// assert_eq!(leap_seconds(b"15D"), 15);
/// assert_eq!(leap_seconds(b"18"), 18);
/// assert_eq!(leap_seconds(b"118"), 118);
/// ```
pub fn leap_seconds(term: &[u8]) -> u8 {
    let parsed: IResult<'_, &[u8]> =
        take_while_m_n(0, 3, |byte: u8| byte.is_ascii_digit()).parse(term);

    parsed.map_or(0, |(_, digits)| {
        digits
            .iter()
            .fold(0u8, |value, &digit| value.wrapping_mul(10).wrapping_add(digit - b'0'))
    })
}

/// Decodes the checksum text following `*`.
///
/// Returns [`None`] unless the text is exactly two hexadecimal digits of either case.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::parsing::checksum_digits;
///
/// assert_eq!(checksum_digits(b"6b"), Some(0x6B));
/// assert_eq!(checksum_digits(b"6"), None);
/// assert_eq!(checksum_digits(b"6B0"), None);
/// assert_eq!(checksum_digits(b"zz"), None);
/// ```
pub fn checksum_digits(text: &[u8]) -> Option<u8> {
    let parsed: IResult<'_, u32> =
        all_consuming(verify(hex_digit1, |digits: &[u8]| digits.len() == 2).and_then(hex_u32))
            .parse(text);

    parsed.ok().map(|(_, checksum)| checksum as u8)
}
