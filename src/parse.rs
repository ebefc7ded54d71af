use crate::{Float, UtcDate, UtcTime, parsing};

/// Trait for decoding a value from the text of a single NMEA 0183 term.
///
/// `FromTerm` is what [`TermDecode`](crate::TermDecode) derives call for fields without a
/// `parser` attribute. Implementations are provided for the integer types (wrapping on
/// overflow, like [`parsing::integer`]) and for [`Float`] (via [`parsing::fixed_point`]).
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::{Float, FromTerm};
///
/// assert_eq!(u8::from_term(b"08"), 8);
/// assert_eq!(u16::from_term(b"1196"), 1196);
/// assert_eq!(<Float>::from_term(b"-24.1"), -24.1);
/// ```
///
/// # Implementing for Custom Types
///
/// ```rust
/// use nmea0183_stream::FromTerm;
///
/// struct Flag(bool);
///
/// impl FromTerm for Flag {
///     fn from_term(term: &[u8]) -> Self {
///         Flag(term == b"A")
///     }
/// }
///
/// assert!(Flag::from_term(b"A").0);
/// ```
pub trait FromTerm: Sized {
    /// Decodes `term`, never failing.
    fn from_term(term: &[u8]) -> Self;
}

macro_rules! impl_ints_type {
    ($($t:ty),*) => ($(
        impl FromTerm for $t {
            fn from_term(term: &[u8]) -> Self {
                parsing::integer(term) as $t
            }
        }
    )*)
}

impl_ints_type!(u8, u16, u32, i8, i16, i32);

impl FromTerm for Float {
    fn from_term(term: &[u8]) -> Self {
        parsing::fixed_point(term)
    }
}

/// `hhmmss`, fractional seconds ignored.
impl FromTerm for UtcTime {
    fn from_term(term: &[u8]) -> Self {
        let [hours, minutes, seconds] = parsing::digit_pairs(term);
        UtcTime {
            hours,
            minutes,
            seconds,
        }
    }
}

/// `ddmmyy`
impl FromTerm for UtcDate {
    fn from_term(term: &[u8]) -> Self {
        let [day, month, year] = parsing::digit_pairs(term);
        UtcDate { day, month, year }
    }
}

/// Trait for staging structs that are filled one term at a time.
///
/// Usually derived with `#[derive(TermDecode)]`; see the `nmea0183-stream-derive` crate
/// for the attribute reference.
pub trait TermDecode {
    /// Decodes the term at position `index` of the sentence (the tag is index 0).
    fn decode_term(&mut self, index: u8, term: &[u8]);
}
