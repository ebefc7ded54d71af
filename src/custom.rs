//! # Custom Terms
//!
//! Captures single terms of sentences the parser does not otherwise decode, such as the
//! Garmin `$PGRME` error estimates. A registration names the sentence tag, the term
//! index and how to decode the term. Captured values follow the same rule as the
//! [`Fix`](crate::Fix): they are only updated by sentences with a valid checksum.

use heapless::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Float, TERM_CAPACITY, parsing};

/// Number of custom terms a single handle can track.
pub const MAX_CUSTOM_TERMS: usize = 8;

/// How a registered term is decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomKind {
    /// Fixed-point number, e.g. `12.5`
    Float,
    /// Integer, e.g. `-12`
    Int,
    /// Raw text, up to the term buffer length
    Text,
    /// First character of the term
    Char,
    /// `ddmm.mmmm` coordinate converted to decimal degrees
    LatLong,
}

/// A captured custom term.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum CustomValue {
    Float(Float),
    Int(i32),
    Text(String<TERM_CAPACITY>),
    Char(char),
    LatLong(Float),
}

impl CustomValue {
    fn decode(kind: CustomKind, term: &[u8]) -> Self {
        match kind {
            CustomKind::Float => Self::Float(parsing::fixed_point(term)),
            CustomKind::Int => Self::Int(parsing::integer(term)),
            CustomKind::Text => Self::Text(text(term)),
            CustomKind::Char => Self::Char(term.first().copied().map(char::from).unwrap_or_default()),
            CustomKind::LatLong => Self::LatLong(parsing::coordinate(term)),
        }
    }

    /// Numeric value of `Float`, `Int` and `LatLong` captures.
    pub fn as_float(&self) -> Option<Float> {
        match self {
            Self::Float(value) | Self::LatLong(value) => Some(*value),
            Self::Int(value) => Some(*value as Float),
            Self::Text(_) | Self::Char(_) => None,
        }
    }
}

/// Longest valid UTF-8 prefix of the term.
fn text(term: &[u8]) -> String<TERM_CAPACITY> {
    let valid = match core::str::from_utf8(term) {
        Ok(valid) => valid,
        Err(error) => core::str::from_utf8(&term[..error.valid_up_to()]).unwrap_or_default(),
    };

    let mut text = String::new();
    for character in valid.chars() {
        if text.push(character).is_err() {
            break;
        }
    }
    text
}

/// Handle of a registered custom term, returned by
/// [`Gps::register_custom`](crate::Gps::register_custom).
///
/// A handle outlives its registration: once unregistered it resolves to nothing, even
/// after its slot has been given to a new registration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CustomId {
    slot: u8,
    generation: u16,
}

#[derive(Clone, Debug, PartialEq)]
struct CustomTerm {
    tag: heapless::Vec<u8, TERM_CAPACITY>,
    index: u8,
    kind: CustomKind,
    generation: u16,
    value: Option<CustomValue>,
    pending: Option<CustomValue>,
}

/// Fixed set of registration slots.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct CustomTerms {
    slots: [Option<CustomTerm>; MAX_CUSTOM_TERMS],
    generation: u16,
}

impl CustomTerms {
    pub fn register(&mut self, tag: &str, index: u8, kind: CustomKind) -> Result<CustomId, Error> {
        let tag_bytes = tag.as_bytes();
        if tag_bytes.len() < 2 || tag_bytes[0] != b'$' || !tag.is_ascii() {
            return Err(Error::InvalidTag);
        }
        let stored = heapless::Vec::from_slice(tag_bytes).or(Err(Error::InvalidTag))?;

        let (position, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_none())
            .ok_or(Error::CustomTermsFull)?;

        self.generation = self.generation.wrapping_add(1);
        *slot = Some(CustomTerm {
            tag: stored,
            index,
            kind,
            generation: self.generation,
            value: None,
            pending: None,
        });

        log::debug!("custom term {position}: {tag} term {index} as {kind:?}");
        Ok(CustomId {
            slot: position as u8,
            generation: self.generation,
        })
    }

    /// Returns `false` when `id` is not, or no longer, registered.
    pub fn unregister(&mut self, id: CustomId) -> bool {
        let Some(slot) = self.slots.get_mut(usize::from(id.slot)) else {
            return false;
        };

        let registered = slot
            .as_ref()
            .is_some_and(|term| term.generation == id.generation);
        if registered {
            *slot = None;
        }
        registered
    }

    pub fn value(&self, id: CustomId) -> Option<&CustomValue> {
        self.slots
            .get(usize::from(id.slot))?
            .as_ref()
            .filter(|term| term.generation == id.generation)?
            .value
            .as_ref()
    }

    /// Drops values staged by an unfinished sentence.
    pub fn begin(&mut self) {
        for term in self.slots.iter_mut().flatten() {
            term.pending = None;
        }
    }

    pub fn decode_term(&mut self, tag: &[u8], index: u8, term: &[u8]) {
        for custom in self.slots.iter_mut().flatten() {
            if custom.index == index && custom.tag.as_slice() == tag {
                custom.pending = Some(CustomValue::decode(custom.kind, term));
            }
        }
    }

    pub fn commit(&mut self) {
        for term in self.slots.iter_mut().flatten() {
            if let Some(value) = term.pending.take() {
                term.value = Some(value);
            }
        }
    }

    /// Forgets captured values, keeping the registrations.
    pub fn clear_values(&mut self) {
        for term in self.slots.iter_mut().flatten() {
            term.value = None;
            term.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_validates_tag() {
        let mut terms = CustomTerms::default();
        let cases = ["", "$", "GPRMB", "$GPRMBXXXXXXXXXX", "$GPRMB\u{e9}"];

        for tag in cases {
            let result = terms.register(tag, 1, CustomKind::Int);
            assert_eq!(result, Err(Error::InvalidTag), "Failed: {tag:?}");
        }

        assert!(terms.register("$PGRME", 1, CustomKind::Float).is_ok());
    }

    #[test]
    fn test_register_until_full() {
        let mut terms = CustomTerms::default();
        let ids: Vec<_> = (0..MAX_CUSTOM_TERMS)
            .map(|index| terms.register("$GPRMB", index as u8, CustomKind::Text))
            .collect();
        assert!(ids.iter().all(Result::is_ok), "{ids:?}");

        assert_eq!(
            terms.register("$GPRMB", 9, CustomKind::Text),
            Err(Error::CustomTermsFull)
        );

        let Ok(third) = ids[3] else { return };
        assert!(terms.unregister(third));
        assert!(!terms.unregister(third));

        let reused = terms.register("$GPRMB", 9, CustomKind::Text);
        assert!(reused.is_ok_and(|id| id.slot == third.slot && id != third), "{reused:?}");
    }

    #[test]
    fn test_stale_id_after_slot_reuse() {
        let mut terms = CustomTerms::default();
        let Ok(stale) = terms.register("$PGRME", 1, CustomKind::Float) else {
            panic!("registration failed");
        };
        assert!(terms.unregister(stale));

        let Ok(fresh) = terms.register("$PGRMZ", 1, CustomKind::Int) else {
            panic!("registration failed");
        };
        assert_eq!(fresh.slot, stale.slot);

        terms.begin();
        terms.decode_term(b"$PGRMZ", 1, b"2062");
        terms.commit();

        assert_eq!(terms.value(fresh), Some(&CustomValue::Int(2062)));
        assert_eq!(terms.value(stale), None);
        assert!(!terms.unregister(stale));
        assert_eq!(terms.value(fresh), Some(&CustomValue::Int(2062)));
    }

    #[test]
    fn test_pending_until_commit() {
        let mut terms = CustomTerms::default();
        let id = terms.register("$PGRME", 1, CustomKind::Float);
        assert!(id.is_ok());
        let Ok(id) = id else { return };

        terms.begin();
        terms.decode_term(b"$PGRME", 1, b"15.0");
        terms.decode_term(b"$PGRMZ", 1, b"99.0");
        assert_eq!(terms.value(id), None);

        terms.commit();
        assert_eq!(terms.value(id), Some(&CustomValue::Float(15.0)));

        terms.begin();
        terms.decode_term(b"$PGRME", 1, b"20.0");
        terms.begin();
        terms.commit();
        assert_eq!(terms.value(id), Some(&CustomValue::Float(15.0)));
    }

    #[test]
    fn test_decode_kinds() {
        let cases: [(CustomKind, &[u8], CustomValue); 4] = [
            (CustomKind::Int, b"-12", CustomValue::Int(-12)),
            (CustomKind::Char, b"M", CustomValue::Char('M')),
            (CustomKind::Char, b"", CustomValue::Char('\0')),
            (CustomKind::Float, b"2.5", CustomValue::Float(2.5)),
        ];

        for (kind, term, expected) in cases {
            assert_eq!(CustomValue::decode(kind, term), expected, "Failed: {term:?}");
        }

        let value = CustomValue::decode(CustomKind::Text, b"WGS84");
        assert!(matches!(&value, CustomValue::Text(text) if text.as_str() == "WGS84"));
        assert_eq!(value.as_float(), None);

        let latitude = CustomValue::decode(CustomKind::LatLong, b"3907.356").as_float();
        assert!(latitude.is_some_and(|latitude| (latitude - 39.1226).abs() < 1e-6));
    }
}
