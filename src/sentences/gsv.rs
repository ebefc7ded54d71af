use crate::{Fix, FromTerm, Satellite, TermDecode, sentences::Publish};

/// Satellites described by a single GSV sentence.
const PER_SENTENCE: usize = 4;

/// GSV - Satellites in view
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Terms 4 to 19 describe up to four satellites as `id,elevation,azimuth,snr`. They are
/// staged here and only land in [`Fix::satellites`] when the sentence is published, at
/// position `(sentence - 1) * 4` onwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Gsv {
    pub sentence: u8,
    pub sats_in_view: u8,
    pub details: bool,
    pub described: u8,
    pub satellites: [Satellite; PER_SENTENCE],
}

impl Gsv {
    pub fn new(details: bool) -> Self {
        Self {
            details,
            ..Default::default()
        }
    }
}

impl TermDecode for Gsv {
    fn decode_term(&mut self, index: u8, term: &[u8]) {
        match index {
            2 => self.sentence = u8::from_term(term),
            3 => self.sats_in_view = u8::from_term(term),
            4..=19 if self.details => {
                let slot = (index - 4) / 4;
                let satellite = &mut self.satellites[usize::from(slot)];
                match (index - 4) % 4 {
                    0 => satellite.id = u8::from_term(term),
                    1 => satellite.elevation = u8::from_term(term),
                    2 => satellite.azimuth = u16::from_term(term),
                    _ => satellite.snr = u8::from_term(term),
                }
                self.described = self.described.max(slot + 1);
            }
            _ => {}
        }
    }
}

impl Publish for Gsv {
    fn publish<const N: usize>(&self, fix: &mut Fix<N>) {
        fix.sats_in_view = self.sats_in_view;

        let Some(first) = usize::from(self.sentence).checked_sub(1) else {
            return;
        };

        let staged = &self.satellites[..usize::from(self.described)];
        for (slot, satellite) in fix
            .satellites
            .iter_mut()
            .skip(first * PER_SENTENCE)
            .zip(staged)
        {
            *slot = *satellite;
        }
    }
}
