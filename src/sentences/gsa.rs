use crate::{self as nmea0183_stream, Fix, Float, TermDecode, sentences::Publish};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, TermDecode)]
pub(crate) struct Gsa {
    #[nmea(term(2))]
    pub fix_mode: u8,
    #[nmea(terms(3..=14))]
    pub satellite_ids: [u8; 12],
    #[nmea(term(15))]
    pub dop_p: Float,
    #[nmea(term(16))]
    pub dop_h: Float,
    #[nmea(term(17))]
    pub dop_v: Float,
}

impl Publish for Gsa {
    fn publish<const N: usize>(&self, fix: &mut Fix<N>) {
        fix.dop_h = self.dop_h;
        fix.dop_v = self.dop_v;
        fix.dop_p = self.dop_p;
        fix.fix_mode = self.fix_mode;
        fix.satellite_ids = self.satellite_ids;
    }
}
