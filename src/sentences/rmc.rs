use crate::{self as nmea0183_stream, Fix, Float, TermDecode, UtcDate, sentences::Publish};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|  13
///         |         | |       | |        |  |   |   |    |  | |   |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m,s*hh<CR><LF>
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, TermDecode)]
pub(crate) struct Rmc {
    #[nmea(term(2), parser(is_active))]
    pub is_valid: bool,
    #[nmea(term(7))]
    pub speed: Float,
    #[nmea(term(8))]
    pub course: Float,
    #[nmea(term(9))]
    pub date: UtcDate,
    #[nmea(term(10), hemisphere(11))]
    pub variation: Float,
}

/// Status `A` (active), anything else is void.
fn is_active(term: &[u8]) -> bool {
    term.first() == Some(&b'A')
}

impl Publish for Rmc {
    fn publish<const N: usize>(&self, fix: &mut Fix<N>) {
        fix.is_valid = self.is_valid;
        fix.speed = self.speed;
        fix.course = self.course;
        fix.variation = self.variation;
        fix.date = self.date;
    }
}
