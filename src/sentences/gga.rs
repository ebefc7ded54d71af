use crate::{
    self as nmea0183_stream, Fix, Float, TermDecode, UtcTime, parsing::coordinate,
    sentences::Publish,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, TermDecode)]
pub(crate) struct Gga {
    #[nmea(term(1))]
    pub time: UtcTime,
    #[nmea(term(2), parser(coordinate), hemisphere(3))]
    pub latitude: Float,
    #[nmea(term(4), parser(coordinate), hemisphere(5))]
    pub longitude: Float,
    #[nmea(term(6))]
    pub fix: u8,
    #[nmea(term(7))]
    pub sats_in_use: u8,
    #[nmea(term(9))]
    pub altitude: Float,
    #[nmea(term(11))]
    pub geo_sep: Float,
}

impl Publish for Gga {
    fn publish<const N: usize>(&self, fix: &mut Fix<N>) {
        fix.latitude = self.latitude;
        fix.longitude = self.longitude;
        fix.altitude = self.altitude;
        fix.geo_sep = self.geo_sep;
        fix.sats_in_use = self.sats_in_use;
        fix.fix = self.fix;
        fix.time = self.time;
    }
}
