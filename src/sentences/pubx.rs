use crate::{
    self as nmea0183_stream, Fix, Float, TermDecode, UtcDate, UtcTime, parsing::leap_seconds,
    sentences::Publish,
};

/// PUBX,04 - u-blox Time of Day and Clock Information
///
/// ```text
///          1  2         3      4         5    6   7       8        9
///          |  |         |      |         |    |   |       |        |
///  $PUBX,04,hhmmss.ss,ddmmyy,UTC_TOW,UTC_WNO,LEAP,CLK_B,CLK_D,TP_GRAN*hh<CR><LF>
/// ```
///
/// `LEAP` carries a trailing `D` when the receiver still uses its firmware default.
#[derive(Clone, Copy, Debug, Default, PartialEq, TermDecode)]
pub(crate) struct PubxTime {
    #[nmea(term(2))]
    pub time: UtcTime,
    #[nmea(term(3))]
    pub date: UtcDate,
    #[nmea(term(4))]
    pub utc_tow: Float,
    #[nmea(term(5))]
    pub utc_wk: u16,
    #[nmea(term(6), parser(leap_seconds))]
    pub leap_sec: u8,
    #[nmea(term(7))]
    pub clk_bias: u32,
    #[nmea(term(8))]
    pub clk_drift: Float,
    #[nmea(term(9))]
    pub tp_gran: u32,
}

impl Publish for PubxTime {
    fn publish<const N: usize>(&self, fix: &mut Fix<N>) {
        fix.time = self.time;
        fix.date = self.date;
        fix.utc_tow = self.utc_tow;
        fix.utc_wk = self.utc_wk;
        fix.leap_sec = self.leap_sec;
        fix.clk_bias = self.clk_bias;
        fix.clk_drift = self.clk_drift;
        fix.tp_gran = self.tp_gran;
    }
}
