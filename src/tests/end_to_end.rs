use crate::{Gps, Satellite, Statement, UtcDate, UtcTime};

const STREAM: &[u8] = b"\
$GPRMC,183729,A,3907.356,N,12102.482,W,000.0,360.0,080301,015.5,E*6F\r\n\
$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*75\r\n\
$GPGSA,A,3,02,,,07,,09,24,26,,,,,1.6,1.6,1.0*3D\r\n\
$GPGSV,2,1,08,02,43,088,38,04,42,145,00,05,11,291,00,07,60,043,35*71\r\n\
$GPGSV,2,2,08,08,02,145,00,09,46,303,47,24,16,178,32,26,18,231,43*77\r\n";

fn close(a: crate::Float, b: crate::Float) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn test_stream_publishes_every_statement() {
    let mut gps: Gps = Gps::new();
    assert!(gps.process(STREAM));

    let fix = gps.fix();
    assert!(fix.is_valid);
    assert_eq!(fix.fix, 1);
    assert_eq!(fix.fix_mode, 3);
    assert!(close(fix.latitude, 39.1226), "{fix:?}");
    assert!(close(fix.longitude, -121.0413666666), "{fix:?}");
    assert!(close(fix.altitude, 646.4));
    assert!(close(fix.course, 360.0));
    assert!(close(fix.dop_p, 1.6));
    assert!(close(fix.dop_h, 1.6));
    assert!(close(fix.dop_v, 1.0));
    assert_eq!(fix.speed, 0.0);
    assert!(close(fix.geo_sep, -24.1));
    assert!(close(fix.variation, 15.5));
    assert_eq!(fix.sats_in_view, 8);
    assert_eq!(fix.sats_in_use, 5);
    assert_eq!(fix.satellite_ids, [2, 0, 0, 7, 0, 9, 24, 26, 0, 0, 0, 0]);
    assert_eq!(
        fix.date,
        UtcDate {
            day: 8,
            month: 3,
            year: 1
        }
    );
    assert_eq!(
        fix.time,
        UtcTime {
            hours: 18,
            minutes: 37,
            seconds: 30
        }
    );
}

#[test]
fn test_stream_satellites() {
    let mut gps: Gps = Gps::new();
    gps.process(STREAM);

    let satellites = &gps.fix().satellites;
    assert_eq!(satellites.len(), 12);
    assert_eq!(
        satellites[0],
        Satellite {
            id: 2,
            elevation: 43,
            azimuth: 88,
            snr: 38
        }
    );
    assert_eq!(
        satellites[7],
        Satellite {
            id: 26,
            elevation: 18,
            azimuth: 231,
            snr: 43
        }
    );
    assert_eq!(satellites[8], Satellite::default());
    assert_eq!(gps.fix().satellites_in_view().count(), 8);
}

#[test]
fn test_byte_at_a_time_equivalence() {
    let mut bulk: Gps = Gps::new();
    let mut bulk_statements = Vec::new();
    bulk.process_with(STREAM, |statement| bulk_statements.push(statement));

    let mut single: Gps = Gps::new();
    let mut single_statements = Vec::new();
    for byte in STREAM.chunks(1) {
        single.process_with(byte, |statement| single_statements.push(statement));
    }

    let mut odd: Gps = Gps::new();
    for chunk in STREAM.chunks(7) {
        odd.process(chunk);
    }

    assert_eq!(bulk.fix(), single.fix());
    assert_eq!(bulk.fix(), odd.fix());
    assert_eq!(bulk_statements, single_statements);
    assert_eq!(
        bulk_statements,
        [
            Statement::Rmc,
            Statement::Gga,
            Statement::Gsa,
            Statement::Gsv,
            Statement::Gsv
        ]
    );
}

#[test]
fn test_talker_tolerance() {
    let mut gp: Gps = Gps::new();
    gp.process(b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*75\r\n");

    let mut gn: Gps = Gps::new();
    let mut seen = Vec::new();
    gn.process_with(
        b"$GNGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*6B\r\n",
        |statement| seen.push(statement),
    );

    assert_eq!(seen, [Statement::Gga]);
    assert_eq!(gp.fix(), gn.fix());
}

#[test]
fn test_small_satellite_capacity() {
    let mut gps: Gps<5> = Gps::new();
    gps.process(STREAM);

    let fix = gps.fix();
    assert_eq!(fix.satellites().len(), 5);
    assert_eq!(fix.satellites()[4].id, 8);
    assert_eq!(fix.sats_in_view, 8);

    gps.process(STREAM);
    assert_eq!(gps.fix().satellites().len(), 5);
    assert_eq!(gps.fix().satellites_in_view().count(), 5);
}
