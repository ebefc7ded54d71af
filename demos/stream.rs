use nmea0183_stream::{
    Config, CustomKind, Gps, Statement,
    geodesy::{SpeedUnit, distance_bearing, to_speed},
};

const RECEIVER: &[u8] = b"\
$GPRMC,183729,A,3907.356,N,12102.482,W,000.0,360.0,080301,015.5,E*6F\r\n\
$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*75\r\n\
$GPGSA,A,3,02,,,07,,09,24,26,,,,,1.6,1.6,1.0*3D\r\n\
$GPGSV,2,1,08,02,43,088,38,04,42,145,00,05,11,291,00,07,60,043,35*71\r\n\
$GPGSV,2,2,08,08,02,145,00,09,46,303,47,24,16,178,32,26,18,231,43*77\r\n\
$PGRME,22.0,M,52.9,M,51.0,M*14\r\n\
$PGRMM,WGS84*06\r\n\
$GPRMC,183731,A,3907.482,N,12102.436,W,000.0,360.0,080301,015.5,E*67\r\n";

fn main() {
    let mut gps: Gps = Gps::with_config(Config::new().pubx(true).pubx_time(true));
    let error = gps.register_custom("$PGRME", 1, CustomKind::Float);

    // Simulates a UART delivering a few bytes at a time.
    for chunk in RECEIVER.chunks(5) {
        gps.process_with(chunk, |statement| match statement {
            Statement::ChecksumFailure => println!("checksum failure"),
            Statement::Unknown => println!("unknown sentence"),
            statement => println!("{statement:?}"),
        });
    }

    let fix = gps.fix();
    println!(
        "{:02}:{:02}:{:02} {:02}/{:02}/{:02}",
        fix.time.hours, fix.time.minutes, fix.time.seconds, fix.date.day, fix.date.month, fix.date.year
    );
    println!(
        "position {:.6} {:.6}, altitude {:.1} m, {} satellites in use",
        fix.latitude, fix.longitude, fix.altitude, fix.sats_in_use
    );
    println!("quality {:?}, mode {:?}", fix.quality(), fix.mode());

    for satellite in fix.satellites_in_view() {
        println!(
            "  #{:02} elevation {:>2} azimuth {:>3} snr {:>2}",
            satellite.id, satellite.elevation, satellite.azimuth, satellite.snr
        );
    }

    if let Ok(error) = error {
        println!("horizontal error estimate {:?}", gps.custom(error));
    }

    let speed = to_speed(fix.speed, SpeedUnit::KilometersPerHour);
    println!("speed {speed:.1} {}", SpeedUnit::KilometersPerHour.abbreviation());

    let (meters, degrees) = distance_bearing(fix.latitude, fix.longitude, 48.150906, 11.554176);
    println!("{:.1} km to Munich, bearing {degrees:.1}", meters / 1000.0);
}
