use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use nmea0183_stream::{Config, Gps};

const STREAM: &[u8] = b"\
$GPRMC,183729,A,3907.356,N,12102.482,W,000.0,360.0,080301,015.5,E*6F\r\n\
$GPRMB,A,,,,,,,,,,,,V*71\r\n\
$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*75\r\n\
$GPGSA,A,3,02,,,07,,09,24,26,,,,,1.6,1.6,1.0*3D\r\n\
$GPGSV,2,1,08,02,43,088,38,04,42,145,00,05,11,291,00,07,60,043,35*71\r\n\
$GPGSV,2,2,08,08,02,145,00,09,46,303,47,24,16,178,32,26,18,231,43*77\r\n\
$PGRME,22.0,M,52.9,M,51.0,M*14\r\n\
$PUBX,04,200714.00,230320,158834.00,2098,18,536057,257.043,16*12\r\n";

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");
    group.throughput(Throughput::Bytes(STREAM.len() as u64));

    group.bench_function("chunk", |b| {
        let mut gps: Gps = Gps::with_config(Config::new().pubx(true).pubx_time(true));
        b.iter(|| gps.process(black_box(STREAM)));
    });

    group.bench_function("byte", |b| {
        let mut gps: Gps = Gps::with_config(Config::new().pubx(true).pubx_time(true));
        b.iter(|| {
            for &byte in black_box(STREAM) {
                black_box(gps.process_byte(byte));
            }
        });
    });

    group.bench_function("unverified", |b| {
        let mut gps: Gps = Gps::with_config(Config::new().verify_checksum(false));
        b.iter(|| gps.process(black_box(STREAM)));
    });

    group.finish();
}

fn bench_geodesy(c: &mut Criterion) {
    c.bench_function("distance_bearing", |b| {
        b.iter(|| {
            nmea0183_stream::distance_bearing(
                black_box(40.685721),
                black_box(-73.820465),
                black_box(48.150906),
                black_box(11.554176),
            )
        });
    });
}

criterion_group!(benches, bench_process, bench_geodesy);
criterion_main!(benches);
