use crate::{Config, Gps, Statement, checksum};

const GGA: &[u8] = b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*75\r\n";
const GGA_CORRUPT: &[u8] = b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*76\r\n";

fn outcomes<const N: usize>(gps: &mut Gps<N>, data: &[u8]) -> Vec<Statement> {
    let mut seen = Vec::new();
    gps.process_with(data, |statement| seen.push(statement));
    seen
}

#[test]
fn test_checksum_of_body() {
    assert_eq!(checksum(b""), 0);
    assert_eq!(checksum(b"PGRMM,WGS84"), 0x26);
    assert_eq!(
        checksum(b"GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,"),
        0x75
    );
}

#[test]
fn test_rejected_sentence_leaves_fix_untouched() {
    let mut gps: Gps = Gps::new();
    let before = gps.fix().clone();

    assert_eq!(outcomes(&mut gps, GGA_CORRUPT), [Statement::ChecksumFailure]);
    assert_eq!(gps.fix(), &before);

    assert_eq!(outcomes(&mut gps, GGA), [Statement::Gga]);
    let published = gps.fix().clone();
    assert_eq!(published.sats_in_use, 5);

    let corrupt_update = b"$GPGGA,000000,0000.000,S,00000.000,E,0,00,,,M,,M,,*00\r\n";
    assert_eq!(outcomes(&mut gps, corrupt_update), [Statement::ChecksumFailure]);
    assert_eq!(gps.fix(), &published);
}

#[test]
fn test_malformed_checksum_text() {
    let cases: [&[u8]; 6] = [
        b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,\r\n",
        b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*7\r\n",
        b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*750\r\n",
        b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*\r\n",
        b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*7,5\r\n",
        b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*75*\r\n",
    ];

    for input in cases {
        let mut gps: Gps = Gps::new();
        let seen = outcomes(&mut gps, input);
        assert_eq!(seen, [Statement::ChecksumFailure], "Failed: {input:?}");
        assert_eq!(gps.fix().sats_in_use, 0, "Failed: {input:?}");
    }
}

#[test]
fn test_lowercase_checksum() {
    let mut gps: Gps = Gps::new();
    let seen = outcomes(
        &mut gps,
        b"$GNGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*6b\r\n",
    );

    assert_eq!(seen, [Statement::Gga]);
    assert_eq!(gps.fix().sats_in_use, 5);
}

#[test]
fn test_unverified_checksums() {
    let mut gps: Gps = Gps::with_config(Config::new().verify_checksum(false));

    assert_eq!(outcomes(&mut gps, GGA_CORRUPT), [Statement::Gga]);
    assert_eq!(gps.fix().sats_in_use, 5);

    // Without a `*`, the last term is still decoded.
    let seen = outcomes(&mut gps, b"$GPGSA,A,3,02,,,07,,09,24,26,,,,,1.6,1.6,1.0\r\n");
    assert_eq!(seen, [Statement::Gsa]);
    assert!((gps.fix().dop_v - 1.0).abs() < 1e-6);
}
