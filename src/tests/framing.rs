use crate::{Config, Gps, Statement};

const RMC: &[u8] = b"$GPRMC,183729,A,3907.356,N,12102.482,W,000.0,360.0,080301,015.5,E*6F\r\n";
const GGA: &[u8] = b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.4,M,-24.1,M,,*75\r\n";

fn outcomes<const N: usize>(gps: &mut Gps<N>, data: &[u8]) -> Vec<Statement> {
    let mut seen = Vec::new();
    gps.process_with(data, |statement| seen.push(statement));
    seen
}

#[test]
fn test_noise_outside_sentences_is_ignored() {
    let mut clean: Gps = Gps::new();
    clean.process(GGA);

    let mut noisy: Gps = Gps::new();
    let seen = outcomes(&mut noisy, b"\x00\xffGARBAGE,*12\r\n");
    assert!(seen.is_empty(), "{seen:?}");

    let mut data = b"junk".to_vec();
    data.extend_from_slice(GGA);
    data.extend_from_slice(b"\n\n trailing*00");
    assert_eq!(outcomes(&mut noisy, &data), [Statement::Gga]);
    assert_eq!(clean.fix(), noisy.fix());
}

#[test]
fn test_dollar_restarts_sentence() {
    let mut gps: Gps = Gps::new();

    let mut data = b"$GPGGA,000000,1111.111,N,0".to_vec();
    data.extend_from_slice(RMC);

    assert_eq!(outcomes(&mut gps, &data), [Statement::Rmc]);
    assert_eq!(gps.fix().sats_in_use, 0);
    assert_eq!(gps.fix().latitude, 0.0);
    assert!(gps.fix().is_valid);
}

#[test]
fn test_interrupted_sentence_publishes_nothing() {
    let mut gps: Gps = Gps::new();
    let before = gps.fix().clone();

    assert!(outcomes(&mut gps, &GGA[..40]).is_empty());
    assert_eq!(gps.fix(), &before);

    assert_eq!(outcomes(&mut gps, &GGA[40..]), [Statement::Gga]);
    assert_eq!(gps.fix().sats_in_use, 5);
}

#[test]
fn test_overlong_term_is_truncated() {
    let mut gps: Gps = Gps::new();
    let seen = outcomes(
        &mut gps,
        b"$GPGGA,183730,3907.356,N,12102.482,W,1,05,1.6,646.40000000000001,M,-24.1,M,,*44\r\n",
    );

    assert_eq!(seen, [Statement::Gga]);
    assert!((gps.fix().altitude - 646.4).abs() < 1e-6);
    assert!((gps.fix().geo_sep + 24.1).abs() < 1e-6);
}

#[test]
fn test_leading_spaces_in_numbers() {
    let mut gps: Gps = Gps::new();
    let seen = outcomes(
        &mut gps,
        b"$GPGGA,183730, 3907.356,N, 12102.482,W,1, 05,1.6,646.4,M,-24.1,M,,*55\r\n",
    );

    assert_eq!(seen, [Statement::Gga]);
    assert_eq!(gps.fix().sats_in_use, 5);
    assert!((gps.fix().latitude - 39.1226).abs() < 1e-6);
}

#[test]
fn test_lowercase_hemispheres() {
    let mut gps: Gps = Gps::new();
    gps.process(b"$GPGGA,183730,3907.356,s,12102.482,e,1,05,1.6,646.4,M,-24.1,M,,*7A\r\n");

    assert!(gps.fix().latitude < 0.0);
    assert!(gps.fix().longitude > 0.0);
}

#[test]
fn test_reset_is_idempotent() {
    let fresh: Gps = Gps::new();

    let mut gps: Gps = Gps::new();
    gps.process(GGA);
    gps.process(&RMC[..20]);
    gps.reset();
    assert_eq!(gps.fix(), fresh.fix());

    gps.reset();
    assert_eq!(gps.fix(), fresh.fix());

    // A half received sentence does not survive the reset.
    assert!(outcomes(&mut gps, &RMC[20..]).is_empty());
    assert_eq!(outcomes(&mut gps, RMC), [Statement::Rmc]);
}

#[test]
fn test_reset_keeps_config() {
    let mut gps: Gps = Gps::with_config(Config::new().gga(false));
    gps.reset();

    assert_eq!(outcomes(&mut gps, GGA), [Statement::Gga]);
    assert_eq!(gps.fix().sats_in_use, 0);
}

#[test]
fn test_disabled_statements_are_reported_only() {
    let config = Config::new().gga(false).rmc(false);
    let mut gps: Gps = Gps::with_config(config);

    let mut data = GGA.to_vec();
    data.extend_from_slice(RMC);

    assert_eq!(outcomes(&mut gps, &data), [Statement::Gga, Statement::Rmc]);
    assert_eq!(gps.fix(), Gps::<12>::new().fix());
}

#[test]
fn test_disabled_satellite_details() {
    let mut gps: Gps = Gps::with_config(Config::new().gsv_satellites(false));
    gps.process(b"$GPGSV,2,1,08,02,43,088,38,04,42,145,00,05,11,291,00,07,60,043,35*71\r\n");

    assert_eq!(gps.fix().sats_in_view, 8);
    assert_eq!(gps.fix().satellites_in_view().count(), 0);
}
