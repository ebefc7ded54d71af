//! Staging areas, one per decoded statement.
//!
//! Terms of the sentence in flight are decoded into its staging area. Nothing reaches
//! the [`Fix`] until the sentence terminates with a valid checksum and
//! [`Staging::publish`] copies the fields the statement owns.

mod gga;
mod gsa;
mod gsv;
mod pubx;
mod rmc;

use gga::Gga;
use gsa::Gsa;
use gsv::Gsv;
use pubx::PubxTime;
use rmc::Rmc;

use crate::{Config, Fix, Statement, TermDecode};

/// Copies the fields a statement owns into the published fix.
pub(crate) trait Publish {
    fn publish<const N: usize>(&self, fix: &mut Fix<N>);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum Staging {
    /// Unknown or disabled statement
    #[default]
    Empty,
    Gga(Gga),
    Gsa(Gsa),
    Gsv(Gsv),
    Rmc(Rmc),
    PubxTime(PubxTime),
}

impl Staging {
    /// Empty staging for `statement`, or [`Staging::Empty`] when it is not decoded.
    pub fn for_statement(statement: Statement, config: &Config) -> Self {
        match statement {
            Statement::Gga if config.gga_enabled() => Self::Gga(Gga::default()),
            Statement::Gsa if config.gsa_enabled() => Self::Gsa(Gsa::default()),
            Statement::Gsv if config.gsv_enabled() => {
                Self::Gsv(Gsv::new(config.gsv_satellites_enabled()))
            }
            Statement::Rmc if config.rmc_enabled() => Self::Rmc(Rmc::default()),
            Statement::UbxTime if config.pubx_time_enabled() => {
                Self::PubxTime(PubxTime::default())
            }
            _ => Self::Empty,
        }
    }
}

impl TermDecode for Staging {
    fn decode_term(&mut self, index: u8, term: &[u8]) {
        match self {
            Self::Empty => {}
            Self::Gga(gga) => gga.decode_term(index, term),
            Self::Gsa(gsa) => gsa.decode_term(index, term),
            Self::Gsv(gsv) => gsv.decode_term(index, term),
            Self::Rmc(rmc) => rmc.decode_term(index, term),
            Self::PubxTime(pubx) => pubx.decode_term(index, term),
        }
    }
}

impl Publish for Staging {
    fn publish<const N: usize>(&self, fix: &mut Fix<N>) {
        match self {
            Self::Empty => {}
            Self::Gga(gga) => gga.publish(fix),
            Self::Gsa(gsa) => gsa.publish(fix),
            Self::Gsv(gsv) => gsv.publish(fix),
            Self::Rmc(rmc) => rmc.publish(fix),
            Self::PubxTime(pubx) => pubx.publish(fix),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Feeds every comma separated term of `sentence` (without checksum) to `staging`.
    pub fn decode_all_with<T: TermDecode>(mut staging: T, sentence: &[u8]) -> T {
        for (index, term) in sentence.split(|&byte| byte == b',').enumerate() {
            staging.decode_term(index as u8, term);
        }
        staging
    }

    pub fn decode_all<T: TermDecode + Default>(sentence: &[u8]) -> T {
        decode_all_with(T::default(), sentence)
    }

    #[test]
    fn test_staging_follows_config() {
        let config = Config::new();
        let cases = [
            (Statement::Gga, true),
            (Statement::Gsa, true),
            (Statement::Gsv, true),
            (Statement::Rmc, true),
            (Statement::Ubx, false),
            (Statement::UbxTime, false),
            (Statement::Unknown, false),
        ];

        for (statement, staged) in cases {
            let staging = Staging::for_statement(statement, &config);
            assert_eq!(staging != Staging::Empty, staged, "Failed: {statement:?}");
        }

        let config = Config::new().gga(false).pubx(true).pubx_time(true);
        assert_eq!(Staging::for_statement(Statement::Gga, &config), Staging::Empty);
        assert!(matches!(
            Staging::for_statement(Statement::UbxTime, &config),
            Staging::PubxTime(_)
        ));
    }

    #[test]
    fn test_empty_staging_publishes_nothing() {
        let mut staging = Staging::Empty;
        staging.decode_term(1, b"123456");

        let mut fix = Fix::<2>::default();
        staging.publish(&mut fix);
        assert_eq!(fix, Fix::default());
    }
}
