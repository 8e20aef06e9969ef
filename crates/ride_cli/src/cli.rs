use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ride_core::matching::MatchingPolicyKind;
use ride_core::store::DEFAULT_RIDES_FILE;
use ride_core::SystemConfig;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "ride-sharing",
    about = "Interactive ride-sharing ledger",
    long_about = "Register drivers and customers, book rides and review the\n\
                  ride history from a numbered console menu. Completed rides\n\
                  are appended to a flat file."
)]
pub struct Cli {
    /// File completed rides are appended to
    #[arg(long, default_value = DEFAULT_RIDES_FILE)]
    pub rides_file: PathBuf,
    /// Driver selection policy
    #[arg(value_enum, long, default_value_t = MatchingArg::FirstRegistered)]
    pub matching: MatchingArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatchingArg {
    /// Earliest-registered available driver
    FirstRegistered,
    /// Available driver with the smallest id
    LowestId,
}

impl From<MatchingArg> for MatchingPolicyKind {
    fn from(arg: MatchingArg) -> Self {
        match arg {
            MatchingArg::FirstRegistered => Self::FirstRegistered,
            MatchingArg::LowestId => Self::LowestId,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> SystemConfig {
        SystemConfig::default()
            .with_rides_path(self.rides_file)
            .with_matching(self.matching.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reproduce_default_config() {
        let cli = Cli::try_parse_from(["ride-sharing"]).expect("parse");
        assert_eq!(cli.into_config(), SystemConfig::default());
    }

    #[test]
    fn flags_override_path_and_policy() {
        let cli = Cli::try_parse_from([
            "ride-sharing",
            "--rides-file",
            "/tmp/ledger.txt",
            "--matching",
            "lowest-id",
        ])
        .expect("parse");
        let config = cli.into_config();
        assert_eq!(config.rides_path, PathBuf::from("/tmp/ledger.txt"));
        assert_eq!(config.matching, MatchingPolicyKind::LowestId);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["ride-sharing", "--matching", "random"]).is_err());
    }
}
