//! Construction parameters for a [`RideSharingSystem`](crate::system::RideSharingSystem).

use std::path::PathBuf;

use crate::matching::MatchingPolicyKind;
use crate::pricing::PricingConfig;
use crate::store::DEFAULT_RIDES_FILE;

/// Defaults reproduce the stock console application: rides go to
/// `rides.txt` in the working directory, standard rates, first registered
/// driver wins.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Where completed rides are appended.
    pub rides_path: PathBuf,
    pub pricing: PricingConfig,
    pub matching: MatchingPolicyKind,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            rides_path: PathBuf::from(DEFAULT_RIDES_FILE),
            pricing: PricingConfig::default(),
            matching: MatchingPolicyKind::default(),
        }
    }
}

impl SystemConfig {
    pub fn with_rides_path(mut self, rides_path: impl Into<PathBuf>) -> Self {
        self.rides_path = rides_path.into();
        self
    }

    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_matching(mut self, matching: MatchingPolicyKind) -> Self {
        self.matching = matching;
        self
    }
}
