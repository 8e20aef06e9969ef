pub mod algorithm;
pub mod lowest_id;
pub mod simple;

pub use algorithm::MatchingPolicy;
pub use lowest_id::LowestIdMatching;
pub use simple::FirstRegisteredMatching;

/// Which driver-selection policy a system is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchingPolicyKind {
    /// Earliest-registered available driver.
    #[default]
    FirstRegistered,
    /// Available driver with the lexicographically smallest id.
    LowestId,
}

impl MatchingPolicyKind {
    pub fn build(self) -> Box<dyn MatchingPolicy> {
        match self {
            MatchingPolicyKind::FirstRegistered => Box::new(FirstRegisteredMatching),
            MatchingPolicyKind::LowestId => Box::new(LowestIdMatching),
        }
    }
}
