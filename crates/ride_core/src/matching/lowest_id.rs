use super::algorithm::MatchingPolicy;
use crate::user::Driver;

/// Available driver with the smallest id (byte-wise string order).
#[derive(Debug, Default, Clone, Copy)]
pub struct LowestIdMatching;

impl MatchingPolicy for LowestIdMatching {
    fn find_available_driver(&self, drivers: &[Driver]) -> Option<usize> {
        drivers
            .iter()
            .enumerate()
            .filter(|(_, driver)| driver.is_available())
            .min_by(|(_, a), (_, b)| a.id().cmp(b.id()))
            .map(|(index, _)| index)
    }
}
