use super::algorithm::MatchingPolicy;
use crate::user::Driver;

/// First available driver in registration order.
///
/// O(n) scan; the earliest-registered free driver always wins ties.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstRegisteredMatching;

impl MatchingPolicy for FirstRegisteredMatching {
    fn find_available_driver(&self, drivers: &[Driver]) -> Option<usize> {
        drivers.iter().position(Driver::is_available)
    }
}
