//! Pending floor-level calls, shared by every car in the building.
use serde;
use std::collections::BTreeSet;

use crate::util::direction::Direction;

/// Floors with an unserviced up call and floors with an unserviced down call.
///
/// Each floor appears at most once per direction.
///
/// # Example
/// ```rust
/// use elevator::dispatch::request_registry::RequestRegistry;
/// use elevator::util::direction::Direction;
/// let mut registry = RequestRegistry::new();
/// registry.record_call(Direction::Up, 2);
/// assert!(registry.has_call(Direction::Up, 2));
/// assert!(!registry.has_call(Direction::Down, 2));
/// ```
#[derive(PartialEq, Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RequestRegistry {
    pub up_calls: BTreeSet<u8>,
    pub down_calls: BTreeSet<u8>,
}

impl RequestRegistry {
    pub fn new() -> RequestRegistry {
        RequestRegistry::default()
    }

    /// Adds a call unless one is already pending. Returns whether it was new.
    pub fn record_call(&mut self, direction: Direction, floor: u8) -> bool {
        self.calls_mut(direction).insert(floor)
    }

    pub fn has_call(&self, direction: Direction, floor: u8) -> bool {
        self.calls(direction).contains(&floor)
    }

    /// Removes a call if present. Returns whether anything was removed.
    pub fn clear_call(&mut self, direction: Direction, floor: u8) -> bool {
        self.calls_mut(direction).remove(&floor)
    }

    /// Every floor with a call in either direction.
    pub fn pending_floors(&self) -> BTreeSet<u8> {
        self.up_calls.union(&self.down_calls).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.up_calls.is_empty() && self.down_calls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.up_calls.len() + self.down_calls.len()
    }

    fn calls(&self, direction: Direction) -> &BTreeSet<u8> {
        match direction {
            Direction::Up => &self.up_calls,
            Direction::Down => &self.down_calls,
        }
    }

    fn calls_mut(&mut self, direction: Direction) -> &mut BTreeSet<u8> {
        match direction {
            Direction::Up => &mut self.up_calls,
            Direction::Down => &mut self.down_calls,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_ignores_repeated_presses() {
        let mut registry = RequestRegistry::new();
        assert!(registry.record_call(Direction::Down, 3));
        assert!(!registry.record_call(Direction::Down, 3));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn it_keeps_directions_apart() {
        let mut registry = RequestRegistry::new();
        registry.record_call(Direction::Up, 1);
        registry.record_call(Direction::Down, 1);
        assert_eq!(registry.len(), 2);

        registry.clear_call(Direction::Up, 1);
        assert!(!registry.has_call(Direction::Up, 1));
        assert!(registry.has_call(Direction::Down, 1));
    }

    #[test]
    fn it_clears_absent_calls_quietly() {
        let mut registry = RequestRegistry::new();
        assert!(!registry.clear_call(Direction::Up, 4));
        assert!(registry.is_empty());
    }

    #[test]
    fn it_merges_pending_floors() {
        let mut registry = RequestRegistry::new();
        registry.record_call(Direction::Up, 0);
        registry.record_call(Direction::Up, 2);
        registry.record_call(Direction::Down, 2);
        registry.record_call(Direction::Down, 4);
        let pending: Vec<u8> = registry.pending_floors().into_iter().collect();
        assert_eq!(pending, vec![0, 2, 4]);
    }
}
