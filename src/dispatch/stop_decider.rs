use std::collections::BTreeSet;

use crate::dispatch::request_registry::RequestRegistry;
use crate::util::constants::FULL_LOAD_FACTOR;
use crate::util::direction::{Direction, Indicators};

/// What a car does with the registry once it stops at a floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrivalDecision {
    pub clear_up: bool,
    pub clear_down: bool,
    /// `None` leaves the lamps as the planner last set them.
    pub indicators: Option<Indicators>,
}

/// Nearest pending floor to `current_floor`. Ties go to the higher floor.
pub fn select_idle_target(current_floor: u8, pending_floors: &BTreeSet<u8>) -> Option<u8> {
    // Ascending iteration plus `<=` lets the higher floor win a tie.
    let mut best: Option<(u8, u8)> = None;
    for &floor in pending_floors.iter() {
        let distance = distance(current_floor, floor);
        match best {
            Some((_, best_distance)) if best_distance < distance => {}
            _ => best = Some((floor, distance)),
        }
    }
    best.map(|(floor, _)| floor)
}

/// Whether a car passing `floor` should divert and stop there.
pub fn should_stop_while_passing(
    floor: u8,
    direction: Direction,
    queue: &[u8],
    load_factor: f64,
    registry: &RequestRegistry,
) -> bool {
    if queue.contains(&floor) {
        return false;
    }
    if load_factor >= FULL_LOAD_FACTOR {
        return false;
    }
    registry.has_call(direction, floor)
}

/// Decides which calls a stop at `floor` services.
///
/// `queue` is what remains after the host consumed this stop.
pub fn on_arrival(
    floor: u8,
    queue: &[u8],
    highest_floor: u8,
    registry: &RequestRegistry,
) -> ArrivalDecision {
    match queue.first() {
        None => ArrivalDecision {
            clear_up: registry.has_call(Direction::Up, floor),
            clear_down: registry.has_call(Direction::Down, floor),
            indicators: Some(Indicators::idle_at(floor, highest_floor)),
        },
        Some(&next) => ArrivalDecision {
            clear_up: next >= floor && registry.has_call(Direction::Up, floor),
            clear_down: next <= floor && registry.has_call(Direction::Down, floor),
            indicators: None,
        },
    }
}

fn distance(a: u8, b: u8) -> u8 {
    if a > b {
        a - b
    } else {
        b - a
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pending(floors: &[u8]) -> BTreeSet<u8> {
        floors.iter().cloned().collect()
    }

    fn registry_with(up: &[u8], down: &[u8]) -> RequestRegistry {
        let mut registry = RequestRegistry::new();
        for &f in up {
            registry.record_call(Direction::Up, f);
        }
        for &f in down {
            registry.record_call(Direction::Down, f);
        }
        registry
    }

    #[test]
    fn it_picks_the_nearest_floor() {
        assert_eq!(select_idle_target(1, &pending(&[0, 4, 5])), Some(0));
        assert_eq!(select_idle_target(4, &pending(&[0, 5])), Some(5));
    }

    #[test]
    fn it_prefers_the_higher_floor_on_ties() {
        assert_eq!(select_idle_target(4, &pending(&[2, 6])), Some(6));
    }

    #[test]
    fn it_stays_idle_without_calls() {
        assert_eq!(select_idle_target(3, &pending(&[])), None);
    }

    #[test]
    fn it_picks_the_current_floor() {
        assert_eq!(select_idle_target(3, &pending(&[2, 3, 4])), Some(3));
    }

    #[test]
    fn it_stops_for_a_matching_call() {
        let registry = registry_with(&[2], &[]);
        assert!(should_stop_while_passing(2, Direction::Up, &[3], 0.5, &registry));
    }

    #[test]
    fn it_passes_when_full() {
        let registry = registry_with(&[2], &[]);
        assert!(!should_stop_while_passing(2, Direction::Up, &[3], 0.95, &registry));
        assert!(!should_stop_while_passing(2, Direction::Up, &[3], FULL_LOAD_FACTOR, &registry));
    }

    #[test]
    fn it_passes_calls_in_the_other_direction() {
        let registry = registry_with(&[], &[2]);
        assert!(!should_stop_while_passing(2, Direction::Up, &[3], 0.0, &registry));
    }

    #[test]
    fn it_passes_floors_already_queued() {
        let registry = registry_with(&[2], &[]);
        assert!(!should_stop_while_passing(2, Direction::Up, &[2, 3], 0.0, &registry));
    }

    #[test]
    fn it_lights_both_lamps_when_done_mid_building() {
        let decision = on_arrival(2, &[], 3, &RequestRegistry::new());
        assert_eq!(decision.indicators, Some(Indicators { up: true, down: true }));
    }

    #[test]
    fn it_only_points_down_when_done_on_top() {
        let decision = on_arrival(3, &[], 3, &RequestRegistry::new());
        assert_eq!(decision.indicators, Some(Indicators { up: false, down: true }));
    }

    #[test]
    fn it_clears_both_directions_when_done() {
        let decision = on_arrival(2, &[], 3, &registry_with(&[2], &[2]));
        assert!(decision.clear_up && decision.clear_down);
    }

    #[test]
    fn it_keeps_calls_the_car_is_leaving_behind() {
        let registry = registry_with(&[2], &[2]);

        let heading_up = on_arrival(2, &[3, 4], 3, &registry);
        assert!(heading_up.clear_up);
        assert!(!heading_up.clear_down);
        assert_eq!(heading_up.indicators, None);

        let heading_down = on_arrival(2, &[1, 0], 3, &registry);
        assert!(!heading_down.clear_up);
        assert!(heading_down.clear_down);
        assert_eq!(heading_down.indicators, None);
    }

    #[test]
    fn it_only_clears_pending_calls() {
        let decision = on_arrival(2, &[3], 3, &RequestRegistry::new());
        assert!(!decision.clear_up && !decision.clear_down);
    }
}
