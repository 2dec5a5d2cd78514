use crate::util::direction::Direction;

/// Direction a car is heading given its queue. An empty queue has no direction yet.
pub fn queue_direction(current_floor: u8, queue: &[u8]) -> Option<Direction> {
    queue
        .first()
        .map(|&next| Direction::between(current_floor, next))
}

/// Direction the car takes once `floor` is added to `queue`.
///
/// The head of the queue decides. With an empty queue the new floor itself does.
pub fn travel_direction(current_floor: u8, queue: &[u8], floor: u8) -> Direction {
    queue_direction(current_floor, queue)
        .unwrap_or_else(|| Direction::between(current_floor, floor))
}

/// Plans a new queue with `floor` added, SCAN style.
///
/// Floors on the current sweep come first, ordered toward the travel direction.
/// The rest follow in the opposite order for the return sweep.
/// `floor` must not already be in `queue`.
pub fn insert(floor: u8, current_floor: u8, queue: &[u8]) -> Vec<u8> {
    debug_assert!(!queue.contains(&floor), "floor {} is already queued", floor);
    let direction = travel_direction(current_floor, queue, floor);

    let (mut in_direction, mut against_direction): (Vec<u8>, Vec<u8>) = queue
        .iter()
        .cloned()
        .chain(std::iter::once(floor))
        .partition(|&f| on_sweep(direction, current_floor, f));

    match direction {
        Direction::Up => {
            in_direction.sort_unstable();
            against_direction.sort_unstable_by(|a, b| b.cmp(a));
        }
        Direction::Down => {
            in_direction.sort_unstable_by(|a, b| b.cmp(a));
            against_direction.sort_unstable();
        }
    }
    in_direction.extend(against_direction);
    in_direction
}

fn on_sweep(direction: Direction, current_floor: u8, floor: u8) -> bool {
    match direction {
        Direction::Up => floor >= current_floor,
        Direction::Down => floor <= current_floor,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn it_queues_into_an_empty_queue() {
        assert_eq!(insert(2, 1, &[]), vec![2]);
    }

    #[test]
    fn it_queues_a_higher_floor_going_up() {
        assert_eq!(insert(3, 2, &[4, 1]), vec![3, 4, 1]);
    }

    #[test]
    fn it_queues_a_lower_floor_going_up() {
        assert_eq!(insert(0, 2, &[4, 1]), vec![4, 1, 0]);
    }

    #[test]
    fn it_queues_a_higher_floor_going_down() {
        assert_eq!(insert(4, 2, &[1, 3]), vec![1, 3, 4]);
    }

    #[test]
    fn it_queues_a_lower_floor_going_down() {
        assert_eq!(insert(1, 2, &[0, 4]), vec![1, 0, 4]);
    }

    #[test]
    fn it_counts_the_current_floor_as_on_the_sweep() {
        // Heading up: the current floor sorts with the upward stops.
        assert_eq!(insert(2, 2, &[4, 0]), vec![2, 4, 0]);
        // Heading down: likewise with the downward stops.
        assert_eq!(insert(2, 2, &[1, 3]), vec![2, 1, 3]);
    }

    #[test]
    fn it_derives_direction_from_the_new_floor_when_empty() {
        assert_eq!(travel_direction(2, &[], 3), Direction::Up);
        assert_eq!(travel_direction(3, &[], 0), Direction::Down);
        assert_eq!(travel_direction(3, &[4], 0), Direction::Up);
        assert_eq!(queue_direction(3, &[]), None);
    }

    #[test]
    fn it_keeps_sweeps_monotonic() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(4145);
        for _ in 0..200 {
            let current: u8 = rng.gen_range(0, 10);
            let mut queue: Vec<u8> = Vec::new();
            for _ in 0..rng.gen_range(0, 8) {
                let floor: u8 = rng.gen_range(0, 10);
                if queue.contains(&floor) {
                    continue;
                }
                let direction = travel_direction(current, &queue, floor);
                let planned = insert(floor, current, &queue);
                assert_eq!(planned.len(), queue.len() + 1);
                assert_eq!(planned.iter().filter(|&&f| f == floor).count(), 1);

                let split = planned
                    .iter()
                    .position(|&f| !on_sweep(direction, current, f))
                    .unwrap_or(planned.len());
                let (sweep, back) = planned.split_at(split);
                assert!(back.iter().all(|&f| !on_sweep(direction, current, f)));
                match direction {
                    Direction::Up => {
                        assert!(sweep.windows(2).all(|w| w[0] < w[1]));
                        assert!(back.windows(2).all(|w| w[0] > w[1]));
                    }
                    Direction::Down => {
                        assert!(sweep.windows(2).all(|w| w[0] > w[1]));
                        assert!(back.windows(2).all(|w| w[0] < w[1]));
                    }
                }
                queue = planned;
            }
        }
    }
}
