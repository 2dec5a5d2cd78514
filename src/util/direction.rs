use serde;

use crate::util::constants::GROUND_FLOOR;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction a car travels to get from `from` to `to`. Equal floors count as down.
    pub fn between(from: u8, to: u8) -> Direction {
        if from < to {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// The two direction lamps on a car.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicators {
    pub up: bool,
    pub down: bool,
}

impl Indicators {
    pub fn toward(direction: Direction) -> Indicators {
        Indicators {
            up: direction == Direction::Up,
            down: direction == Direction::Down,
        }
    }

    /// Lamps for a car with nothing left to do: both on, except at the extremes.
    pub fn idle_at(floor: u8, highest_floor: u8) -> Indicators {
        Indicators {
            up: floor != highest_floor,
            down: floor != GROUND_FLOOR,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_goes_up_only_when_target_is_above() {
        assert_eq!(Direction::between(2, 3), Direction::Up);
        assert_eq!(Direction::between(3, 2), Direction::Down);
        assert_eq!(Direction::between(2, 2), Direction::Down);
    }

    #[test]
    fn it_lights_both_lamps_between_extremes() {
        assert_eq!(Indicators::idle_at(2, 3), Indicators { up: true, down: true });
        assert_eq!(Indicators::idle_at(3, 3), Indicators { up: false, down: true });
        assert_eq!(Indicators::idle_at(0, 3), Indicators { up: true, down: false });
    }

    #[test]
    fn it_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::from_str::<Direction>("\"down\"").unwrap(), Direction::Down);
    }
}
