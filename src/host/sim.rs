//! A small simulated building for running and testing the dispatcher without a real host.
//!
//! Cars move one floor per [`SimCar::step`]. Every command a car receives is echoed on an
//! optional channel so tests can check exactly what the dispatcher asked for.
use crossbeam_channel as cbc;
use log::trace;
use rand::Rng;

use crate::host::car::{Car, CarCommand, CarHandler, CarSignal};
use crate::host::floor::{Floor, FloorHandler};
use crate::util::constants::GROUND_FLOOR;
use crate::util::direction::Direction;

pub struct SimCar {
    floor: u8,
    queue: Vec<u8>,
    going_up: bool,
    going_down: bool,
    load_factor: f64,
    handler: Option<CarHandler>,
    commands_tx: Option<cbc::Sender<CarCommand>>,
}

impl SimCar {
    pub fn new(floor: u8) -> SimCar {
        SimCar {
            floor,
            queue: Vec::new(),
            going_up: true,
            going_down: true,
            load_factor: 0.0,
            handler: None,
            commands_tx: None,
        }
    }

    pub fn with_commands(floor: u8, commands_tx: cbc::Sender<CarCommand>) -> SimCar {
        SimCar {
            commands_tx: Some(commands_tx),
            ..SimCar::new(floor)
        }
    }

    pub fn set_load_factor(&mut self, load_factor: f64) {
        self.load_factor = load_factor;
    }

    /// Hands a signal to whoever subscribed.
    pub fn raise(&mut self, signal: CarSignal) {
        match self.handler.as_mut() {
            Some(handler) => handler(signal),
            None => trace!("nobody listens to {:?}", signal),
        }
    }

    /// Moves one floor toward the head of the queue.
    ///
    /// Raises idle with an empty queue, passing-floor on a floor that is not the target and
    /// stopped-at-floor on the target, after taking it off the queue.
    /// Returns the floor the car stopped at, if any.
    pub fn step(&mut self) -> Option<u8> {
        let target = match self.queue.first() {
            Some(&target) => target,
            None => {
                self.raise(CarSignal::Idle);
                return None;
            }
        };
        if target != self.floor {
            let direction = Direction::between(self.floor, target);
            self.floor = match direction {
                Direction::Up => self.floor + 1,
                Direction::Down => self.floor - 1,
            };
            if target != self.floor {
                let floor = self.floor;
                self.raise(CarSignal::PassingFloor { floor, direction });
                return None;
            }
        }
        self.queue.remove(0);
        let floor = self.floor;
        self.raise(CarSignal::StoppedAtFloor { floor });
        Some(floor)
    }

    fn record(&self, command: CarCommand) {
        if let Some(commands_tx) = self.commands_tx.as_ref() {
            // A test that dropped its receiver does not care any more.
            let _ = commands_tx.send(command);
        }
    }
}

impl Car for SimCar {
    fn current_floor(&self) -> u8 {
        self.floor
    }

    fn destination_queue(&self) -> &[u8] {
        &self.queue
    }

    fn set_destination_queue(&mut self, queue: Vec<u8>) {
        self.record(CarCommand::SetQueue { queue: queue.clone() });
        self.queue = queue;
    }

    fn commit_queue(&mut self) {
        self.record(CarCommand::CommitQueue);
    }

    fn go_to_floor(&mut self, floor: u8, insert_as_next: bool) {
        self.record(CarCommand::GoToFloor { floor, insert_as_next });
        if insert_as_next {
            self.queue.insert(0, floor);
        } else {
            self.queue.push(floor);
        }
    }

    fn going_up_indicator(&self) -> bool {
        self.going_up
    }

    fn set_going_up_indicator(&mut self, on: bool) {
        self.record(CarCommand::GoingUpIndicator { on });
        self.going_up = on;
    }

    fn going_down_indicator(&self) -> bool {
        self.going_down
    }

    fn set_going_down_indicator(&mut self, on: bool) {
        self.record(CarCommand::GoingDownIndicator { on });
        self.going_down = on;
    }

    fn load_factor(&self) -> f64 {
        self.load_factor
    }

    fn subscribe(&mut self, handler: CarHandler) {
        self.handler = Some(handler);
    }
}

pub struct SimFloor {
    number: u8,
    handler: Option<FloorHandler>,
}

impl SimFloor {
    pub fn new(number: u8) -> SimFloor {
        SimFloor { number, handler: None }
    }

    pub fn press(&mut self, direction: Direction) {
        match self.handler.as_mut() {
            Some(handler) => handler(direction),
            None => trace!("nobody listens to floor {}", self.number),
        }
    }
}

impl Floor for SimFloor {
    fn floor_number(&self) -> u8 {
        self.number
    }

    fn subscribe(&mut self, handler: FloorHandler) {
        self.handler = Some(handler);
    }
}

/// Cars and floors plus random passengers.
pub struct Building {
    pub cars: Vec<SimCar>,
    pub floors: Vec<SimFloor>,
}

impl Building {
    /// `num_floors` floors numbered from the ground floor, every car parked on the ground floor.
    pub fn new(num_floors: u8, num_cars: usize) -> Building {
        Building {
            cars: (0..num_cars).map(|_| SimCar::new(GROUND_FLOOR)).collect(),
            floors: (0..num_floors).map(SimFloor::new).collect(),
        }
    }

    pub fn highest_floor(&self) -> u8 {
        self.floors.iter().map(|f| f.number).max().unwrap_or(GROUND_FLOOR)
    }

    /// Advances every car one step. With `call_probability` someone presses a call button,
    /// and someone boarding a stopped car presses a destination button.
    pub fn step<R: Rng>(&mut self, rng: &mut R, call_probability: f64) {
        let highest_floor = self.highest_floor();
        if !self.floors.is_empty() && rng.gen_bool(call_probability) {
            let index = rng.gen_range(0, self.floors.len());
            let floor = &mut self.floors[index];
            let direction = if floor.number == GROUND_FLOOR {
                Direction::Up
            } else if floor.number == highest_floor {
                Direction::Down
            } else if rng.gen_bool(0.5) {
                Direction::Up
            } else {
                Direction::Down
            };
            floor.press(direction);
        }

        for car in self.cars.iter_mut() {
            let stopped_at = match car.step() {
                Some(floor) => floor,
                None => continue,
            };
            car.set_load_factor(rng.gen_range(0.0, 1.0));
            if highest_floor > GROUND_FLOOR && rng.gen_bool(call_probability) {
                let mut destination = rng.gen_range(GROUND_FLOOR, highest_floor + 1);
                if destination == stopped_at {
                    destination = if stopped_at == highest_floor { GROUND_FLOOR } else { highest_floor };
                }
                car.raise(CarSignal::FloorButtonPressed { floor: destination });
            }
        }
    }
}
