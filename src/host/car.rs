use crate::util::direction::{Direction, Indicators};

/// Events a car raises towards its controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarSignal {
    Idle,
    FloorButtonPressed { floor: u8 },
    PassingFloor { floor: u8, direction: Direction },
    StoppedAtFloor { floor: u8 },
}

/// Everything a controller asks a car to do, in the order it was asked.
#[derive(Clone, Debug, PartialEq)]
pub enum CarCommand {
    GoToFloor { floor: u8, insert_as_next: bool },
    SetQueue { queue: Vec<u8> },
    CommitQueue,
    GoingUpIndicator { on: bool },
    GoingDownIndicator { on: bool },
}

pub type CarHandler = Box<dyn FnMut(CarSignal) + Send>;

/// What the dispatcher needs from a car owned by the host.
pub trait Car {
    fn current_floor(&self) -> u8;

    fn destination_queue(&self) -> &[u8];

    /// Replaces the planned stops. Takes effect on [`Car::commit_queue`].
    fn set_destination_queue(&mut self, queue: Vec<u8>);

    /// Asks the host to start honouring the current destination queue.
    fn commit_queue(&mut self);

    /// Adds a stop at the back of the queue, or in front of it when `insert_as_next`.
    fn go_to_floor(&mut self, floor: u8, insert_as_next: bool);

    fn going_up_indicator(&self) -> bool;
    fn set_going_up_indicator(&mut self, on: bool);

    fn going_down_indicator(&self) -> bool;
    fn set_going_down_indicator(&mut self, on: bool);

    /// Occupancy between 0 (empty) and 1 (full).
    fn load_factor(&self) -> f64;

    /// Registers the single receiver of this car's events.
    fn subscribe(&mut self, handler: CarHandler);

    fn set_indicators(&mut self, indicators: Indicators) {
        self.set_going_up_indicator(indicators.up);
        self.set_going_down_indicator(indicators.down);
    }
}
