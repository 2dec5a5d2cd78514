use crate::util::direction::Direction;

/// Receives the direction of each call button pressed on a floor.
pub type FloorHandler = Box<dyn FnMut(Direction) + Send>;

/// What the dispatcher needs from a floor owned by the host.
pub trait Floor {
    fn floor_number(&self) -> u8;

    /// Registers the single receiver of this floor's button presses.
    fn subscribe(&mut self, handler: FloorHandler);
}
