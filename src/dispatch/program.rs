use log::info;

use crate::dispatch::dispatcher::Dispatcher;
use crate::host::binding::{self, Binding};
use crate::host::car::Car;
use crate::host::floor::Floor;
use crate::util::error::DispatchResult;

/// A dispatcher bound to one host session.
pub struct Program {
    dispatcher: Dispatcher,
    binding: Binding,
}

impl Program {
    /// Builds dispatcher state from the floor list, then subscribes to every car and floor.
    pub fn init<C: Car, F: Floor>(cars: &mut [C], floors: &mut [F]) -> DispatchResult<Program> {
        let dispatcher = Dispatcher::new(floors.iter().map(|f| f.floor_number()), cars.len())?;
        let binding = binding::attach(cars, floors);
        info!(
            "dispatching {} cars over floors 0..={}",
            cars.len(),
            dispatcher.highest_floor()
        );
        Ok(Program { dispatcher, binding })
    }

    /// Periodic tick: handles whatever the host raised since the last one.
    pub fn update<C: Car, F: Floor>(
        &mut self,
        dt: f64,
        cars: &mut [C],
        _floors: &[F],
    ) -> DispatchResult<usize> {
        let handled = self.binding.pump(&mut self.dispatcher, cars)?;
        self.dispatcher.update(dt);
        Ok(handled)
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
