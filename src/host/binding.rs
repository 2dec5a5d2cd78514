use crossbeam_channel as cbc;
use log::{debug, warn};

use crate::dispatch::dispatcher::Dispatcher;
use crate::host::car::{Car, CarSignal};
use crate::host::floor::Floor;
use crate::util::direction::Direction;
use crate::util::error::DispatchResult;

/// A host event tagged with where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Car { car: usize, signal: CarSignal },
    Call { floor: u8, direction: Direction },
}

/// The dispatcher's end of every subscription made by [`attach`].
///
/// All events land on one channel, so they are handled one at a time in the order
/// the host raised them, whichever thread raised them.
pub struct Binding {
    events_rx: cbc::Receiver<HostEvent>,
}

/// Subscribes to every car and floor. Car events are tagged with the car's index in
/// `cars`, call-button presses with the floor number read at subscription time.
pub fn attach<C: Car, F: Floor>(cars: &mut [C], floors: &mut [F]) -> Binding {
    let (events_tx, events_rx) = cbc::unbounded::<HostEvent>();

    for (index, car) in cars.iter_mut().enumerate() {
        let events_tx = events_tx.clone();
        car.subscribe(Box::new(move |signal| {
            if events_tx.send(HostEvent::Car { car: index, signal }).is_err() {
                warn!("dropped {:?} from car {}: dispatcher is gone", signal, index);
            }
        }));
    }

    for floor in floors.iter_mut() {
        let events_tx = events_tx.clone();
        let floor_number = floor.floor_number();
        floor.subscribe(Box::new(move |direction| {
            if events_tx
                .send(HostEvent::Call { floor: floor_number, direction })
                .is_err()
            {
                warn!("dropped {} call on floor {}: dispatcher is gone", direction.as_str(), floor_number);
            }
        }));
    }

    debug!("attached to {} cars and {} floors", cars.len(), floors.len());
    Binding { events_rx }
}

impl Binding {
    pub fn receiver(&self) -> &cbc::Receiver<HostEvent> {
        &self.events_rx
    }

    /// Hands every waiting event to the dispatcher. Returns how many were handled.
    pub fn pump<C: Car>(&self, dispatcher: &mut Dispatcher, cars: &mut [C]) -> DispatchResult<usize> {
        let mut handled = 0;
        for event in self.events_rx.try_iter() {
            dispatcher.on_event(cars, event)?;
            handled += 1;
        }
        Ok(handled)
    }
}
