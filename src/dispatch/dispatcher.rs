use log::{debug, info, trace, warn};
use serde;
use std::collections::BTreeSet;

use crate::dispatch::queue_planner;
use crate::dispatch::request_registry::RequestRegistry;
use crate::dispatch::stop_decider;
use crate::host::binding::HostEvent;
use crate::host::car::{Car, CarSignal};
use crate::util::direction::{Direction, Indicators};
use crate::util::error::{DispatchError, DispatchResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CarState {
    Idle,
    MovingUp,
    MovingDown,
}

impl CarState {
    fn heading(direction: Direction) -> CarState {
        match direction {
            Direction::Up => CarState::MovingUp,
            Direction::Down => CarState::MovingDown,
        }
    }
}

/// Pending calls and car states, as logged by the binary.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DispatchSnapshot {
    pub up_calls: Vec<u8>,
    pub down_calls: Vec<u8>,
    pub cars: Vec<CarState>,
    pub uptime: f64,
}

/// Decides where cars go. Owns the building-wide call registry.
///
/// Handlers read car state through the [`Car`] capability at the time they run and
/// write their decisions straight back to it.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    registry: RequestRegistry,
    floors: BTreeSet<u8>,
    highest_floor: u8,
    car_states: Vec<CarState>,
    uptime: f64,
}

impl Dispatcher {
    pub fn new<I>(floors: I, num_cars: usize) -> DispatchResult<Dispatcher>
    where
        I: IntoIterator<Item = u8>,
    {
        let floors: BTreeSet<u8> = floors.into_iter().collect();
        let highest_floor = *floors.iter().next_back().ok_or(DispatchError::NoFloors)?;
        Ok(Dispatcher {
            registry: RequestRegistry::new(),
            floors,
            highest_floor,
            car_states: vec![CarState::Idle; num_cars],
            uptime: 0.0,
        })
    }

    pub fn registry(&self) -> &RequestRegistry {
        &self.registry
    }

    pub fn highest_floor(&self) -> u8 {
        self.highest_floor
    }

    pub fn car_state(&self, car_id: usize) -> Option<CarState> {
        self.car_states.get(car_id).cloned()
    }

    pub fn snapshot(&self) -> DispatchSnapshot {
        DispatchSnapshot {
            up_calls: self.registry.up_calls.iter().cloned().collect(),
            down_calls: self.registry.down_calls.iter().cloned().collect(),
            cars: self.car_states.clone(),
            uptime: self.uptime,
        }
    }

    /// Routes one host event to its handler.
    pub fn on_event<C: Car>(&mut self, cars: &mut [C], event: HostEvent) -> DispatchResult<()> {
        match event {
            HostEvent::Car { car, signal } => {
                let num_cars = cars.len();
                let handle = cars
                    .get_mut(car)
                    .ok_or(DispatchError::UnknownCar { car, cars: num_cars })?;
                self.on_car_signal(car, handle, signal);
            }
            HostEvent::Call { floor, direction } => self.on_call_button(direction, floor),
        }
        Ok(())
    }

    pub fn on_car_signal<C: Car + ?Sized>(&mut self, car_id: usize, car: &mut C, signal: CarSignal) {
        match signal {
            CarSignal::Idle => self.on_idle(car_id, car),
            CarSignal::FloorButtonPressed { floor } => self.on_floor_button_pressed(car_id, car, floor),
            CarSignal::PassingFloor { floor, direction } => {
                self.on_passing_floor(car_id, car, floor, direction)
            }
            CarSignal::StoppedAtFloor { floor } => self.on_stopped_at_floor(car_id, car, floor),
        }
    }

    /// A call button on a floor was pressed.
    pub fn on_call_button(&mut self, direction: Direction, floor: u8) {
        if !self.is_known_floor(floor) {
            return;
        }
        info!("button-{} - floor {} pressed", direction.as_str(), floor);
        if self.registry.record_call(direction, floor) {
            debug!("floor {} request added", direction.as_str());
        }
    }

    /// Periodic tick from the host. Only tracks uptime.
    pub fn update(&mut self, dt: f64) {
        self.uptime += dt;
        trace!("update dt {:.3}, uptime {:.3}", dt, self.uptime);
    }

    fn on_idle<C: Car + ?Sized>(&mut self, car_id: usize, car: &mut C) {
        let current_floor = car.current_floor();
        if !car.destination_queue().is_empty() {
            // Queue-driven movement wins over idle re-evaluation.
            debug!("idle - car {} still has {:?} queued", car_id, car.destination_queue());
            return;
        }
        debug!("up requests: {:?}", self.registry.up_calls);
        debug!("down requests: {:?}", self.registry.down_calls);

        let target =
            match stop_decider::select_idle_target(current_floor, &self.registry.pending_floors()) {
                Some(t) => t,
                None => {
                    trace!("idle - car {} floor {} has nothing to do", car_id, current_floor);
                    self.set_state(car_id, CarState::Idle);
                    return;
                }
            };

        if target == current_floor {
            let direction = if self.registry.has_call(Direction::Up, current_floor) {
                Direction::Up
            } else {
                Direction::Down
            };
            self.registry.clear_call(direction, current_floor);
            car.set_indicators(Indicators::toward(direction));
            self.set_state(car_id, CarState::Idle);
            info!(
                "idle - car {} floor {} serves {} call in place",
                car_id,
                current_floor,
                direction.as_str()
            );
            return;
        }

        let direction = Direction::between(current_floor, target);
        info!("idle - car {} floor {} goes to requested floor {}", car_id, current_floor, target);
        car.go_to_floor(target, false);
        car.set_indicators(Indicators::toward(direction));
        self.set_state(car_id, CarState::heading(direction));
    }

    fn on_floor_button_pressed<C: Car + ?Sized>(&mut self, car_id: usize, car: &mut C, floor: u8) {
        if !self.is_known_floor(floor) {
            return;
        }
        let current_floor = car.current_floor();
        info!(
            "elevator-button - car {} floor {} (requested {})",
            car_id, current_floor, floor
        );
        if car.destination_queue().contains(&floor) {
            debug!("floor {} is already in the queue", floor);
            return;
        }

        let planned = queue_planner::insert(floor, current_floor, car.destination_queue());
        let direction = queue_planner::travel_direction(current_floor, &planned, floor);
        car.set_destination_queue(planned);
        car.commit_queue();
        debug!("destination queue {:?}", car.destination_queue());

        car.set_indicators(Indicators::toward(direction));
        self.set_state(car_id, CarState::heading(direction));
    }

    fn on_passing_floor<C: Car + ?Sized>(
        &mut self,
        car_id: usize,
        car: &mut C,
        floor: u8,
        direction: Direction,
    ) {
        if !self.is_known_floor(floor) {
            return;
        }
        debug!(
            "passing-floor - car {} passing floor {} going {}",
            car_id,
            floor,
            direction.as_str()
        );
        if !stop_decider::should_stop_while_passing(
            floor,
            direction,
            car.destination_queue(),
            car.load_factor(),
            &self.registry,
        ) {
            return;
        }
        self.registry.clear_call(direction, floor);
        info!("passing-floor - car {} stops at floor {}", car_id, floor);
        car.go_to_floor(floor, true);
    }

    fn on_stopped_at_floor<C: Car + ?Sized>(&mut self, car_id: usize, car: &mut C, floor: u8) {
        if !self.is_known_floor(floor) {
            return;
        }
        info!("stopped-at-floor - car {} stopped at floor {}", car_id, floor);
        let decision =
            stop_decider::on_arrival(floor, car.destination_queue(), self.highest_floor, &self.registry);
        if decision.clear_up {
            self.registry.clear_call(Direction::Up, floor);
            debug!("cleared up call at floor {}", floor);
        }
        if decision.clear_down {
            self.registry.clear_call(Direction::Down, floor);
            debug!("cleared down call at floor {}", floor);
        }
        if let Some(indicators) = decision.indicators {
            debug!("destination queue empty");
            car.set_indicators(indicators);
        }

        let state = match queue_planner::queue_direction(floor, car.destination_queue()) {
            Some(direction) => CarState::heading(direction),
            None => CarState::Idle,
        };
        self.set_state(car_id, state);
    }

    fn is_known_floor(&self, floor: u8) -> bool {
        let known = self.floors.contains(&floor);
        debug_assert!(known, "event for unregistered floor {}", floor);
        if !known {
            warn!("ignoring event for unregistered floor {}", floor);
        }
        known
    }

    fn set_state(&mut self, car_id: usize, state: CarState) {
        if car_id >= self.car_states.len() {
            self.car_states.resize(car_id + 1, CarState::Idle);
        }
        if self.car_states[car_id] != state {
            debug!("car {} {:?} -> {:?}", car_id, self.car_states[car_id], state);
            self.car_states[car_id] = state;
        }
    }
}
