/// ----- DISPATCH MODULE -----
/// Owns the fleet-wide call registry and the per-car bookkeeping, and decides
/// where each car goes next whenever it goes idle or finishes a stop. Every
/// decision is local to one car and recomputed from scratch each time.

use log::{debug, info};
use thiserror::Error;

use shared_resources::config::DispatchConfig;
use shared_resources::direction::Direction;
use shared_resources::floor::FloorBounds;

use crate::utilities::call_set::CallRegistry;
use crate::utilities::car::{infer_indicators, CarState};
use crate::utilities::host::{CarHost, FloorHost};
use crate::utilities::load_history::LoadHistory;

pub mod events;
pub mod status;
pub mod trajectory;

use self::status::{CarStatus, DispatchStatus};
use self::trajectory::{evaluate_trajectory, Stop, Trajectory};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("the building has no floors")]
    NoFloors,
}

pub struct Dispatcher<C: CarHost> {
    cars: Vec<C>,
    states: Vec<CarState>,
    registry: CallRegistry,
    bounds: FloorBounds,
    config: DispatchConfig,
    load_history: LoadHistory,
}

impl<C: CarHost> Dispatcher<C> {
    pub fn new<F: FloorHost>(cars: Vec<C>, floors: &[F], config: DispatchConfig) -> Result<Self, DispatchError> {
        let bounds = FloorBounds::from_floors(floors.iter().map(FloorHost::floor_num))
            .ok_or(DispatchError::NoFloors)?;
        let states = bounds
            .home_floors(cars.len())
            .into_iter()
            .enumerate()
            .map(|(id, home_floor)| CarState::new(id, home_floor))
            .collect();
        info!(
            "Dispatching {} cars over floors {}..={}",
            cars.len(), bounds.bottom, bounds.top
        );
        Ok(Dispatcher {
            cars,
            states,
            registry: CallRegistry::new(),
            bounds,
            config,
            load_history: LoadHistory::default(),
        })
    }

    pub fn bounds(&self) -> FloorBounds {
        self.bounds
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn registry(&self) -> &CallRegistry {
        &self.registry
    }

    pub fn load_history(&self) -> &LoadHistory {
        &self.load_history
    }

    pub fn num_cars(&self) -> usize {
        self.cars.len()
    }

    pub fn car(&self, car: usize) -> &C {
        &self.cars[car]
    }

    pub fn car_mut(&mut self, car: usize) -> &mut C {
        &mut self.cars[car]
    }

    pub fn car_state(&self, car: usize) -> &CarState {
        &self.states[car]
    }

    /// Every car is in service. Hook for a fleet that parks idle cars.
    pub fn is_online(&self, _car: usize) -> bool {
        true
    }

    pub fn is_full(&self, car: usize) -> bool {
        self.cars[car].load_factor() > self.config.full_load_threshold
    }

    pub fn best_stop_along_trajectory(&self, car: usize, current_floor: u8, direction: Direction) -> Option<u8> {
        self.evaluate(car, current_floor, direction).map(|stop| stop.floor)
    }

    fn evaluate(&self, car: usize, current_floor: u8, direction: Direction) -> Option<Stop> {
        let trajectory = Trajectory {
            car: &self.states[car],
            current_floor,
            direction,
            accepts_pickups: !self.is_full(car) && self.is_online(car),
        };
        evaluate_trajectory(&trajectory, &self.states, &self.registry, self.bounds)
    }

    /// Where `car` should go now: onward in its direction, otherwise back the
    /// other way, otherwise home.
    pub fn next_stop(&self, car: usize) -> Stop {
        let state = &self.states[car];
        let home = Stop { floor: state.home_floor, direction: Direction::Up };
        if state.rider_calls.is_empty() && self.registry.is_empty() {
            debug!("car {}: no calls, heading home ({})", car, state.home_floor);
            return home
        }

        let current_floor = self.cars[car].current_floor();
        let direction = state.direction.trajectory();
        if let Some(stop) = self.evaluate(car, current_floor, direction) {
            return stop
        }
        if let Some(stop) = self.evaluate(car, current_floor, direction.opposite()) {
            return stop
        }
        debug!("car {}: nothing either way, heading home ({})", car, state.home_floor);
        home
    }

    pub fn update_next_floor(&mut self, car: usize) {
        let next_stop = self.next_stop(car);
        if !self.is_online(car) {
            return
        }
        self.go_to_floor(car, next_stop);
        self.update_indicators(car);
    }

    fn go_to_floor(&mut self, car: usize, stop: Stop) {
        let floor = stop.floor;
        let current_floor = self.cars[car].current_floor();
        if self.states[car].current_destination == Some(floor) {
            debug!("car {}: keeping destination {}", car, floor);
        } else {
            info!("car {}: going from floor {} to floor {}", car, current_floor, floor);
        }

        let host = &mut self.cars[car];
        host.set_destination_queue(vec![floor]);
        host.check_destination_queue();

        let state = &mut self.states[car];
        state.current_destination = Some(floor);
        // a stop at the current floor keeps the direction its call is served in,
        // otherwise a waiting down call there would never be cleared
        let direction = if floor < current_floor {
            Direction::Down
        } else if floor > current_floor {
            Direction::Up
        } else {
            stop.direction.trajectory()
        };
        if state.set_direction(direction) {
            debug!("car {}: now travelling {:?}", car, direction);
        }
    }

    fn update_indicators(&mut self, car: usize) {
        let current_floor = self.cars[car].current_floor();
        let state = &mut self.states[car];
        let indicators = infer_indicators(current_floor, state.current_destination, self.bounds);
        state.indicators = indicators;

        let host = &mut self.cars[car];
        host.going_up_indicator(indicators.going_up);
        host.going_down_indicator(indicators.going_down);
    }

    pub fn status(&self) -> DispatchStatus {
        DispatchStatus {
            bounds: self.bounds,
            up_calls: self.registry.up_calls.iter().collect(),
            down_calls: self.registry.down_calls.iter().collect(),
            cars: self
                .states
                .iter()
                .zip(&self.cars)
                .map(|(state, host)| CarStatus {
                    id: state.id,
                    floor: host.current_floor(),
                    load_factor: host.load_factor(),
                    home_floor: state.home_floor,
                    destination: state.current_destination,
                    direction: state.direction,
                    indicators: state.indicators,
                    rider_calls: state.rider_calls.iter().collect(),
                })
                .collect(),
            average_load: self.load_history.average(),
        }
    }

    fn assert_floor(&self, floor: u8) {
        assert!(
            self.bounds.contains(floor),
            "floor {} is outside {}..={}", floor, self.bounds.bottom, self.bounds.top
        );
    }
}
