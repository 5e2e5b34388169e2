#![allow(dead_code)]

use dispatcher::dispatch::events::ElevatorEvents;
use dispatcher::dispatch::Dispatcher;
use dispatcher::utilities::host::CarHost;
use shared_resources::config::DispatchConfig;

/// Car host that records everything the dispatcher tells it.
#[derive(Clone, Debug, Default)]
pub struct MockCar {
    pub floor: u8,
    pub load: f64,
    pub going_up: bool,
    pub going_down: bool,
    pub queue: Vec<u8>,
    pub committed: Vec<Vec<u8>>,
}

impl MockCar {
    pub fn at(floor: u8) -> Self {
        MockCar { floor, ..MockCar::default() }
    }

    pub fn last_destination(&self) -> Option<u8> {
        self.committed.last().and_then(|queue| queue.first().copied())
    }
}

impl CarHost for MockCar {
    fn current_floor(&self) -> u8 {
        self.floor
    }

    fn load_factor(&self) -> f64 {
        self.load
    }

    fn going_up_indicator(&mut self, on: bool) {
        self.going_up = on;
    }

    fn going_down_indicator(&mut self, on: bool) {
        self.going_down = on;
    }

    fn set_destination_queue(&mut self, queue: Vec<u8>) {
        self.queue = queue;
    }

    fn check_destination_queue(&mut self) {
        self.committed.push(self.queue.clone());
    }
}

pub fn building(bottom: u8, top: u8, cars: Vec<MockCar>) -> Dispatcher<MockCar> {
    let floors: Vec<u8> = (bottom..=top).collect();
    Dispatcher::new(cars, &floors, DispatchConfig::default()).expect("dispatcher")
}

/// Moves a car the way the host would and reports the stop.
pub fn arrive(dispatcher: &mut Dispatcher<MockCar>, car: usize, floor: u8) {
    dispatcher.car_mut(car).floor = floor;
    dispatcher.stopped_at_floor(car, floor);
}
