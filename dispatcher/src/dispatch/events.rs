use log::debug;

use shared_resources::direction::Direction;

use crate::utilities::host::CarHost;

use super::Dispatcher;

/// Handlers a host building invokes, one event at a time.
///
/// # Panics
///
/// Car indices must come from the car list the dispatcher was built with and
/// floors must lie within its bounds.
pub trait ElevatorEvents {
    fn hall_button_pressed(&mut self, floor: u8, direction: Direction);

    fn rider_button_pressed(&mut self, car: usize, floor: u8);

    fn passing_floor(&mut self, car: usize, floor: u8, direction: Direction);

    fn stopped_at_floor(&mut self, car: usize, floor: u8);

    fn car_idle(&mut self, car: usize);
}

impl<C: CarHost> ElevatorEvents for Dispatcher<C> {
    fn hall_button_pressed(&mut self, floor: u8, direction: Direction) {
        self.assert_floor(floor);
        debug!("hall button pressed at floor {} ({:?})", floor, direction);
        match direction {
            Direction::Up | Direction::Down => {
                self.registry.add_call(floor, direction);
            },
            Direction::Idle => debug!("ignoring hall call without direction at floor {}", floor),
        }
    }

    fn rider_button_pressed(&mut self, car: usize, floor: u8) {
        self.assert_floor(floor);
        debug!("car {}: rider button pressed for floor {}", car, floor);
        self.states[car].rider_calls.add_call(floor);
    }

    fn passing_floor(&mut self, car: usize, floor: u8, direction: Direction) {
        debug!("car {}: passing floor {} ({:?})", car, floor, direction);
        let load = self.cars[car].load_factor();
        self.load_history.record(load);
    }

    fn stopped_at_floor(&mut self, car: usize, floor: u8) {
        self.assert_floor(floor);
        let load = self.cars[car].load_factor();
        debug!("car {}: stopped at floor {} with load {:.2}", car, floor, load);
        self.load_history.record(load);

        let direction = self.states[car].direction;
        self.states[car].rider_calls.remove_call(floor);
        if direction != Direction::Idle {
            self.registry.remove_call(floor, direction);
        }
        // nobody can travel past the end of the line
        if self.bounds.is_terminal(floor) {
            self.registry.remove_call(floor, Direction::Up);
            self.registry.remove_call(floor, Direction::Down);
        }

        self.update_next_floor(car);
    }

    fn car_idle(&mut self, car: usize) {
        debug!("car {}: idle", car);
        self.update_next_floor(car);
    }
}
