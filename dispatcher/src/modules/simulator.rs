/// ----- SIMULATOR MODULE -----
/// Stand-in for the building. Cars move one floor per tick towards their
/// commanded destination and report idle, passing and stopped events back to
/// the controller. Scenario entries inject button presses and load changes.

use std::time::Duration;

use crossbeam_channel::{select, tick, Receiver, Sender};
use log::{debug, info, warn};

use shared_resources::call::Call;
use shared_resources::config::{ScenarioAction, ScenarioEntry, SimulationConfig};
use shared_resources::direction::Direction;
use shared_resources::floor::FloorBounds;

use crate::utilities::car::Indicators;
use crate::utilities::event::{CarCommand, CarReport, Command, Event};

#[derive(Clone, Debug, PartialEq)]
pub struct SimCar {
    pub floor: u8,
    pub destination: Option<u8>,
    pub load_factor: f64,
    pub indicators: Indicators,
    idle_reported: bool,
}

impl SimCar {
    pub fn new(floor: u8) -> Self {
        SimCar {
            floor,
            destination: None,
            load_factor: 0.0,
            indicators: Indicators::default(),
            idle_reported: false,
        }
    }

    fn report(&self) -> CarReport {
        CarReport { floor: self.floor, load_factor: self.load_factor }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::DestinationQueue(queue) => {
                self.destination = queue.first().copied();
                self.idle_reported = false;
            },
            Command::GoingUpIndicator(on) => self.indicators.going_up = on,
            Command::GoingDownIndicator(on) => self.indicators.going_down = on,
        }
    }

    /// Advances one tick and returns the event the car raises, if any.
    pub fn step(&mut self, id: usize) -> Option<Event> {
        match self.destination {
            Some(destination) if destination == self.floor => {
                self.destination = None;
                Some(Event::StoppedAtFloor { car: id, floor: self.floor, report: self.report() })
            },
            Some(destination) => {
                let direction = if destination > self.floor { Direction::Up } else { Direction::Down };
                self.floor = match direction {
                    Direction::Up => self.floor + 1,
                    _ => self.floor - 1,
                };
                if self.floor == destination {
                    return None
                }
                Some(Event::PassingFloor { car: id, floor: self.floor, direction, report: self.report() })
            },
            None if !self.idle_reported => {
                self.idle_reported = true;
                Some(Event::Idle { car: id, report: self.report() })
            },
            None => None,
        }
    }
}

pub struct Building {
    pub cars: Vec<SimCar>,
    scenario: Vec<ScenarioEntry>,
    now: u64,
}

impl Building {
    pub fn new(bounds: FloorBounds, num_cars: usize, mut scenario: Vec<ScenarioEntry>) -> Self {
        scenario.sort_by_key(|entry| entry.tick);
        Building {
            cars: (0..num_cars).map(|_| SimCar::new(bounds.bottom)).collect(),
            scenario,
            now: 0,
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn apply(&mut self, command: CarCommand) {
        match self.cars.get_mut(command.car) {
            Some(car) => car.apply(command.command),
            None => warn!("Command for unknown car {}", command.car),
        }
    }

    /// Runs one tick: due scenario entries first, then car motion.
    pub fn tick(&mut self) -> Vec<Event> {
        self.now += 1;
        let mut events = Vec::new();

        while self.scenario.first().is_some_and(|entry| entry.tick <= self.now) {
            let entry = self.scenario.remove(0);
            if let Some(event) = self.scenario_event(entry) {
                events.push(event);
            }
        }

        for (id, car) in self.cars.iter_mut().enumerate() {
            if let Some(event) = car.step(id) {
                events.push(event);
            }
        }
        events
    }

    fn scenario_event(&mut self, entry: ScenarioEntry) -> Option<Event> {
        match entry.action {
            ScenarioAction::Press { call: Call::Rider, floor, car } => {
                let car = car? as usize;
                Some(Event::RiderButton { car, floor })
            },
            ScenarioAction::Press { call, floor, .. } => Some(Event::HallButton {
                floor,
                direction: call.direction()?,
            }),
            ScenarioAction::Load { load, car } => {
                match self.cars.get_mut(car as usize) {
                    Some(sim_car) => sim_car.load_factor = load,
                    None => warn!("Load change for unknown car {}", car),
                }
                None
            },
        }
    }
}

pub fn main(
    settings: SimulationConfig,
    bounds: FloorBounds,
    scenario: Vec<ScenarioEntry>,
    event_tx: Sender<Event>,
    command_rx: Receiver<CarCommand>,
) {
    let timer = tick(Duration::from_millis(settings.tick_ms));
    let mut building = Building::new(bounds, settings.num_cars as usize, scenario);

    loop {
        select! {
            recv(command_rx) -> msg => {
                match msg {
                    Ok(command) => building.apply(command),
                    Err(_) => break,
                }
            },
            recv(timer) -> _ => {
                if building.now() >= settings.ticks {
                    break;
                }
                for event in building.tick() {
                    debug!("tick {}: {:?}", building.now(), event);
                    if event_tx.send(event).is_err() {
                        warn!("Controller is gone, stopping simulation");
                        return
                    }
                }
            },
        }
    }
    info!("Simulation finished after {} ticks", building.now());
    let _ = event_tx.send(Event::Shutdown);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> FloorBounds {
        FloorBounds::new(0, 5).unwrap()
    }

    #[test]
    fn new_car_reports_idle_once() {
        let mut car = SimCar::new(0);
        assert!(matches!(car.step(0), Some(Event::Idle { car: 0, .. })));
        assert_eq!(car.step(0), None);
    }

    #[test]
    fn car_passes_floors_then_stops() {
        let mut car = SimCar::new(0);
        car.apply(Command::DestinationQueue(vec![2]));
        assert!(matches!(car.step(3), Some(Event::PassingFloor { car: 3, floor: 1, direction: Direction::Up, .. })));
        assert_eq!(car.step(3), None);
        assert_eq!(car.floor, 2);
        assert!(matches!(car.step(3), Some(Event::StoppedAtFloor { car: 3, floor: 2, .. })));
        assert_eq!(car.destination, None);
    }

    #[test]
    fn command_to_current_floor_stops_there() {
        let mut car = SimCar::new(4);
        car.apply(Command::DestinationQueue(vec![4]));
        assert!(matches!(car.step(0), Some(Event::StoppedAtFloor { floor: 4, .. })));
    }

    #[test]
    fn scenario_entries_fire_on_their_tick() {
        let scenario = vec![
            ScenarioEntry { tick: 2, action: ScenarioAction::Press { call: Call::HallDown, floor: 3, car: None } },
            ScenarioEntry { tick: 1, action: ScenarioAction::Load { load: 0.5, car: 0 } },
            ScenarioEntry { tick: 2, action: ScenarioAction::Press { call: Call::Rider, floor: 5, car: Some(0) } },
        ];
        let mut building = Building::new(bounds(), 1, scenario);

        let first = building.tick();
        assert_eq!(building.cars[0].load_factor, 0.5);
        assert!(matches!(first.as_slice(), [Event::Idle { .. }]));

        let second = building.tick();
        assert_eq!(second, vec![
            Event::HallButton { floor: 3, direction: Direction::Down },
            Event::RiderButton { car: 0, floor: 5 },
        ]);
    }
}
