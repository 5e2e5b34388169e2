use shared_resources::direction::Direction;

/// Sensor readings attached by the host to every car event.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CarReport {
    pub floor: u8,
    pub load_factor: f64,
}

/// Everything a host building can tell the controller.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    HallButton { floor: u8, direction: Direction },
    RiderButton { car: usize, floor: u8 },
    Idle { car: usize, report: CarReport },
    PassingFloor { car: usize, floor: u8, direction: Direction, report: CarReport },
    StoppedAtFloor { car: usize, floor: u8, report: CarReport },
    Shutdown,
}

impl Event {
    pub fn car(&self) -> Option<usize> {
        match self {
            Event::RiderButton { car, .. }
            | Event::Idle { car, .. }
            | Event::PassingFloor { car, .. }
            | Event::StoppedAtFloor { car, .. } => Some(*car),
            Event::HallButton { .. } | Event::Shutdown => None,
        }
    }

    pub fn floor(&self) -> Option<u8> {
        match self {
            Event::HallButton { floor, .. }
            | Event::RiderButton { floor, .. }
            | Event::PassingFloor { floor, .. }
            | Event::StoppedAtFloor { floor, .. } => Some(*floor),
            Event::Idle { report, .. } => Some(report.floor),
            Event::Shutdown => None,
        }
    }

    pub fn report(&self) -> Option<CarReport> {
        match self {
            Event::Idle { report, .. }
            | Event::PassingFloor { report, .. }
            | Event::StoppedAtFloor { report, .. } => Some(*report),
            _ => None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub enum Command {
    DestinationQueue(Vec<u8>),
    GoingUpIndicator(bool),
    GoingDownIndicator(bool),
}

/// Instruction from the controller to one car.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CarCommand {
    pub car: usize,
    pub command: Command,
}
