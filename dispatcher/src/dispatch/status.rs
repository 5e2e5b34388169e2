use shared_resources::direction::Direction;
use shared_resources::floor::FloorBounds;

use crate::utilities::car::Indicators;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CarStatus {
    pub id: usize,
    pub floor: u8,
    pub load_factor: f64,
    pub home_floor: u8,
    pub destination: Option<u8>,
    pub direction: Direction,
    pub indicators: Indicators,
    pub rider_calls: Vec<u8>,
}

/// Snapshot of the controller after handling an event.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct DispatchStatus {
    pub bounds: FloorBounds,
    pub up_calls: Vec<u8>,
    pub down_calls: Vec<u8>,
    pub cars: Vec<CarStatus>,
    pub average_load: Option<f64>,
}

impl DispatchStatus {
    pub fn has_call(&self, floor: u8, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up_calls.contains(&floor),
            Direction::Down => self.down_calls.contains(&floor),
            Direction::Idle => false,
        }
    }
}
