use std::ops::RangeInclusive;

use crate::direction::Direction;

/// Closed range of floor numbers served by the fleet.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorBounds {
    pub bottom: u8,
    pub top: u8,
}

impl FloorBounds {
    pub fn new(bottom: u8, top: u8) -> Option<Self> {
        if bottom > top {
            return None
        }
        Some(FloorBounds { bottom, top })
    }

    /// Bounds spanning the lowest and highest floor number given, or `None`
    /// for an empty building.
    pub fn from_floors<I: IntoIterator<Item = u8>>(floors: I) -> Option<Self> {
        floors.into_iter().fold(None, |bounds, floor| match bounds {
            None => Some(FloorBounds { bottom: floor, top: floor }),
            Some(FloorBounds { bottom, top }) => Some(FloorBounds {
                bottom: bottom.min(floor),
                top: top.max(floor),
            }),
        })
    }

    pub fn contains(&self, floor: u8) -> bool {
        (self.bottom..=self.top).contains(&floor)
    }

    pub fn is_terminal(&self, floor: u8) -> bool {
        floor == self.bottom || floor == self.top
    }

    /// Last floor reachable travelling in `direction`.
    pub fn terminal(&self, direction: Direction) -> u8 {
        match direction.trajectory() {
            Direction::Down => self.bottom,
            _ => self.top,
        }
    }

    pub fn num_floors(&self) -> u16 {
        self.top.saturating_sub(self.bottom) as u16 + 1
    }

    pub fn floors(&self) -> RangeInclusive<u8> {
        self.bottom..=self.top
    }

    /// Parking floors for `num_cars` cars, splitting the range into
    /// `num_cars + 1` equal spans and placing one car at each inner boundary.
    pub fn home_floors(&self, num_cars: usize) -> Vec<u8> {
        let span = self.top.saturating_sub(self.bottom) as usize;
        let split = span / (num_cars + 1);
        (1..=num_cars)
            .map(|i| self.bottom + (split * i) as u8)
            .collect()
    }
}
