use std::collections::BTreeSet;

use shared_resources::direction::Direction;

/// Set of requested floors, searched in numeric order.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CallSet {
    floors: BTreeSet<u8>,
}

impl CallSet {
    pub fn new() -> Self {
        CallSet::default()
    }

    /// Returns false if the floor was already present.
    pub fn add_call(&mut self, floor: u8) -> bool {
        self.floors.insert(floor)
    }

    pub fn remove_call(&mut self, floor: u8) -> bool {
        self.floors.remove(&floor)
    }

    pub fn contains(&self, floor: u8) -> bool {
        self.floors.contains(&floor)
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.floors.iter().copied()
    }

    /// First floor met when travelling from `current` in `direction`,
    /// `current` itself included.
    pub fn nearest_in_direction(&self, current: u8, direction: Direction) -> Option<u8> {
        self.nearest_in_direction_where(current, direction, |_| true)
    }

    pub fn nearest_in_direction_where<F>(&self, current: u8, direction: Direction, mut keep: F) -> Option<u8>
    where
        F: FnMut(u8) -> bool,
    {
        match direction.trajectory() {
            Direction::Down => self.floors.range(..=current).rev().copied().find(|f| keep(*f)),
            _ => self.floors.range(current..).copied().find(|f| keep(*f)),
        }
    }
}

impl FromIterator<u8> for CallSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        CallSet { floors: iter.into_iter().collect() }
    }
}

/// Outstanding hallway calls shared by the whole fleet.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CallRegistry {
    pub up_calls: CallSet,
    pub down_calls: CallSet,
}

impl CallRegistry {
    pub fn new() -> Self {
        CallRegistry::default()
    }

    /// Calls waiting to travel in `direction`. An idle car is treated as
    /// heading up.
    pub fn calls(&self, direction: Direction) -> &CallSet {
        match direction.trajectory() {
            Direction::Down => &self.down_calls,
            _ => &self.up_calls,
        }
    }

    pub fn calls_mut(&mut self, direction: Direction) -> &mut CallSet {
        match direction.trajectory() {
            Direction::Down => &mut self.down_calls,
            _ => &mut self.up_calls,
        }
    }

    pub fn add_call(&mut self, floor: u8, direction: Direction) -> bool {
        self.calls_mut(direction).add_call(floor)
    }

    pub fn remove_call(&mut self, floor: u8, direction: Direction) -> bool {
        self.calls_mut(direction).remove_call(floor)
    }

    pub fn is_empty(&self) -> bool {
        self.up_calls.is_empty() && self.down_calls.is_empty()
    }
}
