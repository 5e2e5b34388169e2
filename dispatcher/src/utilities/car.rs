use shared_resources::direction::Direction;
use shared_resources::floor::FloorBounds;

use super::call_set::CallSet;

/// Up/down arrow lights shown by a car.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Indicators {
    pub going_up: bool,
    pub going_down: bool,
}

impl Indicators {
    pub fn new(direction: Direction) -> Self {
        Indicators {
            going_up: direction == Direction::Up,
            going_down: direction == Direction::Down,
        }
    }

    pub fn as_string(&self) -> String {
        match (self.going_up, self.going_down) {
            (true, false) => String::from("up"),
            (false, true) => String::from("down"),
            (false, false) => String::from("off"),
            (true, true) => String::from("both"),
        }
    }
}

/// Direction shown to waiting passengers. Follows the commanded destination,
/// except that a car at a terminal floor can only leave one way.
pub fn infer_indicators(current_floor: u8, destination: Option<u8>, bounds: FloorBounds) -> Indicators {
    let mut direction = match destination {
        Some(dest) if current_floor < dest => Direction::Up,
        Some(dest) if current_floor > dest => Direction::Down,
        _ => Direction::Idle,
    };
    if current_floor == bounds.bottom {
        direction = Direction::Up;
    } else if current_floor == bounds.top {
        direction = Direction::Down;
    }
    Indicators::new(direction)
}

/// Dispatch bookkeeping kept for one car. Floor and load are owned by the
/// host and read through `CarHost`.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CarState {
    pub id: usize,
    pub home_floor: u8,
    pub current_destination: Option<u8>,
    pub direction: Direction,
    pub rider_calls: CallSet,
    pub indicators: Indicators,
}

impl CarState {
    pub fn new(id: usize, home_floor: u8) -> Self {
        CarState {
            id,
            home_floor,
            current_destination: None,
            direction: Direction::Idle,
            rider_calls: CallSet::new(),
            indicators: Indicators::default(),
        }
    }

    /// Returns true if the direction changed.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction == direction {
            return false
        }
        self.direction = direction;
        true
    }

    /// True if this car is already on its way to `floor` travelling in `direction`.
    pub fn claims(&self, floor: u8, direction: Direction) -> bool {
        self.direction == direction && self.current_destination == Some(floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> FloorBounds {
        FloorBounds::new(0, 10).unwrap()
    }

    #[test]
    fn indicators_follow_destination() {
        assert_eq!(infer_indicators(3, Some(7), bounds()), Indicators { going_up: true, going_down: false });
        assert_eq!(infer_indicators(7, Some(3), bounds()), Indicators { going_up: false, going_down: true });
        assert_eq!(infer_indicators(5, Some(5), bounds()), Indicators::default());
        assert_eq!(infer_indicators(5, None, bounds()), Indicators::default());
    }

    #[test]
    fn terminal_floors_force_indicators() {
        assert_eq!(infer_indicators(0, Some(0), bounds()), Indicators::new(Direction::Up));
        assert_eq!(infer_indicators(10, Some(2), bounds()), Indicators::new(Direction::Down));
        assert_eq!(infer_indicators(10, None, bounds()), Indicators::new(Direction::Down));
    }

    #[test]
    fn set_direction_reports_changes_only() {
        let mut car = CarState::new(0, 5);
        assert_eq!(car.direction, Direction::Idle);
        assert!(car.set_direction(Direction::Up));
        assert!(!car.set_direction(Direction::Up));
        assert_eq!(car.direction, Direction::Up);
    }

    #[test]
    fn claims_needs_matching_direction_and_destination() {
        let mut car = CarState::new(0, 5);
        car.current_destination = Some(4);
        car.direction = Direction::Up;
        assert!(car.claims(4, Direction::Up));
        assert!(!car.claims(4, Direction::Down));
        assert!(!car.claims(6, Direction::Up));
    }
}
