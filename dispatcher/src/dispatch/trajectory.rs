/// ----- TRAJECTORY EVALUATOR -----
/// Picks the next stop for one car travelling in one direction, merging the
/// car's own rider calls with the hallway calls no other car has claimed.

use log::debug;

use shared_resources::direction::Direction;
use shared_resources::floor::FloorBounds;

use crate::utilities::call_set::CallRegistry;
use crate::utilities::car::CarState;

/// One car looking ahead from `current_floor` in `direction`.
#[derive(Clone, Copy, Debug)]
pub struct Trajectory<'a> {
    pub car: &'a CarState,
    pub current_floor: u8,
    pub direction: Direction,
    /// False for a car that is full or offline.
    pub accepts_pickups: bool,
}

/// A floor to stop at and the direction the car serves it in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stop {
    pub floor: u8,
    pub direction: Direction,
}

pub fn best_stop_along_trajectory(
    trajectory: &Trajectory,
    fleet: &[CarState],
    registry: &CallRegistry,
    bounds: FloorBounds,
) -> Option<u8> {
    evaluate_trajectory(trajectory, fleet, registry, bounds).map(|stop| stop.floor)
}

pub fn evaluate_trajectory(
    trajectory: &Trajectory,
    fleet: &[CarState],
    registry: &CallRegistry,
    bounds: FloorBounds,
) -> Option<Stop> {
    let car = trajectory.car;
    let current = trajectory.current_floor;
    let direction = trajectory.direction.trajectory();

    debug!("car {}: evaluating {:?} from floor {}", car.id, direction, current);
    debug!(
        "car {}: rider calls {:?}, up calls {:?}, down calls {:?}",
        car.id,
        car.rider_calls.iter().collect::<Vec<_>>(),
        registry.up_calls.iter().collect::<Vec<_>>(),
        registry.down_calls.iter().collect::<Vec<_>>(),
    );

    let nearest_rider_call = car.rider_calls.nearest_in_direction(current, direction);

    let claimed_by_other = |floor: u8| {
        fleet.iter().any(|other| other.id != car.id && other.claims(floor, direction))
    };
    let mut nearest_floor_call = registry
        .calls(direction)
        .nearest_in_direction_where(current, direction, |floor| !claimed_by_other(floor));

    debug!(
        "car {}: nearest rider call {:?}, nearest floor call {:?}",
        car.id, nearest_rider_call, nearest_floor_call
    );

    if !trajectory.accepts_pickups {
        debug!("car {}: full or offline, skipping floor calls", car.id);
        nearest_floor_call = None;
    }

    let floor = match (nearest_rider_call, nearest_floor_call) {
        (None, None) => {
            if !trajectory.accepts_pickups {
                return None
            }
            let reverse_call = furthest_reverse_call(current, direction, registry, bounds);
            debug!("car {}: nearest call wanting to go back {:?}", car.id, reverse_call);
            return reverse_call.map(|floor| Stop { floor, direction: direction.opposite() })
        },
        (Some(rider_call), None) => rider_call,
        (None, Some(floor_call)) => floor_call,
        (Some(rider_call), Some(floor_call)) => match direction {
            Direction::Down => rider_call.max(floor_call),
            _ => rider_call.min(floor_call),
        },
    };
    Some(Stop { floor, direction })
}

/// Call for the opposite direction lying between `current` and the end of the
/// line, taking the one closest to the end so the car sweeps all the way out
/// before turning.
fn furthest_reverse_call(
    current: u8,
    direction: Direction,
    registry: &CallRegistry,
    bounds: FloorBounds,
) -> Option<u8> {
    let reverse = direction.opposite();
    let terminal = bounds.terminal(direction);
    registry
        .calls(reverse)
        .nearest_in_direction(terminal, reverse)
        .filter(|floor| match direction {
            Direction::Down => *floor <= current,
            _ => *floor >= current,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> FloorBounds {
        FloorBounds::new(0, 10).unwrap()
    }

    fn car(id: usize, direction: Direction, rider_calls: &[u8]) -> CarState {
        let mut car = CarState::new(id, 5);
        car.direction = direction;
        car.rider_calls = rider_calls.iter().copied().collect();
        car
    }

    fn evaluate(
        car: &CarState,
        fleet: &[CarState],
        registry: &CallRegistry,
        current_floor: u8,
        direction: Direction,
        accepts_pickups: bool,
    ) -> Option<u8> {
        let trajectory = Trajectory { car, current_floor, direction, accepts_pickups };
        best_stop_along_trajectory(&trajectory, fleet, registry, bounds())
    }

    #[test]
    fn earliest_of_rider_and_floor_call_going_up() {
        let me = car(0, Direction::Up, &[6]);
        let mut registry = CallRegistry::new();
        registry.add_call(4, Direction::Up);
        let fleet = vec![me.clone()];
        assert_eq!(evaluate(&me, &fleet, &registry, 2, Direction::Up, true), Some(4));
    }

    #[test]
    fn earliest_of_rider_and_floor_call_going_down() {
        let me = car(0, Direction::Down, &[2]);
        let mut registry = CallRegistry::new();
        registry.add_call(5, Direction::Down);
        registry.add_call(9, Direction::Down);
        let fleet = vec![me.clone()];
        assert_eq!(evaluate(&me, &fleet, &registry, 8, Direction::Down, true), Some(5));
    }

    #[test]
    fn calls_behind_are_ignored() {
        let me = car(0, Direction::Up, &[1]);
        let mut registry = CallRegistry::new();
        registry.add_call(2, Direction::Up);
        let fleet = vec![me.clone()];
        assert_eq!(evaluate(&me, &fleet, &registry, 5, Direction::Up, true), None);
    }

    #[test]
    fn floor_claimed_by_other_car_is_skipped() {
        let me = car(0, Direction::Up, &[]);
        let mut other = car(1, Direction::Up, &[]);
        other.current_destination = Some(4);
        let mut registry = CallRegistry::new();
        registry.add_call(4, Direction::Up);
        registry.add_call(7, Direction::Up);
        let fleet = vec![me.clone(), other];
        assert_eq!(evaluate(&me, &fleet, &registry, 1, Direction::Up, true), Some(7));
    }

    #[test]
    fn own_destination_is_not_a_claim() {
        let mut me = car(0, Direction::Up, &[]);
        me.current_destination = Some(4);
        let mut registry = CallRegistry::new();
        registry.add_call(4, Direction::Up);
        let fleet = vec![me.clone()];
        assert_eq!(evaluate(&me, &fleet, &registry, 1, Direction::Up, true), Some(4));
    }

    #[test]
    fn claim_in_other_direction_does_not_block() {
        let me = car(0, Direction::Up, &[]);
        let mut other = car(1, Direction::Down, &[]);
        other.current_destination = Some(4);
        let mut registry = CallRegistry::new();
        registry.add_call(4, Direction::Up);
        let fleet = vec![me.clone(), other];
        assert_eq!(evaluate(&me, &fleet, &registry, 1, Direction::Up, true), Some(4));
    }

    #[test]
    fn full_car_only_drops_off() {
        let me = car(0, Direction::Up, &[8]);
        let mut registry = CallRegistry::new();
        registry.add_call(4, Direction::Up);
        let fleet = vec![me.clone()];
        assert_eq!(evaluate(&me, &fleet, &registry, 2, Direction::Up, false), Some(8));
    }

    #[test]
    fn full_car_without_riders_ahead_has_no_stop() {
        let me = car(0, Direction::Up, &[]);
        let mut registry = CallRegistry::new();
        registry.add_call(4, Direction::Up);
        registry.add_call(9, Direction::Down);
        let fleet = vec![me.clone()];
        assert_eq!(evaluate(&me, &fleet, &registry, 2, Direction::Up, false), None);
    }

    #[test]
    fn reverse_call_nearest_the_top_is_rescued() {
        let me = car(0, Direction::Up, &[]);
        let mut registry = CallRegistry::new();
        registry.add_call(6, Direction::Down);
        registry.add_call(9, Direction::Down);
        let fleet = vec![me.clone()];
        assert_eq!(evaluate(&me, &fleet, &registry, 3, Direction::Up, true), Some(9));
    }

    #[test]
    fn reverse_call_nearest_the_bottom_is_rescued() {
        let me = car(0, Direction::Down, &[]);
        let mut registry = CallRegistry::new();
        registry.add_call(1, Direction::Up);
        registry.add_call(4, Direction::Up);
        let fleet = vec![me.clone()];
        assert_eq!(evaluate(&me, &fleet, &registry, 7, Direction::Down, true), Some(1));
    }

    #[test]
    fn rescued_call_is_served_in_reverse() {
        let me = car(0, Direction::Up, &[]);
        let mut registry = CallRegistry::new();
        registry.add_call(9, Direction::Down);
        let fleet = vec![me.clone()];
        let trajectory = Trajectory { car: &me, current_floor: 9, direction: Direction::Up, accepts_pickups: true };
        assert_eq!(
            evaluate_trajectory(&trajectory, &fleet, &registry, bounds()),
            Some(Stop { floor: 9, direction: Direction::Down })
        );
    }

    #[test]
    fn reverse_call_behind_car_is_not_rescued() {
        let me = car(0, Direction::Up, &[]);
        let mut registry = CallRegistry::new();
        registry.add_call(2, Direction::Down);
        let fleet = vec![me.clone()];
        assert_eq!(evaluate(&me, &fleet, &registry, 5, Direction::Up, true), None);
    }

    #[test]
    fn idle_car_evaluates_upward() {
        let me = car(0, Direction::Idle, &[]);
        let mut registry = CallRegistry::new();
        registry.add_call(3, Direction::Up);
        let fleet = vec![me.clone()];
        assert_eq!(evaluate(&me, &fleet, &registry, 0, Direction::Idle, true), Some(3));
    }
}
