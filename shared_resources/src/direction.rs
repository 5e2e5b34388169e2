#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    #[default]
    Idle,
    Up,
}

impl Direction {
    pub fn as_string(self) -> Option<String> {
        match self {
            Direction::Down => Some(String::from("down")),
            Direction::Up => Some(String::from("up")),
            Direction::Idle => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    /// Direction a trajectory is evaluated in. A car that has never moved
    /// looks upward first.
    pub fn trajectory(self) -> Self {
        match self {
            Direction::Idle => Direction::Up,
            moving => moving,
        }
    }
}
