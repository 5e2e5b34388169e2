use crate::direction::Direction;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Call {
    HallUp = 0,
    HallDown = 1,
    Rider = 2,
}

impl Call {
    /// Travel direction requested by a hallway call. Rider calls carry none.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Call::HallUp => Some(Direction::Up),
            Call::HallDown => Some(Direction::Down),
            Call::Rider => None,
        }
    }
}
