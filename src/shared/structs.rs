/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

/// Direction requested by a hall button. Unlike `Direction` it has no idle value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Up,
    Down,
}

impl CallDirection {
    pub const ALL: [CallDirection; 2] = [CallDirection::Up, CallDirection::Down];
}

impl From<CallDirection> for Direction {
    fn from(item: CallDirection) -> Self {
        match item {
            CallDirection::Up => Direction::Up,
            CallDirection::Down => Direction::Down,
        }
    }
}

impl FromStr for CallDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(CallDirection::Up),
            "down" | "d" => Ok(CallDirection::Down),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

impl fmt::Display for CallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallDirection::Up => write!(f, "up"),
            CallDirection::Down => write!(f, "down"),
        }
    }
}

/// Presentation state of an elevator. Always derived from its `Direction`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "movingUp")]
    MovingUp,
    #[serde(rename = "movingDown")]
    MovingDown,
}

impl From<Direction> for Behaviour {
    fn from(item: Direction) -> Self {
        match item {
            Direction::Up => Behaviour::MovingUp,
            Direction::Down => Behaviour::MovingDown,
            Direction::Idle => Behaviour::Idle,
        }
    }
}

/// An outstanding hall request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloorCall {
    pub floor: u8,
    pub direction: CallDirection,
}

impl FloorCall {
    pub fn new(floor: u8, direction: CallDirection) -> FloorCall {
        FloorCall { floor, direction }
    }
}

impl fmt::Display for FloorCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {} {}", self.floor, self.direction)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorState {
    pub id: usize,
    pub floor: u8,
    pub direction: Direction,
    pub behaviour: Behaviour,
    #[serde(rename = "destinationFloors")]
    pub destination_floors: Vec<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FloorState {
    pub floor: u8,
    #[serde(rename = "upRequested")]
    pub up_requested: bool,
    #[serde(rename = "downRequested")]
    pub down_requested: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BuildingSnapshot {
    pub tick: u64,
    pub floors: Vec<FloorState>,
    pub elevators: Vec<ElevatorState>,
    #[serde(rename = "queuedCalls")]
    pub queued_calls: Vec<FloorCall>,
}
