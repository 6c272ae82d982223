use crate::shared::{CallDirection, FloorState};

/// Hall button state of one floor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Floor {
    index: u8,
    up_requested: bool,
    down_requested: bool,
}

impl Floor {
    pub fn new(index: u8) -> Floor {
        Floor {
            index,
            ..Default::default()
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn up_requested(&self) -> bool {
        self.up_requested
    }

    pub fn down_requested(&self) -> bool {
        self.down_requested
    }

    pub fn is_requested(&self, direction: CallDirection) -> bool {
        match direction {
            CallDirection::Up => self.up_requested,
            CallDirection::Down => self.down_requested,
        }
    }

    pub(crate) fn set_requested(&mut self, direction: CallDirection, value: bool) {
        match direction {
            CallDirection::Up => self.up_requested = value,
            CallDirection::Down => self.down_requested = value,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.up_requested = false;
        self.down_requested = false;
    }

    pub fn to_state(&self) -> FloorState {
        FloorState {
            floor: self.index,
            up_requested: self.up_requested,
            down_requested: self.down_requested,
        }
    }
}
