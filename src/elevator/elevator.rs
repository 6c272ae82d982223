use crate::shared::{Behaviour, CallDirection, Direction, ElevatorState, FloorCall};
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

/**
 * A single elevator car.
 *
 * The `Elevator` owns its position and the set of floors it still has to visit, and moves
 * one floor per call to `advance_one_step`. Floors are assumed to be validated by the owner
 * of the elevator before they are handed in.
 *
 * # Fields
 * - `id`:                  Index of the elevator inside its building.
 * - `floor`:               The floor the elevator currently stands at.
 * - `direction`:           Current direction of travel, `Idle` iff `destinations` is empty.
 * - `destinations`:        Floors still to be visited, both accepted hall calls and car-panel requests.
 *                          Never contains `floor`.
 */
#[derive(Debug, Clone)]
pub struct Elevator {
    id: usize,
    floor: u8,
    direction: Direction,
    destinations: BTreeSet<u8>,
}

impl Elevator {
    pub fn new(id: usize) -> Elevator {
        Elevator {
            id,
            floor: 0,
            direction: Direction::Idle,
            destinations: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_floor(&self) -> u8 {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> Behaviour {
        Behaviour::from(self.direction)
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle
    }

    /// Destination floors in ascending order.
    pub fn destinations(&self) -> impl Iterator<Item = u8> + '_ {
        self.destinations.iter().copied()
    }

    pub fn add_destination(&mut self, floor: u8) {
        // The current floor is reached already
        if floor != self.floor {
            self.destinations.insert(floor);
        }
        self.recompute_direction();
    }

    pub fn remove_destination(&mut self, floor: u8) {
        self.destinations.remove(&floor);
        self.recompute_direction();
    }

    pub fn has_destination(&self, floor: u8) -> bool {
        self.destinations.contains(&floor)
    }

    /**
     * Selects the floor the elevator is heading for.
     *
     * Keeps going in the current direction while there is a destination strictly ahead:
     * the closest one above when going up, the closest one below when going down. Otherwise
     * the nearest remaining floor is taken, the lower one on ties. Since the current floor is
     * never a destination, everything left lies behind the car at that point.
     */
    pub fn next_destination(&self) -> Option<u8> {
        if self.destinations.is_empty() {
            return None;
        }

        let ahead = match self.direction {
            Direction::Up => self.destinations.range((Excluded(self.floor), Unbounded)).next(),
            Direction::Down => self.destinations.range(..self.floor).next_back(),
            Direction::Idle => None,
        };
        if let Some(&floor) = ahead {
            return Some(floor);
        }

        self.destinations
            .iter()
            .copied()
            .min_by_key(|&floor| self.floor.abs_diff(floor))
    }

    pub fn recompute_direction(&mut self) {
        self.direction = match self.next_destination() {
            Some(target) if target > self.floor => Direction::Up,
            Some(target) if target < self.floor => Direction::Down,
            _ => Direction::Idle,
        };
    }

    /// Moves one floor toward the next destination. Returns `false` if there was nowhere to go.
    pub fn advance_one_step(&mut self) -> bool {
        let target = match self.next_destination() {
            Some(target) => target,
            None => return false,
        };

        let moved = if target > self.floor {
            self.floor += 1;
            true
        } else if target < self.floor {
            self.floor -= 1;
            true
        } else {
            false
        };

        if self.floor == target {
            self.destinations.remove(&target);
        }
        self.recompute_direction();
        moved
    }

    /// Whether this elevator can take `call` without leaving its current sweep.
    pub fn can_serve(&self, call: &FloorCall) -> bool {
        match (self.direction, call.direction) {
            (Direction::Idle, _) => true,
            (Direction::Up, CallDirection::Up) => call.floor >= self.floor,
            (Direction::Down, CallDirection::Down) => call.floor <= self.floor,
            _ => false,
        }
    }

    /// Floors between the elevator and the call. A tie-break metric, not an arrival estimate.
    pub fn distance_to(&self, call: &FloorCall) -> u8 {
        self.floor.abs_diff(call.floor)
    }

    pub fn reset(&mut self) {
        self.floor = 0;
        self.destinations.clear();
        self.direction = Direction::Idle;
    }

    pub fn to_state(&self) -> ElevatorState {
        ElevatorState {
            id: self.id,
            floor: self.floor,
            direction: self.direction,
            behaviour: self.state(),
            destination_floors: self.destinations().collect(),
        }
    }
}
