/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, trace};
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::Floor;
use crate::config::BuildingConfig;
use crate::elevator::Elevator;
use crate::shared::{BuildingSnapshot, CallDirection, Direction, FloorCall};

/**
 * Dispatches hall calls to elevators and drives them tick by tick.
 *
 * The `Building` is the only owner of its floors and elevators. Every mutation goes through
 * `request_elevator`, `request_elevator_floor`, `tick` and `reset`. Invalid input is dropped
 * without an error, which keeps the host free of error plumbing for button presses.
 *
 * # Fields
 * - `n_floors`:        Number of floors, indexed `0..n_floors`.
 * - `floors`:          Hall button state per floor.
 * - `elevators`:       The cars, indexed by their id.
 * - `call_queue`:      Hall calls no elevator could take yet, retried on every tick.
 * - `assigned_calls`:  Hall calls handed to an elevator that has not reached the floor yet.
 * - `ticks`:           Ticks processed since creation or the last reset.
 */
#[derive(Debug, Clone)]
pub struct Building {
    n_floors: u8,
    floors: Vec<Floor>,
    elevators: Vec<Elevator>,
    call_queue: VecDeque<FloorCall>,
    assigned_calls: Vec<(FloorCall, usize)>,
    ticks: u64,
}

impl Building {
    /// A building always has at least one floor, since the cars start at floor 0.
    pub fn new(n_floors: u8, n_elevators: usize) -> Building {
        let n_floors = n_floors.max(1);
        Building {
            n_floors,
            floors: (0..n_floors).map(Floor::new).collect(),
            elevators: (0..n_elevators).map(Elevator::new).collect(),
            call_queue: VecDeque::new(),
            assigned_calls: Vec::new(),
            ticks: 0,
        }
    }

    pub fn from_config(config: &BuildingConfig) -> Building {
        Building::new(config.n_floors, config.n_elevators as usize)
    }

    /***************************************/
    /*              Queries                */
    /***************************************/
    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elevator(&self, id: usize) -> Option<&Elevator> {
        self.elevators.get(id)
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn floor(&self, index: u8) -> Option<&Floor> {
        self.floors.get(index as usize)
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn queued_calls(&self) -> impl Iterator<Item = &FloorCall> + '_ {
        self.call_queue.iter()
    }

    /// Calls handed to an elevator, paired with the id of that elevator.
    pub fn assigned_calls(&self) -> &[(FloorCall, usize)] {
        &self.assigned_calls
    }

    /// Queued or assigned, but not yet served.
    pub fn is_outstanding(&self, call: &FloorCall) -> bool {
        self.call_queue.contains(call) || self.assigned_calls.iter().any(|(c, _)| c == call)
    }

    pub fn snapshot(&self) -> BuildingSnapshot {
        BuildingSnapshot {
            tick: self.ticks,
            floors: self.floors.iter().map(Floor::to_state).collect(),
            elevators: self.elevators.iter().map(Elevator::to_state).collect(),
            queued_calls: self.call_queue.iter().copied().collect(),
        }
    }

    /***************************************/
    /*              Commands               */
    /***************************************/
    pub fn request_elevator(&mut self, floor: u8, direction: CallDirection) {
        if !self.is_valid_call(floor, direction) {
            debug!("Ignoring hall call at floor {} going {}", floor, direction);
            return;
        }

        let call = FloorCall::new(floor, direction);
        if self.is_outstanding(&call) {
            debug!("Hall call {} is already outstanding", call);
            return;
        }

        self.call_queue.push_back(call);
        self.floors[floor as usize].set_requested(direction, true);
        info!("Hall call {} placed", call);

        self.try_assign(call);
    }

    /// Car-panel request. Accepted right away, no matching against hall calls.
    pub fn request_elevator_floor(&mut self, elevator_id: usize, floor: u8) {
        if floor >= self.n_floors {
            debug!("Ignoring panel request for floor {} in elevator {}", floor, elevator_id);
            return;
        }

        match self.elevators.get_mut(elevator_id) {
            Some(elevator) => {
                elevator.add_destination(floor);
                info!("Elevator {} panel request for floor {}", elevator_id, floor);
            }
            None => debug!("Ignoring panel request for unknown elevator {}", elevator_id),
        }
    }

    /**
     * Hands `call` to the best elevator able to take it.
     *
     * Candidates are the elevators for which `can_serve` holds. The closest one wins, an idle
     * elevator beats a moving one at equal distance, and the lowest id wins after that. With no
     * candidate the call stays queued. Returns the id of the chosen elevator.
     */
    pub fn try_assign(&mut self, call: FloorCall) -> Option<usize> {
        if !self.is_valid_call(call.floor, call.direction) {
            return None;
        }

        let chosen = self
            .elevators
            .iter()
            .filter(|elevator| elevator.can_serve(&call))
            .min_by_key(|elevator| (elevator.distance_to(&call), !elevator.is_idle()))
            .map(Elevator::id);

        let id = match chosen {
            Some(id) => id,
            None => {
                trace!("No elevator can take {} yet", call);
                return None;
            }
        };

        let elevator = &mut self.elevators[id];
        elevator.add_destination(call.floor);
        let arrived = !elevator.has_destination(call.floor);

        if let Some(position) = self.call_queue.iter().position(|c| *c == call) {
            self.call_queue.remove(position);
        }

        if arrived {
            info!("Elevator {} already at {}", id, call);
            self.resolve(&call);
        } else {
            info!("Assigned {} to elevator {}", call, id);
            self.assigned_calls.push((call, id));
        }

        Some(id)
    }

    /// Advances the simulation by one discrete step.
    pub fn tick(&mut self) {
        self.ticks += 1;

        for elevator in self.elevators.iter_mut() {
            if elevator.advance_one_step() {
                trace!(
                    "Elevator {} at floor {} going {:?}",
                    elevator.id(),
                    elevator.current_floor(),
                    elevator.direction()
                );
            }
        }

        self.settle_arrivals();

        let pending: Vec<FloorCall> = self.call_queue.iter().copied().collect();
        for call in pending {
            self.try_assign(call);
        }

        self.serve_passing_calls();
    }

    pub fn reset(&mut self) {
        for floor in self.floors.iter_mut() {
            floor.clear();
        }
        for elevator in self.elevators.iter_mut() {
            elevator.reset();
        }
        self.call_queue.clear();
        self.assigned_calls.clear();
        self.ticks = 0;
        info!("Building reset");
    }

    /***************************************/
    /*          Private functions          */
    /***************************************/
    fn is_valid_call(&self, floor: u8, direction: CallDirection) -> bool {
        if floor >= self.n_floors {
            return false;
        }
        match direction {
            CallDirection::Down => floor != 0,
            CallDirection::Up => floor != self.n_floors - 1,
        }
    }

    // Clears the hall button once nothing outstanding refers to it anymore
    fn resolve(&mut self, call: &FloorCall) {
        if !self.is_outstanding(call) {
            self.floors[call.floor as usize].set_requested(call.direction, false);
        }
    }

    // An assigned call is served once its elevator has dropped the floor from its destinations,
    // whichever way the elevator heads next
    fn settle_arrivals(&mut self) {
        let elevators = &self.elevators;
        let (served, waiting): (Vec<_>, Vec<_>) = self
            .assigned_calls
            .drain(..)
            .partition(|(call, id)| !elevators[*id].has_destination(call.floor));
        self.assigned_calls = waiting;

        for (call, id) in served {
            info!("Elevator {} served {}", id, call);
            self.resolve(&call);
        }
    }

    // Elevators standing at a floor take the matching hall calls there, assigned to them or not
    fn serve_passing_calls(&mut self) {
        for index in 0..self.elevators.len() {
            let floor = self.elevators[index].current_floor();
            let direction = self.elevators[index].direction();

            for call_direction in CallDirection::ALL {
                let matches = direction == Direction::Idle || direction == Direction::from(call_direction);
                let requested = self
                    .floors
                    .get(floor as usize)
                    .map_or(false, |f| f.is_requested(call_direction));
                if !matches || !requested {
                    continue;
                }

                let call = FloorCall::new(floor, call_direction);
                self.call_queue.retain(|c| *c != call);
                self.assigned_calls.retain(|(c, _)| *c != call);
                self.floors[floor as usize].set_requested(call_direction, false);
                info!("Elevator {} picked up {} on the way", index, call);
            }
        }
    }
}
