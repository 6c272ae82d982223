/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info};
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::Building;
use crate::config::Config;
use crate::shared::BuildingSnapshot;
use crate::simulation::Command;

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    Tick,
    CommandReceived(Command),
    CommandsClosed,
    Terminate,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Runs a `Building` on a fixed tick period.
 *
 * The simulation is the only mutator of its building. Commands and ticks are handled one
 * at a time from a single `select!` loop, so a tick never sees a half-applied command.
 * A snapshot goes out after every tick and every handled command.
 *
 * # Fields
 * - `building`:        The simulated building.
 * - `max_ticks`:       Stop after this many ticks, run forever if `None`.
 * - `ticks_run`:       Ticks processed by this loop. Unlike the building's counter it survives a reset.
 * - `ticker`:          Fires once per tick period.
 * - `command_rx`:      Receives user commands.
 * - `snapshot_tx`:     Sends building snapshots to the renderer.
 * - `terminate_rx`:    Stops the loop on a message or when its sender is dropped.
 */
pub struct Simulation {
    building: Building,
    max_ticks: Option<u64>,
    ticks_run: u64,
    ticker: cbc::Receiver<Instant>,
    command_rx: cbc::Receiver<Command>,
    snapshot_tx: cbc::Sender<BuildingSnapshot>,
    terminate_rx: cbc::Receiver<()>,
}

impl Simulation {
    pub fn new(
        config: &Config,
        command_rx: cbc::Receiver<Command>,
        snapshot_tx: cbc::Sender<BuildingSnapshot>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Simulation {
        Simulation {
            building: Building::from_config(&config.building),
            max_ticks: config.simulation.max_ticks,
            ticks_run: 0,
            ticker: cbc::tick(Duration::from_millis(config.simulation.tick_period)),
            command_rx,
            snapshot_tx,
            terminate_rx,
        }
    }

    pub fn run(mut self) {
        info!(
            "Simulating {} floors with {} elevators",
            self.building.n_floors(),
            self.building.elevators().len()
        );

        // Initial state for the renderer
        if !self.publish() {
            return;
        }

        loop {
            let event = self.wait_for_event();
            if !self.handle_event(event) {
                break;
            }
        }

        info!("Simulation stopped after {} ticks", self.ticks_run);
    }

    // Returns false once the loop should stop
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Tick => {
                self.building.tick();
                self.ticks_run += 1;
                if !self.publish() {
                    return false;
                }
                match self.max_ticks {
                    Some(max) => self.ticks_run < max,
                    None => true,
                }
            }

            Event::CommandReceived(command) => {
                match command {
                    Command::Call { floor, direction } => self.building.request_elevator(floor, direction),
                    Command::Panel { elevator, floor } => self.building.request_elevator_floor(elevator, floor),
                    Command::Reset => self.building.reset(),
                    Command::Status => (),
                    Command::Quit => return false,
                }
                self.publish()
            }

            Event::CommandsClosed => {
                // Keep ticking without input
                debug!("Command channel closed");
                self.command_rx = cbc::never();
                true
            }

            Event::Terminate => false,
        }
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.terminate_rx) -> _ => Event::Terminate,

            recv(self.command_rx) -> command => {
                match command {
                    Ok(command) => Event::CommandReceived(command),
                    Err(_) => Event::CommandsClosed,
                }
            },

            recv(self.ticker) -> _ => Event::Tick,
        }
    }

    fn publish(&self) -> bool {
        match self.snapshot_tx.send(self.building.snapshot()) {
            Ok(()) => true,
            Err(_) => {
                debug!("Snapshot receiver is gone");
                false
            }
        }
    }
}
