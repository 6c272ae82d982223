pub mod command;
pub mod simulation;

pub use command::{read_commands, Command, CommandError};
pub use simulation::Simulation;
