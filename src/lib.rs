/* Modules */
pub mod building;
pub mod config;
pub mod elevator;
pub mod shared;
pub mod simulation;

pub use building::{Building, Floor};
pub use elevator::Elevator;
pub use shared::{BuildingSnapshot, CallDirection, Direction, FloorCall};
pub use simulation::{Command, Simulation};
