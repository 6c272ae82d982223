pub mod elevator;
mod elevator_tests;

pub use elevator::Elevator;
