pub mod macros;
pub mod structs;

pub use structs::Behaviour;
pub use structs::BuildingSnapshot;
pub use structs::CallDirection;
pub use structs::Direction;
pub use structs::ElevatorState;
pub use structs::FloorCall;
pub use structs::FloorState;
