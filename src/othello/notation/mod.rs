pub mod moves;
pub mod position;

pub use moves::{Move, MoveString};
pub use position::PositionString;
