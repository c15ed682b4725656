pub(crate) mod board;
pub mod direction;
pub(crate) mod notation;
pub mod player;

pub use board::{consts, Board, Cell, Flips, GameState};
pub use direction::Direction;
pub use notation::{Move, MoveString, PositionString};
pub use player::Player;
