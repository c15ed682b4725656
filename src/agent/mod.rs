use crate::prelude::*;

pub mod evaluators;
pub mod scalars;
pub mod search;
pub mod searchargs;
pub mod variation;

pub use evaluators::PieceDifference;
pub use scalars::*;
pub use search::*;
pub use searchargs::*;
pub use variation::*;

/// A policy by which a board is scored for the search.
///
/// The same function scores true terminal positions and positions cut off at the lookahead limit.
pub trait Evaluator
{
    /// Scores the board in the given player's favour; larger is better for `perspective`.
    fn evaluate(&self, board: &Board, perspective: Player) -> i32;
}
