use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
/// An evaluator with no positional policy at all: it only counts discs.
pub struct PieceDifference;

impl Evaluator for PieceDifference
{
    fn evaluate(&self, board: &Board, perspective: Player) -> i32
    {
        board.count(perspective) as i32 - board.count(perspective.opponent()) as i32
    }
}
