use arrayvec::ArrayVec;

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A particular line taken by the search. Passes are not recorded.
pub struct Variation
{
    pub moves: ArrayVec<Move, { scalars::MAXIMUM_PLY }>,
}

impl Variation
{
    /// Replaces this line with the move followed by the rest of the given line.
    pub fn load(&mut self, mv: Move, rest: &Variation)
    {
        self.moves.clear();
        self.moves.push(mv);

        // A game has at most 60 placements, so this never truncates.
        let room = self.moves.remaining_capacity();
        self.moves.extend(rest.moves.iter().copied().take(room));
    }
}

impl std::fmt::Display for Variation
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", itertools::join(self.moves.iter(), " "))
    }
}
