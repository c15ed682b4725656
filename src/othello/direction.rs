use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// A compass direction on the square grid.
pub enum Direction
{
    Northwest,
    North,
    Northeast,
    West,
    East,
    Southwest,
    South,
    Southeast,
}

impl Direction
{
    #[inline]
    /// Returns all directions in scan order: row-major over the 3x3 neighbourhood.
    pub const fn all() -> [Direction; 8]
    {
        [
            Self::Northwest,
            Self::North,
            Self::Northeast,
            Self::West,
            Self::East,
            Self::Southwest,
            Self::South,
            Self::Southeast,
        ]
    }

    #[inline]
    /// The (row, column) offset of a single step in this direction.
    pub const fn offset(&self) -> (i8, i8)
    {
        match self
        {
            | Self::Northwest => (-1, -1),
            | Self::North => (-1, 0),
            | Self::Northeast => (-1, 1),
            | Self::West => (0, -1),
            | Self::East => (0, 1),
            | Self::Southwest => (1, -1),
            | Self::South => (1, 0),
            | Self::Southeast => (1, 1),
        }
    }

    #[inline]
    /// Steps once from (row, col), or returns None if that leaves the board.
    pub fn step(&self, row: usize, col: usize) -> Option<(usize, usize)>
    {
        let (dr, dc) = self.offset();
        let r = row.checked_add_signed(dr as isize)?;
        let c = col.checked_add_signed(dc as isize)?;
        (r < consts::SIDE && c < consts::SIDE).then_some((r, c))
    }
}
