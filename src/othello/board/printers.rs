use itertools::Itertools;

use super::consts::*;
use crate::prelude::*;

impl Board
{
    /// Standard debug, one row per slash-separated group.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let rows = self.cells.iter().map(|row| row.iter().map(Cell::short).join("")).join("/");
        write!(f, "Board {{ {} }}", rows)
    }

    /// Labelled grid with files a-h across the top and ranks 1-8 down the side.
    pub(super) fn diagram(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let files = (0..SIDE).map(|col| Move::file(col).to_string()).join(" ");
        write!(f, "  {}", files)?;
        for (row, cells) in self.cells.iter().enumerate()
        {
            write!(f, "\n{} {}", row + 1, cells.iter().map(Cell::short).join(" "))?;
        }
        Ok(())
    }

    /// Pretty print.
    pub(super) fn pretty(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "Board {{ black: {}, white: {}, empty: {} }}\n{}",
            self.count(Player::Black),
            self.count(Player::White),
            self.empties(),
            self
        )
    }
}
