use itertools::iproduct;

use crate::prelude::*;

mod cell;
mod generate;
mod printers;
mod state;

pub use cell::Cell;
pub use generate::Flips;
pub use state::GameState;

pub mod consts
{
    /// The number of rows (and columns) on the board.
    pub const SIDE: usize = 8;

    /// The number of cells on the board.
    pub const CELLS: usize = SIDE * SIDE;
}

use consts::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// An 8x8 Othello board.
///
/// The board is a plain value: copying it yields a fully independent board, which is what the search relies on
/// when it explores hypothetical continuations.
pub struct Board
{
    cells: [[Cell; SIDE]; SIDE],
}

impl Default for Board
{
    fn default() -> Self
    {
        Board::standard()
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        self.diagram(f)
    }
}

impl From<[[Cell; SIDE]; SIDE]> for Board
{
    fn from(cells: [[Cell; SIDE]; SIDE]) -> Self
    {
        Board { cells }
    }
}

impl Board
{
    /// Returns the cell the move would place a disc on.
    #[inline]
    pub fn at(&self, mv: Move) -> Cell
    {
        self.cells[mv.row()][mv.col()]
    }

    /// Returns a copy of the raw cell grid.
    pub fn cells(&self) -> [[Cell; SIDE]; SIDE]
    {
        self.cells
    }

    /// Counts the discs belonging to the given player.
    pub fn count(&self, player: Player) -> usize
    {
        let disc = Cell::from(player);
        self.cells.iter().flatten().filter(|cell| **cell == disc).count()
    }

    /// Counts the empty cells.
    pub fn empties(&self) -> usize
    {
        self.cells.iter().flatten().filter(|cell| cell.is_empty()).count()
    }

    /// A board with no discs at all.
    pub fn empty() -> Self
    {
        Board {
            cells: [[Cell::Empty; SIDE]; SIDE],
        }
    }

    /// Gets the cell at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell
    {
        self.cells[row][col]
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool
    {
        !self.cells.iter().flatten().any(|cell| cell.is_empty())
    }

    /// Iterates over every cell position in row-major order, which is also ascending move order.
    pub fn positions() -> impl Iterator<Item = Move>
    {
        iproduct!(0..SIDE, 0..SIDE).map(|(row, col)| Move::new(row, col))
    }

    /// Sets the cell at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell)
    {
        self.cells[row][col] = cell;
    }

    /// The standard opening position: White on d4 and e5, Black on e4 and d5.
    pub fn standard() -> Self
    {
        let mut board = Board::empty();
        board.set(3, 3, Cell::White);
        board.set(3, 4, Cell::Black);
        board.set(4, 3, Cell::Black);
        board.set(4, 4, Cell::White);
        board
    }
}
