use arrayvec::ArrayVec;

use super::consts::*;
use crate::prelude::*;

/// The discs flipped by a placement, in scan order (direction, then distance).
pub type Flips = ArrayVec<Move, CELLS>;

impl Board
{
    /// Places a disc for the player and flips everything it brackets.
    ///
    /// If the placement would flip nothing (including when the target is occupied), the board is left untouched.
    pub fn apply_move(&mut self, mv: Move, player: Player)
    {
        let flips = self.flips_for(mv.row(), mv.col(), player);
        if flips.is_empty()
        {
            return;
        }

        let disc = Cell::from(player);
        self.set(mv.row(), mv.col(), disc);
        for flipped in flips
        {
            self.set(flipped.row(), flipped.col(), disc);
        }
    }

    /// Returns every disc that placing at (row, col) would flip for the player.
    ///
    /// An empty result means the placement is illegal. Directions are scanned independently, each one
    /// collecting a run of opponent discs that only counts if a disc of the player's own closes it off.
    pub fn flips_for(&self, row: usize, col: usize, player: Player) -> Flips
    {
        let mut flips = Flips::new();
        if !self.get(row, col).is_empty()
        {
            return flips;
        }

        let (own, theirs) = (Cell::from(player), Cell::from(player.opponent()));
        for direction in Direction::all()
        {
            let mut run = Flips::new();
            let mut cursor = direction.step(row, col);

            while let Some((r, c)) = cursor
            {
                if self.get(r, c) != theirs
                {
                    break;
                }
                run.push(Move::new(r, c));
                cursor = direction.step(r, c);
            }

            // The run must be non-empty and end on one of our own discs, not on an empty cell or the edge.
            let closed = matches!(cursor, Some((r, c)) if self.get(r, c) == own);
            if closed && !run.is_empty()
            {
                flips.extend(run);
            }
        }

        flips
    }

    /// Pushes every legal placement for the player onto the list, in ascending move order.
    pub fn generate_moves(&self, player: Player, moves: &mut Vec<Move>)
    {
        moves.extend(Board::positions().filter(|mv| self.is_legal(*mv, player)));
    }

    /// Whether either player can still place a disc.
    pub fn has_any_move(&self) -> bool
    {
        Player::all().into_iter().any(|player| self.has_moves(player))
    }

    /// Whether the player has at least one legal placement.
    pub fn has_moves(&self, player: Player) -> bool
    {
        Board::positions().any(|mv| self.is_legal(mv, player))
    }

    #[inline]
    /// Whether placing here flips at least one disc.
    pub fn is_legal(&self, mv: Move, player: Player) -> bool
    {
        !self.flips_for(mv.row(), mv.col(), player).is_empty()
    }

    /// Returns every legal placement for the player, in ascending move order.
    pub fn legal_moves(&self, player: Player) -> Vec<Move>
    {
        let mut moves = Vec::new();
        self.generate_moves(player, &mut moves);
        moves
    }

    /// Returns a copy of this board with the move applied, leaving this board untouched.
    pub fn with_move(&self, mv: Move, player: Player) -> Board
    {
        let mut next = *self;
        next.apply_move(mv, player);
        next
    }
}
