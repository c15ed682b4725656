use std::path::Path;

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A game in progress: the live board, the side to move and, once play is over, the result.
pub struct Session
{
    board:       Board,
    to_move:     Player,
    /// The side to move when the session was created. It never changes, even as play alternates.
    perspective: Player,
    winner:      GameState,
    passes:      PassPolicy,
}

impl Default for Session
{
    fn default() -> Self
    {
        Session::from(PositionString::default())
    }
}

impl From<PositionString> for Session
{
    fn from(value: PositionString) -> Self
    {
        Session::new(value.turn(), value.board())
    }
}

impl Session
{
    /// Creates a session with `turn` to move on the given board.
    pub fn new(turn: Player, board: Board) -> Self
    {
        Session {
            board,
            to_move: turn,
            perspective: turn,
            winner: GameState::Undecided,
            passes: PassPolicy::default(),
        }
    }

    /// Reads a persisted position from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self>
    {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            let base = Error::new(Kind::IoError, format!("could not read '{}'", path.display()));
            Error::from(err).chain(base)
        })?;

        let position = contents.parse::<PositionString>()?;
        log::debug!("loaded position from '{}' with {} to move", path.display(), position.turn());
        Ok(Session::from(position))
    }

    /// Selects what a forced pass costs the searches run by this session.
    pub fn with_passes(self, passes: PassPolicy) -> Self
    {
        Session { passes, ..self }
    }

    /// Returns a copy of the live board.
    pub fn board(&self) -> Board
    {
        self.board
    }

    /// The player the session was created for, whose point of view `score_from_root_perspective` takes.
    pub fn perspective(&self) -> Player
    {
        self.perspective
    }

    /// The side to move.
    pub fn to_move(&self) -> Player
    {
        self.to_move
    }

    /// The result of the game; undecided until `play_out` has finished it.
    pub fn winner(&self) -> GameState
    {
        self.winner
    }

    /// Scores the live board for the player the session was created for.
    pub fn score_from_root_perspective(&self) -> i32
    {
        PieceDifference.evaluate(&self.board, self.perspective)
    }

    /// Returns the best placement for the side to move with `depth` plies of lookahead, or None if it must pass.
    pub fn best_move(&self, depth: u8) -> Option<Move>
    {
        self.search(depth).map(|result| result.mv)
    }

    /// Like `best_move`, but keeps the score, line and node counts of the search.
    pub fn search(&self, depth: u8) -> Option<SearchResult>
    {
        let args = SearchArgs::new(Depth::from(depth)).with_passes(self.passes);
        Minimax::new(PieceDifference, args).search(&self.board, self.to_move)
    }

    /// Plays the rest of the game with both sides searching `depth` plies ahead.
    ///
    /// Returns the placements actually made; passes leave no entry. Afterwards the side to move is whoever
    /// would have moved next and the winner is decided from the final disc counts.
    pub fn play_out(&mut self, depth: u8) -> Vec<Move>
    {
        let mut played = Vec::new();

        loop
        {
            let can_move = self.board.has_moves(self.to_move);
            if !can_move && !self.board.has_moves(self.to_move.opponent())
            {
                break;
            }

            if !can_move
            {
                log::trace!("{} has no placement and passes", self.to_move);
                self.to_move = self.to_move.opponent();
                continue;
            }

            match self.best_move(depth)
            {
                | Some(mv) =>
                {
                    self.board.apply_move(mv, self.to_move);
                    played.push(mv);
                    log::debug!("{} plays {} ({})", self.to_move, mv, mv.encoded());
                }
                | None =>
                {
                    log::warn!("search found no move for {} despite legal placements; passing", self.to_move);
                }
            }

            self.to_move = self.to_move.opponent();
        }

        self.winner = GameState::decide(&self.board);
        log::info!(
            "game over after {} placements: {} (black {}, white {})",
            played.len(),
            self.winner,
            self.board.count(Player::Black),
            self.board.count(Player::White)
        );

        played
    }
}
