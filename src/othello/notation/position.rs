use itertools::Itertools;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A persisted position: the side to move, then all 64 cells in row-major order.
///
/// The textual form is a sequence of whitespace-separated integers. The first is the side to move
/// (0 for Black, 1 for White), and each of the following 64 is 0, 1 or -1 (empty). Anything else,
/// including too few or too many cells, is rejected.
pub struct PositionString
{
    turn:  Player,
    board: Board,
}

impl PositionString
{
    pub fn new(turn: Player, board: Board) -> Self
    {
        PositionString { turn, board }
    }

    pub fn board(&self) -> Board
    {
        self.board
    }

    pub fn turn(&self) -> Player
    {
        self.turn
    }

    /// Parses a single integer token, naming its index if it is not one.
    fn integer(token: &str, index: usize) -> Result<i32>
    {
        token.parse::<i32>().map_err(|_| {
            let err = Error::new(Kind::ParseError, format!("token {} is not an integer", index));
            err.chain_parse::<Self>(token.into())
        })
    }
}

impl Default for PositionString
{
    fn default() -> Self
    {
        PositionString::new(Player::Black, Board::standard())
    }
}

impl std::fmt::Display for PositionString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.turn.index())?;
        for row in self.board.cells()
        {
            write!(f, "\n{}", row.iter().map(Cell::index).join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for PositionString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let mut tokens = s.split_whitespace().enumerate();

        let Some((index, token)) = tokens.next()
        else
        {
            return Err(Error::new(Kind::MalformedPosition, "the position is empty".into()));
        };
        let turn = Player::new(Self::integer(token, index)?).map_err(|e| {
            let at = Error::new(Kind::InvalidPlayer, "the side to move must come first".into());
            e.chain(at)
        })?;

        let mut board = Board::empty();
        let mut filled = 0;
        for (index, token) in tokens
        {
            if filled == consts::CELLS
            {
                let msg = format!("unexpected trailing value '{}' at token {}", token, index);
                return Err(Error::new(Kind::MalformedPosition, msg));
            }

            let cell = Cell::new(Self::integer(token, index)?).map_err(|e| {
                let at = Error::new(Kind::InvalidCell, format!("at token {}", index));
                e.chain(at)
            })?;
            board.set(filled / consts::SIDE, filled % consts::SIDE, cell);
            filled += 1;
        }

        if filled < consts::CELLS
        {
            let msg = format!("expected {} cells, found {}", consts::CELLS, filled);
            return Err(Error::new(Kind::MalformedPosition, msg));
        }

        Ok(PositionString { turn, board })
    }
}

impl From<&Session> for PositionString
{
    fn from(value: &Session) -> Self
    {
        PositionString::new(value.to_move(), value.board())
    }
}
