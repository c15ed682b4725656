use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A placement on the board, encoded as `row * 8 + col`.
///
/// Moves order row-major, so sorting them (or generating them in board order) gives the tie-break order
/// the search depends on.
pub struct Move(u8);

impl Move
{
    /// Builds a move from its row and column, which must both be on the board.
    #[inline]
    pub fn new(row: usize, col: usize) -> Self
    {
        assert!(row < consts::SIDE && col < consts::SIDE, "({row}, {col}) is off the board");
        Move((row * consts::SIDE + col) as u8)
    }

    /// The column of this move.
    #[inline]
    pub const fn col(&self) -> usize
    {
        self.0 as usize % consts::SIDE
    }

    /// The encoded value, in [0, 63].
    #[inline]
    pub const fn encoded(&self) -> i32
    {
        self.0 as i32
    }

    /// The file letter used for a column in algebraic notation.
    pub fn file(col: usize) -> char
    {
        (b'a' + col as u8) as char
    }

    /// Decodes a move from its encoded value.
    pub fn from_encoded(value: i32) -> Result<Self>
    {
        match usize::try_from(value)
        {
            | Ok(index) if index < consts::CELLS => Ok(Move(index as u8)),
            | _ => Err(Error::for_parse::<Self>(value.to_string())),
        }
    }

    /// The row of this move.
    #[inline]
    pub const fn row(&self) -> usize
    {
        self.0 as usize / consts::SIDE
    }

    /// Encodes an optional move, where having no move at all is -1.
    pub fn sentinel(mv: Option<Move>) -> i32
    {
        mv.map(|mv| mv.encoded()).unwrap_or(-1)
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}{}", Move::file(self.col()), self.row() + 1)
    }
}

impl FromStr for Move
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        if let Ok(value) = s.parse::<i32>()
        {
            return Move::from_encoded(value);
        }

        Ok(s.parse::<MoveString>()?.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A move in algebraic notation, such as `d3`.
pub struct MoveString(String);

impl AsRef<str> for MoveString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl std::fmt::Display for MoveString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MoveString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let re = Regex::new(r"^[a-hA-H][1-8]$").map_err(|e| Error::new(Kind::InternalError, e.to_string()))?;
        if !re.is_match(s)
        {
            let err = Error::new(Kind::ParseError, "expected a file (a-h) followed by a rank (1-8)".into());
            return Err(err.chain_parse::<Self>(s.into()));
        }

        Ok(MoveString(s.to_ascii_lowercase()))
    }
}

impl From<Move> for MoveString
{
    fn from(value: Move) -> Self
    {
        MoveString(value.to_string())
    }
}

impl From<MoveString> for Move
{
    fn from(value: MoveString) -> Self
    {
        let bytes = value.0.as_bytes();
        let col = (bytes[0] - b'a') as usize;
        let row = (bytes[1] - b'1') as usize;
        Move::new(row, col)
    }
}
