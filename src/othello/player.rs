use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The players in a game of Othello.
pub enum Player
{
    Black = 0,
    White = 1,
}

impl Player
{
    /// Returns both players, in the order their discs are encoded.
    pub const fn all() -> [Player; 2]
    {
        [Self::Black, Self::White]
    }

    /// Gets the player from its encoded value.
    pub fn new(i: i32) -> Result<Self>
    {
        match i
        {
            | 0 => Ok(Self::Black),
            | 1 => Ok(Self::White),
            | _ => Err(Error::new(Kind::InvalidPlayer, format!("expected 0 (Black) or 1 (White), got {}", i))),
        }
    }

    /// Gets the encoded value of this player.
    pub const fn index(&self) -> i32
    {
        *self as i32
    }

    /// Gets the other player.
    pub const fn opponent(&self) -> Self
    {
        match self
        {
            | Self::Black => Self::White,
            | Self::White => Self::Black,
        }
    }

    // Returns the short name for this player, for use in board diagrams.
    pub fn short(&self) -> &'static str
    {
        match self
        {
            | Self::Black => "B",
            | Self::White => "W",
        }
    }
}

impl std::fmt::Display for Player
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Black => "Black",
            | Self::White => "White",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Player
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "Black" | "B" | "b" | "0" => Ok(Self::Black),
            | "White" | "W" | "w" | "1" => Ok(Self::White),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
