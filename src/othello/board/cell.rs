use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// The contents of a single square.
pub enum Cell
{
    Black,
    White,
    #[default]
    Empty,
}

impl Cell
{
    /// Gets the cell from its persisted value: 0 is Black, 1 is White, -1 is empty.
    pub fn new(i: i32) -> Result<Self>
    {
        match i
        {
            | 0 => Ok(Self::Black),
            | 1 => Ok(Self::White),
            | -1 => Ok(Self::Empty),
            | _ => Err(Error::new(Kind::InvalidCell, format!("expected 0, 1 or -1, got {}", i))),
        }
    }

    /// Gets the persisted value of this cell.
    pub const fn index(&self) -> i32
    {
        match self
        {
            | Self::Black => 0,
            | Self::White => 1,
            | Self::Empty => -1,
        }
    }

    pub const fn is_empty(&self) -> bool
    {
        matches!(self, Self::Empty)
    }

    /// The player owning the disc on this cell, if any.
    pub const fn owner(&self) -> Option<Player>
    {
        match self
        {
            | Self::Black => Some(Player::Black),
            | Self::White => Some(Player::White),
            | Self::Empty => None,
        }
    }

    pub fn short(&self) -> &'static str
    {
        match self.owner()
        {
            | Some(player) => player.short(),
            | None => ".",
        }
    }
}

impl From<Player> for Cell
{
    fn from(value: Player) -> Self
    {
        match value
        {
            | Player::Black => Self::Black,
            | Player::White => Self::White,
        }
    }
}

impl std::fmt::Display for Cell
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.short())
    }
}
