use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Represents the outcome of a game, which is only decided once neither player can move.
pub enum GameState
{
    #[default]
    Undecided,
    BlackWins,
    WhiteWins,
    Tie,
}

impl GameState
{
    /// Decides the winner of a finished board from its disc counts.
    pub fn decide(board: &Board) -> Self
    {
        let (black, white) = (board.count(Player::Black), board.count(Player::White));
        match black.cmp(&white)
        {
            | std::cmp::Ordering::Greater => Self::BlackWins,
            | std::cmp::Ordering::Less => Self::WhiteWins,
            | std::cmp::Ordering::Equal => Self::Tie,
        }
    }

    /// The winning player, if there is one.
    pub fn winner(&self) -> Option<Player>
    {
        match self
        {
            | Self::BlackWins => Some(Player::Black),
            | Self::WhiteWins => Some(Player::White),
            | Self::Undecided | Self::Tie => None,
        }
    }
}

impl std::fmt::Display for GameState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::Undecided => "Undecided",
            | Self::BlackWins => "BlackWins",
            | Self::WhiteWins => "WhiteWins",
            | Self::Tie => "Tie",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for GameState
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "Undecided" => Ok(Self::Undecided),
            | "BlackWins" => Ok(Self::BlackWins),
            | "WhiteWins" => Ok(Self::WhiteWins),
            | "Tie" => Ok(Self::Tie),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
