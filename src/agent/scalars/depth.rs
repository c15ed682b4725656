use std::ops::Add;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A ply-representation of search depth.
pub struct Depth(u8);

impl From<u8> for Depth
{
    fn from(value: u8) -> Self
    {
        Depth::new(value)
    }
}

impl Depth
{
    /// Zero plies.
    pub const NIL: Depth = Depth::new(0);

    /// One ply.
    pub const PLY: Depth = Depth::new(1);

    /// 60 placements plus a handful of passes reach the end of any game.
    pub const MAX: Depth = Depth::new(64);

    /// Constructs a new depth.
    pub const fn new(value: u8) -> Depth
    {
        Depth(value)
    }

    /// The number of plies in this depth.
    pub const fn plies(&self) -> u8
    {
        self.0
    }

    /// Whether or not this is a valid depth; that is, it is no larger than the maximum ply count.
    pub const fn valid(&self) -> bool
    {
        self.0 <= Self::MAX.0
    }
}

impl Add<u8> for Depth
{
    type Output = Self;
    fn add(self, rhs: u8) -> Self::Output
    {
        Depth(self.0.saturating_add(rhs))
    }
}

impl std::fmt::Display for Depth
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}
