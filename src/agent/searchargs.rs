use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// What a forced pass costs the search.
pub enum PassPolicy
{
    #[default]
    /// A forced pass uses up one ply of lookahead, exactly like a placement.
    ConsumesPly,

    /// A forced pass hands the move to the opponent without using up lookahead.
    Free,
}

impl PassPolicy
{
    /// The ply at which the opponent moves after a forced pass at `ply`.
    pub fn after_pass(&self, ply: Depth) -> Depth
    {
        match self
        {
            | Self::ConsumesPly => ply + 1,
            | Self::Free => ply,
        }
    }
}

impl std::fmt::Display for PassPolicy
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::ConsumesPly => "consume",
            | Self::Free => "free",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for PassPolicy
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "consume" => Ok(Self::ConsumesPly),
            | "free" => Ok(Self::Free),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Options with which the user can control a search.
pub struct SearchArgs
{
    /// The lookahead, in plies, counted from the position the search starts in.
    pub depth:  Depth,
    pub passes: PassPolicy,
}

impl SearchArgs
{
    /// A search to the given depth that charges a ply for every forced pass.
    pub fn new(depth: Depth) -> Self
    {
        SearchArgs {
            depth,
            passes: PassPolicy::default(),
        }
    }

    pub fn with_passes(self, passes: PassPolicy) -> Self
    {
        SearchArgs { passes, ..self }
    }

    /// Tries to parse args of the form `depth <n> [passes <consume|free>]` into a set of search options.
    pub fn parse(args: &[&str]) -> Result<SearchArgs>
    {
        let base = Error::for_parse::<Self>(args.join(" "));

        let [mode, value, rest @ ..] = args
        else
        {
            let err = Error::new(Kind::ParseError, "Search options require a depth and a corresponding value.".into());
            return Err(err.chain(base));
        };

        if *mode != "depth"
        {
            let err = Error::new(Kind::InvalidOption, format!("Unknown search mode '{}'.", mode));
            return Err(err.chain(base));
        }

        let Ok(depth) = value.parse::<u8>().map(Depth::from)
        else
        {
            let err = Error::for_parse::<Depth>(value.to_string());
            return Err(err.chain(base));
        };

        let passes = match rest
        {
            | [] => PassPolicy::default(),
            | ["passes", policy] => policy.parse::<PassPolicy>().map_err(|err| err.chain(base.clone()))?,
            | _ =>
            {
                let err = Error::new(Kind::InvalidOption, format!("Unexpected trailing options '{}'.", rest.join(" ")));
                return Err(err.chain(base));
            }
        };

        Ok(SearchArgs { depth, passes })
    }
}
