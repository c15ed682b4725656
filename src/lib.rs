pub(crate) mod agent;
pub(crate) mod cli;
pub(crate) mod error;
pub mod othello;
pub(crate) mod session;
pub(crate) mod strategy;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        cli::{CliOptions, Mode, Runner},
        error::{Error, Kind, Result},
        othello::*,
        session::Session,
        strategy::{Action, PieceCount, Position, Reversi},
    };
}
