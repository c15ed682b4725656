use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use minimax::Strategy;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
/// What to do with the loaded position.
pub enum Mode
{
    /// print the disc difference for the side the position was loaded for
    Score,
    /// print the best placement for the side to move
    BestMove,
    #[default]
    /// play the game out with both sides searching
    Play,
}

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliOptions
{
    /// position file: the side to move, then 64 cells (0 black, 1 white, -1 empty)
    pub position: Option<PathBuf>,

    #[arg(short, long, default_value_t = 3)]
    /// plies of lookahead
    pub depth: u8,

    #[arg(short, long, value_enum, default_value_t = Mode::Play)]
    /// what to do with the position
    pub mode: Mode,

    #[arg(long, default_value_t = false)]
    /// let forced passes cost no lookahead
    pub free_passes: bool,

    #[arg(long, default_value_t = false)]
    /// also ask the library negamax for its move
    pub reference: bool,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,
}

impl CliOptions
{
    /// The pass policy selected on the command line.
    pub fn passes(&self) -> PassPolicy
    {
        if self.free_passes
        {
            PassPolicy::Free
        }
        else
        {
            PassPolicy::ConsumesPly
        }
    }
}

/// Runs one command-line request against a loaded session.
pub struct Runner
{
    options: CliOptions,
    session: Session,
}

impl Runner
{
    /// Loads the requested position, or the standard opening if none was given.
    pub fn new(options: CliOptions) -> Result<Self>
    {
        let session = match options.position.as_ref()
        {
            | Some(path) => Session::load(path)?,
            | None => Session::default(),
        };

        if !Depth::from(options.depth).valid()
        {
            let msg = format!("a depth of {} exceeds the maximum of {}", options.depth, Depth::MAX);
            return Err(Error::new(Kind::InvalidOption, msg));
        }

        let session = session.with_passes(options.passes());
        Ok(Runner { options, session })
    }

    pub fn session(&self) -> &Session
    {
        &self.session
    }

    /// Performs the requested mode, printing its results.
    pub fn run(&mut self) -> Result<()>
    {
        log::debug!("{} to move on\n{}", self.session.to_move(), self.session.board());

        match self.options.mode
        {
            | Mode::Score => self.score(),
            | Mode::BestMove => self.best_move(),
            | Mode::Play => self.play(),
        }
    }

    /// Prints the best placement, or -1 if the side to move must pass.
    fn best_move(&mut self) -> Result<()>
    {
        let result = self.session.search(self.options.depth);
        let mv = result.as_ref().map(|result| result.mv);

        match result
        {
            | Some(result) => println!("bestmove {} {} score {}", result.mv.encoded(), result.mv, result.score),
            | None => println!("bestmove {}", Move::sentinel(None)),
        }

        if self.options.reference
        {
            let position = Position::from(&self.session);
            let reference = Reversi::negamax(self.options.depth).choose_move(&position);
            let agrees = match (reference, mv)
            {
                | (Some(Action::Place(a)), Some(b)) => a == b,
                | (Some(Action::Pass) | None, None) => true,
                | _ => false,
            };

            match reference
            {
                | Some(action) => println!("reference {} {}", action, if agrees { "agrees" } else { "differs" }),
                | None => println!("reference none"),
            }
        }

        Ok(())
    }

    /// Plays the game out and prints the moves, the final board and the result.
    fn play(&mut self) -> Result<()>
    {
        let moves = self.session.play_out(self.options.depth);
        let encoded = moves.iter().map(|mv| mv.encoded().to_string()).collect::<Vec<_>>();
        let algebraic = moves.iter().map(|mv| MoveString::from(*mv).to_string()).collect::<Vec<_>>();

        let board = self.session.board();
        println!("moves {}", encoded.join(" "));
        println!("line {}", algebraic.join(" "));
        println!("{}", board);
        println!(
            "winner {} black {} white {}",
            self.session.winner(),
            board.count(Player::Black),
            board.count(Player::White)
        );
        Ok(())
    }

    /// Prints the disc difference from the perspective of the side the position was loaded for.
    fn score(&self) -> Result<()>
    {
        println!("score {}", self.session.score_from_root_perspective());
        Ok(())
    }
}
