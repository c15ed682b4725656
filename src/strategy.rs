use minimax::{Evaluation, Game, Negamax, Winner, BEST_EVAL, WORST_EVAL};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A board together with the side to move, which is all the library strategies need to know.
pub struct Position
{
    pub board:   Board,
    pub to_move: Player,
}

impl From<&Session> for Position
{
    fn from(value: &Session) -> Self
    {
        Position {
            board:   value.board(),
            to_move: value.to_move(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A turn as the library sees it. Passing is only offered when no placement is.
pub enum Action
{
    Place(Move),
    Pass,
}

impl std::fmt::Display for Action
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            | Self::Place(mv) => write!(f, "{mv}"),
            | Self::Pass => write!(f, "pass"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Reversi;

impl Reversi
{
    /// The library's alpha-beta negamax, scoring by disc difference.
    pub fn negamax(depth: u8) -> Negamax<PieceCount>
    {
        Negamax::new(PieceCount, depth)
    }
}

impl Game for Reversi
{
    type S = Position;
    type M = Action;

    fn generate_moves(state: &Self::S, moves: &mut Vec<Self::M>)
    {
        let placements = state.board.legal_moves(state.to_move);
        if placements.is_empty()
        {
            if state.board.has_moves(state.to_move.opponent())
            {
                moves.push(Action::Pass);
            }
            return;
        }

        moves.extend(placements.into_iter().map(Action::Place));
    }

    fn get_winner(state: &Self::S) -> Option<Winner>
    {
        if state.board.has_any_move()
        {
            return None;
        }

        Some(match GameState::decide(&state.board).winner()
        {
            | None => Winner::Draw,
            | Some(player) if player == state.to_move => Winner::PlayerToMove,
            | Some(_) => Winner::PlayerJustMoved,
        })
    }

    fn apply(state: &mut Self::S, m: Self::M) -> Option<Self::S>
    {
        let board = match m
        {
            | Action::Place(mv) => state.board.with_move(mv, state.to_move),
            | Action::Pass => state.board,
        };

        Some(Position {
            board,
            to_move: state.to_move.opponent(),
        })
    }

    fn notation(_state: &Self::S, m: Self::M) -> Option<String>
    {
        Some(m.to_string())
    }
}

#[derive(Clone, Copy, Debug)]
/// Disc difference from the side to move.
pub struct PieceCount;

impl minimax::Evaluator for PieceCount
{
    type G = Reversi;
    fn evaluate(&self, s: &<Self::G as Game>::S) -> Evaluation
    {
        PieceDifference.evaluate(&s.board, s.to_move).clamp(WORST_EVAL as i32, BEST_EVAL as i32) as Evaluation
    }
}
