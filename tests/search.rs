mod common;
use common::*;

#[cfg(test)]
mod search
{
    use super::*;
    use minimax::Strategy;
    use othellomind::prelude::*;

    #[test]
    fn opening_depth_one_takes_smallest()
    {
        let _setup = setup::setup();
        let mut search = Minimax::to_depth(Depth::new(1));
        let result = search.search(&Board::standard(), Player::Black).unwrap();

        assert_eq!(result.mv, Move::new(2, 3));
        assert_eq!(result.mv.encoded(), 19);
        assert_eq!(result.score, 3);
    }

    #[test]
    fn opening_candidates_tie_at_depth_one()
    {
        let _setup = setup::setup();
        let board = Board::standard();
        let mut search = Minimax::to_depth(Depth::new(1));

        // Every opening placement flips exactly one disc, so each subtree is worth the same.
        for mv in board.legal_moves(Player::Black)
        {
            let next = board.with_move(mv, Player::Black);
            assert_eq!(search.evaluate(&next, Depth::PLY, Player::White, Player::Black), 3);
        }

        assert_eq!(search.best_move(&board, Player::Black), Some(Move::new(2, 3)));
        assert_eq!(search.best_move(&board, Player::White), Some(Move::new(2, 4)));
    }

    #[test]
    fn deterministic()
    {
        let _setup = setup::setup();
        let board = Board::standard().with_move(Move::new(2, 3), Player::Black);

        let first = Minimax::to_depth(Depth::new(3)).search(&board, Player::White);
        let second = Minimax::to_depth(Depth::new(3)).search(&board, Player::White);
        assert_eq!(first, second);

        let mut reused = Minimax::to_depth(Depth::new(3));
        assert_eq!(reused.best_move(&board, Player::White), reused.best_move(&board, Player::White));
    }

    #[test]
    fn no_placement_is_none()
    {
        let _setup = setup::setup();
        let board = templates::board(templates::WHITE_MUST_PASS);
        let mut search = Minimax::to_depth(Depth::new(2));

        assert_eq!(search.search(&board, Player::White), None);
        assert_eq!(search.best_move(&Board::empty(), Player::Black), None);
        assert_eq!(Move::sentinel(search.best_move(&board, Player::White)), -1);
    }

    #[test]
    fn pass_consumes_a_ply()
    {
        let _setup = setup::setup();
        let board = templates::board(templates::WHITE_MUST_PASS);

        // White passes at ply 0, so Black chooses at ply 1 and its replies are scored at ply 2.
        let mut two = Minimax::to_depth(Depth::new(2));
        let passed = two.evaluate(&board, Depth::NIL, Player::White, Player::White);
        assert_eq!(two.stats().passes, 1);

        let mut one = Minimax::to_depth(Depth::new(1));
        let direct = one.evaluate(&board, Depth::NIL, Player::Black, Player::White);

        assert_eq!(passed, direct);
        assert_eq!(passed, -12);
    }

    #[test]
    fn free_pass_keeps_the_ply()
    {
        let _setup = setup::setup();
        let board = templates::board(templates::WHITE_MUST_PASS);
        let args = SearchArgs::new(Depth::new(2)).with_passes(PassPolicy::Free);

        let mut free = Minimax::new(PieceDifference, args);
        let passed = free.evaluate(&board, Depth::NIL, Player::White, Player::White);

        let mut two = Minimax::to_depth(Depth::new(2));
        let direct = two.evaluate(&board, Depth::NIL, Player::Black, Player::White);

        assert_eq!(passed, direct);
        assert_eq!(passed, -5);
    }

    #[test]
    fn black_choice_after_pass()
    {
        let _setup = setup::setup();
        let board = templates::board(templates::WHITE_MUST_PASS);

        let shallow = Minimax::to_depth(Depth::new(1)).search(&board, Player::Black).unwrap();
        assert_eq!((shallow.mv, shallow.score), (Move::new(7, 5), 12));

        let deeper = Minimax::to_depth(Depth::new(2)).search(&board, Player::Black).unwrap();
        assert_eq!((deeper.mv, deeper.score), (Move::new(7, 5), 5));
    }

    #[test]
    fn depth_zero_searches_to_the_end()
    {
        let _setup = setup::setup();
        let board = templates::board(templates::WHITE_MUST_PASS);

        let zero = Minimax::to_depth(Depth::NIL).search(&board, Player::Black).unwrap();
        let deep = Minimax::to_depth(Depth::new(10)).search(&board, Player::Black).unwrap();
        assert_eq!((zero.mv, zero.score), (deep.mv, deep.score));
        assert_eq!((zero.mv, zero.score), (Move::new(7, 2), 18));

        // A one-ply search prefers a different placement here.
        let one = Minimax::to_depth(Depth::PLY).search(&board, Player::Black).unwrap();
        assert_ne!(one.mv, zero.mv);
    }

    #[test]
    fn variation_starts_with_choice()
    {
        let _setup = setup::setup();
        let board = Board::standard();
        let result = Minimax::to_depth(Depth::new(3)).search(&board, Player::Black).unwrap();

        assert_eq!(result.variation.moves.first(), Some(&result.mv));
        assert_eq!(result.variation.moves.len(), 3);

        // The line is playable from the root, alternating sides.
        let (_, turn) = templates::replay(board, Player::Black, &result.variation.moves);
        assert_eq!(turn, Player::White);
    }

    #[test]
    fn stats_count_nodes()
    {
        let _setup = setup::setup();
        let result = Minimax::to_depth(Depth::new(2)).search(&Board::standard(), Player::Black).unwrap();

        // Four black openings, each answered by three white replies.
        assert_eq!(result.stats.stems, 4);
        assert_eq!(result.stats.leaves, 12);
        assert_eq!(result.stats.passes, 0);
    }

    #[test]
    fn full_board_is_a_leaf()
    {
        let _setup = setup::setup();
        let mut full = Board::empty();
        for mv in Board::positions()
        {
            full.set(mv.row(), mv.col(), if mv.row() < 5 { Cell::Black } else { Cell::White });
        }

        let mut search = Minimax::to_depth(Depth::new(4));
        assert_eq!(search.evaluate(&full, Depth::NIL, Player::White, Player::Black), 40 - 24);
        assert_eq!(search.stats().leaves, 1);
    }

    #[test]
    fn piece_difference()
    {
        let _setup = setup::setup();
        let board = templates::board(templates::WHITE_MUST_PASS);
        assert_eq!(PieceDifference.evaluate(&board, Player::Black), 1);
        assert_eq!(PieceDifference.evaluate(&board, Player::White), -1);
        assert_eq!(PieceDifference.evaluate(&Board::standard(), Player::White), 0);
    }

    #[test]
    fn library_negamax_moves_legally()
    {
        let _setup = setup::setup();
        let board = Board::standard();
        let position = Position {
            board,
            to_move: Player::Black,
        };

        let mut negamax = Reversi::negamax(3);
        match negamax.choose_move(&position)
        {
            | Some(Action::Place(mv)) => assert!(board.is_legal(mv, Player::Black)),
            | other => panic!("expected a placement, got {:?}", other),
        }
    }

    #[test]
    fn library_negamax_passes_when_forced()
    {
        let _setup = setup::setup();
        let position = Position {
            board:   templates::board(templates::WHITE_MUST_PASS),
            to_move: Player::White,
        };

        let mut negamax = Reversi::negamax(2);
        assert_eq!(negamax.choose_move(&position), Some(Action::Pass));
    }
}
