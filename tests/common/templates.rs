use othellomind::prelude::*;

/// A late-game position where White is to move but cannot place, while Black has d8 (58), e8 (60) and f8 (61).
pub const WHITE_MUST_PASS: &str = r"
    BWWWWWWW
    BWWBBBBW
    BBBWBBBW
    BBBBWBWW
    BWBBWWWW
    BWBBBWWB
    BBWWWWBB
    BW.W..WB
";

/// Builds a board from a diagram of `B`, `W` and `.`, one row per line; whitespace is ignored.
pub fn board(diagram: &str) -> Board
{
    let cells: Vec<Cell> = diagram
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch
        {
            | 'B' => Cell::Black,
            | 'W' => Cell::White,
            | '.' => Cell::Empty,
            | _ => panic!("unexpected character '{}' in diagram", ch),
        })
        .collect();
    assert_eq!(cells.len(), consts::CELLS, "a diagram needs exactly 64 cells");

    let mut board = Board::empty();
    for (index, cell) in cells.into_iter().enumerate()
    {
        board.set(index / consts::SIDE, index % consts::SIDE, cell);
    }
    board
}

/// Shorthand for building moves from their encoded values.
pub fn moves(encoded: &[i32]) -> Vec<Move>
{
    encoded.iter().map(|value| Move::from_encoded(*value).unwrap()).collect()
}

/// Checks that applying the move changes exactly the target and the reported flips, all to the player's colour.
pub fn check_apply(board: &Board, mv: Move, player: Player)
{
    let flips = board.flips_for(mv.row(), mv.col(), player);
    assert!(!flips.is_empty(), "{} is not legal for {}", mv, player);

    let after = board.with_move(mv, player);
    for position in Board::positions()
    {
        if position == mv || flips.contains(&position)
        {
            assert_eq!(after.at(position), Cell::from(player), "{} should now be {}", position, player);
        }
        else
        {
            assert_eq!(after.at(position), board.at(position), "{} should not have changed", position);
        }
    }

    // Every flipped disc belonged to the opponent and lies on a straight line away from the target.
    for flipped in flips.iter()
    {
        assert_eq!(board.at(*flipped), Cell::from(player.opponent()));
        let (dr, dc) = (flipped.row() as i32 - mv.row() as i32, flipped.col() as i32 - mv.col() as i32);
        assert!(dr == 0 || dc == 0 || dr.abs() == dc.abs(), "{} is not in line with {}", flipped, mv);
    }
}

/// Replays a sequence of placements, inserting passes wherever the side to move cannot place.
///
/// Panics if any placement is illegal when it is played; returns the final board and the side to move.
pub fn replay(board: Board, turn: Player, played: &[Move]) -> (Board, Player)
{
    let (mut board, mut turn) = (board, turn);
    for mv in played
    {
        if !board.has_moves(turn)
        {
            turn = turn.opponent();
        }
        assert!(board.is_legal(*mv, turn), "{} is not legal for {}", mv, turn);
        board.apply_move(*mv, turn);
        turn = turn.opponent();
    }
    (board, turn)
}
