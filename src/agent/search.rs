use std::time::{Duration, Instant};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Node counts gathered over one search.
pub struct SearchStats
{
    /// Nodes that expanded at least one placement.
    pub stems:  u64,
    /// Nodes scored directly by the evaluator.
    pub leaves: u64,
    /// Nodes where the mover was forced to pass.
    pub passes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The outcome of a search from the root.
pub struct SearchResult
{
    pub mv:        Move,
    pub score:     i32,
    pub variation: Variation,
    pub stats:     SearchStats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One node of the game tree, minus its board.
struct Node
{
    ply:         Depth,
    mover:       Player,
    /// Fixed for the whole search; only the maximizing role flips, never the scoring direction.
    perspective: Player,
}

impl Node
{
    fn maximizing(&self) -> bool
    {
        self.mover == self.perspective
    }

    /// The child reached by a placement.
    fn play(&self) -> Node
    {
        Node {
            ply: self.ply + 1,
            mover: self.mover.opponent(),
            ..*self
        }
    }

    /// The child reached by a forced pass.
    fn pass(&self, policy: PassPolicy) -> Node
    {
        Node {
            ply: policy.after_pass(self.ply),
            mover: self.mover.opponent(),
            ..*self
        }
    }
}

#[derive(Clone, Debug)]
/// An exhaustive, depth-bounded minimax search.
///
/// Every node is expanded: there is no pruning and nothing is cached between calls, so the result depends only on
/// the board, the perspective and the search arguments. Children are visited in ascending move order and only a
/// strictly better score replaces the running best, so the smallest move wins every tie.
pub struct Minimax<E: Evaluator = PieceDifference>
{
    evaluator: E,
    args:      SearchArgs,
    stats:     SearchStats,
}

impl Minimax<PieceDifference>
{
    /// A piece-counting search to the given depth.
    pub fn to_depth(depth: Depth) -> Self
    {
        Minimax::new(PieceDifference, SearchArgs::new(depth))
    }
}

impl<E: Evaluator> Minimax<E>
{
    pub fn new(evaluator: E, args: SearchArgs) -> Self
    {
        Minimax {
            evaluator,
            args,
            stats: SearchStats::default(),
        }
    }

    /// Returns the best placement for `perspective`, or None if it has no legal placement.
    pub fn best_move(&mut self, board: &Board, perspective: Player) -> Option<Move>
    {
        self.search(board, perspective).map(|result| result.mv)
    }

    /// Scores a position with `mover` to act, from `perspective`'s point of view, starting at the given ply.
    pub fn evaluate(&mut self, board: &Board, ply: Depth, mover: Player, perspective: Player) -> i32
    {
        self.stats = SearchStats::default();
        let mut line = Variation::default();
        self.minimax(board, Node { ply, mover, perspective }, &mut line)
    }

    /// Searches every placement available to `perspective` and returns the best one with its score and line.
    pub fn search(&mut self, board: &Board, perspective: Player) -> Option<SearchResult>
    {
        self.stats = SearchStats::default();
        let start_time = Instant::now();

        let root = Node {
            ply: Depth::NIL,
            mover: perspective,
            perspective,
        };

        let mut best: Option<SearchResult> = None;
        let mut line = Variation::default();

        for mv in board.legal_moves(perspective)
        {
            let next = board.with_move(mv, perspective);
            let score = self.minimax(&next, root.play(), &mut line);

            // Equal scores keep the smaller move.
            let replace = match &best
            {
                | None => true,
                | Some(current) => score > current.score || (score == current.score && mv < current.mv),
            };

            if replace
            {
                let mut variation = Variation::default();
                variation.load(mv, &line);
                best = Some(SearchResult {
                    mv,
                    score,
                    variation,
                    stats: SearchStats::default(),
                });
            }
        }

        let Some(mut result) = best
        else
        {
            log::debug!("{} has no placement to search", perspective);
            return None;
        };

        result.stats = self.stats;
        self.report(&result, start_time.elapsed());
        Some(result)
    }

    /// The node counts of the most recent search.
    pub fn stats(&self) -> SearchStats
    {
        self.stats
    }

    /// Performs minimax from the given node, leaving the best line found in `variation`.
    fn minimax(&mut self, board: &Board, node: Node, variation: &mut Variation) -> i32
    {
        variation.moves.clear();

        let moves = board.legal_moves(node.mover);
        let blocked = moves.is_empty() && !board.has_moves(node.mover.opponent());

        // Plies grow by at most one per node, so a depth of 0 is never reached and searches to the end of the game.
        if node.ply == self.args.depth || board.is_full() || blocked
        {
            self.stats.leaves += 1;
            return self.evaluator.evaluate(board, node.perspective);
        }

        // The mover cannot place but the opponent can, so the turn passes without branching.
        if moves.is_empty()
        {
            self.stats.passes += 1;
            return self.minimax(board, node.pass(self.args.passes), variation);
        }

        self.stats.stems += 1;

        let maximizing = node.maximizing();
        let mut best = if maximizing { WORST } else { BEST };
        let mut line = Variation::default();

        for mv in moves
        {
            let next = board.with_move(mv, node.mover);
            let score = self.minimax(&next, node.play(), &mut line);

            let improves = if maximizing { score > best } else { score < best };
            if improves
            {
                best = score;
                variation.load(mv, &line);
            }
        }

        best
    }

    /// Logs the outcome of a search.
    fn report(&self, result: &SearchResult, time_elapsed: Duration)
    {
        let seconds = time_elapsed.as_secs_f64().max(f64::EPSILON);
        let SearchStats { stems, leaves, passes } = result.stats;

        log::debug!("found {: ^4}: scored {: >4} at depth {}", result.mv.to_string(), result.score, self.args.depth);
        log::debug!("line {}", result.variation);
        log::debug!("took {: >3.3}s with {} forced passes", time_elapsed.as_secs_f64(), passes);
        log::debug!("visited {:09}  stems ({: >8} N/s)", stems, (stems as f64 / seconds).floor() as u64);
        log::debug!("visited {:09} leaves ({: >8} N/s)", leaves, (leaves as f64 / seconds).floor() as u64);
    }
}
