//! Move ranking: the layered priority ladder.
//!
//! Each move gets a numeric priority, cheapest layers first: wipeouts and
//! transposition hints short-circuit to sentinel scores; every other move
//! starts from its static square value plus quadrant parity, and — when the
//! remaining search depth justifies it — adds mobility, stability and
//! shallow-evaluation terms measured on a speculatively applied copy of the
//! position. The ranker only assigns scores; extraction order comes from
//! [`MoveList::best_moves`] or [`MoveList::sort`].

use crate::board::{
    corner_stability, potential_mobility, weighted_mobility, Board, Move, MoveList, Square,
    SCORE_MAX, SCORE_MIN,
};

use super::weights::{
    OrderingWeights, HASH_FIRST_SCORE, HASH_SECOND_SCORE, MIN_DEPTH, QUADRANT_ID,
    SORT_ALPHA_DELTA, SQUARE_VALUE, WIPEOUT_SCORE,
};

/// Best-effort move hints and score bounds for a position, as recorded by
/// an external transposition table. Stale or absent data only costs
/// ordering quality, never correctness.
#[derive(Clone, Copy, Debug)]
pub struct HashHint {
    /// Up to two recommended squares, best first; empty slots are
    /// [`Square::NONE`]
    pub moves: [Square; 2],
    /// Lower score bound
    pub lower: i32,
    /// Upper score bound
    pub upper: i32,
}

impl Default for HashHint {
    fn default() -> Self {
        HashHint {
            moves: [Square::NONE, Square::NONE],
            lower: SCORE_MIN,
            upper: SCORE_MAX,
        }
    }
}

/// Shallow fixed-depth evaluation supplied by the search driver.
///
/// `evaluate` is the static score of `board` from its mover's point of
/// view; `search` is a bounded negamax over `depth` plies within the
/// `[alpha, beta]` window. Both may mutate internal caches, hence `&mut`.
pub trait ShallowSearch {
    fn evaluate(&mut self, board: &Board) -> i32;
    fn search(&mut self, board: &Board, alpha: i32, beta: i32, depth: i32) -> i32;
}

/// Read-only transposition-table lookup supplied by the search driver
pub trait HashProbe {
    fn probe(&self, board: &Board) -> Option<HashHint>;
}

/// The always-miss probe, for callers without a table
impl HashProbe for () {
    fn probe(&self, _board: &Board) -> Option<HashHint> {
        None
    }
}

/// Per-node ranking state: the position, its parity signature, and the
/// external collaborators.
///
/// The context never leaks speculative mutation: lookahead works on a
/// by-value scratch copy of the board, so sibling evaluations cannot
/// observe each other and no restore step can be forgotten.
pub struct OrderingContext<'a, S, H> {
    board: Board,
    empties: i32,
    parity: u8,
    /// Speculative positions visited while ranking
    pub nodes: u64,
    weights: &'a OrderingWeights,
    searcher: &'a mut S,
    table: &'a H,
}

impl<'a, S: ShallowSearch, H: HashProbe> OrderingContext<'a, S, H> {
    #[must_use]
    pub fn new(board: Board, weights: &'a OrderingWeights, searcher: &'a mut S, table: &'a H) -> Self {
        let parity = board
            .empties()
            .iter()
            .fold(0, |p, x| p ^ QUADRANT_ID[x.index()]);
        OrderingContext {
            board,
            empties: board.count_empties() as i32,
            parity,
            nodes: 0,
            weights,
            searcher,
            table,
        }
    }

    /// Assign a priority to every move in `list`.
    ///
    /// `depth` is the search depth remaining at the caller's node and
    /// `alpha` its current bound. When `depth` clears the per-empties
    /// minimum, the lookahead layer runs at a sort depth derived from it;
    /// otherwise only the fast layers apply. Identical inputs always
    /// produce identical scores.
    pub fn rank_moves(&mut self, list: &mut MoveList, hint: &HashHint, alpha: i32, depth: i32) {
        if list.is_empty() {
            return;
        }

        if depth >= MIN_DEPTH[self.empties.clamp(0, 63) as usize] {
            let parity_weight = self.weights.parity_weight(self.empties);

            let mut sort_depth = (depth - 15) / 3;
            if hint.upper < alpha {
                sort_depth -= 2;
            }
            if self.empties >= 27 {
                sort_depth += 1;
            }
            sort_depth = sort_depth.clamp(0, 6);
            let sort_alpha = SCORE_MIN.max(alpha - SORT_ALPHA_DELTA);

            #[cfg(feature = "logging")]
            log::trace!(
                "lookahead ranking: empties={} depth={depth} sort_depth={sort_depth}",
                self.empties
            );

            list.for_each_mut(|mv| {
                mv.score = self.evaluate_deep(mv, hint, parity_weight, sort_alpha, sort_depth);
            });
        } else {
            self.rank_moves_fast(list, hint);
        }
    }

    /// The fast path: static layers only, cheap enough to run at every node
    pub fn rank_moves_fast(&mut self, list: &mut MoveList, hint: &HashHint) {
        let parity_weight = self.weights.parity_weight(self.empties);
        list.for_each_mut(|mv| {
            mv.score = self.evaluate_fast(mv, hint, parity_weight);
        });
    }

    fn static_layers(&self, mv: &Move, parity_weight: i32) -> i32 {
        let mut score = SQUARE_VALUE[mv.x.index()];
        if self.parity & QUADRANT_ID[mv.x.index()] != 0 {
            score += parity_weight;
        }
        score
    }

    fn evaluate_fast(&mut self, mv: &Move, hint: &HashHint, parity_weight: i32) -> i32 {
        if mv.is_wipeout(self.board.opponent()) {
            return WIPEOUT_SCORE;
        }
        if mv.x == hint.moves[0] {
            return HASH_FIRST_SCORE;
        }
        if mv.x == hint.moves[1] {
            return HASH_SECOND_SCORE;
        }

        let w = self.weights;
        let mut score = self.static_layers(mv, parity_weight);

        let next = self.board.next(mv);
        self.nodes += 1;
        score += (36 - potential_mobility(next.mover(), next.opponent())) * w.potential_mobility;
        score += corner_stability(next.opponent()) * w.corner_stability;
        score += (36 - weighted_mobility(next.mover(), next.opponent())) * w.mobility;
        score
    }

    fn evaluate_deep(
        &mut self,
        mv: &Move,
        hint: &HashHint,
        parity_weight: i32,
        sort_alpha: i32,
        sort_depth: i32,
    ) -> i32 {
        if mv.is_wipeout(self.board.opponent()) {
            return WIPEOUT_SCORE;
        }
        if mv.x == hint.moves[0] {
            return HASH_FIRST_SCORE;
        }
        if mv.x == hint.moves[1] {
            return HASH_SECOND_SCORE;
        }

        let w = self.weights;
        let mut score = self.static_layers(mv, parity_weight);

        // Speculative apply on a by-value scratch; `self.board` is untouched
        let next = self.board.next(mv);
        self.nodes += 1;
        score += (36 - potential_mobility(next.mover(), next.opponent())) * w.potential_mobility;
        score += corner_stability(next.opponent()) * w.corner_stability;
        score += (36 - weighted_mobility(next.mover(), next.opponent())) * w.mobility;

        match sort_depth {
            0 => {
                score += ((SCORE_MAX - self.searcher.evaluate(&next)) >> 2) * w.eval;
            }
            1 => {
                score +=
                    ((SCORE_MAX - self.searcher.search(&next, SCORE_MIN, -sort_alpha, 1)) >> 1)
                        * w.eval;
            }
            2 => {
                score +=
                    ((SCORE_MAX - self.searcher.search(&next, SCORE_MIN, -sort_alpha, 2)) >> 1)
                        * w.eval;
            }
            _ => {
                // 3 to 6: full shallow search, plus a bonus when the child
                // is already known to the hash table
                if self.table.probe(&next).is_some() {
                    score += w.hash;
                }
                score += (SCORE_MAX
                    - self.searcher.search(&next, SCORE_MIN, -sort_alpha, sort_depth))
                    * w.eval;
            }
        }

        score
    }
}
