use crate::domain::board::Board;
use crate::domain::models::{Move, Score, Side};
use crate::domain::rules::Rules;
use crate::domain::services::MoveStrategy;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, instrument};

/// Played on an empty board instead of searching; every opening is
/// symmetric to one of a handful and the search adds nothing.
const OPENING_MOVE: Move = Move::CENTER;

/// Exhaustive minimax over the 3x3 board.
///
/// No pruning, no transposition table, no depth limit. Every child is a copy
/// of its parent with one extra mark, so the caller's board is never touched.
/// Ties resolve to the first move found in row-major order.
pub struct Minimax {
    parallel_root: bool,
    nodes_searched: AtomicUsize,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl Minimax {
    pub fn new() -> Self {
        Self {
            parallel_root: false,
            nodes_searched: AtomicUsize::new(0),
        }
    }

    /// Search the root's children on the rayon pool. Children are collected
    /// in scan order, so the chosen move is the same as a serial search.
    pub fn with_parallel_root(mut self, enabled: bool) -> Self {
        self.parallel_root = enabled;
        self
    }

    /// Nodes visited by the most recent search; 0 after an opening move.
    pub fn nodes_searched(&self) -> usize {
        self.nodes_searched.load(Ordering::Relaxed)
    }

    /// Optimal move for `side` on `board`.
    ///
    /// Returns `None` when the board is full or already decided.
    #[instrument(level = "debug", skip(self))]
    pub fn compute_next_move(&self, board: &Board, side: Side) -> Option<Move> {
        self.nodes_searched.store(0, Ordering::Relaxed);

        if board.is_empty() {
            return Some(OPENING_MOVE);
        }
        if Rules::score_board(board, side.opponent()).is_game_over() {
            return None;
        }

        let candidates = board.vacancies();
        let scores: Vec<Score> = if self.parallel_root {
            candidates[..]
                .par_iter()
                .map(|mv| self.search(&board.with(*mv, side), side.opponent()))
                .collect()
        } else {
            candidates
                .iter()
                .map(|mv| self.search(&board.with(*mv, side), side.opponent()))
                .collect()
        };

        let best = Self::choose(side, &scores).map(|i| candidates[i]);
        debug!(nodes = self.nodes_searched(), best = ?best, "minimax search complete");
        best
    }

    fn search(&self, board: &Board, to_move: Side) -> Score {
        self.nodes_searched.fetch_add(1, Ordering::Relaxed);

        let score = Rules::score_board(board, to_move.opponent());
        if score.is_game_over() {
            return score;
        }

        let scores: Vec<Score> = board
            .vacancies()
            .iter()
            .map(|mv| self.search(&board.with(*mv, to_move), to_move.opponent()))
            .collect();

        Self::choose(to_move, &scores)
            .map(|i| scores[i])
            .unwrap_or(Score::Draw)
    }

    /// Index of the best score for `side`, keeping the earliest on ties.
    fn choose(side: Side, scores: &[Score]) -> Option<usize> {
        let mut best: Option<(usize, i8)> = None;
        for (i, score) in scores.iter().enumerate() {
            let value = score.value();
            let better = match best {
                None => true,
                Some((_, current)) if side.is_maximizing() => value > current,
                Some((_, current)) => value < current,
            };
            if better {
                best = Some((i, value));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl MoveStrategy for Minimax {
    fn next_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        self.compute_next_move(board, side)
    }
}
