use crate::board::{Board, Cell};
use crate::eval::Evaluator;
use crate::player::Symbol;
use crate::scores::{Scores, DRAW, LOSS, WIN};
use log::debug;

pub const DEFAULT_DEPTH: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
  /// Plies searched below the root move.
  pub depth: u32,
  /// Cut sibling subtrees once `alpha >= beta`. Turning it off gives plain minimax.
  pub alpha_beta: bool,
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      depth: DEFAULT_DEPTH,
      alpha_beta: true,
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
  pub nodes: u64,
  pub leaves: u64,
  pub cutoffs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
  pub cell: Cell,
  pub score: i32,
  pub stats: SearchStats,
}

/// Minimax with alpha-beta pruning over the frontier, for one side.
///
/// The board passed to [`SearchEngine::search`] is mutated in place while the tree is explored;
/// every placement is undone before its frame returns, so the board comes back unchanged.
pub struct SearchEngine {
  me: Symbol,
  config: SearchConfig,
  evaluator: Evaluator,
  stats: SearchStats,
}

impl SearchEngine {
  pub fn new(me: Symbol, config: SearchConfig) -> Self {
    Self {
      me,
      config,
      evaluator: Evaluator::new(me),
      stats: SearchStats::default(),
    }
  }

  /// Pick the best move for `me`. Returns `None` only if there is no candidate move at all,
  /// i.e. the board is full.
  pub fn search(&mut self, board: &mut Board) -> Option<SearchResult> {
    self.stats = SearchStats::default();

    // First move of the game
    if board.is_empty() {
      return Some(SearchResult {
        cell: Cell::center(),
        score: DRAW,
        stats: self.stats,
      });
    }

    let candidates = board.frontier();
    let mut best = *candidates.first()?;
    let mut best_score = LOSS;
    let mut alpha = LOSS;
    let beta = WIN;

    for &cell in &candidates {
      let score = self.minimax(board, cell, self.config.depth, true, alpha, beta);
      debug!("candidate {} for {} scored {}", cell, self.me, score);
      // ties keep the earlier candidate
      if score > best_score {
        best_score = score;
        best = cell;
        if self.config.alpha_beta {
          alpha = best_score;
        }
      }
    }

    Some(SearchResult {
      cell: best,
      score: best_score,
      stats: self.stats,
    })
  }

  /// Value of placing the mover's stone at `cell`; the engine moves when `is_max`.
  fn minimax(&mut self, board: &mut Board, cell: Cell, depth: u32, is_max: bool, alpha: i32, beta: i32) -> i32 {
    self.stats.nodes += 1;
    let mover = if is_max { self.me } else { self.me.opponent() };
    let previous = board.get(cell);
    board.set(cell, mover);
    let score = self.score_placement(board, cell, depth, is_max, alpha, beta);
    board.set(cell, previous);
    score
  }

  // Body of a node with the stone already on the board
  fn score_placement(
    &mut self,
    board: &mut Board,
    cell: Cell,
    depth: u32,
    is_max: bool,
    mut alpha: i32,
    mut beta: i32,
  ) -> i32 {
    if board.check_win(cell) {
      return Scores::sentinel(is_max);
    }
    if board.check_draw() {
      return DRAW;
    }
    if depth == 0 {
      self.stats.leaves += 1;
      return self.evaluator.evaluate(board, is_max);
    }

    let candidates = board.frontier();
    debug_assert!(!candidates.is_empty(), "undecided board without candidates");

    if is_max {
      // Opponent replies: keep the lowest
      let mut value = WIN;
      for &reply in &candidates {
        value = value.min(self.minimax(board, reply, depth - 1, false, alpha, beta));
        beta = beta.min(value);
        if self.cut(alpha, beta) {
          break;
        }
      }
      value
    } else {
      // Our replies: keep the highest
      let mut value = LOSS;
      for &reply in &candidates {
        value = value.max(self.minimax(board, reply, depth - 1, true, alpha, beta));
        alpha = alpha.max(value);
        if self.cut(alpha, beta) {
          break;
        }
      }
      value
    }
  }

  fn cut(&mut self, alpha: i32, beta: i32) -> bool {
    if self.config.alpha_beta && alpha >= beta {
      self.stats.cutoffs += 1;
      return true;
    }
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::board::BOARD_SIZE;

  // Every cell but (14, 14) filled in 2-wide column stripes shifted each row: no line is
  // longer than three even after filling the gap.
  fn one_gap_board() -> Board {
    let mut board = Board::new();
    for row in 0..BOARD_SIZE {
      for col in 0..BOARD_SIZE {
        if (row, col) != (14, 14) {
          let symbol = if (col / 2 + row) % 2 == 0 { Symbol::X } else { Symbol::O };
          board.set(Cell::new(row, col), symbol);
        }
      }
    }
    board
  }

  fn put(board: &mut Board, cells: &[(usize, usize)], symbol: Symbol) {
    for &(r, c) in cells {
      board.set(Cell::new(r, c), symbol);
    }
  }

  fn run(board: &mut Board, me: Symbol, depth: u32, alpha_beta: bool) -> SearchResult {
    let mut engine = SearchEngine::new(me, SearchConfig { depth, alpha_beta });
    engine.search(board).expect("board has candidates")
  }

  #[test]
  fn empty_board_plays_center() {
    let mut board = Board::new();
    let result = run(&mut board, Symbol::X, 2, true);
    assert_eq!(result.cell, Cell::new(7, 7));
    assert_eq!(result.stats.nodes, 0);
  }

  #[test]
  fn full_board_has_no_move() {
    let mut board = Board::new();
    for row in 0..BOARD_SIZE {
      for col in 0..BOARD_SIZE {
        board.set(Cell::new(row, col), Symbol::O);
      }
    }
    let mut engine = SearchEngine::new(Symbol::X, SearchConfig::default());
    assert!(engine.search(&mut board).is_none());
  }

  #[test]
  fn blocks_a_four() {
    let mut board = Board::new();
    put(&mut board, &[(5, 3), (5, 4), (5, 5), (5, 6)], Symbol::O);
    put(&mut board, &[(5, 2), (10, 10), (10, 12), (12, 10)], Symbol::X);
    let result = run(&mut board, Symbol::X, 2, true);
    assert_eq!(result.cell, Cell::new(5, 7));
    assert!(result.score > LOSS);
  }

  #[test]
  fn search_restores_the_board() {
    let mut board = Board::new();
    put(&mut board, &[(7, 7), (8, 8)], Symbol::X);
    put(&mut board, &[(7, 8), (6, 6)], Symbol::O);
    let before = board.clone();
    run(&mut board, Symbol::X, 2, true);
    assert_eq!(board, before);
  }

  #[test]
  fn pruning_keeps_move_and_score() {
    let mut board = Board::new();
    put(&mut board, &[(7, 7)], Symbol::X);
    put(&mut board, &[(7, 8)], Symbol::O);
    let pruned = run(&mut board, Symbol::X, 2, true);
    let plain = run(&mut board, Symbol::X, 2, false);
    assert_eq!(pruned.cell, plain.cell);
    assert_eq!(pruned.score, plain.score);
    assert!(pruned.stats.nodes < plain.stats.nodes);
    assert_eq!(plain.stats.cutoffs, 0);
  }

  #[test]
  fn zero_depth_scores_leaves_directly() {
    let mut board = Board::new();
    put(&mut board, &[(7, 7)], Symbol::X);
    put(&mut board, &[(8, 8)], Symbol::O);
    let result = run(&mut board, Symbol::X, 0, true);
    assert_eq!(result.stats.nodes, board.frontier().len() as u64);
    assert_eq!(result.stats.leaves, result.stats.nodes);
  }

  #[test]
  fn last_cell_is_played_as_a_draw() {
    let mut board = one_gap_board();
    let before = board.clone();
    let result = run(&mut board, Symbol::X, 2, true);
    assert_eq!(result.cell, Cell::new(14, 14));
    assert_eq!(result.score, DRAW);
    assert_eq!(result.stats.nodes, 1);
    assert_eq!(result.stats.leaves, 0);
    assert_eq!(board, before);
  }
}
