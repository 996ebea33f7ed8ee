// Static scoring of search leaves: a one-move lookahead for the side about to move, then a
// weighted tally of both sides' attacks.

use crate::board::{Axis, Board, Cell, BOARD_SIZE, WIN_LENGTH};
use crate::player::Symbol;
use crate::scores::{Scores, DRAW, OPPONENT_PENALTY};
use crate::shapes::AttackWeight;
use log::trace;

/// Attack counts for one side, indexed by weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackHistogram {
  counts: [i32; 4],
}

impl AttackHistogram {
  pub fn add(&mut self, weight: AttackWeight) {
    self.counts[weight.value()] += 1;
  }

  pub fn count(&self, weight: AttackWeight) -> i32 {
    self.counts[weight.value()]
  }
}

/// Leaf evaluator bound to the engine's own symbol.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
  me: Symbol,
}

impl Evaluator {
  pub fn new(me: Symbol) -> Self {
    Self { me }
  }

  /// Score `board` after a move by the engine (`is_max`) or by its opponent.
  ///
  /// The board is mutated while probing replies but is restored before returning.
  pub fn evaluate(&self, board: &mut Board, is_max: bool) -> i32 {
    if let Some(score) = self.probe_replies(board, is_max) {
      return score;
    }
    let (mine, theirs) = self.histograms(board);
    Self::combine(&mine, &theirs)
  }

  // Try every reply of the side to move next next to its own stones.
  // Some(score) when the leaf is already decided.
  fn probe_replies(&self, board: &mut Board, is_max: bool) -> Option<i32> {
    let next = if is_max { self.me.opponent() } else { self.me };
    // the side moving next is the maximizer only when the opponent just moved
    let next_wins = Scores::sentinel(!is_max);
    let mut potential_open_four = false;

    for row in 0..BOARD_SIZE {
      for col in 0..BOARD_SIZE {
        let cell = Cell::new(row, col);
        if !board.get(cell).is_empty() || !board.has_adjacent_symbol(cell, next) {
          continue;
        }
        board.set(cell, next);
        let outcome = if board.check_win(cell) {
          Some(next_wins)
        } else if board.check_draw() {
          Some(DRAW)
        } else {
          potential_open_four |= board.check_open_four(cell);
          None
        };
        board.set(cell, Symbol::Empty);
        if let Some(score) = outcome {
          trace!("leaf decided by {} at {}: {}", next, cell, score);
          return Some(score);
        }
      }
    }

    if potential_open_four {
      trace!("{} can make an open four", next);
      return Some(next_wins);
    }
    None
  }

  /// Tally the attacks of every stone into (engine, opponent) histograms.
  pub fn histograms(&self, board: &Board) -> (AttackHistogram, AttackHistogram) {
    let mut mine = AttackHistogram::default();
    let mut theirs = AttackHistogram::default();
    for row in 0..BOARD_SIZE {
      for col in 0..BOARD_SIZE {
        let cell = Cell::new(row, col);
        let symbol = board.get(cell);
        if symbol.is_empty() {
          continue;
        }
        let histogram = if symbol == self.me { &mut mine } else { &mut theirs };
        for axis in Axis::ALL {
          if !Self::axis_long_enough(cell, axis) {
            continue;
          }
          if let Some(weight) = board.check_attack(cell, axis) {
            histogram.add(weight);
          }
        }
      }
    }
    (mine, theirs)
  }

  // Diagonals shorter than five cells (near the corners) can never hold a win
  fn axis_long_enough(cell: Cell, axis: Axis) -> bool {
    const SLACK: usize = BOARD_SIZE - WIN_LENGTH;
    match axis {
      Axis::Row | Axis::Column => true,
      Axis::MainDiagonal => cell.row.abs_diff(cell.col) <= SLACK,
      Axis::AntiDiagonal => {
        let sum = cell.row + cell.col;
        sum >= WIN_LENGTH - 1 && sum <= 2 * (BOARD_SIZE - 1) - (WIN_LENGTH - 1)
      }
    }
  }

  /// Weighted difference of the two histograms.
  pub fn combine(mine: &AttackHistogram, theirs: &AttackHistogram) -> i32 {
    AttackWeight::ALL
      .iter()
      .map(|&w| {
        let m = Scores::multiplier(w);
        mine.count(w) * m - theirs.count(w) * m * OPPONENT_PENALTY
      })
      .sum()
  }
}
