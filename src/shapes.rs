// Tactical shapes around a single stone: open fours and graded attacks.

use crate::board::{Axis, Board, Cell};

/// How threatening a short run is on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttackWeight {
  One = 1,
  Two = 2,
  Three = 3,
}

impl AttackWeight {
  pub const ALL: [AttackWeight; 3] = [AttackWeight::One, AttackWeight::Two, AttackWeight::Three];

  pub fn value(self) -> usize {
    self as usize
  }
}

impl Board {
  /// True if some axis through `cell` holds exactly four stones with both ends empty, and
  /// neither end can be extended into an overline by a stone sitting one further out.
  pub fn check_open_four(&self, cell: Cell) -> bool {
    Axis::ALL.iter().any(|&axis| self.open_four_on(cell, axis))
  }

  fn open_four_on(&self, cell: Cell, axis: Axis) -> bool {
    let run = self.run_length(cell, axis);
    if run.len() != 4 {
      return false;
    }
    let (back_open, fwd_open) = self.run_ends_open(cell, axis, run);
    if !back_open || !fwd_open {
      return false;
    }
    let symbol = self.get(cell);
    let (back, fwd) = run.end_offsets();
    let blocks_overline = |beyond: Option<Cell>| beyond.map_or(true, |c| self.get(c) != symbol);
    blocks_overline(cell.offset(axis, back - 1)) && blocks_overline(cell.offset(axis, fwd + 1))
  }

  /// Grade the run through `cell` on `axis`.
  ///
  /// A three needs one open end, a two or a lone stone needs both. Longer runs are not attacks.
  pub fn check_attack(&self, cell: Cell, axis: Axis) -> Option<AttackWeight> {
    let run = self.run_length(cell, axis);
    let (back_open, fwd_open) = self.run_ends_open(cell, axis, run);
    match run.len() {
      3 if back_open || fwd_open => Some(AttackWeight::Three),
      2 if back_open && fwd_open => Some(AttackWeight::Two),
      1 if back_open && fwd_open => Some(AttackWeight::One),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::player::Symbol;

  fn board_with(cells: &[(usize, usize)], symbol: Symbol) -> Board {
    let mut board = Board::new();
    for &(r, c) in cells {
      board.set(Cell::new(r, c), symbol);
    }
    board
  }

  #[test]
  fn open_four_in_a_row() {
    let board = board_with(&[(7, 5), (7, 6), (7, 7), (7, 8)], Symbol::X);
    assert!(board.check_open_four(Cell::new(7, 6)));
    assert!(board.check_open_four(Cell::new(7, 8)));
  }

  #[test]
  fn blocked_end_is_not_open_four() {
    let mut board = board_with(&[(7, 5), (7, 6), (7, 7), (7, 8)], Symbol::X);
    board.set(Cell::new(7, 4), Symbol::O);
    assert!(!board.check_open_four(Cell::new(7, 6)));
  }

  #[test]
  fn four_against_the_edge_is_not_open() {
    let board = board_with(&[(0, 0), (1, 0), (2, 0), (3, 0)], Symbol::O);
    assert!(!board.check_open_four(Cell::new(2, 0)));
  }

  #[test]
  fn same_stone_beyond_the_gap_rules_out_open_four() {
    // x _ x x x x _ : filling the gap would make six
    let mut board = board_with(&[(7, 5), (7, 6), (7, 7), (7, 8)], Symbol::X);
    board.set(Cell::new(7, 3), Symbol::X);
    assert!(!board.check_open_four(Cell::new(7, 6)));

    // an opponent stone one further out is fine
    board.set(Cell::new(7, 3), Symbol::O);
    assert!(board.check_open_four(Cell::new(7, 6)));
  }

  #[test]
  fn open_four_near_edge_with_offboard_beyond() {
    // _ x x x x _ starting at column 0: the cell beyond column 0 is off-board
    let board = board_with(&[(3, 1), (3, 2), (3, 3), (3, 4)], Symbol::X);
    assert!(board.check_open_four(Cell::new(3, 1)));
  }

  #[test]
  fn open_four_on_diagonals() {
    let board = board_with(&[(4, 4), (5, 5), (6, 6), (7, 7)], Symbol::O);
    assert!(board.check_open_four(Cell::new(5, 5)));
    let board = board_with(&[(9, 3), (8, 4), (7, 5), (6, 6)], Symbol::X);
    assert!(board.check_open_four(Cell::new(6, 6)));
  }

  #[test]
  fn lone_stone_is_weight_one() {
    let board = board_with(&[(7, 7)], Symbol::X);
    for axis in Axis::ALL {
      assert_eq!(board.check_attack(Cell::new(7, 7), axis), Some(AttackWeight::One));
    }
  }

  #[test]
  fn lone_stone_against_edge_is_nothing() {
    let board = board_with(&[(0, 7)], Symbol::X);
    assert_eq!(board.check_attack(Cell::new(0, 7), Axis::Column), None);
    assert_eq!(board.check_attack(Cell::new(0, 7), Axis::Row), Some(AttackWeight::One));
  }

  #[test]
  fn open_pair_is_weight_two() {
    let mut board = board_with(&[(7, 7), (7, 8)], Symbol::O);
    assert_eq!(board.check_attack(Cell::new(7, 7), Axis::Row), Some(AttackWeight::Two));
    board.set(Cell::new(7, 9), Symbol::X);
    assert_eq!(board.check_attack(Cell::new(7, 7), Axis::Row), None);
  }

  #[test]
  fn three_needs_a_single_open_end() {
    let mut board = board_with(&[(7, 6), (7, 7), (7, 8)], Symbol::X);
    assert_eq!(board.check_attack(Cell::new(7, 7), Axis::Row), Some(AttackWeight::Three));
    board.set(Cell::new(7, 5), Symbol::O);
    assert_eq!(board.check_attack(Cell::new(7, 7), Axis::Row), Some(AttackWeight::Three));
    board.set(Cell::new(7, 9), Symbol::O);
    assert_eq!(board.check_attack(Cell::new(7, 7), Axis::Row), None);
  }

  #[test]
  fn four_is_not_an_attack() {
    let board = board_with(&[(2, 2), (3, 2), (4, 2), (5, 2)], Symbol::X);
    assert_eq!(board.check_attack(Cell::new(3, 2), Axis::Column), None);
  }
}
