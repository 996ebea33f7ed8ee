use crate::player::Symbol;
use std::fmt;

/// Board side length.
pub const BOARD_SIZE: usize = 15;
/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Raw board snapshot exchanged with the driver.
pub type Grid = [[Symbol; BOARD_SIZE]; BOARD_SIZE];

// The 8 neighbours of a cell
const NEIGHBOURS: [(isize, isize); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Position on the board, both coordinates in `[0, BOARD_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
  pub row: usize,
  pub col: usize,
}

impl Cell {
  pub fn new(row: usize, col: usize) -> Self {
    debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
    Self { row, col }
  }

  pub fn center() -> Self {
    Self::new(BOARD_SIZE / 2, BOARD_SIZE / 2)
  }

  /// The cell `steps` away along `axis`, or `None` when that falls off the board.
  /// Negative steps walk the axis backwards.
  pub fn offset(self, axis: Axis, steps: isize) -> Option<Cell> {
    let (dr, dc) = axis.direction();
    Cell::checked(self.row as isize + dr * steps, self.col as isize + dc * steps)
  }

  // Build a cell from signed coordinates, None if off-board
  pub fn checked(row: isize, col: isize) -> Option<Cell> {
    if row < 0 || col < 0 || row >= BOARD_SIZE as isize || col >= BOARD_SIZE as isize {
      return None;
    }
    Some(Cell::new(row as usize, col as usize))
  }
}

impl fmt::Display for Cell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.row, self.col)
  }
}

/// The four line orientations through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
  Row,
  Column,
  MainDiagonal, // top-left to bottom-right
  AntiDiagonal, // bottom-left to top-right
}

impl Axis {
  pub const ALL: [Axis; 4] = [Axis::Row, Axis::Column, Axis::MainDiagonal, Axis::AntiDiagonal];

  // Unit step (row, col) in the "forward" direction of the axis
  pub fn direction(self) -> (isize, isize) {
    match self {
      Axis::Row => (0, 1),
      Axis::Column => (1, 0),
      Axis::MainDiagonal => (1, 1),
      Axis::AntiDiagonal => (-1, 1),
    }
  }
}

/// Extent of a run through a cell on one axis.
///
/// `backward` and `forward` count the same-symbol stones on each side, not including the cell
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
  pub backward: usize,
  pub forward: usize,
}

impl Run {
  pub fn len(&self) -> usize {
    1 + self.backward + self.forward
  }

  /// Signed step offsets of the first cells just past each end of the run.
  pub fn end_offsets(&self) -> (isize, isize) {
    (-(self.backward as isize) - 1, self.forward as isize + 1)
  }
}

/// Grid plus occupancy counter.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
  cells: Grid,
  occupied: usize,
}

impl Default for Board {
  fn default() -> Self {
    Self::new()
  }
}

impl Board {
  // Create an empty board
  pub fn new() -> Self {
    Self {
      cells: [[Symbol::Empty; BOARD_SIZE]; BOARD_SIZE],
      occupied: 0,
    }
  }

  /// Copy a snapshot into a fresh board, recounting occupied cells.
  pub fn from_grid(grid: &Grid) -> Self {
    let mut board = Self::new();
    for (row, line) in grid.iter().enumerate() {
      for (col, &symbol) in line.iter().enumerate() {
        if !symbol.is_empty() {
          board.set(Cell::new(row, col), symbol);
        }
      }
    }
    board
  }

  pub fn grid(&self) -> &Grid {
    &self.cells
  }

  pub fn occupied(&self) -> usize {
    self.occupied
  }

  pub fn is_empty(&self) -> bool {
    self.occupied == 0
  }

  pub fn get(&self, cell: Cell) -> Symbol {
    self.cells[cell.row][cell.col]
  }

  /// Write `symbol` into `cell`.
  ///
  /// The occupancy counter only moves on an empty/non-empty transition, so overwriting a stone
  /// with another stone (or clearing an already empty cell) leaves it untouched.
  pub fn set(&mut self, cell: Cell, symbol: Symbol) {
    let previous = std::mem::replace(&mut self.cells[cell.row][cell.col], symbol);
    match (previous.is_empty(), symbol.is_empty()) {
      (true, false) => self.occupied += 1,
      (false, true) => self.occupied -= 1,
      _ => {}
    }
  }

  /// True if the signed coordinates are on the board and the cell there is empty.
  pub fn is_valid_empty(&self, row: isize, col: isize) -> bool {
    match Cell::checked(row, col) {
      Some(cell) => self.get(cell).is_empty(),
      None => false,
    }
  }

  // Check if any of the 8 neighbours holds a stone
  pub fn has_adjacent_any(&self, cell: Cell) -> bool {
    self.neighbours(cell).any(|n| !self.get(n).is_empty())
  }

  // Check if any of the 8 neighbours holds `symbol`
  pub fn has_adjacent_symbol(&self, cell: Cell, symbol: Symbol) -> bool {
    self.neighbours(cell).any(|n| self.get(n) == symbol)
  }

  fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> {
    NEIGHBOURS
      .iter()
      .filter_map(move |&(dr, dc)| Cell::checked(cell.row as isize + dr, cell.col as isize + dc))
  }

  /// Count same-symbol cells on both sides of `cell` along `axis`.
  pub fn run_length(&self, cell: Cell, axis: Axis) -> Run {
    let symbol = self.get(cell);
    let count = |sign: isize| {
      let mut steps = 0;
      while let Some(next) = cell.offset(axis, sign * (steps as isize + 1)) {
        if self.get(next) != symbol {
          break;
        }
        steps += 1;
      }
      steps
    };
    Run {
      backward: count(-1),
      forward: count(1),
    }
  }

  /// True if the first cells just past both ends of `run` are on the board and empty.
  pub(crate) fn run_ends_open(&self, cell: Cell, axis: Axis, run: Run) -> (bool, bool) {
    let (dr, dc) = axis.direction();
    let (back, fwd) = run.end_offsets();
    let open = |steps: isize| self.is_valid_empty(cell.row as isize + dr * steps, cell.col as isize + dc * steps);
    (open(back), open(fwd))
  }

  /// True if the run through `cell` on some axis is exactly `WIN_LENGTH` long.
  ///
  /// Call right after placing the stone at `cell`. An overline of six or more does not count.
  pub fn check_win(&self, cell: Cell) -> bool {
    Axis::ALL.iter().any(|&axis| self.run_length(cell, axis).len() == WIN_LENGTH)
  }

  pub fn check_draw(&self) -> bool {
    self.occupied == TOTAL_CELLS
  }

  /// Empty cells touching at least one stone, in row-major order.
  pub fn frontier(&self) -> Vec<Cell> {
    let mut cells = Vec::new();
    for row in 0..BOARD_SIZE {
      for col in 0..BOARD_SIZE {
        let cell = Cell::new(row, col);
        if self.get(cell).is_empty() && self.has_adjacent_any(cell) {
          cells.push(cell);
        }
      }
    }
    cells
  }
}

impl fmt::Debug for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Board (occupied: {})", self.occupied)?;
    for line in self.cells.iter() {
      let row: String = line.iter().map(|s| s.to_char()).collect();
      writeln!(f, "{}", row)?;
    }
    Ok(())
  }
}
