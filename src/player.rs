use std::fmt;

// Content of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Symbol {
  #[default]
  Empty,
  X, // always moves first
  O,
}

impl Symbol {
  // Get the opponent's symbol. Empty has no opponent.
  pub fn opponent(self) -> Symbol {
    match self {
      Symbol::X => Symbol::O,
      Symbol::O => Symbol::X,
      Symbol::Empty => Symbol::Empty,
    }
  }

  pub fn is_empty(self) -> bool {
    self == Symbol::Empty
  }

  /// Symbol of the side to move, given how many cells are occupied.
  ///
  /// The game always alternates starting with `X`, so an even count means `X` is to move.
  pub fn to_move(occupied: usize) -> Symbol {
    if occupied % 2 == 0 {
      Symbol::X
    } else {
      Symbol::O
    }
  }

  // Console character, '_' for an empty cell
  pub fn to_char(self) -> char {
    match self {
      Symbol::Empty => '_',
      Symbol::X => 'x',
      Symbol::O => 'o',
    }
  }
}

impl fmt::Display for Symbol {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.to_char())
  }
}
