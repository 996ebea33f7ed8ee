use crate::agent::Agent;
use crate::ai::SearchConfig;
use crate::board::{Board, Cell, BOARD_SIZE};
use crate::player::Symbol;
use crate::terminal_ui::TerminalUI;
use log::{info, warn};
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
  #[error("cell {0} is already occupied")]
  Occupied(Cell),
  #[error("cell {0} is outside the board")]
  OutOfBounds(Cell),
  #[error("terminal output failed: {0}")]
  Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
  Win { symbol: Symbol, cell: Cell, moves: usize },
  Draw { moves: usize },
  // move cap reached before the game was decided
  Aborted { moves: usize },
}

/// Canonical board plus the two agents taking turns on it.
pub struct Game {
  pub board: Board,
  agent_x: Agent,
  agent_o: Agent,
  pub moves: usize,
  pub last_move: Option<Cell>,
  pub max_moves: Option<usize>,
}

impl Game {
  pub fn new(config_x: SearchConfig, config_o: SearchConfig) -> Self {
    Self {
      board: Board::new(),
      agent_x: Agent::new(config_x),
      agent_o: Agent::new(config_o),
      moves: 0,
      last_move: None,
      max_moves: None,
    }
  }

  pub fn with_max_moves(mut self, max_moves: Option<usize>) -> Self {
    self.max_moves = max_moves;
    self
  }

  /// Put `symbol` on the canonical board, refusing cells that are off-board or taken.
  pub fn apply(&mut self, cell: Cell, symbol: Symbol) -> Result<(), GameError> {
    if cell.row >= BOARD_SIZE || cell.col >= BOARD_SIZE {
      return Err(GameError::OutOfBounds(cell));
    }
    if !self.board.get(cell).is_empty() {
      return Err(GameError::Occupied(cell));
    }
    self.board.set(cell, symbol);
    self.moves += 1;
    self.last_move = Some(cell);
    Ok(())
  }

  /// Let the side to move play once. Returns the outcome when the game is over.
  pub fn step(&mut self) -> Result<Option<GameOutcome>, GameError> {
    if self.board.check_draw() {
      warn!("step called on a full board");
      return Ok(Some(GameOutcome::Draw { moves: self.moves }));
    }

    let symbol = Symbol::to_move(self.board.occupied());
    let agent = match symbol {
      Symbol::O => self.agent_o,
      _ => self.agent_x,
    };
    let cell = agent.next_move(self.board.grid());
    self.apply(cell, symbol)?;
    info!("move #{}: {} at {}", self.moves, symbol, cell);

    if self.board.check_win(cell) {
      return Ok(Some(GameOutcome::Win {
        symbol,
        cell,
        moves: self.moves,
      }));
    }
    if self.board.check_draw() {
      return Ok(Some(GameOutcome::Draw { moves: self.moves }));
    }
    if self.max_moves.map_or(false, |max| self.moves >= max) {
      return Ok(Some(GameOutcome::Aborted { moves: self.moves }));
    }
    Ok(None)
  }

  /// Play until the game ends, drawing the board after every move.
  pub fn run<W: Write>(&mut self, ui: &TerminalUI, out: &mut W) -> Result<GameOutcome, GameError> {
    ui.draw_board(out, &self.board, self.last_move)?;
    loop {
      let outcome = self.step()?;
      ui.draw_board(out, &self.board, self.last_move)?;
      if let Some(outcome) = outcome {
        info!("game over: {:?}", outcome);
        ui.show_outcome(out, &outcome)?;
        return Ok(outcome);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn shallow() -> SearchConfig {
    SearchConfig {
      depth: 0,
      alpha_beta: true,
    }
  }

  #[test]
  fn first_step_plays_center() {
    let mut game = Game::new(shallow(), shallow());
    assert_eq!(game.step().unwrap(), None);
    assert_eq!(game.last_move, Some(Cell::new(7, 7)));
    assert_eq!(game.board.get(Cell::new(7, 7)), Symbol::X);
  }

  #[test]
  fn turns_alternate() {
    let mut game = Game::new(shallow(), shallow());
    game.step().unwrap();
    game.step().unwrap();
    assert_eq!(game.moves, 2);
    assert_eq!(game.board.occupied(), 2);
    let second = game.last_move.unwrap();
    assert_eq!(game.board.get(second), Symbol::O);
  }

  #[test]
  fn apply_rejects_bad_cells() {
    let mut game = Game::new(shallow(), shallow());
    game.apply(Cell::new(3, 3), Symbol::X).unwrap();
    assert!(matches!(game.apply(Cell::new(3, 3), Symbol::O), Err(GameError::Occupied(_))));
    let off = Cell { row: 15, col: 0 };
    assert!(matches!(game.apply(off, Symbol::O), Err(GameError::OutOfBounds(_))));
    assert_eq!(game.moves, 1);
  }

  #[test]
  fn winning_move_ends_the_game() {
    let mut game = Game::new(shallow(), shallow());
    for col in 3..7 {
      game.apply(Cell::new(2, col), Symbol::X).unwrap();
      game.apply(Cell::new(12, col * 2), Symbol::O).unwrap();
    }
    // X to move with an open four: only the two ends win outright, ties keep the first
    // one in row-major order.
    let outcome = game.step().unwrap();
    assert_eq!(
      outcome,
      Some(GameOutcome::Win {
        symbol: Symbol::X,
        cell: Cell::new(2, 2),
        moves: 9
      })
    );
  }

  #[test]
  fn move_cap_aborts() {
    let mut game = Game::new(shallow(), shallow()).with_max_moves(Some(3));
    let mut sink = Vec::new();
    let outcome = game.run(&TerminalUI::new(false), &mut sink).unwrap();
    assert_eq!(outcome, GameOutcome::Aborted { moves: 3 });
    assert!(!sink.is_empty());
  }
}
