use crossterm::{
  queue,
  style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::board::{Board, Cell, BOARD_SIZE};
use crate::game::GameOutcome;
use crate::player::Symbol;
use std::io::{Result as IoResult, Write};

// Plain console view of the board for a human observer
pub struct TerminalUI {
  color: bool,
}

impl TerminalUI {
  /// "Light red" for the last stone, RGB value
  const LAST_STONE_COLOR: Color = Color::Rgb { r: 255, g: 140, b: 140 };
  const X_COLOR: Color = Color::Rgb { r: 120, g: 200, b: 255 };
  const O_COLOR: Color = Color::Rgb { r: 255, g: 220, b: 120 };

  pub fn new(color: bool) -> Self {
    Self { color }
  }

  // Column indices, padded to three characters each
  fn header<W: Write>(out: &mut W) -> IoResult<()> {
    queue!(out, Print("   "))?;
    for col in 0..BOARD_SIZE {
      queue!(out, Print(format!("{:<3}", col)))?;
    }
    queue!(out, Print("\n"))?;
    Ok(())
  }

  /// Draw the board with row and column indices on every side.
  pub fn draw_board<W: Write>(&self, out: &mut W, board: &Board, last: Option<Cell>) -> IoResult<()> {
    Self::header(out)?;
    for row in 0..BOARD_SIZE {
      queue!(out, Print(format!("{:<3}", row)))?;
      for col in 0..BOARD_SIZE {
        let cell = Cell::new(row, col);
        let symbol = board.get(cell);
        let color = if last == Some(cell) {
          Some(Self::LAST_STONE_COLOR)
        } else {
          match symbol {
            Symbol::X => Some(Self::X_COLOR),
            Symbol::O => Some(Self::O_COLOR),
            Symbol::Empty => None,
          }
        };
        match color.filter(|_| self.color) {
          Some(c) => queue!(out, SetForegroundColor(c), Print(symbol.to_char()), ResetColor, Print("  "))?,
          None => queue!(out, Print(format!("{}  ", symbol.to_char())))?,
        }
      }
      queue!(out, Print(format!("{}\n\n", row)))?;
    }
    Self::header(out)?;
    queue!(out, Print("\n"))?;
    out.flush()
  }

  pub fn show_outcome<W: Write>(&self, out: &mut W, outcome: &GameOutcome) -> IoResult<()> {
    let msg = match outcome {
      GameOutcome::Win { symbol, cell, moves } => format!("{} wins at {} after {} moves!", symbol, cell, moves),
      GameOutcome::Draw { moves } => format!("Draw game after {} moves!", moves),
      GameOutcome::Aborted { moves } => format!("Stopped after {} moves without a result.", moves),
    };
    queue!(out, Print(msg), Print("\n"))?;
    out.flush()
  }
}
