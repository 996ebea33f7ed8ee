use clap::Parser;
use std::path::PathBuf;

use crate::ai::{SearchConfig, DEFAULT_DEPTH};

/// Gomoku, computer against computer
#[derive(Parser, Debug)]
#[command(name = "gomoku", version)]
pub struct CliArgs {
  /// Search depth of the X player
  #[arg(long, default_value_t = DEFAULT_DEPTH)]
  pub depth_x: u32,

  /// Search depth of the O player
  #[arg(long, default_value_t = DEFAULT_DEPTH)]
  pub depth_o: u32,

  /// Plain minimax without alpha-beta cutoffs
  #[arg(long)]
  pub no_pruning: bool,

  /// Stop after this many moves
  #[arg(long)]
  pub max_moves: Option<usize>,

  /// Write the log to this file instead of stderr
  #[arg(long)]
  pub log_file: Option<PathBuf>,

  /// Disable coloured output
  #[arg(long)]
  pub no_color: bool,
}

impl CliArgs {
  pub fn search_config(&self, depth: u32) -> SearchConfig {
    SearchConfig {
      depth,
      alpha_beta: !self.no_pruning,
    }
  }
}
