use crate::ai::{SearchConfig, SearchEngine, SearchResult};
use crate::board::{Board, Cell, Grid};
use crate::player::Symbol;
use log::info;

/// Computer player. Plays whichever side is to move in the snapshot it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Agent {
  config: SearchConfig,
}

impl Agent {
  pub fn new(config: SearchConfig) -> Self {
    Self { config }
  }

  pub fn with_depth(depth: u32) -> Self {
    Self::new(SearchConfig {
      depth,
      ..SearchConfig::default()
    })
  }

  pub fn config(&self) -> SearchConfig {
    self.config
  }

  // X on an even stone count, O on an odd one
  pub fn symbol_for(snapshot: &Grid) -> Symbol {
    let occupied = snapshot.iter().flatten().filter(|s| !s.is_empty()).count();
    Symbol::to_move(occupied)
  }

  /// Choose the next move for the side to move in `snapshot`.
  ///
  /// The search runs on a private copy; the snapshot is never touched.
  ///
  /// # Panics
  ///
  /// Panics if `snapshot` has no empty cell. The game is already drawn at that point and the
  /// caller must not ask for a move.
  pub fn next_move(&self, snapshot: &Grid) -> Cell {
    match self.analyse(snapshot) {
      Some(result) => result.cell,
      None => panic!("asked for a move on a full board"),
    }
  }

  /// Like [`Agent::next_move`] but also returns the score and search statistics.
  /// `None` when the snapshot is full.
  pub fn analyse(&self, snapshot: &Grid) -> Option<SearchResult> {
    let me = Self::symbol_for(snapshot);
    let mut board = Board::from_grid(snapshot);
    let mut engine = SearchEngine::new(me, self.config);
    let result = engine.search(&mut board)?;
    info!(
      "{} plays {} (score {}, depth {}, {} nodes, {} leaves, {} cutoffs)",
      me, result.cell, result.score, self.config.depth, result.stats.nodes, result.stats.leaves, result.stats.cutoffs
    );
    Some(result)
  }
}
