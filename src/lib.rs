// Gomoku computer player: 15x15 board, exactly five in a row wins.
// Agent -> SearchEngine (minimax + alpha-beta) -> Evaluator -> Board / shapes.

pub mod agent;
pub mod ai;
pub mod board;
pub mod cli;
pub mod eval;
pub mod game;
pub mod game_logger;
pub mod player;
pub mod scores;
pub mod shapes;
pub mod terminal_ui;

pub use agent::Agent;
pub use ai::{SearchConfig, SearchEngine, SearchResult, SearchStats};
pub use board::{Axis, Board, Cell, Grid, Run, BOARD_SIZE, WIN_LENGTH};
pub use eval::Evaluator;
pub use game::{Game, GameError, GameOutcome};
pub use player::Symbol;
pub use shapes::AttackWeight;
