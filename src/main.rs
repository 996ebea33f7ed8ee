use clap::Parser;
use gomoku_minimax::cli::CliArgs;
use gomoku_minimax::game::{Game, GameError};
use gomoku_minimax::game_logger;
use gomoku_minimax::terminal_ui::TerminalUI;
use std::io::stdout;
use std::process::ExitCode;

fn run(args: &CliArgs) -> Result<(), GameError> {
  // 1) Two computer players, X always moves first
  let mut game = Game::new(args.search_config(args.depth_x), args.search_config(args.depth_o))
    .with_max_moves(args.max_moves);

  // 2) Play it out
  let ui = TerminalUI::new(!args.no_color);
  game.run(&ui, &mut stdout().lock())?;
  Ok(())
}

fn main() -> ExitCode {
  let args = CliArgs::parse();

  // Logger: file when asked for, env_logger otherwise
  if let Err(e) = game_logger::init(args.log_file.as_deref()) {
    eprintln!("error: {}", e);
    return ExitCode::FAILURE;
  }

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("error: {}", e);
      ExitCode::FAILURE
    }
  }
}
