use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
  #[error("cannot create log file {}: {}", .path.display(), .source)]
  File { path: PathBuf, source: std::io::Error },
  #[error("could not install logger: {0}")]
  Install(#[from] log::SetLoggerError),
}

/// Install the process logger.
///
/// With a file the search trace goes there at debug level so the board on stdout stays
/// readable; otherwise `env_logger` reads `RUST_LOG` and writes to stderr.
pub fn init(log_file: Option<&Path>) -> Result<(), LogError> {
  match log_file {
    Some(path) => {
      let file = File::create(path).map_err(|source| LogError::File {
        path: path.to_path_buf(),
        source,
      })?;
      WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
    }
    None => {
      env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init()?;
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unwritable_log_file_names_the_path() {
    let path = Path::new("/nonexistent-gomoku-dir/game.log");
    let err = init(Some(path)).unwrap_err();
    assert!(matches!(err, LogError::File { .. }));
    assert!(err.to_string().contains("/nonexistent-gomoku-dir/game.log"));
  }
}
