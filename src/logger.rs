use std::fmt::Debug;

use log::{Level, LevelFilter};

pub fn init() {
  env_logger::builder()
    .filter_level(LevelFilter::Info)
    .parse_default_env()
    .init();
}

/// Logs a failure together with the caller's location and hands it on as an
/// [`anyhow::Error`].
pub trait LogExt<T> {
  fn log_warn(self, msg: &str) -> anyhow::Result<T>;
  fn log_error(self, msg: &str) -> anyhow::Result<T>;
}

impl<T, E> LogExt<T> for Result<T, E> where E: Debug {
  #[track_caller]
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    log_failure(self, Level::Warn, msg)
  }

  #[track_caller]
  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    log_failure(self, Level::Error, msg)
  }
}

#[track_caller]
fn log_failure<T, E: Debug>(result: Result<T, E>, level: Level, msg: &str) -> anyhow::Result<T> {
  match result {
    Ok(value) => Ok(value),
    Err(error) => {
      let location = std::panic::Location::caller().to_string();

      log::log!(level, "[{location}] {msg}: {error:?}");

      anyhow::bail!("{msg}: {error:?}")
    }
  }
}
