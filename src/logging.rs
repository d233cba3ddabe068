//! File-backed tracing setup.
//!
//! The alternate screen owns stdout, so log lines go to a file under the
//! data dir instead. `CAMPUS_LOG` takes an env-filter directive string
//! (default `info`). Setup failures are swallowed: the portal works fine
//! without a log file.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config;

pub fn init() {
    let Some(path) = config::log_file_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_env("CAMPUS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
