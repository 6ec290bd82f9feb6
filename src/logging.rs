//! File logging setup.
//!
//! All diagnostics go to the configured log file, never to the screen; the
//! interactive menu owns stdout. A random session id ties together the log
//! entries of one run.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use rand::Rng;

/// Installs the global tracing subscriber writing to `path`.
///
/// Returns the session id assigned to this run. Must be called at most
/// once per process.
pub fn init<P: AsRef<Path>>(path: P) -> io::Result<u32> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let session_id: u32 = rand::rng().random();
    tracing::info!(session_id, "logging initialized");
    Ok(session_id)
}
