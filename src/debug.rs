// Debug logging for Multipong
// Installs a file-backed tracing subscriber when --debug is passed

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::SystemTime;

use tracing_subscriber::filter::LevelFilter;

pub const LOG_FILE_PATH: &str = "/tmp/multipong-debug.log";

/// Initialize debug logging to file
///
/// # Behavior
/// - If enabled=false: Returns immediately, no subscriber is installed and
///   every `tracing` call is a no-op
/// - If enabled=true: Creates/truncates the log file, writes a header and
///   routes all events at TRACE and above into it
///
/// The terminal belongs to the game, so nothing is ever logged to stdout/stderr.
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE_PATH)?;

    writeln!(file, "=== Multipong Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", LOG_FILE_PATH)?;
    writeln!(file, "========================================\n")?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(LevelFilter::TRACE)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(())
}
