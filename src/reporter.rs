use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};

pub const LOG_FILE: &str = "error.log";

/// Writes `[<timestamp>] <message>` to both sinks and returns the line.
pub fn report<O, E>(
    error: &dyn Display,
    at: DateTime<Local>,
    out: &mut O,
    err: &mut E,
) -> io::Result<String>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let line = format!("[{}] {}", at.format("%Y-%m-%d %H:%M:%S"), error);
    writeln!(out, "{line}")?;
    writeln!(err, "{line}")?;
    Ok(line)
}

/// Appends `line` to `<log_dir>/error.log`. Failures are logged and ignored.
pub fn append_log(log_dir: &Path, line: &str) {
    let path = log_dir.join(LOG_FILE);
    let result = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut file| writeln!(file, "{line}"));

    if let Err(e) = result {
        tracing::warn!(path = %path.display(), error = %e, "could not write error log");
    }
}
