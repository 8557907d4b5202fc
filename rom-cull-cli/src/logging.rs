//! Logger setup.
//!
//! All user-facing output goes through the `log` macros. Normal runs print
//! bare messages; `--verbose` adds timestamps and level prefixes and enables
//! debug output; `--quiet` keeps only warnings and errors. With `--logfile`
//! every line is also written to a file with ANSI colour codes stripped.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;

use crate::error::CliError;

/// Writes to stdout and, optionally, a colour-free copy to a log file.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = logfile.map(File::create).transpose()?;

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Pipe(Box::new(TeeWriter { file })))
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "[{} {:<5}] {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            } else if record.level() <= log::Level::Warn {
                writeln!(buf, "{}: {}", record.level(), record.args())
            } else {
                writeln!(buf, "{}", record.args())
            }
        })
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
