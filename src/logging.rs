//! Debug logging bootstrap.
//!
//! Log records go through the `log` facade. A file backend is attached only
//! when `--debug` is given; otherwise every macro is a no-op. Nothing is ever
//! written to the terminal, which the TUI owns.

use anyhow::{Context, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use std::path::Path;

use crate::utils;

/// Start file logging at `debug` level into `dir`.
///
/// The returned handle must stay alive for the whole run; dropping it
/// flushes and stops the logger.
pub fn init_debug_logging(dir: &Path) -> Result<LoggerHandle> {
    let handle = Logger::try_with_str("debug")
        .context("Invalid log specification")?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(utils::DEBUG_LOG_BASENAME)
                .suffix("log")
                .suppress_timestamp(),
        )
        .append()
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("Failed to start debug logger")?;

    log::info!(
        "debug logging started: version={} log={}",
        env!("CARGO_PKG_VERSION"),
        dir.join(format!("{}.log", utils::DEBUG_LOG_BASENAME)).display()
    );
    Ok(handle)
}

/// Start logging when `debug` is set; `None` leaves logging disabled
pub fn init(debug: bool) -> Result<Option<LoggerHandle>> {
    if !debug {
        return Ok(None);
    }
    init_debug_logging(&std::env::temp_dir()).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_disabled_without_debug() {
        let handle = init(false).expect("disabled logging cannot fail");
        assert!(handle.is_none());
    }
}
