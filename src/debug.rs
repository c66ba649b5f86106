//! Logging bridge for route-tabs.
//!
//! Routes every `log::info!()`, `log::debug!()` etc. to stderr with a
//! timestamp and the emitting module. The level is taken from, in order:
//! the `--log-level` CLI flag, `RUST_LOG`, then the config file.
//!
//! Output format:
//!
//! ```text
//! [1718000000.123456] [INFO ] [route_tabs::tab::registry] Opened tab 'Home' for /home (total: 1)
//! ```

use parking_lot::Mutex;
use route_tabs_config::LogLevel;
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

struct LogBridge {
    out: Mutex<Box<dyn Write + Send>>,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_str = match record.level() {
            log::Level::Error => "ERROR",
            log::Level::Warn => "WARN ",
            log::Level::Info => "INFO ",
            log::Level::Debug => "DEBUG",
            log::Level::Trace => "TRACE",
        };
        let mut out = self.out.lock();
        // Write failures are dropped
        let _ = writeln!(
            out,
            "[{}] [{}] [{}] {}",
            get_timestamp(),
            level_str,
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = self.out.lock().flush();
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Pick the effective level: CLI flag, then `RUST_LOG`, then config.
///
/// Unparseable `RUST_LOG` values are ignored.
pub fn resolve_level(
    cli_level: Option<LogLevel>,
    rust_log: Option<&str>,
    config_level: LogLevel,
) -> LogLevel {
    cli_level
        .or_else(|| rust_log.and_then(|value| value.parse().ok()))
        .unwrap_or(config_level)
}

/// Install the stderr log bridge.
///
/// Safe to call more than once; only the first call installs the logger,
/// later calls just adjust the level.
pub fn init_log_bridge(cli_level: Option<LogLevel>, config_level: LogLevel) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = resolve_level(cli_level, rust_log.as_deref(), config_level);

    let logger = LOGGER.get_or_init(|| LogBridge {
        out: Mutex::new(Box::new(std::io::stderr())),
    });
    // Err only means a logger is already installed
    let _ = log::set_logger(logger);
    log::set_max_level(level.to_level_filter());
}
