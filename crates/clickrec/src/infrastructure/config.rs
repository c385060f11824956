//! Start-up configuration.
//!
//! Configuration comes from command-line flags, each of which can also be set
//! through an environment variable. It is parsed once in `main` and never
//! written back.
//!
//! | Flag          | Environment          | Default |
//! |---------------|----------------------|---------|
//! | `--delay-ms`  | `CLICKREC_DELAY_MS`  | 500     |
//! | `--log-level` | `CLICKREC_LOG_LEVEL` | info    |

use clap::Parser;
use clickrec_core::{DelayError, DelayMs};

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Time spent on each playback step.
    pub delay: DelayMs,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            delay: DelayMs::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Global mouse-click recorder and replayer.
///
/// Press SPACE to start or stop recording left clicks, C to replay them and
/// ESC to cancel a running replay.
#[derive(Debug, Parser)]
#[command(name = "clickrec", version)]
pub struct Cli {
    /// Per-step playback delay in milliseconds.
    ///
    /// Each recorded point takes this long to replay: half after moving the
    /// pointer, half after clicking.
    #[arg(
        long,
        default_value_t = DelayMs::DEFAULT,
        env = "CLICKREC_DELAY_MS",
        value_parser = clap::value_parser!(u32).range(DelayMs::MIN as i64..=DelayMs::MAX as i64)
    )]
    pub delay_ms: u32,

    /// Log level used when `RUST_LOG` is not set (e.g. `debug`, `clickrec=trace`).
    #[arg(long, default_value = "info", env = "CLICKREC_LOG_LEVEL")]
    pub log_level: String,
}

impl Cli {
    /// Converts the parsed arguments into an [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`DelayError`] if `delay_ms` is outside the allowed range. The
    /// parser already enforces the range, so this only fires for a `Cli`
    /// built by hand.
    pub fn into_config(self) -> Result<AppConfig, DelayError> {
        Ok(AppConfig {
            delay: DelayMs::new(self.delay_ms)?,
            log_level: self.log_level,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
