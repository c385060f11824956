//! clickrec entry point.
//!
//! Parses configuration, initialises logging, and wires the infrastructure
//! adapters into a [`ClickController`] running on the Tokio runtime.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ Cli::parse()                    -- flags + CLICKREC_* environment
//!  └─ tracing_subscriber              -- RUST_LOG, else --log-level
//!  └─ run()
//!       ├─ WindowsInputCaptureService (hook thread, WH_KEYBOARD_LL + WH_MOUSE_LL)
//!       ├─ WindowsInputSynthesizer    (SetCursorPos / SendInput)
//!       ├─ ConsoleStatusSurface       (stdout)
//!       └─ ClickController::run       (Tokio task, until Ctrl+C)
//! ```

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clickrec::infrastructure::config::{AppConfig, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse()
        .into_config()
        .context("invalid configuration")?;

    // `RUST_LOG` wins; otherwise use the configured level.
    let fallback = config.log_level.clone();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();

    info!(delay = %config.delay, "clickrec starting");
    run(config).await?;
    info!("clickrec stopped");
    Ok(())
}

#[cfg(target_os = "windows")]
async fn run(config: AppConfig) -> anyhow::Result<()> {
    use std::sync::Arc;

    use tokio_util::sync::CancellationToken;
    use tracing::error;

    use clickrec::application::controller::ClickController;
    use clickrec::infrastructure::input_capture::{windows::WindowsInputCaptureService, InputSource};
    use clickrec::infrastructure::input_synthesis::windows::WindowsInputSynthesizer;
    use clickrec::infrastructure::status_surface::console::ConsoleStatusSurface;

    let capture = WindowsInputCaptureService::new();
    let input = capture
        .start()
        .context("failed to install global input hooks")?;

    let controller = ClickController::new(
        Arc::new(WindowsInputSynthesizer::new()),
        Arc::new(ConsoleStatusSurface::stdout()),
        config.delay,
    );

    // ── Graceful shutdown ─────────────────────────────────────────────────────
    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("received Ctrl+C, shutting down");
                    shutdown.cancel();
                }
                Err(e) => error!("failed to listen for Ctrl+C signal: {e}"),
            }
        });
    }

    controller.run(input, shutdown).await;
    capture.stop();
    Ok(())
}

#[cfg(not(target_os = "windows"))]
async fn run(_config: AppConfig) -> anyhow::Result<()> {
    use clickrec::infrastructure::input_capture::CaptureError;

    Err(CaptureError::UnsupportedPlatform(std::env::consts::OS.to_string()))
        .context("clickrec needs global low-level input hooks, which only Windows provides")
}
