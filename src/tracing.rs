//! Tracing initialization for the command-line host.
//!
//! The library itself only emits events; installing a subscriber is left to
//! whoever embeds it.

use crate::config::LogFormat;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times; only the first call counts.
pub fn init(format: LogFormat) {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::from_default_env().add_directive(
            if is_test {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE);

        // Under a test runner, output goes through the harness's capture.
        let result = match (format, is_test) {
            (LogFormat::Compact, true) => builder.compact().with_test_writer().try_init(),
            (LogFormat::Json, true) => builder.json().with_test_writer().try_init(),
            (LogFormat::Compact, false) => builder.compact().with_writer(std::io::stderr).try_init(),
            (LogFormat::Json, false) => builder.json().with_writer(std::io::stderr).try_init(),
        };
        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
