//! Log output for provider calls.
//!
//! Events from this crate get their own line format (UTC timestamp, source
//! location, span close with duration) so provider latency is easy to find in
//! the server log. The binary pairs [`layer`] with a general layer that drops
//! [`is_library_target`] events, and with the filter from [`env_filter`].

use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::format::{FmtSpan, Writer};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Target prefix of every event emitted by this crate.
pub const TARGET_PREFIX: &str = "ai_llm_service";

/// `2025-09-12T10:20:30Z`
#[derive(Clone, Copy, Debug, Default)]
struct UtcSeconds;

impl FormatTime for UtcSeconds {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        w.write_str(
            &chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        )
    }
}

/// Returns `true` for events emitted by this crate.
pub fn is_library_target(target: &str) -> bool {
    target.starts_with(TARGET_PREFIX)
}

/// Filter from `RUST_LOG`-style directives, falling back to `default` when
/// they are absent or do not parse. Directives are taken as given, so
/// `ai_llm_service=debug` turns on request-level provider logs.
pub fn env_filter(directives: Option<&str>, default: &str) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Formatting layer that renders only this crate's events.
///
/// ANSI colours are used only when stdout is a terminal.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_timer(UtcSeconds)
        .with_ansi(io::stdout().is_terminal())
        .with_span_events(FmtSpan::CLOSE)
        .event_format(
            fmt::format()
                .compact()
                .with_target(true)
                .with_source_location(true),
        )
        .with_filter(filter::filter_fn(|meta| is_library_target(meta.target())))
}
