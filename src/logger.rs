pub use tracing::{debug, error, info, instrument, trace, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt::{self, format::FmtSpan}, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Stage spans report their busy time once debug output is enabled.
fn span_events(filter: &EnvFilter) -> FmtSpan {
    match filter.max_level_hint() {
        Some(level) if level >= LevelFilter::DEBUG => FmtSpan::CLOSE,
        _ => FmtSpan::NONE,
    }
}

/// Installs the global subscriber, writing to stderr.
pub fn init() -> Result<(), TryInitError> {
    let filter = env_filter();
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events(&filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_filters_close_spans() {
        assert_eq!(span_events(&EnvFilter::new("debug")), FmtSpan::CLOSE);
        assert_eq!(span_events(&EnvFilter::new("warn,rail_finder=trace")), FmtSpan::CLOSE);
    }

    #[test]
    fn info_filter_keeps_spans_quiet() {
        assert_eq!(span_events(&EnvFilter::new(DEFAULT_DIRECTIVE)), FmtSpan::NONE);
        assert_eq!(span_events(&EnvFilter::new("error")), FmtSpan::NONE);
    }
}
