//! Tracing subscriber setup: console formatter and initialisation.
//!
//! The core operations emit plain [`tracing`] events and never print; this
//! module decides how those events reach the console. Without a subscriber
//! (e.g. in library use or headless tests) the events are simply dropped.

use tracing_subscriber::EnvFilter;

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits slink-style console
/// output: errors and warnings tagged and coloured, info plain, debug dimmed.
struct SlinkFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for SlinkFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match level {
            tracing::Level::ERROR => writeln!(writer, "\x1b[31mERROR\x1b[0m {msg}"),
            tracing::Level::WARN => writeln!(writer, "\x1b[33mWARN\x1b[0m  {msg}"),
            tracing::Level::INFO => writeln!(writer, "{msg}"),
            _ => writeln!(writer, "\x1b[2m{msg}\x1b[0m"),
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Console verbosity defaults to `info` (`debug` when `verbose` is set) and
/// can be overridden through `SLINK_LOG`, e.g. `SLINK_LOG=slink=debug`.
/// Warnings and errors go to stderr, everything else to stdout.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let default_directive = if verbose { "slink=debug" } else { "slink=info" };
    let filter =
        EnvFilter::try_from_env("SLINK_LOG").unwrap_or_else(|_| EnvFilter::new(default_directive));

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let console_layer = fmt::layer()
        .event_format(SlinkFormatter)
        .with_writer(make_writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
