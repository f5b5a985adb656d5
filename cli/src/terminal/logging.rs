use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Renders events as `[sym] message` with a colored level symbol,
/// dropping the default timestamp/target noise.
pub struct SapconvFormatter;

impl<S, N> FormatEvent<S, N> for SapconvFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let symbol: ColoredString = match *event.metadata().level() {
            Level::TRACE => "[ ]".dimmed(),
            Level::DEBUG => "[?]".blue(),
            Level::INFO => "[+]".green().bold(),
            Level::WARN => "[*]".yellow().bold(),
            Level::ERROR => "[-]".red().bold(),
        };

        write!(writer, "{} ", symbol)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .event_format(SapconvFormatter)
        .with_env_filter(filter)
        .init();
}
