use colored::*;
use registrar_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::colors;

/// Crates whose events pass the default filter: the library and this binary.
const LOG_TARGETS: [&str; 2] = ["registrar_core", "registrar"];

/// Writes one line per event: a level marker in the same palette as the
/// console's status lines, the target below INFO, then the fields.
pub struct StatusLineFormat;

fn level_marker(level: Level) -> ColoredString {
    match level {
        Level::ERROR => "[-]".color(colors::ERROR).bold(),
        Level::WARN => "[*]".color(colors::NOTICE).bold(),
        Level::INFO => "[+]".color(colors::SUCCESS).bold(),
        Level::DEBUG => "[?]".color(colors::ACCENT),
        Level::TRACE => "[ ]".color(colors::SEPARATOR),
    }
}

impl<S, N> FormatEvent<S, N> for StatusLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level: Level = *event.metadata().level();
        write!(writer, "{} ", level_marker(level))?;

        if level > Level::INFO {
            let target: &str = event.metadata().target();
            write!(writer, "{} ", target.color(colors::SEPARATOR))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn default_directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<String>>()
        .join(",")
}

/// Installs the global subscriber. Log lines go to stderr so they never mix
/// with the dashboards on stdout.
///
/// `RUST_LOG` wins over the `-v` count when set.
pub fn init_logging(cfg: &Config) -> anyhow::Result<()> {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(cfg.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(StatusLineFormat)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
