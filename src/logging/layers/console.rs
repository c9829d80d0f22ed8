use crate::logging::layers::{noop_layer, BoxLayer};
use std::io;
use std::str::FromStr;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self as tracing_fmt, writer::BoxMakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// Stream the console sink writes to. Stdout is reserved for command output,
/// so the default is stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConsoleOutput {
    Stdout,
    #[default]
    Stderr,
    None,
}

impl FromStr for ConsoleOutput {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = match value.trim().to_ascii_lowercase().as_str() {
            "stdout" => ConsoleOutput::Stdout,
            "stderr" => ConsoleOutput::Stderr,
            "none" | "off" => ConsoleOutput::None,
            other => return Err(format!("unknown log output '{}' (stdout, stderr, none)", other)),
        };
        Ok(parsed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConsoleFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ConsoleFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = match value.trim().to_ascii_lowercase().as_str() {
            "text" => ConsoleFormat::Text,
            "json" => ConsoleFormat::Json,
            other => return Err(format!("unknown log format '{}' (text, json)", other)),
        };
        Ok(parsed)
    }
}

/// Console layer for the chosen stream and line format.
pub fn console_layer<S>(output: ConsoleOutput, format: ConsoleFormat) -> BoxLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let writer = match output {
        ConsoleOutput::Stdout => BoxMakeWriter::new(io::stdout),
        ConsoleOutput::Stderr => BoxMakeWriter::new(io::stderr),
        ConsoleOutput::None => return noop_layer(),
    };
    formatted_layer(writer, format)
}

pub(crate) fn formatted_layer<S>(writer: BoxMakeWriter, format: ConsoleFormat) -> BoxLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    match format {
        ConsoleFormat::Text => Box::new(
            tracing_fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        ),
        ConsoleFormat::Json => Box::new(
            tracing_fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(false)
                .with_current_span(false),
        ),
    }
}
