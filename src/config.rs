use std::path::PathBuf;

use clap::Parser;

/// Where the demo harness reads its event from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    /// The bundled sample payload.
    Sample,
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Parser)]
#[command(
    name = "lex-response",
    about = "Parse an Amazon Lex V2 event and report its intents"
)]
pub struct CliConfig {
    #[arg(
        value_name = "EVENT",
        help = "Path to a JSON event file, or - for stdin. Defaults to the bundled sample"
    )]
    pub event: Option<PathBuf>,

    #[arg(long, help = "Print a JSON summary instead of plain text")]
    pub json: bool,
}

impl CliConfig {
    pub fn source(&self) -> EventSource {
        match &self.event {
            None => EventSource::Sample,
            Some(path) if path.as_os_str() == "-" => EventSource::Stdin,
            Some(path) => EventSource::File(path.clone()),
        }
    }
}
