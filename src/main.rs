use anyhow::{Context, Result};
use clap::Parser;
use lex_response::config::{CliConfig, EventSource};
use lex_response::{LexResponseProcessor, SAMPLE_EVENT};
use tokio::io::AsyncReadExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let config = CliConfig::parse();
    let source = config.source();
    tracing::info!("Reading Lex event from {:?}", source);

    let event = read_event(&source).await?;
    let processor = LexResponseProcessor::from_json_str(&event)
        .with_context(|| format!("failed to process Lex event from {:?}", source))?;

    if config.json {
        let summary = serde_json::to_string_pretty(&processor.summary())?;
        println!("{}", summary);
        return Ok(());
    }

    let highest = processor
        .get_highest_confidence_intent()
        .map(|intent| intent.name.as_str())
        .unwrap_or("<none>");
    println!("Highest confidence intent: {}", highest);
    println!("Active intent: {}", processor.get_active_intent().name);
    println!("Needs fulfillment: {}", processor.is_fulfillment_required());
    println!("Input transcript: {}", processor.input_transcript());

    Ok(())
}

async fn read_event(source: &EventSource) -> Result<String> {
    match source {
        EventSource::Sample => Ok(SAMPLE_EVENT.to_string()),
        EventSource::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read event from stdin")?;
            Ok(buf)
        }
        EventSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
    }
}
