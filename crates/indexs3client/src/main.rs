use clap::Parser;
use indexs3client::RunError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Config that is malformed or missing credentials.
const EXIT_INVALID_CONFIG: u8 = 2;
/// Config was fine, registering the object was not.
const EXIT_INDEXING_FAILED: u8 = 1;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = indexs3client::cli::IndexArgs::parse();

    match indexs3client::run(args).await {
        Ok(indexed) => {
            tracing::info!(
                guid = %indexed.guid,
                rev = %indexed.rev,
                size = indexed.size,
                metadata_updated = indexed.metadata_updated,
                "Indexed object"
            );
            ExitCode::SUCCESS
        }
        Err(RunError::Config(error)) => {
            tracing::error!("Cannot continue without a valid config: {error}");
            ExitCode::from(EXIT_INVALID_CONFIG)
        }
        Err(RunError::Index(error)) => {
            tracing::error!("{error:#}");
            ExitCode::from(EXIT_INDEXING_FAILED)
        }
    }
}
