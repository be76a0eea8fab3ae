use clap::Parser;

use homework_bot::cli::{self, Cli};
use homework_bot::config::load_env_file;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env_file = load_env_file(None);

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    tracing::info!(
        name = %settings.application.name,
        version = homework_bot::pkg_version(),
        "Starting homework bot"
    );

    cli::execute_command(&cli, settings).await?;

    Ok(())
}
