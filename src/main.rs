use anyhow::{Context, Result};
use chatolution::config::Config;
use chatolution::logger::Logger;
use chatolution::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;
    let logger = Logger::from_config(config.logging.enabled)?;
    if let Some(path) = logger.log_file() {
        logger.log(format!("Logging to {}", path.display()));
    }

    // Run the TUI application
    ui::run_app(&config, logger).await?;

    Ok(())
}
