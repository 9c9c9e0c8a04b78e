use anyhow::{Context, Result};
use clap::Parser;
use fraudshield::cli::Cli;
use fraudshield::config::Config;
use fraudshield::logging::init_tracing;
use fraudshield::ui::app::App;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)?;
    cli.apply(&mut config)?;

    if cli.print_config {
        let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
        print!("{rendered}");
        return Ok(());
    }

    let log_path = config.log_path(&config_path);
    init_tracing(&log_path, &config.logging.level)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    tracing::info!(
        config = %config_path.display(),
        models = config.models.len(),
        "Starting fraudshield v{}",
        env!("CARGO_PKG_VERSION")
    );

    let app = App::new(&config)?;
    fraudshield::ui::run(app).context("Terminal UI failed")?;
    Ok(())
}
