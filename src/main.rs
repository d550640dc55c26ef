use anyhow::{Context, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;
use wikigen::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    initialize_logging(&config)?;
    config.validate().context("Invalid configuration")?;

    let report = wikigen::build(&config).context("Failed to build wiki")?;

    if report.dangling_anchors > 0 {
        warn!("{} in-page links have no target", report.dangling_anchors);
    }
    println!(
        "Generated {} pages in {}",
        report.pages,
        report.output.display()
    );

    if !config.no_open {
        let index = report.index_path();
        info!("Opening {}", index.display());
        if let Err(e) = open::that(&index) {
            warn!("Failed to open {}: {}", index.display(), e);
        }
    }

    Ok(())
}

fn initialize_logging(config: &Config) -> Result<()> {
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to initialize logging")?;
    Ok(())
}
