use std::path::PathBuf;

use clap::Parser;
use kvplot::config::ReportConfig;
use kvplot::render::ReportRenderer;
use kvplot::report::run_each;
use kvplot::{error, Result};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Renders the experiment result tables into throughput charts"
)]
struct Args {
    /// Directory holding the result CSVs; charts are written next to them
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// TOML configuration file (defaults to the user config location)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    install_tracing_subscriber();

    let mut config = match &args.config {
        Some(path) => ReportConfig::load_from(path)?,
        None => ReportConfig::load()?,
    };
    if let Some(dir) = args.results_dir {
        config = config.with_results_dir(dir);
        config.validate()?;
    }
    let renderer = ReportRenderer::new(config.with_font_env_override());

    println!("Generating visualizations...");
    run_each(&renderer, |outcome| {
        if let Ok(path) = &outcome.result {
            println!("Saved {} visualization to: {}", outcome.job, path.display());
        }
        println!("{}", outcome.status_line());
        if let Some(hint) = outcome.error().and_then(error::hint) {
            println!("  hint: {}", hint);
        }
    });

    println!("\nVisualization generation complete!");
    Ok(())
}

fn install_tracing_subscriber() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
