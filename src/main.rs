use anyhow::Result;
use capsule_icons::constants::output::{ICON_SIZES, OUTPUT_DIR};
use capsule_icons::{generate_icons, print_summary};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Writes icons/icon-{16,32,64,128}.png into the current directory
#[derive(Parser)]
#[command(name = "capsule-icons")]
#[command(version, about = "Generate the clock-in-capsule badge icons", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics only; progress goes to stdout regardless
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let paths = generate_icons(Path::new(OUTPUT_DIR), &ICON_SIZES)?;
    print_summary(&paths);

    Ok(())
}
