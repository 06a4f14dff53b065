use clap::Parser;
use gridflow::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Allocate producer output to consumers across a capacitated grid
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the grid description file
    grid_path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let grid = EnergyGrid::load(&cli.grid_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    tracing::debug!(
        path = %cli.grid_path.display(),
        nodes = grid.len(),
        links = grid.links().len(),
        "grid loaded"
    );

    let allocation = FlowAllocator::new(&grid).resolve();
    print!("{}", AllocationReport::new(&grid, &allocation));
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
