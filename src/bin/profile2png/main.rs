// profile2png - Run the water simulation offline and save the bar chart
//
// Pipeline:
//   1. Parse the terrain text (bad tokens are skipped and logged)
//   2. Build the simulation from CLI flags or a JSON config file
//   3. Advance N ticks
//   4. Rasterize with the library encoder, colour, write PNG
//   5. Print per-column levels
//
// Usage: cargo run --bin profile2png -- "5,0,5" --ticks 20 --output basin.png

mod palette;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use landscape_engine::{Encoder, SimConfig, WaterSim, parse_terrain_with_report};

/// Simulate rain over a 1-D terrain profile and render it as a PNG.
#[derive(Parser)]
#[command(name = "profile2png")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Column heights, separated by commas, semicolons or whitespace.
    terrain: String,

    /// Number of ticks to advance before rendering.
    #[arg(short, long, default_value = "1")]
    ticks: u32,

    /// Image width in pixels.
    #[arg(long, default_value = "640")]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value = "360")]
    height: u32,

    /// Rainfall per tick (overrides the config file).
    #[arg(long)]
    rainfall: Option<f64>,

    /// Depth an edge column keeps before spilling (overrides the config file).
    #[arg(long)]
    spill_threshold: Option<f64>,

    /// JSON file with simulation parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shade the dry space each basin would eventually hold.
    #[arg(long)]
    capacity: bool,

    /// Output PNG path.
    #[arg(short, long, default_value = "profile.png")]
    output: PathBuf,
}

fn load_config(cli: &Cli) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::from_json(&fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };
    if let Some(r) = cli.rainfall {
        config.rainfall = r;
    }
    if let Some(t) = cli.spill_threshold {
        config.spill_threshold = t;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (terrain, report) = parse_terrain_with_report(&cli.terrain);
    if !report.is_clean() {
        info!("dropped {} malformed token(s)", report.skipped.len());
    }

    let config = load_config(cli)?;
    let mut sim = WaterSim::with_config(terrain, config)?;
    for _ in 0..cli.ticks {
        sim.advance();
    }
    info!(
        "{} columns after {} ticks: water {:.4}, runoff {:.4}",
        sim.column_count(),
        sim.ticks(),
        sim.total_water(),
        sim.total_runoff()
    );

    let mut encoder = Encoder::new(cli.width, cli.height)?;
    encoder.encode(&sim, None, cli.capacity);
    palette::to_image(&encoder).save(&cli.output)?;
    info!("wrote {}", cli.output.display());

    println!("{:>6} {:>12} {:>12}", "column", "elevation", "water");
    for i in 0..sim.column_count() {
        println!("{:>6} {:>12.4} {:>12.4}", i, sim.elevation(i)?, sim.water_level(i)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
