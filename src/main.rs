use clap::Parser;
use gridcrop::config::RunConfig;
use gridcrop::pipeline;

#[derive(Parser)]
#[command(name = "gridcrop")]
#[command(about = "Crops hand-edited occupancy maps into binarized routing grids")]
#[command(version = "0.1.0")]
struct Cli {
    /// Source occupancy map; empty skips processing [default: projection_edit.pgm]
    #[arg(long = "in-pgm")]
    in_pgm: Option<String>,

    /// Feature record output; empty skips the write [default: out.json]
    #[arg(long)]
    json: Option<String>,

    /// Cropped routing grid output (binary PGM) [default: out.pgm]
    #[arg(long)]
    pgm: Option<String>,

    /// Optional PNG copy of the routing grid [default: none]
    #[arg(long)]
    png: Option<String>,

    /// Config file (TOML or JSON); flags given explicitly override it
    #[arg(short, long)]
    config: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let mut config = match &cli.config {
        Some(path) => RunConfig::load_from_file(path)?,
        None => RunConfig::default(),
    };
    if let Some(input) = cli.in_pgm {
        config.input = input;
    }
    if let Some(json) = cli.json {
        config.json_out = json;
    }
    if let Some(pgm) = cli.pgm {
        config.pgm_out = pgm;
    }
    if let Some(png) = cli.png {
        config.png_out = png;
    }

    if let Err(errors) = config.validate() {
        eprintln!("Configuration errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(anyhow::anyhow!("invalid configuration"));
    }

    if let Some(feature) = pipeline::run(&config)? {
        println!(
            "Cropped {}x{} grid from ({}, {})..({}, {}), {} drawn pixels",
            feature.pgm_width,
            feature.pgm_height,
            feature.min_lon,
            feature.min_lat,
            feature.max_lon,
            feature.max_lat,
            feature.count
        );
    }

    Ok(())
}
