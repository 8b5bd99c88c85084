use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fertile::{DEFAULT_HEIGHT, DEFAULT_WIDTH, FieldConfig, fertile_areas};

#[derive(Parser)]
#[clap(name = "fertile")]
#[clap(version)]
#[clap(max_term_width = 80)]
#[clap(
    about = "Read barren rectangles from stdin and print fertile region areas, smallest first",
    long_about = None
)]
struct Cli {
    /// Field width in columns
    #[clap(long, env = "FERTILE_WIDTH", default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Field height in rows
    #[clap(long, env = "FERTILE_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Increase log verbosity on stderr
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[clap(short, long)]
    quiet: bool,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = FieldConfig::new(cli.width, cli.height);

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read barren land from stdin")?;

    let barren = fertile::parse_barren_list(&input).context("failed to parse barren land")?;
    let areas = fertile_areas(&config, &barren).with_context(|| {
        format!(
            "failed to analyze {}x{} field",
            config.width, config.height
        )
    })?;

    fertile::io::write_areas(io::stdout().lock(), &areas).context("failed to write areas")?;
    Ok(())
}
