use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use goose_randomiser_core::{catalog, generate, GooseOptions, Result};

#[derive(Debug, Parser)]
#[command(
    name = "goose-randomiser",
    version,
    about = "Untitled Goose Game multiworld slot generator"
)]
struct Args {
    #[arg(long, required_unless_present = "dump_catalog")]
    seed: Option<u64>,

    /// Options file (JSON). Missing keys take their defaults.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Write the result here instead of stdout.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print every location and item id, whatever the options, and exit.
    #[arg(long, default_value_t = false)]
    dump_catalog: bool,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the JSON result.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn emit(json: String, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, json)?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    if args.dump_catalog {
        catalog::verify_catalog()?;
        let dump = serde_json::json!({
            "base_id": catalog::BASE_ID,
            "locations": catalog::all_location_ids(),
            "items": catalog::all_item_ids(),
        });
        return emit(serde_json::to_string_pretty(&dump)?, args.output.as_ref());
    }

    let options = match &args.options {
        Some(path) => GooseOptions::load(path)?,
        None => GooseOptions::default(),
    };

    // clap guarantees a seed unless --dump-catalog returned above.
    let seed = args.seed.unwrap_or_default();
    let slot = generate(&options, seed)?;
    emit(serde_json::to_string_pretty(&slot)?, args.output.as_ref())
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
