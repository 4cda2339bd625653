use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use road_length_csv::algorithm::{AppendLengthToCsv, Parameters, TracingFeedback};
use road_length_csv::export::HeaderPolicy;
use road_length_csv::logging::init_logging;
use road_length_csv::measure::Ellipsoid;
use road_length_csv::model::LayerSource;

#[derive(Parser, Debug)]
#[command(name = "road-length-csv")]
#[command(about = "Append length to CSV - sum road lengths of four line layers into a CSV summary")]
#[command(version)]
struct Args {
    /// Total added roads (GeoJSON line layer)
    #[arg(long, value_name = "FILE")]
    total_added: PathBuf,

    /// Total modified roads (GeoJSON line layer)
    #[arg(long, value_name = "FILE")]
    total_modified: PathBuf,

    /// Kaart added roads (GeoJSON line layer)
    #[arg(long, value_name = "FILE")]
    kaart_added: PathBuf,

    /// Kaart modified roads (GeoJSON line layer)
    #[arg(long, value_name = "FILE")]
    kaart_modified: PathBuf,

    /// Country name written in the first column
    #[arg(long)]
    country: String,

    /// Output CSV, appended to and created if missing
    #[arg(long, short, value_name = "FILE")]
    output: PathBuf,

    /// Ellipsoid used for length measurement (GRS80, WGS84 or NONE)
    #[arg(long, default_value = "GRS80")]
    ellipsoid: Ellipsoid,

    /// When to write the header row (auto, always or never)
    #[arg(long, default_value = "auto")]
    header: HeaderPolicy,

    /// Only log warnings and errors
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.quiet);

    let algorithm = AppendLengthToCsv::new(Parameters {
        total_added: LayerSource::new(&args.total_added),
        total_modified: LayerSource::new(&args.total_modified),
        kaart_added: LayerSource::new(&args.kaart_added),
        kaart_modified: LayerSource::new(&args.kaart_modified),
        country_name: args.country,
        output: args.output,
        ellipsoid: args.ellipsoid,
        header: args.header,
    });

    let output = algorithm.run(&mut TracingFeedback)?;
    println!("{}", output.display());

    Ok(())
}
