use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;
use std::{error::Error, path::PathBuf};
use tile_quote::quote::{
    calculate, parse_number, CalculationInput, QuoteConfig, QuoteConfigBuilder, RenderedQuote,
};

#[derive(Parser, Debug)]
#[command(author, about = "Tile, adhesive and price quotes for a floor area", long_about = None)]
#[command(version = env!("TILE_QUOTE_VERSION"))]
struct Cli {
    #[clap(subcommand)]
    mode: Modes,
}

#[derive(Subcommand, Debug)]
enum Modes {
    /// List the tile sizes on offer
    Catalog,
    /// Calculate boxes, adhesive and discounted price for a floor
    Quote(QuoteCliOpts),
}

#[derive(Args, Debug, Clone)]
struct PricingOpts {
    /// Price per m² of floor area
    #[clap(long, value_name = "PRICE")]
    price_per_sqm: Option<f64>,

    /// Extra area fraction bought for cutting loss
    #[clap(long, value_name = "FRACTION")]
    waste: Option<f64>,

    /// Adhesive consumption in kg per m²
    #[clap(long, value_name = "KG")]
    glue_rate: Option<f64>,
}

#[derive(Args, Debug)]
struct QuoteCliOpts {
    /// Floor area in m²
    #[clap(allow_hyphen_values = true)]
    area: String,

    /// Tile size by catalog position (1-based, see `catalog`)
    #[clap(short, long, default_value = "1", conflicts_with = "coverage")]
    tile: usize,

    /// Coverage per box in m², instead of a catalog tile
    #[clap(short, long, allow_hyphen_values = true)]
    coverage: Option<String>,

    /// Grout width in mm (accepted, not used in any formula)
    #[clap(short, long)]
    grout: Option<String>,

    /// Output format
    #[clap(short, long, default_value = "table")]
    format: OutputFormat,

    /// Write the quote to a file instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,

    #[clap(flatten)]
    pricing: PricingOpts,
}

#[derive(ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    /// Aligned label/value table
    #[default]
    Table,
    /// One slot per line, values only
    Plain,
    /// field,value CSV
    Csv,
}

fn build_config(opts: &PricingOpts) -> Result<QuoteConfig, Box<dyn Error>> {
    let mut builder = QuoteConfigBuilder::default();
    if let Some(price) = opts.price_per_sqm {
        builder.price_per_sqm(price);
    }
    if let Some(waste) = opts.waste {
        builder.waste_fraction(waste);
    }
    if let Some(rate) = opts.glue_rate {
        builder.glue_kg_per_sqm(rate);
    }
    Ok(builder.build()?)
}

fn run_catalog() -> Result<(), Box<dyn Error>> {
    let config = QuoteConfig::default();
    println!("{:>3}  {:<12} {:>12}", "#", "Tile", "m² per box");
    for (i, tile) in config.catalog().options().iter().enumerate() {
        println!(
            "{:>3}  {:<12} {:>12}",
            i + 1,
            tile.label,
            tile.value_text()
        );
    }
    Ok(())
}

fn write_quote(
    rendered: &RenderedQuote,
    format: &OutputFormat,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Table => write!(out, "{}", rendered)?,
        OutputFormat::Plain => {
            for (_, value) in rendered.rows() {
                writeln!(out, "{}", value)?;
            }
        }
        OutputFormat::Csv => rendered.write_csv(out)?,
    }
    Ok(())
}

fn run_quote(opts: &QuoteCliOpts) -> Result<(), Box<dyn Error>> {
    let config = build_config(&opts.pricing)?;

    let coverage = match &opts.coverage {
        Some(text) => parse_number(text),
        None => opts
            .tile
            .checked_sub(1)
            .and_then(|i| config.catalog().get(i))
            .map(|t| t.coverage_per_box)
            .ok_or_else(|| {
                format!(
                    "tile must be between 1 and {}, got {}",
                    config.catalog().len(),
                    opts.tile
                )
            })?,
    };

    if let Some(grout) = &opts.grout {
        info!("Grout width {:?} noted, not used in the quote", grout);
    }

    let input = CalculationInput::new(parse_number(&opts.area), coverage)?;
    let result = calculate(&config, &input);
    let rendered = RenderedQuote::from_result(&result, &config);

    match &opts.output {
        Some(path) => {
            let mut file = File::create(path)?;
            write_quote(&rendered, &opts.format, &mut file)?;
            println!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_quote(&rendered, &opts.format, &mut handle)?;
        }
    }
    Ok(())
}

fn entrypoint() -> Result<(), Box<dyn Error>> {
    tile_quote::setup_pretty_env_logger_default();
    let cli = Cli::parse();
    match &cli.mode {
        Modes::Catalog => run_catalog(),
        Modes::Quote(opts) => run_quote(opts),
    }
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
