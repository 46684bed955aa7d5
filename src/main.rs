//! CLI entry point for the summer-school listing.
//!
//! Loads the dataset from a file or URL, runs the listing transform for the
//! selected region and prints the result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use reqwest::Url;
use std::path::PathBuf;
use summer_schools::config::{ListingConfig, parse_reference};
use summer_schools::region::CountryAliases;
use summer_schools::source::source_for;
use summer_schools::{Listing, RegionFilter, RegionResolver, Transformer, output};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_LOG_FILE: &str = "logs/summer_schools.log";

#[derive(Parser)]
#[command(name = "summer_schools")]
#[command(about = "List summer schools by region and application deadline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the open and past summer schools for a region
    List {
        /// Path or URL of the dataset CSV (defaults to SUMMER_SCHOOLS_DATA)
        #[arg(short, long, value_name = "FILE_OR_URL")]
        data: Option<String>,

        /// Region code to show, or "all"
        #[arg(short, long)]
        region: Option<String>,

        /// Reference time, RFC 3339 or YYYY-MM-DD (defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// JSON file of extra country name -> code aliases
        #[arg(long)]
        aliases: Option<String>,

        /// Shareable page URL; its region parameter seeds the filter and is
        /// updated with the selection
        #[arg(long)]
        page_url: Option<String>,
    },
    /// List the regions present in the dataset
    Regions {
        /// Path or URL of the dataset CSV (defaults to SUMMER_SCHOOLS_DATA)
        #[arg(short, long, value_name = "FILE_OR_URL")]
        data: Option<String>,

        /// JSON file of extra country name -> code aliases
        #[arg(long)]
        aliases: Option<String>,
    },
    /// Resolve a country name or code to its region
    Lookup {
        country: String,

        /// JSON file of extra country name -> code aliases
        #[arg(long)]
        aliases: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = init_tracing()?;

    let cli = Cli::parse();
    let mut config = ListingConfig::from_env()?;

    match cli.command {
        Commands::List {
            data,
            region,
            now,
            format,
            output: out_path,
            aliases,
            page_url,
        } => {
            if let Some(data) = data {
                config.data = data;
            }
            if let Some(now) = now {
                config.now = Some(parse_reference(&now)?);
            }
            if aliases.is_some() {
                config.aliases = aliases;
            }
            if let Some(url) = page_url {
                config.page_url =
                    Some(Url::parse(&url).with_context(|| format!("invalid page URL '{url}'"))?);
            }
            let selection = region.map(|r| RegionFilter::parse(Some(r.as_str())));

            let (filter, shareable) = config.select_region(selection);
            let listing = build_listing(&config, &filter).await?;

            let rendered = match format {
                Format::Text => output::render_text(&listing, &filter),
                Format::Json => output::to_json(&listing)?,
                Format::Csv => output::to_csv(&listing)?,
            };
            output::print_pretty(&listing);

            match out_path {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("failed to write '{path}'"))?;
                    info!(path = %path, "Listing written");
                }
                None => print!("{rendered}"),
            }

            if let Some(url) = shareable {
                info!(url = %url, "Shareable link");
            }
        }
        Commands::Regions { data, aliases } => {
            if let Some(data) = data {
                config.data = data;
            }
            if aliases.is_some() {
                config.aliases = aliases;
            }

            let listing = build_listing(&config, &RegionFilter::All).await?;
            for (continent, count) in listing.region_counts() {
                println!("{}\t{}\t{count}", continent.code(), continent.name());
            }
        }
        Commands::Lookup { country, aliases } => {
            if aliases.is_some() {
                config.aliases = aliases;
            }
            let resolver = resolver(&config)?;

            match resolver.resolve(&country) {
                Some(info) => println!(
                    "{}\t{}\t{} ({})\t{}",
                    info.code,
                    info.name,
                    info.continent.code(),
                    info.continent.name(),
                    info.emoji
                ),
                None => {
                    warn!(country = %country, code = %resolver.code_for(&country), "Unknown country");
                    println!("unknown");
                }
            }
        }
    }

    Ok(())
}

fn resolver(config: &ListingConfig) -> Result<RegionResolver> {
    Ok(match &config.aliases {
        Some(path) => RegionResolver::with_aliases(&CountryAliases::load(path)?),
        None => RegionResolver::default(),
    })
}

/// Loads the whole dataset, then transforms it.
#[tracing::instrument(skip(config), fields(data = %config.data, filter = %filter))]
async fn build_listing(config: &ListingConfig, filter: &RegionFilter) -> Result<Listing> {
    let transformer = Transformer::new(resolver(config)?);
    let records = source_for(&config.data).fetch_all().await?;
    let reference = config.reference_instant();

    let listing = transformer.transform(&records, reference, filter);
    info!(
        reference = %reference,
        open = listing.open_count(),
        closed = listing.closed_count(),
        "Listing ready"
    );
    Ok(listing)
}

/// Human-readable logs on stderr, JSON lines in a daily file under
/// `LOG_FILE_PATH`. Each sink has its own env filter. Keep the guard alive
/// for the life of the process so the file writer flushes.
fn init_tracing() -> Result<WorkerGuard> {
    let path = PathBuf::from(
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
    );
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.into());

    let (json_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file_name));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));
    let json = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(json_writer)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry().with(console).with(json).init();
    Ok(guard)
}
