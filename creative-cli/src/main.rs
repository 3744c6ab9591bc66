use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use creative_core::metrics::{metric_tiles, CreativeMetrics, RetentionFunnel};
use creative_core::types::parse_records;
use creative_core::{CreativeRecord, DisplayConfig, MediaSource, NumberFormat};

#[derive(Parser)]
#[command(name = "creative-report", about = "Print ad creative metrics from a JSON export")]
struct Cli {
    /// Locale for digit grouping: en-US or pt-BR (overrides CREATIVE_LOCALE)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// ISO 4217 currency code (overrides CREATIVE_CURRENCY)
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Abbreviation suffixes: short (K/M) or long (mil/mi) (overrides CREATIVE_SUFFIX)
    #[arg(long, global = true)]
    suffix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One line per creative
    List {
        /// JSON file: an array of creatives or {"creatives": [...]}
        file: PathBuf,
    },
    /// Full metrics and retention funnel for one creative
    Show {
        file: PathBuf,

        /// Position in the file (0-based) or ad name
        ad: String,

        /// Print the derived metrics as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn env_or(arg: &Option<String>, var: &str) -> Option<String> {
    arg.clone().or_else(|| std::env::var(var).ok())
}

fn build_config(cli: &Cli) -> Result<DisplayConfig, String> {
    let locale = env_or(&cli.locale, "CREATIVE_LOCALE");
    let currency = env_or(&cli.currency, "CREATIVE_CURRENCY");
    let suffix = env_or(&cli.suffix, "CREATIVE_SUFFIX");
    DisplayConfig::default().with_overrides(
        locale.as_deref(),
        currency.as_deref(),
        suffix.as_deref(),
    )
}

fn load_records(path: &Path) -> Result<Vec<CreativeRecord>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    parse_records(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Look up by index first, then by exact (case-insensitive) ad name.
fn find_creative<'a>(records: &'a [CreativeRecord], ad: &str) -> Result<&'a CreativeRecord, String> {
    if let Ok(idx) = ad.trim().parse::<usize>() {
        return records
            .get(idx)
            .ok_or_else(|| format!("No creative at index {idx} ({} in file)", records.len()));
    }
    records
        .iter()
        .find(|r| r.ad_name.eq_ignore_ascii_case(ad.trim()))
        .ok_or_else(|| format!("No creative named {ad:?}"))
}

const BAR_COLS: usize = 40;

fn funnel_lines(funnel: &RetentionFunnel, fmt: &NumberFormat) -> Vec<String> {
    funnel
        .stages
        .iter()
        .map(|stage| {
            let filled = ((stage.percent.clamp(0.0, 100.0) / 100.0) * BAR_COLS as f64).round() as usize;
            format!(
                "{:>6} |{}{}| {:>8}  {}",
                stage.label,
                "#".repeat(filled),
                " ".repeat(BAR_COLS - filled),
                fmt.format_percent(stage.percent, 1),
                fmt.format_count(stage.views),
            )
        })
        .collect()
}

fn print_list(records: &[CreativeRecord], fmt: &NumberFormat) {
    for (i, rec) in records.iter().enumerate() {
        let m = CreativeMetrics::from_record(rec);
        println!(
            "{i:>3}  {:<40} {:>8} impr  {:>7} CTR  {}",
            rec.display_name(),
            fmt.format_count(rec.impressions),
            fmt.format_percent(m.ctr, 2),
            fmt.format_currency(rec.cost),
        );
    }
}

fn print_show(rec: &CreativeRecord, fmt: &NumberFormat) {
    let metrics = CreativeMetrics::from_record(rec);
    println!("{}", rec.display_name());
    println!("{} > {}  ({})", rec.campaign_name, rec.ad_group_name, rec.date);
    if !rec.ad_text.is_empty() {
        println!("\n{}", rec.ad_text);
    }
    match MediaSource::resolve(rec) {
        MediaSource::Embed(url) => println!("\nMedia: {url}"),
        MediaSource::Thumbnail(url) => println!("\nThumbnail: {url}"),
        MediaSource::Empty => println!("\nNo media"),
    }

    println!();
    for tile in metric_tiles(rec, &metrics, fmt) {
        match tile.exact {
            Some(exact) if exact != tile.value => {
                println!("{:<16} {:>12}  ({exact})", tile.label, tile.value)
            }
            _ => println!("{:<16} {:>12}", tile.label, tile.value),
        }
    }

    println!("\nRetention ({} views)", fmt.format_count(metrics.funnel.total_views));
    for line in funnel_lines(&metrics.funnel, fmt) {
        println!("{line}");
    }
    println!("\nVTR {}   CPV {}", fmt.format_percent(metrics.vtr, 2), fmt.format_currency(metrics.cpv));
}

fn metrics_json(rec: &CreativeRecord) -> serde_json::Value {
    let m = CreativeMetrics::from_record(rec);
    serde_json::json!({
        "adName": rec.ad_name,
        "ctr": m.ctr,
        "vtr": m.vtr,
        "cpv": m.cpv,
        "engagements": m.engagements,
        "engagementRate": m.engagement_rate,
        "totalViews": m.funnel.total_views,
        "retention": m.funnel.stages.iter()
            .map(|s| serde_json::json!({ "stage": s.label, "percent": s.percent, "views": s.views }))
            .collect::<Vec<_>>(),
    })
}

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = build_config(&cli).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let fmt = config.number_format();

    match &cli.command {
        Commands::List { file } => {
            let records = load_records(file).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            if records.is_empty() {
                eprintln!("No creatives in {}", file.display());
                return;
            }
            print_list(&records, &fmt);
        }
        Commands::Show { file, ad, json } => {
            let records = load_records(file).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let rec = find_creative(&records, ad).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            if *json {
                match serde_json::to_string_pretty(&metrics_json(rec)) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_show(rec, &fmt);
            }
        }
    }
}
