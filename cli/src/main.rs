use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use chart_catalog_core::{Category, ChartRecord, pdf_file_name};
use chart_catalog_db::{CatalogConfig, load_catalog, resolve_pdf_path, validate_directory};
use chart_catalog_parser::{
    CategoryView, RunwayGroup, category_view, display_name, format_app_chart_name,
    format_sid_star_chart_name,
};

/// Name category for the `format-name` command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum NameCategory {
    App,
    Sid,
    Star,
}

#[derive(Debug, Parser)]
#[command(name = "chart-catalog")]
#[command(about = "EFB chart catalog inspection and lookup")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the catalog and print a per-airport summary.
    Summary(SummaryArgs),
    /// List one airport's charts with formatted display names.
    List(ListArgs),
    /// Resolve a chart id to its on-disk PDF path.
    Resolve(ResolveArgs),
    /// Format a single raw chart name the way the viewer displays it.
    FormatName(FormatNameArgs),
    /// Parse the catalog and report load diagnostics.
    Validate(ValidateArgs),
    /// Read or write the viewer configuration file.
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
struct SummaryArgs {
    /// Directory holding the catalog text files.
    #[arg(long)]
    csv_dir: PathBuf,
    /// Print the grouped catalog as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Directory holding the catalog text files.
    #[arg(long)]
    csv_dir: PathBuf,
    /// Airport ICAO code to list.
    #[arg(long)]
    airport: String,
    /// Restrict to one category (STAR, APP, TAXI, SID, OTHER, 细则).
    #[arg(long)]
    category: Option<String>,
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Directory holding the catalog text files.
    #[arg(long)]
    csv_dir: PathBuf,
    /// Directory holding the chart PDFs.
    #[arg(long)]
    charts_dir: PathBuf,
    /// Chart identifier to resolve.
    #[arg(long)]
    chart_id: String,
}

#[derive(Debug, Args)]
struct FormatNameArgs {
    /// Category whose formatter to apply.
    #[arg(long)]
    category: NameCategory,
    /// Raw chart name from the catalog.
    name: String,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Directory holding the catalog text files.
    #[arg(long)]
    csv_dir: PathBuf,
    /// Also check that every chart's PDF resolves under this directory.
    #[arg(long)]
    charts_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ConfigArgs {
    #[command(subcommand)]
    operation: ConfigOperation,
}

#[derive(Debug, Subcommand)]
enum ConfigOperation {
    /// Print the effective configuration.
    Show(ConfigPathArgs),
    /// Update one or both configured directories.
    Set(ConfigSetArgs),
}

#[derive(Debug, Args)]
struct ConfigPathArgs {
    /// Configuration file path.
    #[arg(long, default_value = "config.json")]
    path: PathBuf,
}

#[derive(Debug, Args)]
struct ConfigSetArgs {
    /// Configuration file path.
    #[arg(long, default_value = "config.json")]
    path: PathBuf,
    /// New chart PDF directory.
    #[arg(long)]
    charts_dir: Option<String>,
    /// New catalog text directory.
    #[arg(long)]
    csv_dir: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Summary(args) => run_summary(args),
        Command::List(args) => run_list(args),
        Command::Resolve(args) => run_resolve(args),
        Command::FormatName(args) => run_format_name(args),
        Command::Validate(args) => run_validate(args),
        Command::Config(args) => run_config(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn load(csv_dir: &PathBuf) -> Result<chart_catalog_db::CatalogLoad, String> {
    load_catalog(csv_dir)
        .map_err(|err| format!("Failed to load catalog from '{}': {err}", csv_dir.display()))
}

fn run_summary(args: SummaryArgs) -> Result<(), String> {
    let loaded = load(&args.csv_dir)?;

    if args.json {
        let json = serde_json::to_string_pretty(&loaded.catalog)
            .map_err(|err| format!("Failed to serialize catalog: {err}"))?;
        println!("{json}");
    } else {
        println!(
            "Loaded {} chart(s) for {} airport(s) ({} layout).",
            loaded.catalog.record_count(),
            loaded.catalog.airport_count(),
            loaded.report.layout
        );
        for airport in loaded.catalog.airports() {
            let counts: Vec<String> = loaded
                .catalog
                .categories(airport)
                .iter()
                .map(|category| {
                    format!(
                        "{category} {}",
                        loaded.catalog.charts(airport, *category).len()
                    )
                })
                .collect();
            println!("  {airport}: {}", counts.join(", "));
        }
    }

    for warning in loaded.report.warnings() {
        eprintln!("warning: {warning}");
    }
    Ok(())
}

fn chart_line(chart: &ChartRecord, category: Category) -> String {
    let mut line = display_name(chart, category);
    if !chart.page_number.is_empty() {
        line.push_str(&format!("  [{}]", chart.page_number));
    }
    if chart.supplement() {
        line.push_str("  (SUP)");
    }
    if chart.modified() {
        line.push_str("  (MOD)");
    }
    line
}

fn run_list(args: ListArgs) -> Result<(), String> {
    let loaded = load(&args.csv_dir)?;

    if !loaded.catalog.airports().contains(&args.airport.as_str()) {
        return Err(format!("Airport '{}' is not in the catalog", args.airport));
    }

    let categories = match &args.category {
        Some(label) => vec![Category::from_label(label).ok_or_else(|| {
            format!("Unknown category '{label}' (expected STAR, APP, TAXI, SID, OTHER, or 细则)")
        })?],
        None => loaded.catalog.categories(&args.airport),
    };

    for category in categories {
        let charts = loaded.catalog.charts(&args.airport, category);
        if charts.is_empty() {
            continue;
        }
        println!("{category} ({})", charts.len());

        match category_view(category, charts) {
            CategoryView::Flat(sorted) => {
                for chart in &sorted {
                    println!("  {}", chart_line(chart, category));
                }
            }
            CategoryView::ByRunway(buckets) => {
                for (group, bucket) in &buckets {
                    match group {
                        RunwayGroup::Runway(token) => println!("  RWY {token}"),
                        RunwayGroup::Other => println!("  {}", group.label()),
                    }
                    for chart in bucket {
                        println!("    {}", chart_line(chart, category));
                    }
                }
            }
        }
    }
    Ok(())
}

fn run_resolve(args: ResolveArgs) -> Result<(), String> {
    let loaded = load(&args.csv_dir)?;

    let record = loaded
        .records
        .iter()
        .find(|record| record.chart_id == args.chart_id)
        .ok_or_else(|| format!("Chart id '{}' not found in the catalog", args.chart_id))?;

    let file_name = pdf_file_name(record);
    match resolve_pdf_path(&args.charts_dir, &file_name) {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(format!(
            "PDF '{file_name}' not found under '{}'",
            args.charts_dir.display()
        )),
    }
}

fn run_format_name(args: FormatNameArgs) -> Result<(), String> {
    let formatted = match args.category {
        NameCategory::App => format_app_chart_name(&args.name),
        NameCategory::Sid | NameCategory::Star => format_sid_star_chart_name(&args.name),
    };
    println!("{formatted}");
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let loaded = load(&args.csv_dir)?;

    println!(
        "Parsed {} record(s); grouped {} across {} airport(s) ({} layout).",
        loaded.report.records_parsed,
        loaded.report.records_grouped,
        loaded.catalog.airport_count(),
        loaded.report.layout
    );
    for warning in loaded.report.warnings() {
        println!("warning: {warning}");
    }

    if let Some(charts_dir) = args.charts_dir {
        let missing: Vec<String> = loaded
            .records
            .iter()
            .map(pdf_file_name)
            .filter(|file_name| resolve_pdf_path(&charts_dir, file_name).is_none())
            .collect();

        if missing.is_empty() {
            println!("All {} chart PDF(s) resolve on disk.", loaded.records.len());
        } else {
            println!("{} chart PDF(s) missing on disk:", missing.len());
            for file_name in missing.iter().take(20) {
                println!("  {file_name}");
            }
            if missing.len() > 20 {
                println!("  ... and {} more", missing.len() - 20);
            }
            return Err(format!("{} missing chart PDF(s)", missing.len()));
        }
    }
    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<(), String> {
    match args.operation {
        ConfigOperation::Show(show) => {
            let config = CatalogConfig::load_or_default(&show.path);
            let json = serde_json::to_string_pretty(&config)
                .map_err(|err| format!("Failed to serialize configuration: {err}"))?;
            println!("{json}");
            Ok(())
        }
        ConfigOperation::Set(set) => {
            let mut config = CatalogConfig::load_or_default(&set.path);
            if set.charts_dir.is_none() && set.csv_dir.is_none() {
                return Err("Specify --charts-dir and/or --csv-dir".to_string());
            }
            if let Some(charts_dir) = set.charts_dir {
                validate_directory(&charts_dir)
                    .map_err(|err| format!("Charts directory: {err}"))?;
                config.charts_directory = charts_dir;
            }
            if let Some(csv_dir) = set.csv_dir {
                validate_directory(&csv_dir).map_err(|err| format!("CSV directory: {err}"))?;
                config.csv_directory = csv_dir;
            }
            config
                .save(&set.path)
                .map_err(|err| format!("Failed to write '{}': {err}", set.path.display()))?;
            println!("Configuration saved to '{}'.", set.path.display());
            Ok(())
        }
    }
}
