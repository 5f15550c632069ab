//! park-admin: command-line front end of the property-management admin core.
//!
//! ```bash
//! park-admin import lots.xlsx --map nameOrNumber="Lot #" --map parkName=Park
//! park-admin lots --status FOR_RENT --park none --sort price --desc
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use client::domain::a003_lot::api::{fetch_lots, LotListParams};
use client::domain::a003_lot::list::{table_price, LotField};
use client::shared::api::ApiClient;
use client::shared::config::{load_config, Config};
use client::shared::excel_importer::{parse_path, ImportField, ImportWizard};
use client::shared::list::{apply, CategoryFilter, ListQuery, RangeFilter, NONE_VALUE};
use client::shared::logger::init_logging;
use client::usecases::u501_bulk_import_lots::ImportExecutor;

#[derive(Parser)]
#[command(name = "park-admin")]
#[command(about = "Property management admin tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config.toml (defaults to the executable's directory, then cwd)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bulk-create lots from a .csv, .xlsx or .xls file
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Override a column mapping: field=Column, or field=skip
        #[arg(long = "map", value_name = "FIELD=COLUMN", value_parser = parse_mapping)]
        mappings: Vec<(ImportField, Option<String>)>,

        /// Stop after the preview
        #[arg(long)]
        dry_run: bool,

        /// Preview rows to show (defaults to import.preview_rows)
        #[arg(long, value_name = "N")]
        preview: Option<usize>,
    },

    /// List lots with filters, sorting and pagination
    Lots {
        /// Status code, repeatable (FOR_RENT, FOR_SALE, ...)
        #[arg(long)]
        status: Vec<String>,

        /// Park id or "none" for unassigned lots, repeatable
        #[arg(long)]
        park: Vec<String>,

        /// Company id or "none", repeatable
        #[arg(long)]
        company: Vec<String>,

        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        #[arg(long)]
        min_beds: Option<f64>,

        #[arg(long)]
        max_beds: Option<f64>,

        /// Free-text search
        #[arg(long)]
        search: Option<String>,

        /// Sort column (name, status, park, price, bedrooms, ...)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page (defaults to list.page_size)
        #[arg(long)]
        per_page: Option<usize>,
    },
}

fn parse_mapping(raw: &str) -> Result<(ImportField, Option<String>), String> {
    let (key, column) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=COLUMN, got \"{}\"", raw))?;
    let field = ImportField::from_key(key.trim()).ok_or_else(|| {
        let known: Vec<_> = ImportField::ALL.iter().map(|f| f.key()).collect();
        format!("unknown field \"{}\" (known: {})", key, known.join(", "))
    })?;
    let column = column.trim();
    let column = (!column.is_empty() && !column.eq_ignore_ascii_case("skip"))
        .then(|| column.to_string());
    Ok((field, column))
}

fn category(values: &[String]) -> CategoryFilter {
    CategoryFilter::with_values(values.iter().map(|v| {
        if v.eq_ignore_ascii_case("none") {
            NONE_VALUE.to_string()
        } else {
            v.clone()
        }
    }))
}

async fn run_import(
    config: &Config,
    file: PathBuf,
    mappings: Vec<(ImportField, Option<String>)>,
    dry_run: bool,
    preview: Option<usize>,
) -> anyhow::Result<()> {
    let mut wizard = ImportWizard::new(&config.import);
    let parsed = parse_path(&file, config.import.max_upload_bytes)?;
    wizard.load_parsed(parsed)?;

    for (field, column) in mappings {
        wizard.set_mapping(field, column)?;
    }

    println!("Column mapping:");
    for field in ImportField::ALL {
        let column = wizard.mapping().column(field).unwrap_or("(skip)");
        println!("  {:<26} <- {}", field.title(), column);
    }

    wizard.confirm_mapping()?;

    let limit = preview.unwrap_or(config.import.preview_rows);
    println!("\nPreview (first {} rows):", limit);
    for row in wizard.preview(limit) {
        println!(
            "  {:>4}  {}  [{}]",
            row.mapped.row,
            serde_json::to_string(&row.mapped)?,
            row.display_price
        );
    }

    if dry_run {
        println!("\nDry run: nothing was sent");
        return Ok(());
    }

    let api = Arc::new(ApiClient::from_config(&config.api)?);
    let executor = ImportExecutor::new(api, &config.import);
    let response = executor
        .run_import(&mut wizard, |p| tracing::debug!("Import progress {}%", p))
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    println!(
        "\nImported: {} successful, {} failed",
        response.successful.len(),
        response.failed.len()
    );
    for line in response.failure_lines() {
        println!("  {}", line);
    }
    let warnings = wizard.warnings();
    if !warnings.is_empty() {
        println!("Warnings:");
        for w in warnings {
            println!("  Row {}: {}", w.row, w.warning);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, source) = load_config(cli.config.as_deref())?;
    init_logging(&config.logging, cli.verbose)?;
    tracing::info!("Configuration loaded from {}", source);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    match cli.command {
        Commands::Import {
            file,
            mappings,
            dry_run,
            preview,
        } => runtime.block_on(run_import(&config, file, mappings, dry_run, preview)),
        Commands::Lots {
            status,
            park,
            company,
            min_price,
            max_price,
            min_beds,
            max_beds,
            search,
            sort,
            desc,
            page,
            per_page,
        } => {
            let mut query = ListQuery::new(
                per_page.unwrap_or(config.list.page_size),
                config.list.search_mode,
            );
            query.set_category(LotField::Status, category(&status));
            query.set_category(LotField::Park, category(&park));
            query.set_category(LotField::Company, category(&company));
            query.set_range(LotField::Price, RangeFilter::new(min_price, max_price));
            query.set_range(LotField::Bedrooms, RangeFilter::new(min_beds, max_beds));
            if let Some(search) = search {
                query.set_search(search);
            }
            if let Some(sort) = sort {
                let field = LotField::from_name(&sort)
                    .ok_or_else(|| anyhow::anyhow!("unknown sort column \"{}\"", sort))?;
                query.set_sort(field, !desc);
            }
            query.set_page(page);

            runtime.block_on(async {
                let api = ApiClient::from_config(&config.api)?;
                let params = LotListParams::all(config.list.fetch_limit, query.server_search());
                let lots = fetch_lots(&api, &params)
                    .await
                    .map_err(|e| anyhow::anyhow!(e.user_message()))?;
                let result = apply(&lots, &query);

                for lot in &result.items {
                    println!(
                        "{:<12} {:<24} {:<28} {:>12}",
                        lot.name_or_number,
                        lot.park_name().unwrap_or("Unassigned"),
                        lot.status.codes().join(","),
                        table_price(lot)
                    );
                }
                match result.shown_range() {
                    Some((from, to)) => println!(
                        "\nShowing {}-{} of {} (page {}/{}, pages {:?})",
                        from, to, result.total_items, result.page, result.total_pages,
                        result.page_window
                    ),
                    None => println!("No lots match"),
                }
                anyhow::Ok(())
            })
        }
    }
}
