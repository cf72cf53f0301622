//! # catalogpack CLI
//!
//! Command-line interface for the catalogpack library.

use std::io::Write;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt};

use catalogpack::CatalogError;
use catalogpack::cli::Args;
use catalogpack::core::{Pipeline, to_catalog_csv};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), CatalogError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    let config = args.pipeline_config()?;
    let run_date = args.run_date()?;
    let pipeline = Pipeline::new(config)?;

    if args.stdout {
        if !pipeline.config().input_path.exists() {
            return Err(CatalogError::input_not_found(&pipeline.config().input_path));
        }
        let input = std::fs::read_to_string(&pipeline.config().input_path)?;
        let run = pipeline.run(&input, run_date);
        let csv = to_catalog_csv(&run.rows)?;
        std::io::stdout().lock().write_all(csv.as_bytes())?;
        return Ok(());
    }

    let config = pipeline.config();
    println!("📦 catalogpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🏷️  Mode:     {}", config.mode);
    println!("📂 Input:    {}", config.input_path.display());
    println!("💾 Output:   {}", config.output_path(run_date).display());
    println!("📅 Date:     {}", run_date.format("%d.%m.%Y"));
    println!("🗂️  Category: {}", config.category);
    if config.extractor.price_extraction {
        println!("💲 Prices:   B2B / B2C");
    }
    if config.manual.is_some() {
        println!("📝 Input is a product name list");
    }
    println!();

    println!("⏳ Extracting listings...");
    let (run, output_path) = pipeline.process_file(run_date)?;
    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path.display());

    println!();
    println!("📊 Summary:");
    if run.stats.messages > 0 {
        println!("   Messages:  {}", run.stats.messages);
        println!("   Listings:  {}", run.stats.blocks);
    }
    println!("   Rows:      {}", run.stats.rows);
    if run.stats.skipped > 0 {
        println!("   Skipped:   {}", run.stats.skipped);
    }

    if run.conditions.total() > 0 {
        println!();
        println!("🔎 Conditions:");
        for (condition, count) in run.conditions.iter() {
            println!("   {:<20} {}", condition.label(), count);
        }
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}

/// Logs go to stderr so `--stdout` output stays a clean CSV.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
