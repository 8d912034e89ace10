use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gildedrose_inventory::{Inventory, Item};

mod manifest;

/// Nightly inventory simulator.
///
/// Seeds the shop's stock (built-in opening list or a JSON manifest),
/// advances it one day at a time, and prints each day's state.
#[derive(Debug, Parser)]
#[command(name = "gildedrose", version, about)]
struct Args {
    /// Number of nights to simulate.
    #[arg(long, default_value_t = 30)]
    days: u32,

    /// JSON manifest with the opening stock (array of
    /// `{"name", "sell_in", "quality"}` objects).
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still takes precedence).
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        gildedrose_observability::init_with_default_filter("debug");
    } else {
        gildedrose_observability::init();
    }

    let items = match &args.manifest {
        Some(path) => manifest::load(path)
            .with_context(|| format!("failed to load manifest {}", path.display()))?,
        None => manifest::opening_stock(),
    };

    let mut inventory = Inventory::new(items);
    tracing::info!(items = inventory.len(), days = args.days, "starting simulation");

    println!(
        "Inventory report, {}",
        chrono::Utc::now().format("%Y-%m-%d")
    );
    print_day(0, inventory.items());

    for day in 1..=args.days {
        inventory.advance_day();
        tracing::debug!(day, "advanced inventory by one day");
        print_day(day, inventory.items());
    }

    Ok(())
}

fn print_day(day: u32, items: &[Item]) {
    println!();
    println!("-------- day {day} --------");
    println!("name, sell_in, quality");
    for item in items {
        println!("{item}");
    }
}
