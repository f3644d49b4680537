#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::print_stdout)]

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use clap::Parser;
use initial_table::{DEFAULT_CAPACITY, InitialTable, TableExtensions, TableOptions};
use plotters::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

// Fixed guest list added on every run
const GUESTS: [&str; 7] = ["Wallis", "Willow", "Will", "Wendy", "Wynona", "Zoe", "Ann"];

const QUERIED_GUEST: &str = "Zoe";

#[derive(Parser, Debug)]
#[command(name = "initial_table_demo")]
#[command(about = "Fills a first-letter hash table with guests and prints its layout")]
struct Args {
    /// Starting number of buckets
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Random names to add after the fixed guests
    #[arg(short, long, default_value_t = 0)]
    random: usize,

    /// Seed for the random names
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write a chain-length bar chart to this PNG file
    #[arg(long)]
    plot: Option<PathBuf>,
}

/// Generates `amount` capitalized names of 3 to 8 letters
fn random_names(amount: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..amount)
        .map(|_| {
            let length = rng.random_range(2..8);
            let initial = char::from(rng.random_range(b'A'..=b'Z'));
            let rest = (0..length).map(|_| char::from(rng.random_range(b'a'..=b'z')));
            std::iter::once(initial).chain(rest).collect()
        })
        .collect()
}

/// Draws one bar per bucket showing how many entries its chain holds
fn plot_chain_lengths(table: &InitialTable, path: &Path) -> Result<(), Box<dyn Error>> {
    let lengths = table.chain_lengths();
    let tallest = lengths.iter().copied().max().unwrap_or(0).saturating_add(1);

    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain length per bucket", ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d((0..lengths.len()).into_segmented(), 0..tallest)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Bucket")
        .y_desc("Entries")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RGBColor(50, 90, 220).filled())
            .margin(2)
            .data(lengths.iter().copied().enumerate()),
    )?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut table = InitialTable::with_options(TableOptions::new().capacity(args.capacity))?;
    table.extend(GUESTS);
    if args.random > 0 {
        table.extend(random_names(args.random, args.seed));
    }

    println!("{table}");

    println!("\nDoes {QUERIED_GUEST} exist? {}", table.exists(QUERIED_GUEST));
    println!("Removal of {QUERIED_GUEST}...");
    match table.remove(QUERIED_GUEST) {
        Some(entry) => println!("Removed {:?}", entry.name()),
        None => println!("{QUERIED_GUEST} was not in the table"),
    }

    println!("\nAfter removing {QUERIED_GUEST}:");
    println!("{table}");

    if let Some(path) = &args.plot {
        plot_chain_lengths(&table, path)?;
        println!("\nGenerated chain length chart: {}", path.display());
    }

    Ok(())
}
