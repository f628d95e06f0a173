//! Generates mine fields and reports how placement policies behave.
//!
//! This example shows how to:
//! - Generate a field from a random or fixed seed and print it
//! - Sample many fields in parallel to measure how often independent mine
//!   placement loses mines to collisions
//!
//! # Usage
//!
//! Print one 8×8 field with 8 mines:
//!
//! ```sh
//! cargo run --example generate_field
//! ```
//!
//! Reproduce a field from its seed:
//!
//! ```sh
//! cargo run --example generate_field -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Measure mine collisions over 100000 fields:
//!
//! ```sh
//! cargo run --example generate_field -- --samples 100000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use minefield_core::FieldSize;
use minefield_generator::{FieldGenerator, FieldSeed, GeneratedField, MinePlacement};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlacementKind {
    Independent,
    Distinct,
}

impl From<PlacementKind> for MinePlacement {
    fn from(kind: PlacementKind) -> Self {
        match kind {
            PlacementKind::Independent => Self::Independent,
            PlacementKind::Distinct => Self::Distinct,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the square field.
    #[arg(long, value_name = "N", default_value_t = 8)]
    size: u8,

    /// Number of mines to place.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    mines: usize,

    /// Mine placement policy.
    #[arg(long, value_name = "KIND", default_value = "independent")]
    placement: PlacementKind,

    /// Seed (64 hex digits) of the field to print.
    #[arg(long, value_name = "HEX", conflicts_with = "samples")]
    seed: Option<FieldSeed>,

    /// Number of fields to sample for collision statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let size = match FieldSize::new(args.size) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let generator = FieldGenerator::new(args.placement.into());

    let Some(samples) = args.samples else {
        let field = match args.seed {
            Some(seed) => generator.generate_with_seed(size, args.mines, seed),
            None => generator.generate(size, args.mines),
        };
        print_field(&field);
        return;
    };

    if samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let (short_fields, missing_total) = (0..samples)
        .into_par_iter()
        .map(|_| {
            let field = generator.generate(size, args.mines);
            let missing = field.missing_mines();
            (usize::from(missing > 0), missing)
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    println!("Fields:");
    println!("  Size: {size}");
    println!("  Requested mines: {}", args.mines);
    println!("  Samples: {samples}");
    println!();
    println!("Missing mines:");
    println!("  Fields affected: {short_fields}");
    println!("  Total missing: {missing_total}");
    #[expect(clippy::cast_precision_loss)]
    let ratio = short_fields as f64 / samples as f64;
    println!("  Affected ratio: {ratio:.4}");
}

fn print_field(field: &GeneratedField) {
    println!("Seed:");
    println!("  {}", field.seed);
    println!();
    println!("Mines:");
    println!("  Requested: {}", field.requested_mines);
    println!("  Placed: {}", field.effective_mines());
    println!();
    println!("Field:");
    for line in field.grid.to_string().lines() {
        println!("  {line}");
    }
}
