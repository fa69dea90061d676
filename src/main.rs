//! anillos - abalone age regression CLI
//!
//! Reads an abalone dataset (one comma-separated record per line), fits a
//! least-squares linear model, then prints the fitted coefficient vector and
//! one `predicted actual` line per input sample.
//!
//! Usage:
//!   anillos                 # reads ./abalone.data
//!   anillos path/to/file    # reads an alternative dataset

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use anillos::prelude::*;

/// Fit a linear model predicting abalone ring count from physical
/// measurements and report per-sample predictions.
#[derive(Parser)]
#[command(name = "anillos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dataset file
    #[arg(value_name = "FILE", default_value = "abalone.data")]
    file: PathBuf,
}

fn run(cli: &Cli) -> anillos::Result<()> {
    let dataset = Dataset::load(&cli.file)?;

    let mut model = LinearRegression::new();
    model.fit(dataset.features(), dataset.targets())?;

    println!("Coefficients (bias last):");
    for w in &model.coefficient_vector() {
        println!("{w:>12.6}");
    }

    println!();
    println!("{:>12}  {:>8}", "predicted", "actual");
    let predictions = model.predict(dataset.features())?;
    for i in 0..dataset.n_samples() {
        println!("{:>12.4}  {:>8}", predictions[i], dataset.targets()[i]);
    }

    println!();
    println!(
        "samples: {}  r2: {:.4}  rmse: {:.4}",
        dataset.n_samples(),
        r_squared(&predictions, dataset.targets()),
        rmse(&predictions, dataset.targets()),
    );

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
