//! rust_pairgen command-line interface

use clap::Parser;
use log::{info, LevelFilter};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rust_pairgen::cli::{Cli, Commands};
use rust_pairgen::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Find the first non-flag argument (potential subcommand)
    let first_positional = args.iter().skip(1).find(|a| !a.starts_with('-'));
    let subcommands = ["generate", "analyze", "help"];
    let has_subcommand = first_positional
        .map_or(false, |a| subcommands.contains(&a.as_str()));

    if !has_subcommand {
        if args.len() == 1 {
            print_no_args();
            return;
        }
        if args.iter().any(|a| a == "--help") {
            print_long_help();
            return;
        }
        if args.iter().any(|a| a == "-h") {
            print_short_help();
            return;
        }
        if args.iter().any(|a| a == "-V" || a == "--version") {
            println!("rust_pairgen {}", VERSION);
            return;
        }
        print_no_args();
        return;
    }

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Some(Commands::Generate {
            mean_diff,
            p_value,
            genotype,
            output,
            seed,
            min,
            max,
            baseline_normal,
            followup_normal,
            data_type,
            baseline_mean,
            baseline_sd,
        }) => run_generate(
            mean_diff,
            p_value,
            &genotype,
            &output,
            seed,
            min.zip(max),
            baseline_normal,
            followup_normal,
            &data_type,
            baseline_mean,
            baseline_sd,
        ),
        Some(Commands::Analyze { input, json }) => run_analyze(&input, json),
        None => {
            print_no_args();
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// Custom help output
// ---------------------------------------------------------------------------

fn print_no_args() {
    println!("rust_pairgen v{}", VERSION);
    println!("Run `rust_pairgen -h` for usage or `rust_pairgen --help` for detailed information.");
}

fn print_short_help() {
    println!("rust_pairgen v{}", VERSION);
    println!();
    println!("Usage: rust_pairgen <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  generate   Generate a synthetic paired dataset");
    println!("  analyze    Analyze an existing paired dataset");
    println!();
    println!("Run `rust_pairgen <COMMAND> --help` for command-specific options.");
}

fn print_long_help() {
    println!("rust_pairgen v{}", VERSION);
    println!("Synthesize paired before/after datasets with a target mean difference and p-value");
    println!();
    println!("Usage: rust_pairgen <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  generate   Generate a synthetic paired dataset");
    println!("               - exact mean and SD of Followup - Baseline");
    println!("               - optional value range with normal/abnormal shift");
    println!("               - reproducible with --seed");
    println!("  analyze    Mean difference and paired t-test p-value of a CSV/TSV file");
    println!();
    println!("Global Options:");
    println!("  -v, --verbose    Enable verbose output");
    println!("  -h               Print short help");
    println!("      --help       Print detailed help");
    println!("  -V, --version    Print version");
    println!();
    println!("Examples:");
    println!("  rust_pairgen generate --mean-diff 2.0 --p-value 0.05 \\");
    println!("    --genotype WT=5 --genotype KO=5 -o output.csv");
    println!();
    println!("  rust_pairgen analyze -i output.csv");
}

// ---------------------------------------------------------------------------
// Subcommand implementations
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn run_generate(
    mean_diff: f64,
    p_value: f64,
    genotype_specs: &[String],
    output_path: &str,
    seed: Option<u64>,
    value_range: Option<(f64, f64)>,
    baseline_normal: Option<f64>,
    followup_normal: Option<f64>,
    data_type: &str,
    baseline_mean: f64,
    baseline_sd: f64,
) -> Result<()> {
    let genotypes = GenotypeSpec::parse_all(genotype_specs)?;
    let data_type: DataType = data_type.parse()?;

    let mut builder = GenerationParameters::builder(mean_diff, p_value)
        .baseline_distribution(baseline_mean, baseline_sd)
        .data_type(data_type);
    if let Some((min, max)) = value_range {
        builder = builder.value_range(min, max);
    }
    if let Some(v) = baseline_normal {
        builder = builder.baseline_normal(v);
    }
    if let Some(v) = followup_normal {
        builder = builder.followup_normal(v);
    }
    let params = builder.build()?;

    let seed = seed.unwrap_or_else(rand::random);
    info!("Seed: {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let generated = generate_dataset(&params, &genotypes, &mut rng)?;

    info!("Writing dataset to: {}", output_path);
    write_dataset(output_path, &generated.dataset)?;

    let report = &generated.report;
    println!(
        "Generated {} samples. Mean difference: {:.4}",
        generated.dataset.n_rows(),
        report.mean_diff
    );
    println!("Paired t-test p-value: {:.4e}", report.p_value);
    println!("Data saved to {}", output_path);
    Ok(())
}

fn run_analyze(input_path: &str, json: bool) -> Result<()> {
    info!("Loading dataset from: {}", input_path);
    let table = read_table(input_path)?;
    info!("  {} rows, {} columns", table.n_rows(), table.n_cols());

    let report = analyze_source(&table)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Mean difference: {:.4}", report.mean_diff);
        println!("Paired t-test p-value: {:.4e}", report.p_value);
    }
    Ok(())
}
