//! Command-line interface for rust_pairgen

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rust_pairgen")]
#[command(version)]
#[command(about = "Synthesize and analyze paired before/after datasets")]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a synthetic paired dataset
    #[command(
        about = "Generate a synthetic paired dataset",
        long_about = "Generate a synthetic paired dataset\n\n\
            Solves the standard deviation of the paired differences that makes a\n\
            paired t-test reproduce the target p-value, then draws Baseline and\n\
            Followup values whose difference has exactly the target mean and SD.\n\n\
            With --min/--max the bounded variant is used: a uniform baseline inside\n\
            the range, centred on --baseline-normal (shifted for abnormal data).",
        after_long_help = "\
Examples:
  # Two genotypes, 5 animals each
  rust_pairgen generate --mean-diff 2.0 --p-value 0.05 \\
    --genotype WT=5 --genotype KO=5 -o output.csv

  # Reproducible run
  rust_pairgen generate --mean-diff -1.5 --p-value 0.01 --genotype A=12 --seed 42

  # Bounded values with an abnormal shift
  rust_pairgen generate --mean-diff 3 --p-value 0.05 --genotype WT=8 \\
    --min 0 --max 100 --baseline-normal 40 --followup-normal 43 --data-type abnormal"
    )]
    Generate {
        /// Target mean difference (Followup - Baseline)
        #[arg(long, allow_negative_numbers = true)]
        mean_diff: f64,

        /// Target two-sided paired t-test p-value
        #[arg(long)]
        p_value: f64,

        /// Genotype group as LABEL=COUNT
        #[arg(short, long, value_name = "LABEL=COUNT", required = true,
            long_help = "Genotype group and its sample size.\n\
                Format: LABEL=COUNT (e.g., --genotype WT=5)\n\
                Can be specified multiple times; rows follow the given order.")]
        genotype: Vec<String>,

        /// Output file path [default: output.csv]
        #[arg(short, long, default_value = "output.csv")]
        output: String,

        /// Random seed
        #[arg(long,
            long_help = "Seed for the ChaCha8 generator.\n\
                The same seed and parameters always produce the same dataset.\n\
                Without a seed the generator is seeded from system entropy.")]
        seed: Option<u64>,

        /// Lower bound of the value range
        #[arg(long, allow_negative_numbers = true, requires = "max")]
        min: Option<f64>,

        /// Upper bound of the value range
        #[arg(long, allow_negative_numbers = true, requires = "min")]
        max: Option<f64>,

        /// Reference baseline level for the bounded variant
        #[arg(long, allow_negative_numbers = true,
            long_help = "Reference baseline level for the bounded variant.\n\
                Defaults to the midpoint of --min and --max.")]
        baseline_normal: Option<f64>,

        /// Reference followup level for the bounded variant
        #[arg(long, allow_negative_numbers = true,
            long_help = "Reference followup level for the bounded variant.\n\
                Defaults to the baseline reference plus --mean-diff.")]
        followup_normal: Option<f64>,

        /// Data type for the bounded variant [default: normal]
        #[arg(long, default_value = "normal",
            long_help = "Data type for the bounded variant.\n\
                normal:   values centred on the reference levels\n\
                abnormal: baseline shifted up and followup shifted down\n\
                          by a quarter of the range width")]
        data_type: String,

        /// Mean of the unbounded baseline distribution [default: 100]
        #[arg(long, default_value = "100", allow_negative_numbers = true)]
        baseline_mean: f64,

        /// SD of the unbounded baseline distribution [default: 10]
        #[arg(long, default_value = "10")]
        baseline_sd: f64,
    },

    /// Analyze an existing paired dataset
    #[command(
        long_about = "Analyze an existing paired dataset.\n\n\
            Reads a CSV/TSV file with Baseline and Followup columns and reports the\n\
            mean difference and the two-sided paired t-test p-value.",
        after_long_help = "\
Examples:
  rust_pairgen analyze -i output.csv
  rust_pairgen analyze -i measurements.tsv --json"
    )]
    Analyze {
        /// Path to CSV file with Baseline and Followup columns
        #[arg(short, long)]
        input: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "rust_pairgen",
            "generate",
            "--mean-diff",
            "-2.5",
            "--p-value",
            "0.05",
            "--genotype",
            "WT=5",
            "--genotype",
            "KO=5",
            "--seed",
            "7",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate {
                mean_diff,
                p_value,
                genotype,
                output,
                seed,
                min,
                ..
            }) => {
                assert_eq!(mean_diff, -2.5);
                assert_eq!(p_value, 0.05);
                assert_eq!(genotype, vec!["WT=5", "KO=5"]);
                assert_eq!(output, "output.csv");
                assert_eq!(seed, Some(7));
                assert_eq!(min, None);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_range_requires_both_bounds() {
        let res = Cli::try_parse_from([
            "rust_pairgen",
            "generate",
            "--mean-diff",
            "1",
            "--p-value",
            "0.05",
            "--genotype",
            "A=4",
            "--min",
            "0",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["rust_pairgen", "analyze", "-i", "data.csv", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Analyze { ref input, json: true }) if input == "data.csv"
        ));
    }
}
