//! Command-line arguments.

use clap::{ArgAction, Parser, ValueEnum};
use littlewood_search::{available_threads, Bucket, ConfigError, SearchConfig, DEFAULT_MAX_DEPTH};

/// Integer representation used for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IntegerMode {
    /// 64-bit fixed width
    I64,
    /// 128-bit fixed width
    I128,
    /// Arbitrary precision
    Bigint,
}

#[derive(Debug, Parser)]
#[command(name = "lw")]
#[command(about = "Parallel Littlewood-criterion search over pairs of continued-fraction convergents")]
#[command(version)]
pub struct Cli {
    /// Search bound N
    #[arg(short = 'N', default_value_t = 9)]
    pub n: u32,

    /// Worker threads (defaults to hardware concurrency)
    #[arg(short = 'j')]
    pub threads: Option<usize>,

    /// Total number of buckets
    #[arg(short = 'B', default_value_t = 1)]
    pub buckets: usize,

    /// This run's bucket, 1-based
    #[arg(short = 'b', default_value_t = 1)]
    pub bucket: usize,

    /// Print this bucket's initial pairs and exit
    #[arg(short = 'p')]
    pub print: bool,

    /// Pre-split rounds applied before bucketing
    #[arg(short = 's', default_value_t = 0)]
    pub subdivisions: u32,

    /// Integer backend
    #[arg(long = "int", value_enum, default_value_t = IntegerMode::Bigint)]
    pub int: IntegerMode,

    /// Abort if a pair is still unverified at this depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Stop subdividing at the cutoff (faster, skips some failing children)
    #[arg(long)]
    pub prune: bool,

    /// Seed for a reproducible dispatch order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The search configuration these arguments describe.
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        let config = SearchConfig::new(self.n)
            .with_threads(self.threads.unwrap_or_else(available_threads))
            .with_bucket(Bucket::new(self.buckets, self.bucket)?)
            .with_subdivisions(self.subdivisions)
            .with_max_depth(self.max_depth)
            .with_pruning(self.prune);
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }

    /// Tracing filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lw").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.n, 9);
        assert_eq!(cli.int, IntegerMode::Bigint);
        assert!(!cli.print);

        let config = cli.search_config().unwrap();
        assert_eq!(config.bucket, Bucket::WHOLE);
        assert_eq!(config.threads, available_threads());
        assert_eq!(config.max_depth, 80);
        assert!(!config.pruning);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn attached_short_values() {
        let cli = parse(&["-N7", "-j2", "-B10", "-b3", "-s1", "-p"]);
        assert_eq!(cli.n, 7);
        assert_eq!(cli.threads, Some(2));
        assert!(cli.print);

        let config = cli.search_config().unwrap();
        assert_eq!(config.bucket, Bucket::new(10, 3).unwrap());
        assert_eq!(config.subdivisions, 1);
        assert_eq!(config.threads, 2);
    }

    #[test]
    fn flags_are_order_insensitive() {
        let a = parse(&["-b2", "-N5", "-B4"]).search_config().unwrap();
        let b = parse(&["-N5", "-B4", "-b2"]).search_config().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn long_options() {
        let cli = parse(&["--int", "i128", "--max-depth", "20", "--prune", "--seed", "9", "-vv"]);
        assert_eq!(cli.int, IntegerMode::I128);
        assert_eq!(cli.log_level(), "debug");

        let config = cli.search_config().unwrap();
        assert_eq!(config.max_depth, 20);
        assert!(config.pruning);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Cli::try_parse_from(["lw", "--int", "u8"]).is_err());
    }

    #[test]
    fn out_of_range_bucket_is_rejected() {
        assert_eq!(
            parse(&["-B3", "-b4", "-j1"]).search_config(),
            Err(ConfigError::BucketOutOfRange { index: 4, count: 3 })
        );
        assert_eq!(parse(&["-B0"]).search_config(), Err(ConfigError::NoBuckets));
    }

    #[test]
    fn pruning_is_opt_in() {
        assert!(Cli::try_parse_from(["lw", "--no-prune"]).is_err());
        assert!(!parse(&["-N5"]).search_config().unwrap().pruning);
        assert!(parse(&["-N5", "--prune"]).search_config().unwrap().pruning);
    }
}
