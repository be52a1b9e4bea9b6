use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::query::BoundsPolicy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Engine {
    /// Sqrt decomposition, `O(sqrt n)` per query.
    #[default]
    Sqrt,
    /// Linear scan per query.
    Naive,
}

/// Answer static range minimum queries read from a file or stdin.
#[derive(Debug, Parser)]
#[command(name = "static-rmq", version)]
pub struct Args {
    /// Input file; reads stdin when absent or `-`.
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    pub engine: Engine,

    /// Block size for the sqrt engine; defaults to ceil(sqrt(n)).
    #[arg(long)]
    pub block_size: Option<NonZeroUsize>,

    /// Handling of query bounds outside [1, n].
    #[arg(long, value_enum, default_value_t)]
    pub bounds: BoundsPolicy,

    /// More logging on stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// `None` means stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub engine: Engine,
    pub block_size: Option<NonZeroUsize>,
    pub bounds: BoundsPolicy,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        if args.block_size.is_some() && args.engine != Engine::Sqrt {
            log::warn!("--block-size has no effect with --engine {:?}", args.engine);
        }
        Self {
            engine: args.engine,
            block_size: args.block_size,
            bounds: args.bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["static-rmq"]).unwrap();
        assert_eq!(args.input_path(), None);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
        assert_eq!(Config::from(&args), Config::default());
    }

    #[test]
    fn all_options() {
        let args = Args::try_parse_from([
            "static-rmq",
            "in.txt",
            "--engine",
            "naive",
            "--block-size",
            "16",
            "--bounds",
            "clamp",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.input_path(), Some(&PathBuf::from("in.txt")));
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
        let config = Config::from(&args);
        assert_eq!(config.engine, Engine::Naive);
        assert_eq!(config.block_size, NonZeroUsize::new(16));
        assert_eq!(config.bounds, BoundsPolicy::Clamp);
    }

    #[test]
    fn dash_means_stdin() {
        let args = Args::try_parse_from(["static-rmq", "-"]).unwrap();
        assert_eq!(args.input_path(), None);
    }

    #[test]
    fn zero_block_size_is_rejected() {
        assert!(Args::try_parse_from(["static-rmq", "--block-size", "0"]).is_err());
        assert!(Args::try_parse_from(["static-rmq", "--bounds", "wrap"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
