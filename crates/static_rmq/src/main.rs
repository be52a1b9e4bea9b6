use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use clap::Parser;
use static_rmq::{Args, Config, Error, run};

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> Result<(), Error> {
    let reader: Box<dyn BufRead> = match args.input_path() {
        Some(path) => {
            log::info!("reading {}", path.display());
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(io::stdin().lock()),
    };
    let summary = run(reader, io::stdout().lock(), &Config::from(args))?;
    log::info!("answered {} queries over {} values", summary.queries, summary.len);
    Ok(())
}
