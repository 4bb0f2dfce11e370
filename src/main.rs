use clap::Parser;
use rss_reader::cli::{self, Args, EXIT_FAILURE};
use rss_reader::config::Config;
use rss_reader::fetch::HttpFetcher;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(EXIT_FAILURE);
        }
    };

    let fetcher = match HttpFetcher::new(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!("Error while fetching RSS feed: {}", e);
            process::exit(EXIT_FAILURE);
        }
    };

    let mut stdout = std::io::stdout().lock();
    process::exit(cli::run(&args, &config, &fetcher, &mut stdout));
}
