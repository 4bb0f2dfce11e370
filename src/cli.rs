use crate::config::Config;
use crate::fetch::FeedSource;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::PathBuf;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Pure Rust command-line RSS reader.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "rss_reader", version, about, long_about = None)]
pub struct Args {
    /// RSS URL
    pub source: Option<String>,

    /// Print result as JSON in stdout
    #[arg(long)]
    pub json: bool,

    /// Limit news topics if this parameter provided
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn effective_limit(&self, config: &Config) -> Option<i64> {
        self.limit.or(config.limit)
    }

    pub fn effective_json(&self, config: &Config) -> bool {
        self.json || config.json.unwrap_or(false)
    }
}

/// Fetches, parses and prints one feed, returning the process exit code.
pub fn run<S, W>(args: &Args, config: &Config, source: &S, out: &mut W) -> i32
where
    S: FeedSource + ?Sized,
    W: Write,
{
    let url = match args.source.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => url,
        None => {
            let err = Args::command().error(
                ErrorKind::MissingRequiredArgument,
                "Please provide a valid RSS URL.",
            );
            if let Err(e) = err.print() {
                tracing::error!("Failed to print usage: {}", e);
            }
            return EXIT_FAILURE;
        }
    };

    let xml = match source.fetch(url) {
        Ok(xml) => xml,
        Err(e) => {
            tracing::error!("Error while fetching RSS feed: {}", e);
            return EXIT_FAILURE;
        }
    };

    let limit = args.effective_limit(config);
    let as_json = args.effective_json(config);
    let rendered = match crate::parse(&xml, limit, as_json) {
        Ok(rendered) => rendered,
        Err(e) => {
            tracing::error!("Unhandled exception: {}", e);
            return EXIT_FAILURE;
        }
    };

    if let Err(e) = writeln!(out, "{}", rendered).and_then(|_| out.flush()) {
        tracing::error!("Failed to write output: {}", e);
        return EXIT_FAILURE;
    }
    EXIT_OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from(["rss_reader", "http://x", "--json", "--limit", "3"]).unwrap();
        assert_eq!(args.source.as_deref(), Some("http://x"));
        assert!(args.json);
        assert_eq!(args.limit, Some(3));
    }

    #[test]
    fn accepts_negative_limit() {
        let args = Args::try_parse_from(["rss_reader", "http://x", "--limit", "-2"]).unwrap();
        assert_eq!(args.limit, Some(-2));
    }

    #[test]
    fn source_is_optional_at_parse_time() {
        let args = Args::try_parse_from(["rss_reader"]).unwrap();
        assert_eq!(args.source, None);
    }

    #[test]
    fn command_line_overrides_config() {
        let config = Config {
            limit: Some(10),
            json: Some(true),
            ..Default::default()
        };
        let args = Args {
            limit: Some(1),
            ..Default::default()
        };
        assert_eq!(args.effective_limit(&config), Some(1));
        assert!(args.effective_json(&config));
        assert_eq!(Args::default().effective_limit(&config), Some(10));
        assert!(!Args::default().effective_json(&Config::default()));
    }

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }
}
