use std::path::PathBuf;

use clap::Parser;

use webpify_core::config::DEFAULT_QUALITY;

/// CLI tool for batch-converting PNG and JPEG images to WebP
#[derive(Debug, Parser)]
#[command(name = "webpify", version, about)]
pub struct Cli {
    /// Source directory (or single file) containing images to convert
    #[arg(default_value = "images")]
    pub source: PathBuf,

    /// WebP encoder quality 0-100; malformed values fall back to the default
    #[arg(long = "qlt", value_name = "0-100", default_value_t = DEFAULT_QUALITY, value_parser = parse_quality)]
    pub qlt: u8,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Quality values that fail to parse, or fall outside 0-100, silently take
/// the default instead of aborting the run.
fn parse_quality(s: &str) -> Result<u8, std::convert::Infallible> {
    Ok(s.parse::<u8>()
        .ok()
        .filter(|q| *q <= 100)
        .unwrap_or(DEFAULT_QUALITY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["webpify"]);
        assert_eq!(cli.source, PathBuf::from("images"));
        assert_eq!(cli.qlt, 85);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_quality_flag() {
        let cli = Cli::parse_from(["webpify", "--qlt=40"]);
        assert_eq!(cli.qlt, 40);
    }

    #[test]
    fn test_malformed_quality_falls_back() {
        let cli = Cli::parse_from(["webpify", "--qlt=abc"]);
        assert_eq!(cli.qlt, 85);
    }

    #[test]
    fn test_out_of_range_quality_falls_back() {
        let cli = Cli::parse_from(["webpify", "--qlt=250"]);
        assert_eq!(cli.qlt, 85);
    }

    #[test]
    fn test_source_positional() {
        let cli = Cli::parse_from(["webpify", "/tmp/shots", "--qlt=70"]);
        assert_eq!(cli.source, PathBuf::from("/tmp/shots"));
        assert_eq!(cli.qlt, 70);
    }
}
