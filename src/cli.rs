//! 命令行参数
use clap::Parser;

use crate::config::{ConfigManager, ScanConfig, StrategyKind, DEFAULT_HTTP_TIMEOUT};

#[derive(Parser, Debug)]
#[command(name = "web-stalker")]
#[command(version)]
#[command(about = "Website Technology Scanner", long_about = None)]
pub struct Cli {
    #[arg(help = "URL of the website to scan")]
    pub url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Output results in JSON format")]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = StrategyKind::Basic, help = "Detection strategy")]
    pub strategy: StrategyKind,

    #[arg(
        long,
        default_value_t = DEFAULT_HTTP_TIMEOUT,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "HTTP timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(long, help = "Do not print the startup banner")]
    pub no_banner: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Cli {
    pub fn to_config(&self) -> ScanConfig {
        ConfigManager::custom()
            .http_timeout(self.timeout)
            .verbose(self.verbose)
            .output_json(self.json)
            .strategy(self.strategy)
            .show_banner(!self.no_banner)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["web-stalker", "https://example.com"]).unwrap();
        assert_eq!(cli.url, "https://example.com");
        assert!(!cli.verbose);
        assert!(!cli.json);

        let config = cli.to_config();
        assert_eq!(config.http_timeout, 10);
        assert_eq!(config.strategy, StrategyKind::Basic);
        assert!(config.show_banner);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "web-stalker",
            "--json",
            "--verbose",
            "--strategy",
            "context",
            "--timeout",
            "3",
            "--no-banner",
            "http://localhost:8080",
        ])
        .unwrap();
        let config = cli.to_config();
        assert!(config.output_json);
        assert!(config.verbose);
        assert_eq!(config.strategy, StrategyKind::Context);
        assert_eq!(config.http_timeout, 3);
        assert!(!config.show_banner);
    }

    #[test]
    fn test_missing_url_is_rejected() {
        assert!(Cli::try_parse_from(["web-stalker"]).is_err());
        assert!(Cli::try_parse_from(["web-stalker", "https://a.b", "--strategy", "fuzzy"]).is_err());
        assert!(Cli::try_parse_from(["web-stalker", "https://a.b", "--timeout", "0"]).is_err());
    }
}
