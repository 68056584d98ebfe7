//! Command-line interface for rewind.

use crate::TuiConfig;
use clap::Parser;
use std::path::PathBuf;

/// Rewind - two-player tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Two-player tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Prefill the name of the X player
    #[arg(long)]
    pub player_x: Option<String>,

    /// Prefill the name of the O player
    #[arg(long)]
    pub player_o: Option<String>,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies flags that override values from the config file.
    pub fn apply_overrides(&self, config: TuiConfig) -> TuiConfig {
        match &self.log_file {
            Some(log_file) => config.with_log_file(log_file.clone()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rewind"]).expect("parses");
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
        assert!(cli.player_x.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_prefilled_names() {
        let cli = Cli::try_parse_from(["rewind", "--player-x", "Alice", "--player-o", "Bob"])
            .expect("parses");
        assert_eq!(cli.player_x.as_deref(), Some("Alice"));
        assert_eq!(cli.player_o.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_log_file_flag_overrides_config() {
        let config = TuiConfig::default().with_log_file(PathBuf::from("from_config.log"));
        let cli = Cli::try_parse_from(["rewind", "--log-file", "from_flag.log"]).expect("parses");
        let merged = cli.apply_overrides(config);
        assert_eq!(merged.log_file(), &PathBuf::from("from_flag.log"));
    }

    #[test]
    fn test_config_log_file_kept_without_flag() {
        let config = TuiConfig::default().with_log_file(PathBuf::from("from_config.log"));
        let cli = Cli::try_parse_from(["rewind"]).expect("parses");
        let merged = cli.apply_overrides(config.clone());
        assert_eq!(merged, config);
    }
}
