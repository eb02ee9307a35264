use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Forwards new GitHub releases to a Slack webhook.
#[derive(Debug, Parser)]
#[command(name = "release-notifier", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./release-notifier.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Check every repository once (default)
    Run,
    /// Serve `GET /`, running one check per request
    Serve {
        /// Listen address, overrides the configuration file
        #[arg(short, long)]
        address: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_run_at_info() {
        let cli = Cli::parse_from(["release-notifier"]);

        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn should_parse_serve_with_global_flags() {
        let cli = Cli::parse_from([
            "release-notifier",
            "serve",
            "--address",
            "127.0.0.1:3000",
            "--log-level",
            "debug",
            "--config",
            "notifier.yaml",
        ]);

        assert_eq!(
            cli.command,
            Some(Command::Serve {
                address: Some("127.0.0.1:3000".to_owned())
            })
        );
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);
        assert_eq!(cli.config, Some(PathBuf::from("notifier.yaml")));
    }
}
