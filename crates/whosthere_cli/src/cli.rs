//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use whosthere_constant::{DESCRIPTION, LONG_DESCRIPTION};

#[derive(Parser)]
#[command(
    name = "whosthere",
    about = DESCRIPTION,
    long_about = LONG_DESCRIPTION,
    version,
    propagate_version = true
)]
pub struct Cli {
    /// No command runs the interactive TUI
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file (default: $WHOSTHERE_CONFIG, then the user config dir)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Theme to start with, overriding the config file
    #[arg(short, long, global = true, value_name = "NAME")]
    pub theme: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List available themes
    Themes,
    /// Inspect and change the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Persist the theme used at startup
    SetTheme {
        /// Theme name (see `whosthere themes`)
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_runs_tui() {
        let cli = Cli::try_parse_from(["whosthere", "-t", "nord"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.theme.as_deref(), Some("nord"));
    }

    #[test]
    fn set_theme_with_global_config() {
        let cli = Cli::try_parse_from(["whosthere", "config", "set-theme", "dark", "-c", "/tmp/c.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.json")));
        match cli.command {
            Some(Command::Config {
                action: ConfigAction::SetTheme { name },
            }) => assert_eq!(name, "dark"),
            _ => panic!("expected config set-theme"),
        }
    }
}
