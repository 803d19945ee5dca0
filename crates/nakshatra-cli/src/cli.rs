//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Political Nakshatra - Place yourself on a three-axis map of Indian politics.
#[derive(Debug, Parser)]
#[command(name = "nakshatra")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NAKSHATRA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids or tokens only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Take the questionnaire interactively
    Quiz(QuizArgs),

    /// Score a file of answers
    Score(ScoreArgs),

    /// Explain a position: labels, descriptions, examples, nearest entities
    Explain(PositionArgs),

    /// Rank parties or leaders by distance from a position
    Compare(CompareArgs),

    /// Encode or decode share tokens
    Share(ShareArgs),

    /// List the question catalog
    Questions(QuestionsArgs),

    /// Validate the configured or given catalogs
    Validate(ValidateArgs),

    /// Show or edit the configuration file
    Config(ConfigArgs),
}

/// Arguments for the quiz command.
#[derive(Debug, Default, Parser)]
pub struct QuizArgs {
    /// Ignore any saved session and start over
    #[arg(long)]
    pub fresh: bool,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// TOML or JSON map of question id to a response 1-5
    pub answers: PathBuf,
}

/// Where a position comes from; exactly one is required.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct PositionArgs {
    /// Coordinates as "statism,recognition,sid"
    #[arg(short, long, allow_hyphen_values = true)]
    pub position: Option<String>,

    /// Share token
    #[arg(short, long)]
    pub token: Option<String>,

    /// Answers file to score first
    #[arg(short, long)]
    pub answers: Option<PathBuf>,
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    #[command(flatten)]
    pub source: PositionArgs,

    /// Compare against leaders instead of parties
    #[arg(short, long)]
    pub leaders: bool,

    /// Show only the closest N
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only leaders in a region group (national, regional, historical)
    #[arg(short, long, requires = "leaders")]
    pub region: Option<String>,

    /// Detailed per-axis comparison with one party or leader (id or abbreviation)
    #[arg(short, long)]
    pub with: Option<String>,
}

/// Arguments for share token handling.
#[derive(Debug, Parser)]
pub struct ShareArgs {
    #[command(subcommand)]
    pub action: ShareAction,
}

/// Share token actions.
#[derive(Debug, Subcommand)]
pub enum ShareAction {
    /// Turn "statism,recognition,sid" into a token
    Encode {
        /// Coordinates in [-1, 1]
        #[arg(allow_hyphen_values = true)]
        position: String,
    },

    /// Turn a token back into coordinates
    Decode {
        /// Share token
        token: String,
    },
}

/// Arguments for the questions command.
#[derive(Debug, Parser)]
pub struct QuestionsArgs {
    /// Only questions on this axis
    #[arg(short, long)]
    pub axis: Option<String>,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Question catalog to check instead of the configured one
    #[arg(long)]
    pub questions: Option<PathBuf>,

    /// Party catalog to check
    #[arg(long)]
    pub parties: Option<PathBuf>,

    /// Leader catalog to check
    #[arg(long)]
    pub leaders: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Set the catalog validation preset (default, permissive, strict)
    Validation {
        /// Preset name
        preset: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["nakshatra"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_compare_command() {
        let cli = Cli::parse_from([
            "nakshatra",
            "compare",
            "--position",
            "-0.5,0.2,0.1",
            "--leaders",
            "-n",
            "5",
        ]);
        match cli.command {
            Some(Command::Compare(args)) => {
                assert_eq!(args.source.position.as_deref(), Some("-0.5,0.2,0.1"));
                assert!(args.leaders);
                assert_eq!(args.limit, Some(5));
            }
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_position_source_is_exclusive() {
        let result = Cli::try_parse_from([
            "nakshatra", "explain", "--position", "0,0,0", "--token", "abc",
        ]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["nakshatra", "explain"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_share_encode_negative() {
        let cli = Cli::parse_from(["nakshatra", "share", "encode", "-0.2,0.4,1"]);
        match cli.command {
            Some(Command::Share(ShareArgs {
                action: ShareAction::Encode { position },
            })) => assert_eq!(position, "-0.2,0.4,1"),
            _ => panic!("Expected Share Encode"),
        }
    }

    #[test]
    fn test_config_command() {
        let cli = Cli::parse_from(["nakshatra", "config", "validation", "strict"]);
        match cli.command {
            Some(Command::Config(ConfigArgs {
                action: ConfigAction::Validation { preset },
            })) => assert_eq!(preset, "strict"),
            _ => panic!("Expected Config Validation"),
        }

        let cli = Cli::parse_from(["nakshatra", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigArgs {
                action: ConfigAction::Init { force: true }
            }))
        ));
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);
    }
}
