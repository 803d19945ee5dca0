//! Political Nakshatra CLI - Place yourself on a three-axis map of Indian politics.

use clap::Parser;
use nakshatra_cli::commands;
use nakshatra_catalog::Catalog;
use nakshatra_cli::cli::QuizArgs;
use nakshatra_cli::{Cli, Command, Config, Formatter, Messages};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so stdout stays clean for json/quiet output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("NAKSHATRA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> nakshatra_cli::Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let load = |config: &Config| -> nakshatra_cli::Result<(Catalog, Messages)> {
        let catalog = config.catalog()?;
        let messages = Messages::load(config.settings.messages.as_deref())?;
        Ok((catalog, messages))
    };

    match cli.command.unwrap_or_else(|| Command::Quiz(QuizArgs::default())) {
        Command::Quiz(args) => {
            let (catalog, messages) = load(&config)?;
            commands::execute_quiz(args, &config, &catalog, &messages, &formatter)
        }
        Command::Score(args) => {
            let (catalog, messages) = load(&config)?;
            commands::execute_score(args, &catalog, &messages, &formatter)
        }
        Command::Explain(args) => {
            let (catalog, messages) = load(&config)?;
            commands::execute_explain(args, &catalog, &messages, &formatter)
        }
        Command::Compare(args) => {
            let (catalog, messages) = load(&config)?;
            commands::execute_compare(args, &catalog, &messages, &formatter)
        }
        Command::Questions(args) => {
            let (catalog, _) = load(&config)?;
            commands::execute_questions(args, &catalog, &formatter)
        }
        Command::Share(args) => commands::execute_share(args, &formatter),
        Command::Validate(args) => commands::execute_validate(args, &config, &formatter),
        Command::Config(args) => {
            commands::execute_config(args, &mut config, &config_path, &formatter)
        }
    }
}
