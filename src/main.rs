use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use sthenos::catalog::Catalog;
use sthenos::config::{Config, ScoringRules};
use sthenos::error::JudgeResult;
use sthenos::scorer::Scorer;
use std::path::Path;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

const DEFAULT_RULES_PATH: &str = "data/rules/default.json";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON scoring rules. Flags typed on the command line still win.
    #[arg(global = true, long)]
    rules: Option<String>,

    /// JSON element catalog replacing the built-in tables.
    #[arg(global = true, long)]
    catalog: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the reference elements and their base values
    Catalog(cmd::catalog::CatalogArgs),
    /// Score a single element
    Score(cmd::score::ScoreArgs),
    /// Replay a judging routine and print the scorecard
    Judge(cmd::judge::JudgeArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> JudgeResult<()> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load_from_file(path)?,
        None => Catalog::standard(),
    };

    match cli.command {
        Commands::Catalog(args) => {
            cmd::catalog::run(args, &catalog);
            Ok(())
        }
        Commands::Score(mut args) => {
            let sub = matches.subcommand_matches("score");
            args.config = resolve_config(&cli.rules, args.config, sub)?;
            let scorer = Scorer::new(args.config.rules.clone())?;
            cmd::score::run(args, catalog, scorer)
        }
        Commands::Judge(mut args) => {
            let sub = matches.subcommand_matches("judge");
            args.config = resolve_config(&cli.rules, args.config, sub)?;
            let scorer = Scorer::new(args.config.rules.clone())?;
            cmd::judge::run(args, catalog, scorer)
        }
    }
}

/// Rules file (explicit or the default location) overlaid with CLI flags.
fn resolve_config(
    rules_path: &Option<String>,
    mut config: Config,
    sub_matches: Option<&ArgMatches>,
) -> JudgeResult<Config> {
    let path = match rules_path {
        Some(path) => Some(path.clone()),
        None if Path::new(DEFAULT_RULES_PATH).exists() => Some(DEFAULT_RULES_PATH.to_string()),
        None => None,
    };

    match (path, sub_matches) {
        (Some(path), Some(sub)) => {
            info!("⚖️  Loading rules from: {}", path);
            let mut file_rules = ScoringRules::load_from_file(&path)?;
            file_rules.merge_from_cli(&config.rules, sub);
            config.rules = file_rules;
        }
        (Some(path), None) => {
            info!("⚖️  Loading rules from: {}", path);
            config.rules = ScoringRules::load_from_file(&path)?;
        }
        (None, _) => warn!("⚠️  No rules file loaded. Using embedded defaults."),
    }
    Ok(config)
}
