pub mod commands;
pub mod logging;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "fragrance",
    about = "Fragrance storefront CLI",
    long_about = "Browse the catalog, run the scent quiz offline, issue and verify quiz session tokens, and inspect configuration.",
    after_help = "Examples:\n  fragrance catalog --category oud-rich\n  fragrance recommend --answer mood=bold-mysterious --answer notes=smoky-woods\n  fragrance doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List catalog products, optionally filtered by category")]
    Catalog {
        #[arg(long, help = "Only list products in this category (e.g. oud-rich)")]
        category: Option<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Print the scent quiz questions and their options")]
    Questions {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Compute the scent profile and dominant family for a set of answers")]
    Profile {
        #[arg(long = "answer", value_name = "QUESTION=OPTION", required = true)]
        answers: Vec<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Rank catalog products against a set of quiz answers")]
    Recommend {
        #[arg(long = "answer", value_name = "QUESTION=OPTION", required = true)]
        answers: Vec<String>,
        #[arg(long, help = "Number of recommendations to return")]
        limit: Option<usize>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Issue or verify signed quiz session tokens")]
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
    #[command(about = "Validate config, session signing, catalog integrity and quiz tables")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
enum SessionAction {
    #[command(about = "Issue a signed session token for a set of answers")]
    Issue {
        #[arg(long = "answer", value_name = "QUESTION=OPTION", required = true)]
        answers: Vec<String>,
    },
    #[command(about = "Verify a session token and print its recommendations")]
    Open {
        token: String,
        #[arg(long, help = "Number of recommendations to return")]
        limit: Option<usize>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Catalog { category, json } => commands::catalog::run(category.as_deref(), json),
        Command::Questions { json } => commands::questions::run(json),
        Command::Profile { answers, json } => commands::profile::run(&answers, json),
        Command::Recommend { answers, limit, json } => {
            commands::recommend::run(&answers, limit, json)
        }
        Command::Session { action: SessionAction::Issue { answers } } => {
            commands::session::issue(&answers)
        }
        Command::Session { action: SessionAction::Open { token, limit } } => {
            commands::session::open(&token, limit)
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
