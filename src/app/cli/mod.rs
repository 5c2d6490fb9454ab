//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::app::api::{self, HookOutcome};
use crate::app::telemetry;
use crate::domain::{AppError, ContentStatus, LifecycleEvent};

#[derive(Parser)]
#[command(name = "publish-trigger")]
#[command(version)]
#[command(
    about = "Dispatch every GitHub Actions workflow of a repository on content publish or delete",
    long_about = None
)]
struct Cli {
    /// Settings file holding the repository URL and encrypted token
    #[arg(
        long,
        global = true,
        env = "PUBLISH_TRIGGER_SETTINGS",
        default_value = "publish-trigger.toml"
    )]
    settings: PathBuf,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the repository URL and encrypt the access token
    #[clap(visible_alias = "c")]
    Configure {
        /// Repository URL, e.g. https://github.com/owner/repo
        #[arg(long)]
        repo_url: String,
        /// GitHub personal access token
        #[arg(long, env = "GITHUB_PERSONAL_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Show stored settings (the token is never printed)
    Status,
    /// Validate the configuration by triggering every workflow
    #[clap(visible_alias = "v")]
    Validate {
        /// Only check that the token can list workflows
        #[arg(long)]
        check_only: bool,
    },
    /// Handle a content lifecycle event from the publishing platform
    Event {
        /// Content identifier
        #[arg(long)]
        content_id: u64,
        /// Content status (draft, publish, trash, ...)
        #[arg(long)]
        status: String,
        /// The saved content is a revision
        #[arg(long)]
        revision: bool,
        /// The saved content is an autosave
        #[arg(long)]
        autosave: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_json, Level::INFO);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Configure { repo_url, token } => {
            run_configure(&cli.settings, &repo_url, &token).map(|_| 0)
        }
        Commands::Status => run_status(&cli.settings).map(|_| 0),
        Commands::Validate { check_only } => run_validate(&cli.settings, check_only),
        Commands::Event { content_id, status, revision, autosave } => {
            let event = LifecycleEvent {
                content_id,
                status: status.parse::<ContentStatus>().unwrap_or_else(|never| match never {}),
                is_revision: revision,
                is_autosave: autosave,
            };
            run_event(&cli.settings, &event).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_configure(settings: &std::path::Path, repo_url: &str, token: &str) -> Result<(), AppError> {
    let outcome = api::configure(settings, repo_url, token)?;
    println!("✅ Settings saved.");
    if !outcome.repo_url_valid {
        println!(
            "⚠️  GitHub Repository URL is invalid. Expected https://github.com/<owner>/<repo>."
        );
    }
    if !outcome.token_saved {
        println!("⚠️  No GitHub Personal Access Token was provided.");
    }
    Ok(())
}

fn run_status(settings: &std::path::Path) -> Result<(), AppError> {
    let report = api::status(settings)?;
    println!("GitHub Repository URL: {}", report.repo_url.as_deref().unwrap_or("(not set)"));
    println!(
        "GitHub Personal Access Token: {}",
        if report.token_configured { "*********" } else { "(not set)" }
    );
    Ok(())
}

fn run_validate(settings: &std::path::Path, check_only: bool) -> Result<i32, AppError> {
    let report = api::validate(settings, check_only)?;

    if !report.credential_valid {
        println!(
            "❌ GitHub Personal Access Token is invalid. Please check your settings and try again."
        );
        return Ok(1);
    }
    println!("✅ GitHub Personal Access Token is valid.");

    if !check_only {
        println!();
        println!("Workflows");
        print!("{}", api::render_outcomes(&report.outcomes));
    }
    Ok(0)
}

fn run_event(settings: &std::path::Path, event: &LifecycleEvent) -> Result<(), AppError> {
    match api::handle_event(settings, event)? {
        HookOutcome::Skipped => {
            println!("Skipped: '{}' events do not trigger workflows.", event.status);
        }
        HookOutcome::Triggered(outcomes) => {
            let failed = outcomes.iter().filter(|o| !o.succeeded).count();
            println!(
                "Triggered {} workflow(s), {} failed.",
                outcomes.len() - failed,
                failed
            );
        }
        HookOutcome::Failed { .. } => {
            println!("Workflow trigger failed; see log for details.");
        }
    }
    Ok(())
}
