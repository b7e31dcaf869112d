//! # osis CLI entry point
//!
//! Parses command-line arguments, loads the configuration from the
//! environment, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use osis_core::config::LogFormat;
use osis_core::AdmissionConfig;

use osis_cli::checklist::{run_access_condition, run_checklist, AccessConditionArgs, ChecklistArgs};
use osis_cli::decision::{run_cdd, run_send_to_cdd, run_sic, CddArgs, SendToCddArgs, SicArgs};
use osis_cli::proposition::{
    run_complete, run_init, run_list, run_lock, run_request_documents, run_show, run_submit,
    CompleteArgs, IdArgs, InitArgs, ListArgs, RequestDocumentsArgs, ShowArgs, SubmitArgs,
};
use osis_cli::Contexte;

/// Doctoral admission propositions, from draft to final decision.
#[derive(Parser, Debug)]
#[command(name = "osis", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Who is acting (candidate registration number or manager id).
    #[arg(long, global = true, default_value = "osis-cli")]
    author: String,

    /// Proposition store directory. Overrides OSIS_STATE_DIR.
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a draft proposition.
    Init(InitArgs),
    /// Fill in the project, funding and prior research of a draft.
    Complete(CompleteArgs),
    /// Print a proposition.
    Show(ShowArgs),
    /// Lock the project for signatures.
    Lock(IdArgs),
    /// Submit the proposition.
    Submit(SubmitArgs),
    /// Hand the proposition to the faculty for a decision.
    SendToCdd(SendToCddArgs),
    /// Faculty decision (approve, refuse).
    Cdd(CddArgs),
    /// Central administration decision (approve, refuse).
    Sic(SicArgs),
    /// Ask the candidate for documents.
    RequestDocuments(RequestDocumentsArgs),
    /// Prior-studies review.
    Checklist(ChecklistArgs),
    /// Record the access condition.
    AccessCondition(AccessConditionArgs),
    /// List propositions.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AdmissionConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::from(1);
        }
    };
    if let Some(dir) = cli.state_dir.clone() {
        config.state_dir = dir;
    }

    init_tracing(cli.verbose, config.log_format);
    tracing::debug!(state_dir = %config.state_dir.display(), "osis CLI starting");

    let ctx = Contexte::new(config, cli.author.clone());
    let result = match &cli.command {
        Commands::Init(args) => run_init(args, &ctx),
        Commands::Complete(args) => run_complete(args, &ctx),
        Commands::Show(args) => run_show(args, &ctx),
        Commands::Lock(args) => run_lock(args, &ctx),
        Commands::Submit(args) => run_submit(args, &ctx),
        Commands::SendToCdd(args) => run_send_to_cdd(args, &ctx),
        Commands::Cdd(args) => run_cdd(args, &ctx),
        Commands::Sic(args) => run_sic(args, &ctx),
        Commands::RequestDocuments(args) => run_request_documents(args, &ctx),
        Commands::Checklist(args) => run_checklist(args, &ctx),
        Commands::AccessCondition(args) => run_access_condition(args, &ctx),
        Commands::List(args) => run_list(args, &ctx),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// `RUST_LOG` wins over `-v`. Events go to stderr so command output on
/// stdout stays parseable.
fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
