use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use readmend_core::{
    ConsultantPrompts, RetryRunner, RetrySession, RunOutcome, DEFAULT_MAX_ATTEMPTS,
};
use readmend_logging::{LogFormat, Logger};
use readmend_model::{Model, OllamaModel, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
use readmend_repo::RepoContext;

mod config;
mod report;

use config::ProjectConfig;

#[derive(Parser, Debug)]
#[command(
    name = "readmend",
    about = "LLM-powered tool to review and enhance READMEs for better communication",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    log_format: LogFormatChoice,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Review the README and print a free-form feedback report
    Review {
        #[command(flatten)]
        common: CommonArgs,

        /// Where to save the report
        #[arg(short, long, default_value = "output.txt")]
        output: PathBuf,
    },
    /// Generate an improved README plus a changelog of the improvements
    Enhance {
        #[command(flatten)]
        common: CommonArgs,

        /// Where to save the improved README
        #[arg(short, long, default_value = "output_readme.md")]
        output: PathBuf,

        /// Maximum prompt attempts before giving up
        #[arg(short = 'n', long)]
        max_attempts: Option<usize>,

        /// Output the final result as JSON
        #[arg(long)]
        json_output: bool,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Location of the cloned repository
    #[arg(short = 'r', long)]
    repo_dir: PathBuf,

    /// Name of the model
    #[arg(short, long)]
    model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long)]
    ollama_url: Option<String>,

    /// Limit the folder tree depth sent in the prompt
    #[arg(long)]
    tree_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatChoice {
    Pretty,
    Json,
    Compact,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Pretty => LogFormat::Pretty,
            LogFormatChoice::Json => LogFormat::Json,
            LogFormatChoice::Compact => LogFormat::Compact,
        }
    }
}

/// Effective settings after merging CLI flags over `readmend.toml`.
struct Effective {
    context: RepoContext,
    model: OllamaModel,
    max_attempts: usize,
}

/// Merge CLI flags over `readmend.toml` over built-in defaults.
fn merge_settings(
    common: &CommonArgs,
    max_attempts: Option<usize>,
    config: ProjectConfig,
) -> (String, String, usize) {
    let model_name = common
        .model
        .clone()
        .or(config.model)
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let base_url = common
        .ollama_url
        .clone()
        .or(config.ollama_url)
        .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());
    let max_attempts = max_attempts
        .or(config.max_attempts)
        .unwrap_or(DEFAULT_MAX_ATTEMPTS);

    (model_name, base_url, max_attempts)
}

fn resolve(common: &CommonArgs, max_attempts: Option<usize>) -> Result<Effective> {
    let context = RepoContext::gather(&common.repo_dir, common.tree_depth)?;
    let config = ProjectConfig::load(&common.repo_dir)?.unwrap_or_default();

    let (model_name, base_url, max_attempts) = merge_settings(common, max_attempts, config);

    Ok(Effective {
        context,
        model: OllamaModel::with_base_url(model_name, base_url),
        max_attempts,
    })
}

async fn ensure_available(model: &OllamaModel) -> Result<()> {
    if !model.is_available().await {
        anyhow::bail!(
            "Ollama is not reachable. Make sure it is running and model '{}' is pulled.",
            model.name()
        );
    }
    Ok(())
}

async fn run_review(common: CommonArgs, output: PathBuf) -> Result<i32> {
    let eff = resolve(&common, None)?;
    ensure_available(&eff.model).await?;

    let prompt = ConsultantPrompts::build_review_prompt(
        &eff.context.readme,
        &eff.context.tree,
        &eff.context.remote_summary(),
    );

    let report = eff.model.complete(&prompt).await?;

    report::print_review(&report, &eff.context.display_name(), eff.model.name());
    report::write_document(&report, &output)?;
    report::print_disclaimer();

    Ok(0)
}

async fn run_enhance(
    common: CommonArgs,
    output: PathBuf,
    max_attempts: Option<usize>,
    json_output: bool,
    log_format: LogFormat,
) -> Result<i32> {
    let eff = resolve(&common, max_attempts)?;
    ensure_available(&eff.model).await?;

    let prompt = ConsultantPrompts::build_enhance_prompt(
        &eff.context.readme,
        &eff.context.tree,
        &eff.context.remote_summary(),
    );

    let logger = Arc::new(Logger::new(log_format));
    let runner = RetryRunner::new(&eff.model, logger);
    let session = RetrySession::new(prompt).with_max_attempts(eff.max_attempts);

    let outcome = runner.run(session).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(outcome.exit_code());
    }

    match &outcome {
        RunOutcome::Success { result, .. } => {
            report::print_changes(
                &result.changes,
                &eff.context.display_name(),
                eff.model.name(),
            );
            report::write_document(&result.document, &output)?;
            report::print_disclaimer();
        }
        RunOutcome::Exhausted { attempts, history, .. } => {
            eprintln!();
            eprintln!(
                "ERROR: could not extract \"changes made\" from the model after {} attempt(s).",
                attempts
            );
            for record in history {
                eprintln!("  attempt {}: {}", record.attempt_number + 1, record.failure);
            }
        }
    }

    Ok(outcome.exit_code())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_format: LogFormat = cli.log_format.into();

    readmend_logging::init_tracing("warn", log_format);

    let code = match cli.command {
        Command::Review { common, output } => run_review(common, output).await?,
        Command::Enhance {
            common,
            output,
            max_attempts,
            json_output,
        } => run_enhance(common, output, max_attempts, json_output, log_format).await?,
    };

    std::process::exit(code);
}
