//! CLI entrypoint for strata
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use std::path::Path;
use std::sync::Arc;
use strata_application::ports::answer_store::AnswerStore;
use strata_application::ports::call_logger::{CallLogger, NoCallLogger};
use strata_application::ports::completion_client::{CompletionClient, CompletionRequest};
use strata_application::{
    EvaluateInput, EvaluateUseCase, RouteQuestionUseCase, RunBatchUseCase,
};
use strata_domain::grading::builtin_cases;
use strata_domain::{PromptTemplate, StrategyKind, TestCase, validate_answers};
use strata_infrastructure::{
    ConfigError, ConfigLoader, FileConfig, JsonAnswerStore, JsonlCallLogger,
    OpenAiCompatibleClient, load_questions, read_raw_answers,
};
use strata_presentation::{
    BatchProgressReporter, Cli, Command, ConsoleFormatter, EvalArgs, RunArgs,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Prompt sent by `strata ping`
const PING_PROMPT: &str = "What is 17 + 28? Answer with just the number.";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(ConfigError::from)?;

    if let Command::Run(args) = &command {
        apply_run_overrides(&mut config, args);
    }

    let warnings = config.ensure_valid()?;
    if !warnings.is_empty() {
        eprint!("{}", ConsoleFormatter::format_issues(&warnings));
    }

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting strata");

    // === Dependency Injection ===
    let client = Arc::new(OpenAiCompatibleClient::new(
        config.endpoint.client_settings(),
    )?);
    let router = RouteQuestionUseCase::new(client.clone(), config.strategy_params())
        .with_logger(transcript_logger(config.logging.transcript.as_deref()))
        .with_max_calls(config.budget.max_calls);

    match command {
        Command::Run(_) => run_batch(&config, router, cli.quiet).await,
        Command::Ask { question, strategy } => ask(&router, &question, strategy).await,
        Command::Eval(args) => evaluate(router, config.budget.max_calls, &args).await,
        Command::Ping { prompt } => ping(client.as_ref(), prompt.as_deref()).await,
        Command::Validate { input, output } => validate(
            input.as_deref().unwrap_or(config.batch.input.as_path()),
            output.as_deref().unwrap_or(config.batch.output.as_path()),
        ),
    }
}

/// Install the stderr subscriber, plus a non-blocking file layer when configured
fn init_tracing(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("logging.file has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn transcript_logger(path: Option<&Path>) -> Arc<dyn CallLogger> {
    let Some(path) = path else {
        return Arc::new(NoCallLogger);
    };
    match JsonlCallLogger::open(path) {
        Ok(logger) => Arc::new(logger),
        Err(e) => {
            warn!("Could not open transcript {}: {}", path.display(), e);
            Arc::new(NoCallLogger)
        }
    }
}

fn apply_run_overrides(config: &mut FileConfig, args: &RunArgs) {
    if let Some(input) = &args.input {
        config.batch.input = input.clone();
    }
    if let Some(output) = &args.output {
        config.batch.output = output.clone();
    }
    if let Some(start) = args.start {
        config.batch.start = start;
    }
    if args.end.is_some() {
        config.batch.end = args.end;
    }
    if let Some(every) = args.checkpoint_every {
        config.batch.checkpoint_every = every;
    }
    if let Some(max_calls) = args.max_calls {
        config.budget.max_calls = max_calls;
    }
    if let Some(transcript) = &args.transcript {
        config.logging.transcript = Some(transcript.clone());
    }
}

async fn run_batch(
    config: &FileConfig,
    router: RouteQuestionUseCase<OpenAiCompatibleClient>,
    quiet: bool,
) -> Result<()> {
    let questions = load_questions(&config.batch.input)?;
    let store = Arc::new(JsonAnswerStore::new(&config.batch.output));
    let answers = store.load(questions.len())?;

    let use_case = RunBatchUseCase::new(router, store.clone(), config.batch_params());
    let output = if quiet {
        use_case.execute(&questions, answers).await?
    } else {
        let progress = BatchProgressReporter::new();
        use_case
            .execute_with_progress(&questions, answers, &progress)
            .await?
    };

    if !quiet {
        println!(
            "{}",
            ConsoleFormatter::format_summary(&output.summary, store.path())
        );
    }

    // fatal: re-read what was written to disk
    validate(&config.batch.input, &config.batch.output)
}

async fn ask(
    router: &RouteQuestionUseCase<OpenAiCompatibleClient>,
    question: &str,
    strategy: Option<StrategyKind>,
) -> Result<()> {
    let routed = match strategy {
        Some(kind) => router.execute_with(question, kind).await?,
        None => router.execute(question).await?,
    };
    println!("{}", ConsoleFormatter::format_answer(&routed));
    Ok(())
}

async fn evaluate(
    router: RouteQuestionUseCase<OpenAiCompatibleClient>,
    max_calls: usize,
    args: &EvalArgs,
) -> Result<()> {
    let cases = match &args.cases {
        Some(path) => load_cases(path)?,
        None => builtin_cases(),
    };

    let mut input = EvaluateInput::new(cases);
    if args.routed {
        input = input.routed();
    }
    if args.judge {
        input = input.judged();
    }

    let report = EvaluateUseCase::new(router, max_calls).execute(input).await;

    if args.json {
        println!("{}", ConsoleFormatter::format_report_json(&report));
    } else {
        print!("{}", ConsoleFormatter::format_report(&report));
    }
    Ok(())
}

fn load_cases(path: &Path) -> Result<Vec<TestCase>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading test cases from {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing test cases in {}", path.display()))
}

async fn ping(client: &OpenAiCompatibleClient, prompt: Option<&str>) -> Result<()> {
    let request = CompletionRequest::new(
        PromptTemplate::answer_only_system(),
        prompt.unwrap_or(PING_PROMPT),
        0.0,
    );
    match client.complete(request).await {
        Ok(completion) => {
            println!("OK: true");
            println!("Status: {}", completion.status);
            println!("Text: {}", completion.text.trim());
            Ok(())
        }
        Err(e) => {
            println!("OK: false");
            println!("Status: {}", e.status());
            println!("Error: {}", e.detail());
            bail!("endpoint check failed")
        }
    }
}

fn validate(input: &Path, output: &Path) -> Result<()> {
    let questions = load_questions(input)?;
    let answers = read_raw_answers(output)?;

    match validate_answers(questions.len(), &answers) {
        Ok(()) => {
            println!(
                "{} answers in {} passed validation.",
                answers.len(),
                output.display()
            );
            Ok(())
        }
        Err(e) => {
            eprint!("{}", ConsoleFormatter::format_validation(&e, output));
            Err(e.into())
        }
    }
}
