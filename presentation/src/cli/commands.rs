//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strata_domain::StrategyKind;

/// CLI arguments for strata
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about = "Route questions to prompting strategies under a call budget")]
#[command(long_about = r#"
Strata answers questions through a single OpenAI-compatible endpoint.

Each question is classified (math, commonsense, future_prediction, coding,
planning) and dispatched to a prompting strategy. Every question gets its own
budget of remote calls. Batch runs checkpoint the answers file and resume
where they stopped.

Configuration files are loaded from (in priority order):
1. API_BASE / MODEL_NAME and STRATA_* environment variables
2. --config <path>     Explicit config file
3. ./strata.toml       Project-level config
4. ~/.config/strata/config.toml   Global config

Example:
  strata run --input questions.json --output answers.json
  strata run --start 101 --end 200
  strata ask "What is 17 * 23?"
  strata ask --strategy self-consistency "How many r's are in strawberry?"
  strata eval --judge
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer every pending question in a file, with checkpoints
    Run(RunArgs),

    /// Answer a single question and print the result
    Ask {
        /// The question text
        question: String,

        /// Skip classification and use this strategy
        /// (chain-of-thought, self-refinement, self-consistency, future-consistency,
        /// think-act-observe, plan-generation, math, code-refinement)
        #[arg(short, long, value_name = "STRATEGY")]
        strategy: Option<StrategyKind>,
    },

    /// Score the endpoint on graded test cases
    Eval(EvalArgs),

    /// Send one fixed prompt and print the raw status and reply
    Ping {
        /// Prompt to send instead of the default arithmetic check
        #[arg(long)]
        prompt: Option<String>,
    },

    /// Check an answers file against its questions file
    Validate {
        /// Questions file (defaults to batch.input)
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Answers file (defaults to batch.output)
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Questions file (JSON array of objects with an `input` field)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Answers file, read for resumption and rewritten at every checkpoint
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// First question to process (1-based)
    #[arg(long)]
    pub start: Option<usize>,

    /// Last question to process (inclusive)
    #[arg(long)]
    pub end: Option<usize>,

    /// Checkpoint when the question number is a multiple of this
    #[arg(long, value_name = "N")]
    pub checkpoint_every: Option<usize>,

    /// Remote-call ceiling per question
    #[arg(long, value_name = "N")]
    pub max_calls: Option<usize>,

    /// Append every remote call to this JSONL transcript
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct EvalArgs {
    /// JSON file of cases (`id`, `type`, `prompt`, `expected`); built-in cases otherwise
    #[arg(long, value_name = "PATH")]
    pub cases: Option<PathBuf>,

    /// Grade with a strict True/False judge call instead of local comparison
    #[arg(long)]
    pub judge: bool,

    /// Answer through the router instead of a single direct call
    #[arg(long)]
    pub routed: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
