use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pressure-quiz",
    version,
    about = "Spring Festival pressure quiz scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a completed answer sheet
    Score(ScoreCommand),
    /// Build the AI report prompt for a completed answer sheet
    Prompt(PromptCommand),
    /// Split an AI report (plain text or SSE capture) into section cards
    Sections(SectionsCommand),
    /// List the survey questions
    Questions(ListCommand),
    /// List the pressure tiers
    Tiers(ListCommand),
    /// Validate the built-in question and tier tables
    Check,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// 25 labels, either compact ("ABCD...") or comma/space separated
    pub answers: String,
    /// Output format; defaults to output.format from config
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Directory holding pressure-quiz.toml and .pressure-quiz/local.toml
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Args)]
pub struct PromptCommand {
    pub answers: String,
    /// Emit the JSON completion request instead of the bare prompt
    #[arg(long)]
    pub request: bool,
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Args)]
pub struct SectionsCommand {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ListCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}
