mod catalog;
mod cli;
mod config;
mod error;
mod relay;
mod report;
mod scoring;
mod telemetry;
mod types;

use crate::catalog::Catalog;
use crate::error::QuizError;
use crate::report::{OutputFormat, View};
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(flag: Option<cli::ReportFormat>, configured: &str) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None if configured == "json" => OutputFormat::Json,
        None => OutputFormat::Md,
    }
}

fn require_dir(path: &Path) -> Result<(), QuizError> {
    if !path.is_dir() {
        return Err(QuizError::PathNotFound(path.display().to_string()));
    }
    Ok(())
}

fn run(cli: cli::Cli) -> Result<i32, QuizError> {
    let catalog = Catalog::builtin();
    match cli.command {
        cli::Commands::Score(cmd) => {
            require_dir(&cmd.dir)?;
            let loaded = config::load_config(&cmd.dir)?;
            let raw = scoring::answers::parse_answer_list(&cmd.answers);
            let result = scoring::score_answers(&catalog, &raw)?;

            let view = if loaded.unlock.basic {
                View::Full
            } else {
                View::Locked
            };
            let format = output_format(cmd.format, &loaded.output.format);
            let rendered = report::render(&result, view, format)?;
            println!("{rendered}");

            if view == View::Locked {
                eprintln!("warning: basic report is locked; set unlock.basic = true to view it");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Prompt(cmd) => {
            require_dir(&cmd.dir)?;
            let loaded = config::load_config(&cmd.dir)?;
            let raw = scoring::answers::parse_answer_list(&cmd.answers);
            let result = scoring::score_answers(&catalog, &raw)?;

            if !loaded.unlock.ai {
                return Err(QuizError::Locked("ai".to_string()));
            }

            let prompt = relay::prompt::build_prompt(&result);
            if cmd.request {
                let task = relay::request::ReportTask::new(&loaded.ai, &prompt);
                tracing::info!(task_id = %task.task_id, "prepared completion request");
                println!("{}", serde_json::to_string_pretty(&task)?);
            } else {
                println!("{prompt}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Sections(cmd) => {
            if !cmd.file.is_file() {
                return Err(QuizError::PathNotFound(cmd.file.display().to_string()));
            }
            let content = std::fs::read_to_string(&cmd.file)?;
            let text = if content.lines().any(|line| line.starts_with("data:")) {
                relay::stream::collect_stream(&content)
            } else {
                content
            };
            let sections = relay::sections::split_sections(&text);
            println!("{}", serde_json::to_string_pretty(&sections)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Questions(cmd) => {
            let rendered = match cmd.format {
                cli::ReportFormat::Json => report::catalog::questions_to_json(&catalog)?,
                cli::ReportFormat::Md => report::catalog::questions_to_markdown(&catalog),
            };
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Tiers(cmd) => {
            let rendered = match cmd.format {
                cli::ReportFormat::Json => report::catalog::tiers_to_json(&catalog)?,
                cli::ReportFormat::Md => report::catalog::tiers_to_markdown(&catalog),
            };
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check => {
            let issues = catalog.validate();
            if issues.is_empty() {
                println!(
                    "check: catalog ok ({} questions, {} tiers)",
                    catalog.questions.len(),
                    catalog.tiers.len()
                );
                return Ok(exit_code::SUCCESS);
            }

            for issue in &issues {
                println!("[BLOCKING] {}: {}", issue.id, issue.message);
            }
            Ok(exit_code::BLOCKING)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    if let Err(e) = telemetry::init(cli.verbose, cli.quiet) {
        eprintln!("error: {}", e);
        std::process::exit(exit_code::RUNTIME_FAILURE);
    }

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
