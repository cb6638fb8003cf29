// Codelore hook CLI entry point

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use codelore_cli::{commands, logging};
use codelore_hooks::HookStage;

#[derive(Parser)]
#[command(name = "lore", version, about = "Advisory hooks for the Codelore knowledge base")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a UserPromptSubmit event from stdin
    UserPrompt,

    /// Evaluate a PreToolUse event from stdin
    PreTool,

    /// Evaluate a PostToolUse event from stdin
    PostTool,

    /// Lint a rule document and report warnings
    Validate {
        /// Rule document path (defaults to the plugin root's rules file)
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Write the starter rule document
    InitRules {
        /// Destination path
        #[arg(long, default_value = "skill-rules.json")]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    logging::init();

    // Multi-call binary pattern: hook configurations register the binary
    // under a per-stage name instead of passing a subcommand.
    let stage_from_binary = std::env::args().next().and_then(|arg0| {
        let name = Path::new(&arg0)
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())?;
        match name.as_str() {
            "lore-skill-activation" | "codelore-skill-activation" => Some(HookStage::UserPrompt),
            "lore-pretooluse" | "codelore-pretooluse" => Some(HookStage::PreTool),
            "lore-posttooluse" | "codelore-posttooluse" => Some(HookStage::PostTool),
            _ => None,
        }
    });

    if let Some(stage) = stage_from_binary {
        return run_stage(stage);
    }

    match Cli::parse().command {
        Command::UserPrompt => run_stage(HookStage::UserPrompt),
        Command::PreTool => run_stage(HookStage::PreTool),
        Command::PostTool => run_stage(HookStage::PostTool),
        Command::Validate { rules } => run_validate(rules.as_deref()),
        Command::InitRules { path } => run_init_rules(&path),
    }
}

/// Run a hook stage: stdin in, advisory (or nothing) out, always exit 0
///
/// Hooks are advisory; a failure to read input is handled the same way as
/// input with nothing to say.
fn run_stage(stage: HookStage) -> ExitCode {
    let mut input = String::new();
    if io::stdin().read_to_string(&mut input).is_err() {
        return ExitCode::SUCCESS;
    }

    if let Some(output) = commands::run_hook(stage, &input) {
        println!("{output}");
    }
    ExitCode::SUCCESS
}

fn run_validate(rules: Option<&Path>) -> ExitCode {
    match commands::run_validate(rules) {
        Ok(report) if report.warnings.is_empty() => {
            println!("No problems found in {} rules", report.rules);
            ExitCode::SUCCESS
        }
        Ok(report) => {
            for warning in &report.warnings {
                eprintln!("warning: {warning}");
            }
            eprintln!(
                "{} warning(s) across {} rules",
                report.warnings.len(),
                report.rules
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_init_rules(path: &Path) -> ExitCode {
    match commands::run_init_rules(path) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
