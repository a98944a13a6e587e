use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use guide_engine::{
    DocumentSummary, FileCandidate, Framework, GuideSession, NextSuggestion, QaAnswer,
    WalkthroughStep,
};
use guide_workspace::{read_document, ProjectWorkspace};

#[derive(Parser)]
#[command(name = "repo-guide")]
#[command(about = "Codebase orientation assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project directory to orient within
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Emit machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the files a newcomer should read first
    Suggest,

    /// Detect the project's framework families
    Frameworks,

    /// Print the suggested learning walkthrough
    Walkthrough,

    /// Summarize the structure of one file
    Summary {
        /// Workspace-relative file path
        file: String,
    },

    /// Ask a free-text question about one file
    Ask {
        /// Workspace-relative file path
        file: String,

        /// The question to answer
        question: String,
    },

    /// Suggest what to explore after a file
    Next {
        /// Workspace-relative file path
        file: String,
    },

    /// Suggestions, frameworks, and walkthrough in one pass
    Tour,
}

/// Combined output of the `tour` subcommand
#[derive(Serialize)]
struct TourOutput {
    suggestions: Vec<FileCandidate>,
    frameworks: Vec<&'static str>,
    walkthrough: Vec<WalkthroughStep>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Orienting within {}", cli.root.display());
    let workspace = ProjectWorkspace::new(&cli.root);
    let mut session = GuideSession::new(workspace);

    match &cli.command {
        Commands::Suggest => {
            let suggestions = session.rank_suggestions().to_vec();
            print_suggestions(&suggestions, cli.json)
        }
        Commands::Frameworks => {
            let frameworks = session.detect_frameworks().to_vec();
            print_frameworks(&frameworks, cli.json)
        }
        Commands::Walkthrough => {
            let walkthrough = session.build_walkthrough();
            print_walkthrough(&walkthrough, cli.json)
        }
        Commands::Summary { file } => {
            let summary = learn(&mut session, &cli.root, file)?;
            print_summary(&summary, cli.json)
        }
        Commands::Ask { file, question } => {
            learn(&mut session, &cli.root, file)?;
            let answer = session
                .ask_question(question)
                .context("Could not answer the question")?;
            print_answer(&answer, cli.json)
        }
        Commands::Next { file } => {
            learn(&mut session, &cli.root, file)?;
            let next = session.next_suggestions();
            print_next(&next, cli.json)
        }
        Commands::Tour => {
            let suggestions = session.rank_suggestions().to_vec();
            let frameworks = session.detect_frameworks().to_vec();
            let walkthrough = session.build_walkthrough();
            if cli.json {
                let output = TourOutput {
                    suggestions,
                    frameworks: frameworks.iter().map(|f| f.display_name()).collect(),
                    walkthrough,
                };
                return print_json(&output);
            }
            print_suggestions(&suggestions, false)?;
            println!();
            print_frameworks(&frameworks, false)?;
            println!();
            print_walkthrough(&walkthrough, false)
        }
    }
}

/// Learn a file into the session, reading it from the project tree
fn learn(
    session: &mut GuideSession<ProjectWorkspace>,
    root: &Path,
    file: &str,
) -> Result<DocumentSummary> {
    let document = read_document(root, file)
        .with_context(|| format!("Could not load {file} from the project"))?;
    let summary = session.learn_file(&document.path, &document.text, document.kind);
    Ok(summary.clone())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_suggestions(suggestions: &[FileCandidate], json: bool) -> Result<()> {
    if json {
        return print_json(&suggestions);
    }
    if suggestions.is_empty() {
        println!("No suggestions found in this project.");
        return Ok(());
    }
    println!("Start with these files:");
    for candidate in suggestions {
        println!("  {}", candidate.label);
        println!("      {}", candidate.reason);
    }
    Ok(())
}

fn print_frameworks(frameworks: &[Framework], json: bool) -> Result<()> {
    let names: Vec<&'static str> = frameworks.iter().map(|f| f.display_name()).collect();
    if json {
        return print_json(&names);
    }
    if names.is_empty() {
        println!("No framework evidence found.");
    } else {
        println!("Detected frameworks: {}", names.join(", "));
    }
    Ok(())
}

fn print_walkthrough(walkthrough: &[WalkthroughStep], json: bool) -> Result<()> {
    if json {
        return print_json(&walkthrough);
    }
    println!("Suggested walkthrough:");
    for (index, step) in walkthrough.iter().enumerate() {
        match &step.target {
            Some(target) => println!("  {}. {} -> {}", index + 1, step.title, target),
            None => println!("  {}. {}", index + 1, step.title),
        }
        println!("      {}", step.details);
    }
    Ok(())
}

fn print_summary(summary: &DocumentSummary, json: bool) -> Result<()> {
    if json {
        return print_json(&summary);
    }
    println!("{} ({} lines)", summary.display_path, summary.line_count);
    if !summary.headings.is_empty() {
        println!("  Headings:");
        for heading in &summary.headings {
            println!("    {heading}");
        }
    }
    if !summary.exported_names.is_empty() {
        println!("  Exports: {}", summary.exported_names.join(", "));
    }
    if !summary.declarations.is_empty() {
        println!("  Declarations:");
        for declaration in &summary.declarations {
            println!(
                "    {} ({}) at line {}",
                declaration.name,
                declaration.kind.as_str(),
                declaration.line
            );
        }
    }
    if summary.headings.is_empty()
        && summary.exported_names.is_empty()
        && summary.declarations.is_empty()
    {
        println!("  No structural landmarks recognized in this file.");
    }
    Ok(())
}

fn print_answer(answer: &QaAnswer, json: bool) -> Result<()> {
    if json {
        return print_json(&answer);
    }
    println!("{}", answer.message);
    for evidence in &answer.evidence {
        println!("  {:>5} | {}", evidence.line, evidence.text);
    }
    Ok(())
}

fn print_next(next: &[NextSuggestion], json: bool) -> Result<()> {
    if json {
        return print_json(&next);
    }
    if next.is_empty() {
        println!("Nothing left to explore from here.");
        return Ok(());
    }
    println!("Explore next:");
    for suggestion in next {
        println!("  {}", suggestion.label);
        println!("      {}", suggestion.reason);
    }
    Ok(())
}
