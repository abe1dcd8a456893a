use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "syl", about = concat!("[#] syllabus v", env!("CARGO_PKG_VERSION"), " - check off chapters, watch progress"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the syllabus catalog file
    #[arg(short = 'c', long = "catalog", global = true, default_value = "syllabus.toml")]
    pub catalog: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all chapters with completion marks
    List,
    /// Show per-subject and overall progress
    Stats,
    /// Toggle completion of one or more chapters
    Toggle(ToggleArgs),
    /// Rank subjects against a search query
    Search(SearchArgs),
    /// Clear all completion state
    Reset,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Chapter ids of the form "Subject::Chapter title"
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Query text, matched against chapter titles
    pub query: String,
}
