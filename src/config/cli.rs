use crate::core::export::ExportFormat;
use crate::domain::model::WordCount;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "brand-namer")]
#[command(about = "Generate brand name candidates from industry keyword catalogs")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = super::toml_config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate name candidates for an industry
    Generate(GenerateArgs),
    /// Manage industries
    #[command(subcommand)]
    Industries(IndustryCommand),
    /// Manage keywords of an industry
    #[command(subcommand)]
    Keywords(KeywordCommand),
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    pub industry_id: String,

    /// Free text placed into the keyword pool
    #[arg(short, long, default_value = "")]
    pub text: String,

    #[arg(short, long, default_value = "2", value_parser = parse_word_count)]
    pub words: WordCount,

    /// Business entity label, e.g. PT, CV, TOKO
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Defaults to "" for two words and " " for three
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Fix the shuffle seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the results to a file instead of only printing them
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, default_value = "csv")]
    pub format: ExportFormat,

    /// Show the readability score next to each name
    #[arg(long)]
    pub scores: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum IndustryCommand {
    List,
    Add {
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    Update {
        id: String,
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    Remove {
        id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum KeywordCommand {
    List {
        industry_id: String,
    },
    Add {
        industry_id: String,
        keyword: String,
    },
    /// Add many keywords separated by newline, comma or semicolon
    Import {
        industry_id: String,
        #[arg(long, conflicts_with = "text", required_unless_present = "text")]
        file: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
    },
    Remove {
        id: String,
    },
}

fn parse_word_count(value: &str) -> Result<WordCount, String> {
    let number: u8 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    WordCount::try_from(number)
}
