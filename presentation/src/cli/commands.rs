//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Survey document with goal and instructions
    Full,
    /// Condensed survey as copied to the clipboard
    Clipboard,
    /// Session state as JSON
    Json,
}

/// CLI arguments for survey-creator
#[derive(Parser, Debug)]
#[command(name = "survey-creator")]
#[command(author, version, about = "Customer Discovery Survey Creator")]
#[command(long_about = r#"
Generate targeted customer discovery questions to understand your ideal
customer profile: pain points, jobs-to-be-done, purchasing hesitations and
motivations, and more.

Without --category or --template an interactive session starts.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./survey.toml         Project-level config
3. ~/.config/survey-creator/config.toml   Global config

Example:
  survey-creator
  survey-creator -t b2b-saas -p "invoicing app" -i finance -c pain-points -c competitors
  survey-creator -t agency -p "SEO audits" --template existing-product --export
"#)]
pub struct Cli {
    /// Business type (e.g. b2b-saas, "B2C E-commerce", consulting)
    #[arg(short = 't', long, value_name = "TYPE")]
    pub business_type: Option<String>,

    /// Industry, used to tailor questions (e.g. marketing, healthcare, finance)
    #[arg(short, long, value_name = "INDUSTRY")]
    pub industry: Option<String>,

    /// Brief description of what you offer
    #[arg(short, long, value_name = "TEXT")]
    pub product: Option<String>,

    /// Research area to draw questions from (can be specified multiple times)
    #[arg(short, long, value_name = "AREA")]
    pub category: Vec<String>,

    /// Start from a ready-made survey template
    #[arg(long, value_name = "TEMPLATE", conflicts_with = "category")]
    pub template: Option<String>,

    /// Where gap-filling draws replacement questions from ("any" or an area)
    #[arg(long, value_name = "SOURCE", default_value = "any")]
    pub gap: String,

    /// Select every generated question instead of the first few
    #[arg(long)]
    pub select_all: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write customer-discovery-survey.txt into DIR (default: current directory)
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    pub export: Option<PathBuf>,

    /// Copy the survey to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Seed for reproducible question picks
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// List research areas and templates, then exit
    #[arg(long)]
    pub list: bool,

    /// Show survey best practices, then exit
    #[arg(long)]
    pub tips: bool,

    /// Append host resize messages (JSON lines) to this file
    #[arg(long, value_name = "PATH")]
    pub host_messages: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress everything but the survey text
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// True when flags ask for a one-shot run instead of the REPL
    pub fn is_one_shot(&self) -> bool {
        !self.category.is_empty() || self.template.is_some()
    }
}
