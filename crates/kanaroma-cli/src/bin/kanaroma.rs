use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kanaroma_cli::commands::{config_ops, resource_ops, romaji_ops};
use kanaroma_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "kanaroma", about = "Kana normalization and romaji transliteration")]
struct Cli {
    /// Write JSON traces to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate kana to romaji (reads stdin lines when no text is given)
    Romaji {
        /// Text to transliterate
        texts: Vec<String>,
        /// Mora table file (.json or .toml) instead of the built-in table
        #[arg(long)]
        mapping: Option<String>,
        /// Print input and romaji side by side
        #[arg(long)]
        table: bool,
    },
    /// Fold text to full-width katakana
    Normalize {
        /// Text to normalize
        texts: Vec<String>,
    },
    /// Apply company-name replacement rules
    Replace {
        /// Replacement rules JSON file
        #[arg(long)]
        rules: String,
        /// Text to rewrite
        texts: Vec<String>,
    },
    /// Mora table operations
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },
    /// Check that a directory holds valid configuration files
    Check {
        /// Base directory
        dir: String,
    },
}

#[derive(Subcommand)]
enum MappingAction {
    /// Print the built-in mora table as JSON
    Export,
    /// Validate a mora table file
    Validate {
        /// Table file (.json or .toml)
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_dir.as_deref());

    match cli.command {
        Command::Romaji {
            texts,
            mapping,
            table,
        } => romaji_ops::romaji_cmd(&texts, mapping.as_deref(), table),
        Command::Normalize { texts } => romaji_ops::normalize_cmd(&texts),
        Command::Replace { rules, texts } => romaji_ops::replace_cmd(&rules, &texts),
        Command::Mapping { action } => match action {
            MappingAction::Export => config_ops::mapping_export(),
            MappingAction::Validate { file } => config_ops::mapping_validate(&file),
        },
        Command::Check { dir } => resource_ops::check_cmd(&dir),
    }
}
