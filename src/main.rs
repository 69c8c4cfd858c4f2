use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};

use signprep::{
    check_video, get_labels, labels_to_number_at, load_labels, videos_to_dict_with, DatasetConfig,
    LabelMap, VOCABULARY_VERSION,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build labels from the class subdirectories of a dataset root
    Labels {
        #[arg(short, long)]
        root: PathBuf,
        #[arg(short, long, help = "Where to persist the label file (default: labels.json or $SIGNPREP_LABELS_FILE)")]
        out: Option<PathBuf>,
    },
    /// Print the fixed sign vocabulary
    Vocab,
    /// Probe a single video by decoding its first frame
    Check {
        #[arg(long)]
        video: PathBuf,
    },
    /// Map every readable video under a root to its label index
    Index {
        #[arg(short, long)]
        root: PathBuf,
        #[arg(short, long, conflicts_with = "vocab", help = "Label file written by `labels`")]
        labels: Option<PathBuf>,
        #[arg(long, default_value_t = false, help = "Use the fixed vocabulary instead of a label file")]
        vocab: bool,
        #[arg(long, default_value_t = false)]
        follow_links: bool,
        #[arg(short, long, help = "Write the index here instead of stdout")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    signprep::logging::init(cli.verbose)?;

    let mut config = DatasetConfig::from_env();

    match cli.command {
        Commands::Labels { root, out } => {
            let out = out.unwrap_or(config.labels_file);
            let labels = labels_to_number_at(&root, &out)
                .with_context(|| format!("Failed to build labels from {}", root.display()))?;
            println!("{}", serde_json::to_string_pretty(&labels)?);
        }
        Commands::Vocab => {
            println!("{}", json!({
                "version": VOCABULARY_VERSION,
                "labels": get_labels(),
            }));
        }
        Commands::Check { video } => {
            match check_video(&video) {
                Ok(frame) => println!("{}", json!({ "valid": true, "frame": frame })),
                Err(reason) => {
                    println!("{}", json!({ "valid": false, "reason": reason.to_string() }));
                    std::process::exit(1);
                }
            }
        }
        Commands::Index { root, labels, vocab, follow_links, output } => {
            config.follow_links = follow_links;
            let label_map = resolve_labels(labels.as_deref(), vocab, &config)?;
            let videos = videos_to_dict_with(&root, &label_map, &config);
            let body = serde_json::to_string_pretty(&videos)?;
            match output {
                Some(path) => std::fs::write(&path, body)
                    .with_context(|| format!("Failed to write index to {}", path.display()))?,
                None => println!("{}", body),
            }
        }
    }

    Ok(())
}

fn resolve_labels(labels: Option<&Path>, vocab: bool, config: &DatasetConfig) -> Result<LabelMap> {
    if vocab {
        return Ok(get_labels());
    }
    let path = labels.unwrap_or(&config.labels_file);
    load_labels(path).with_context(|| format!("Failed to load labels from {}", path.display()))
}
