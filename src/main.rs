use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use rationalize::config::Config;
use rationalize::embedding::loader::WordVectors;
use rationalize::output::terminal;
use rationalize::pipeline::vectorize;

/// Rationalize: turn predicted token relevance into rationale phrase tables.
///
/// Binarizes per-token relevance scores from a trained classifier, cuts the
/// selected spans into phrases, counts them per label, and attaches averaged
/// word embeddings for downstream clustering.
#[derive(Parser)]
#[command(name = "rationalize", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate predicted rationales into a phrase embedding table
    Vectorize {
        /// Data folder name
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Dataset name (subdirectory of the data folder)
        #[arg(long)]
        data_name: String,

        /// Analysis configuration name (reads <config_name>.config)
        #[arg(long)]
        config_name: String,

        /// How many top rationales to print after the run
        #[arg(long, default_value = "20")]
        top: usize,
    },
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rationalize=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Vectorize {
            data_dir,
            data_name,
            config_name,
            top,
        } => {
            // Path layout follows the training side: the dataset directory
            // holds the config, the prediction output, and the vector output
            // side by side under the config's name.
            let data_path = data_dir.join(&data_name);
            let config_file = data_path.join(format!("{config_name}.config"));
            let rationale_path = data_path.join(format!("{config_name}.output"));
            let vector_path = data_path.join(format!("{config_name}.vector"));

            let config = Config::load(&config_file)?;
            info!(
                mode = ?config.binarize_mode,
                dim = config.embedding_dim,
                "Configuration loaded"
            );

            let embedding_file = config.embedding_path(&data_dir, &data_path);
            println!("Loading word vectors from {}...", embedding_file.display());
            let word_vectors = WordVectors::load(&embedding_file, config.embedding_dim)?;

            let rows = vectorize::run(
                &config,
                &data_path,
                &rationale_path,
                &vector_path,
                &word_vectors,
            )?;

            terminal::display_top_rationales(&rows, top);
            println!("{}", "Rationales successfully vectorized.".bold());
        }
    }

    Ok(())
}
