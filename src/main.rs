use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use term_doc_vectorizer::{pipeline, Config, DocumentId};
use tracing::debug;

/// Generate a term-document matrix from a folder of topic subfolders.
#[derive(Parser, Debug)]
#[command(name = "gendoc", version, about)]
struct Cli {
    /// Apply tf-idf to the matrix.
    #[arg(short = 'T', long)]
    tfidf: bool,

    /// Truncate to N dimensions via singular value decomposition (0 disables it).
    #[arg(short = 'S', long = "svd", value_name = "N")]
    svd_dims: Option<usize>,

    /// Use the top M terms by raw count before further processing.
    #[arg(short = 'B', long = "base-vocab", value_name = "M")]
    base_vocab: Option<usize>,

    /// Base folder containing the topic subfolders.
    foldername: PathBuf,

    /// Output file for the matrix data.
    outputfile: PathBuf,

    /// CSV file of raw counts, for cosine similarity.
    csvfile: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            corpus_root: cli.foldername,
            output_file: cli.outputfile,
            csv_file: cli.csvfile,
            tfidf: cli.tfidf,
            svd_dims: cli.svd_dims,
            base_vocab: cli.base_vocab,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("term_doc_vectorizer=info,gendoc=info")
            }),
        )
        .init();

    let config: Config = Cli::parse().into();
    debug!(?config, "parsed configuration");

    println!("Loading data from directory {}.", config.corpus_root.display());
    match config.base_vocab {
        None => println!("Using full vocabulary."),
        Some(m) => println!("Using only top {m} terms by raw count."),
    }
    if config.tfidf {
        println!("Applying tf-idf to raw counts.");
    }
    if let Some(n) = config.svd_dims.filter(|&n| n > 0) {
        println!("Truncating matrix to {n} dimensions via singular value decomposition.");
    }
    println!("Writing matrix to {}.", config.output_file.display());

    let report = pipeline::run(&config)?;

    let dropped: Vec<String> = report.dropped.iter().map(DocumentId::label).collect();
    println!("The following articles got dropped: {dropped:?}");
    if let Some(warning) = report.warning {
        println!("{}", warning.yellow());
    }
    if let Some(csv) = config.csv_file.as_ref().filter(|_| report.csv_written) {
        println!("Wrote raw counts to {}.", csv.display());
    }
    Ok(())
}
