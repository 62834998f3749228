//! note-similarity - pairwise TF-IDF similarity of a notes folder
//!
//! Walks a directory for text files, fits a TF-IDF model over them and
//! prints (or exports) the cosine similarity of every document pair.

mod cli;
mod report;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    time::Instant,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use note_similarity::{read_documents, SourceConfig, TFIDFVectorizer};

use cli::{Cli, Format};

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let start = Instant::now();

    if cli.format == Format::Cbor && cli.output.is_none() {
        bail!("--format cbor writes binary data and requires --output <FILE>");
    }

    let config = SourceConfig::new(&cli.directory)
        .with_extensions(&cli.extensions)
        .follow_links(cli.follow_links);
    let documents = read_documents(&config)
        .with_context(|| format!("failed to read documents from {}", cli.directory.display()))?;
    if documents.is_empty() {
        warn!(
            "no .{} files found under {}",
            config.extensions.join("/."),
            config.root.display()
        );
    }

    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::fit(&documents);
    let matrix = vectorizer
        .similarity_matrix(cli.collision_policy())
        .context("failed to build the similarity matrix")?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            colored::control::set_override(false);
            let file =
                File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    // json and cbor output holds only the matrix
    if cli.dump && cli.format != Format::Table {
        report::write_dump(&mut io::stderr().lock(), &documents, &vectorizer)?;
    }

    match cli.format {
        Format::Table => {
            if cli.dump {
                report::write_dump(&mut out, &documents, &vectorizer)?;
            }
            report::write_table(&mut out, &matrix)?;
            report::write_ranked(&mut out, &matrix, cli.top)?;
            report::write_summary(&mut out, &vectorizer, start.elapsed().as_secs_f32())?;
        }
        Format::Json => {
            matrix.write_json(&mut out, true)?;
            writeln!(out)?;
        }
        Format::Cbor => matrix.write_cbor(&mut out)?,
    }
    out.flush()?;

    if let Some(path) = &cli.output {
        info!("[done] wrote {}", path.display());
    }
    Ok(())
}
