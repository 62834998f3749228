use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use note_similarity::{
    config::{DEFAULT_TOP, DIR_ENV},
    CollisionPolicy,
};

/// Output format of the similarity matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Colored heat table and ranked pairs
    #[default]
    Table,
    /// Nested JSON object: label -> label -> score
    Json,
    /// Same structure as JSON, CBOR encoded (requires --output)
    Cbor,
}

#[derive(Parser, Debug)]
#[command(
    name = "note-similarity",
    version,
    about = "Pairwise TF-IDF cosine similarity across a folder of notes"
)]
pub struct Cli {
    /// Root directory, walked recursively
    #[arg(short = 'd', long = "dir", env = DIR_ENV, default_value = ".")]
    pub directory: PathBuf,

    /// File extensions to include (comma-separated)
    #[arg(short = 'e', long = "ext", value_delimiter = ',', default_value = "md")]
    pub extensions: Vec<String>,

    /// Follow symbolic links
    #[arg(short = 'L', long = "follow-links")]
    pub follow_links: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Write the output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of most similar pairs listed in table output
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Fail when two documents share a file name instead of overwriting
    #[arg(long = "strict")]
    pub strict: bool,

    /// Print document paths and the vocabulary before the matrix
    /// (on stderr with --format json/cbor)
    #[arg(long = "dump")]
    pub dump: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn collision_policy(&self) -> CollisionPolicy {
        if self.strict {
            CollisionPolicy::Strict
        } else {
            CollisionPolicy::Overwrite
        }
    }
}
