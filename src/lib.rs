/// This crate computes pairwise document similarity with a TF-IDF vectorizer
/// and cosine similarity.
pub mod vectorizer;
pub mod config;
pub mod document;
pub mod error;
pub mod source;

/// TF-IDF Vectorizer
/// The top-level struct of this crate. It runs the whole pipeline over a
/// document set: tokenize, build the vocabulary, estimate IDF, vectorize every
/// document. The fitted model then produces the similarity matrix.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32`, `f64`)
/// - `E`: TF-IDF calculation engine type (e.g., `DefaultTFIDFEngine`)
///
/// # Examples
/// ```
/// use note_similarity::{CollisionPolicy, Document, TFIDFVectorizer};
///
/// let docs = vec![
///     Document::new("A.md", "cats and dogs"),
///     Document::new("B.md", "dogs and birds"),
/// ];
/// let vectorizer: TFIDFVectorizer = TFIDFVectorizer::fit(&docs);
/// let matrix = vectorizer.similarity_matrix(CollisionPolicy::Overwrite).unwrap();
/// assert_eq!(matrix.get("A.md", "B.md"), matrix.get("B.md", "A.md"));
/// assert_eq!(matrix.get("A.md", "A.md"), None);
/// ```
pub use vectorizer::{IDFVector, TFIDFVector, TFIDFVectorizer};

/// Tokenizer
/// Lower-cases, expands a fixed set of contractions, extracts word tokens and
/// splits possessive `'s` into its own token.
pub use vectorizer::tokenizer::{tokenize, tokenize_all};

/// Vocabulary
/// The fixed, ordered feature space of one run.
/// `Vocabulary::build` is the vocabulary builder.
pub use vectorizer::vocabulary::Vocabulary;

/// Corpus
/// Document count and document frequency of every term.
/// It is the base data for IDF calculation.
pub use vectorizer::corpus::Corpus;

/// Token Frequency structure
/// Token multiset of one document, the base data for TF calculation.
pub use vectorizer::token::TokenFrequency;

/// TF IDF Calculation Engine Trait
/// `DefaultTFIDFEngine` uses `count / total` for TF and `ln(N / (1 + df))`
/// for IDF. `estimate_idf` and `vectorize` run it with default settings.
pub use vectorizer::tfidf::{
    estimate_idf, vectorize, vectorize_all, DefaultTFIDFEngine, TFIDFEngine,
};

/// Similarity Engine
/// Cosine similarity of every document pair, keyed by document label.
pub use vectorizer::evaluate::matrix::{
    round_score, similarity_matrix, CollisionPolicy, SimilarityMatrix,
};

/// Ranked document pairs
pub use vectorizer::evaluate::scoring::PairHits;

/// Vector comparison kernels
pub use vectorizer::compute::compare::{Compare, DefaultCompare};

pub use document::{label_of, Document};
pub use error::{Result, SimilarityError};
pub use source::{collect_paths, read_documents, SourceConfig};

/// Build the vocabulary from every document's token sequence
pub fn build_vocabulary<D, T>(docs: &[D]) -> Vocabulary
where
    D: AsRef<[T]> + Sync,
    T: AsRef<str> + Sync,
{
    Vocabulary::build(docs)
}
