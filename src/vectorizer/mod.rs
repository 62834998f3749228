pub mod corpus;
pub mod compute;
pub mod evaluate;
pub mod tfidf;
pub mod token;
pub mod tokenizer;
pub mod vocabulary;

use std::marker::PhantomData;
use std::time::Instant;

use indexmap::IndexMap;
use log::{debug, info};
use num::Float;
use rayon::prelude::*;

use crate::{
    document::Document,
    error::Result,
    vectorizer::{
        corpus::Corpus,
        evaluate::matrix::{similarity_matrix, CollisionPolicy, SimilarityMatrix},
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::TokenFrequency,
        tokenizer::tokenize,
        vocabulary::Vocabulary,
    },
};

/// TF-IDF vector of one document
#[derive(Debug, Clone, PartialEq)]
pub struct TFIDFVector<N>
where
    N: Float,
{
    /// dense weights, aligned to the vocabulary
    pub weights: Vec<N>,
    /// sum of tokens of this document
    pub token_sum: u64,
}

impl<N> TFIDFVector<N>
where
    N: Float,
{
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// true when every weight is zero (empty document, or only zero-IDF terms)
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|w| w.is_zero())
    }
}

impl<N> AsRef<[N]> for TFIDFVector<N>
where
    N: Float,
{
    fn as_ref(&self) -> &[N] {
        &self.weights
    }
}

/// IDF Vector
/// One weight per vocabulary term, positionally aligned to the vocabulary
/// it was computed against. Computed once per corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct IDFVector<N>
where
    N: Float,
{
    /// dense: every term has a weight
    pub idf_vec: Vec<N>,
    /// document count
    pub doc_num: u64,
}

impl<N> IDFVector<N>
where
    N: Float,
{
    pub fn new() -> Self {
        Self {
            idf_vec: Vec::new(),
            doc_num: 0,
        }
    }

    pub fn from_corpus<E>(corpus: &Corpus, vocabulary: &Vocabulary) -> Self
    where
        E: TFIDFEngine<N>,
    {
        Self {
            idf_vec: E::idf_vec(corpus, vocabulary),
            doc_num: corpus.get_doc_num(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf_vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf_vec.is_empty()
    }

    /// Weight at a vocabulary index
    #[inline]
    pub fn get(&self, index: usize) -> Option<N> {
        self.idf_vec.get(index).copied()
    }

    /// Weight of a term, looked up through the vocabulary this vector is aligned to
    #[inline]
    pub fn weight_of(&self, vocabulary: &Vocabulary, term: &str) -> Option<N> {
        vocabulary.index_of(term).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.idf_vec.iter()
    }
}

impl<N> Default for IDFVector<N>
where
    N: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

/// TF-IDF Vectorizer
///
/// Runs the whole pipeline over one document set and keeps the read-only
/// results: the vocabulary, the corpus statistics, the IDF vector and one
/// TF-IDF vector per document (keyed by document identifier, input order).
///
/// `TFIDFVectorizer<N, E>`:
/// - `N`: float type of the weights (`f32`, `f64`)
/// - `E`: TF-IDF calculation engine (`DefaultTFIDFEngine`)
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Document's TF-IDF Vector
    pub documents: IndexMap<String, TFIDFVector<N>>,
    /// Feature space shared by every vector
    pub vocabulary: Vocabulary,
    /// Document frequency statistics
    pub corpus: Corpus,
    /// IDF Vector
    pub idf_cache: IDFVector<N>,
    _marker: PhantomData<E>,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Tokenize, build the vocabulary, estimate IDF and vectorize every
    /// document. A repeated identifier replaces the earlier document.
    pub fn fit(documents: &[Document]) -> Self {
        let start = Instant::now();

        // last occurrence of an identifier wins, position of the first is kept
        let mut docs: IndexMap<&str, &str> = IndexMap::with_capacity(documents.len());
        for doc in documents {
            if docs.insert(doc.id.as_str(), doc.text.as_str()).is_some() {
                debug!("[fit] replacing duplicate document `{}`", doc.id);
            }
        }

        info!("[stage] tokenizing {} documents", docs.len());
        let freqs: Vec<(&str, Vec<String>)> = docs
            .par_iter()
            .map(|(&id, &text)| (id, tokenize(text)))
            .collect();
        let token_seqs: Vec<&[String]> =
            freqs.iter().map(|(_, tokens)| tokens.as_slice()).collect();
        let t_tokenize = start.elapsed();

        let vocabulary = Vocabulary::build(&token_seqs);
        let corpus = Corpus::from_documents(&token_seqs);
        let idf_cache = IDFVector::from_corpus::<E>(&corpus, &vocabulary);
        info!(
            "[stage] vocabulary={} terms over {} documents",
            vocabulary.len(),
            corpus.get_doc_num()
        );
        let t_idf = start.elapsed();

        let vectors: Vec<(String, TFIDFVector<N>)> = freqs
            .par_iter()
            .map(|(id, tokens)| {
                let freq: TokenFrequency = tokens.iter().collect();
                let weights = E::tf_idf_vec(&freq, &vocabulary, &idf_cache);
                debug!("[fit] `{}`: {} tokens, {} unique", id, freq.token_sum(), freq.token_num());
                (
                    id.to_string(),
                    TFIDFVector {
                        weights,
                        token_sum: freq.token_sum(),
                    },
                )
            })
            .collect();
        let t_total = start.elapsed();

        info!(
            "[time] tokenize={:.2}ms vocabulary+idf={:.2}ms vectorize={:.2}ms total={:.2}ms",
            t_tokenize.as_secs_f64() * 1000.0,
            (t_idf - t_tokenize).as_secs_f64() * 1000.0,
            (t_total - t_idf).as_secs_f64() * 1000.0,
            t_total.as_secs_f64() * 1000.0
        );

        Self {
            documents: vectors.into_iter().collect(),
            vocabulary,
            corpus,
            idf_cache,
            _marker: PhantomData,
        }
    }

    /// Vectorize a new text against the fitted vocabulary and IDF.
    /// The model is not modified.
    pub fn vectorize(&self, text: &str) -> TFIDFVector<N> {
        let freq: TokenFrequency = tokenize(text).into_iter().collect();
        TFIDFVector {
            weights: E::tf_idf_vec(&freq, &self.vocabulary, &self.idf_cache),
            token_sum: freq.token_sum(),
        }
    }

    /// Pairwise cosine similarity of every fitted document
    pub fn similarity_matrix(&self, policy: CollisionPolicy) -> Result<SimilarityMatrix> {
        similarity_matrix(&self.documents, policy)
    }

    /// Get the TF-IDF vector by document ID
    pub fn vector(&self, id: &str) -> Option<&TFIDFVector<N>> {
        self.documents.get(id)
    }

    pub fn contains_doc(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &IDFVector<N> {
        &self.idf_cache
    }
}
