use num::Float;
use rayon::prelude::*;

use crate::vectorizer::{
    corpus::Corpus, token::TokenFrequency, tokenizer::tokenize, vocabulary::Vocabulary, IDFVector,
};

/// TF-IDF calculation engine
///
/// Plug a different weighting strategy into `TFIDFVectorizer<N, E>` by
/// implementing this trait.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// IDFベクトルを生成するメソッド
    /// # Arguments
    /// * `corpus` - コーパス
    /// * `vocabulary` - 次元 (term order)
    /// # Returns
    /// * `Vec<N>` - IDFベクトル, aligned to `vocabulary`
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Vec<N>;

    /// TF-IDFベクトルを生成するメソッド
    /// # Returns
    /// * `Vec<N>` - dense vector, `len() == vocabulary.len()`
    fn tf_idf_vec(freq: &TokenFrequency, vocabulary: &Vocabulary, idf: &IDFVector<N>) -> Vec<N>;
}

/// デフォルトのTF-IDFエンジン
/// - TF: `count / total_tokens`, 0 for an empty document
/// - IDF: `ln(N / (1 + df))`, 0 for an empty corpus
///
/// `f32`、`f64`の型に対応
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Smoothed IDF. May be negative when `df + 1 > doc_num`.
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        if doc_num == 0 {
            return 0.0;
        }
        (doc_num as f64 / (doc_freq as f64 + 1.0)).ln()
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Vec<N> {
        let doc_num = corpus.get_doc_num();
        vocabulary
            .iter()
            .map(|term| {
                let idf = Self::idf_calc(doc_num, corpus.get_term_count(term));
                N::from(idf).unwrap_or_else(N::zero)
            })
            .collect()
    }

    fn tf_idf_vec(freq: &TokenFrequency, vocabulary: &Vocabulary, idf: &IDFVector<N>) -> Vec<N> {
        debug_assert_eq!(
            vocabulary.len(),
            idf.len(),
            "IDF vector must be aligned to the vocabulary."
        );
        vocabulary
            .iter()
            .zip(idf.iter())
            .map(|(term, idf)| {
                let tf = freq.tf_token(term);
                if tf == 0.0 {
                    return N::zero();
                }
                let idf = idf.to_f64().unwrap_or(0.0);
                N::from(tf * idf).unwrap_or_else(N::zero)
            })
            .collect()
    }
}

/// Estimate one IDF weight per vocabulary term from every document's tokens
pub fn estimate_idf<D, T>(docs: &[D], vocabulary: &Vocabulary) -> IDFVector<f64>
where
    D: AsRef<[T]> + Sync,
    T: AsRef<str> + Sync,
{
    let corpus = Corpus::from_documents(docs);
    IDFVector::from_corpus::<DefaultTFIDFEngine>(&corpus, vocabulary)
}

/// Build the dense TF-IDF vector of one raw text against a vocabulary and
/// its IDF weights. Tokens outside the vocabulary are ignored.
pub fn vectorize<N>(text: &str, vocabulary: &Vocabulary, idf: &IDFVector<N>) -> Vec<N>
where
    N: Float,
{
    let freq: TokenFrequency = tokenize(text).into_iter().collect();
    <DefaultTFIDFEngine as TFIDFEngine<N>>::tf_idf_vec(&freq, vocabulary, idf)
}

/// `vectorize` for many texts on the rayon pool, keeping input order
pub fn vectorize_all<N, T>(texts: &[T], vocabulary: &Vocabulary, idf: &IDFVector<N>) -> Vec<Vec<N>>
where
    N: Float + Send + Sync,
    T: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| vectorize(text.as_ref(), vocabulary, idf))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn corpus_of(docs: &[&[&str]]) -> (Vec<Vec<String>>, Vocabulary) {
        let docs: Vec<Vec<String>> = docs
            .iter()
            .map(|d| d.iter().map(|t| t.to_string()).collect())
            .collect();
        let vocab = Vocabulary::build(&docs);
        (docs, vocab)
    }

    #[test]
    fn idf_matches_smoothed_formula() {
        let (docs, vocab) = corpus_of(&[&["cats", "and", "dogs"], &["dogs", "and", "birds"]]);
        let idf = estimate_idf(&docs, &vocab);

        assert_eq!(idf.len(), vocab.len());
        let and = idf.weight_of(&vocab, "and").unwrap();
        let cats = idf.weight_of(&vocab, "cats").unwrap();
        assert!((and - (2.0f64 / 3.0).ln()).abs() < EPS);
        assert!(and < 0.0);
        assert!(cats.abs() < EPS);
        assert_eq!(idf.weight_of(&vocab, "fish"), None);
    }

    #[test]
    fn zero_document_frequency_term_gets_ln_n() {
        let (docs, _) = corpus_of(&[&["a"], &["b"], &["a", "b"]]);
        let vocab = Vocabulary::from_terms(["a", "b", "unseen"]);
        let idf = estimate_idf(&docs, &vocab);
        assert!((idf.weight_of(&vocab, "unseen").unwrap() - 3.0f64.ln()).abs() < EPS);
    }

    #[test]
    fn empty_corpus_has_zero_weights() {
        let docs: Vec<Vec<String>> = Vec::new();
        let empty = Vocabulary::build(&docs);
        assert!(estimate_idf(&docs, &empty).is_empty());

        let external = Vocabulary::from_terms(["a"]);
        let idf = estimate_idf(&docs, &external);
        assert_eq!(idf.iter().copied().collect::<Vec<f64>>(), vec![0.0]);
    }

    #[test]
    fn vector_is_aligned_to_vocabulary() {
        let (docs, vocab) = corpus_of(&[&["a", "b", "b", "c"], &["c", "d"], &["e"]]);
        let idf = estimate_idf(&docs, &vocab);

        let vec = vectorize("b b a zzz", &vocab, &idf);
        assert_eq!(vec.len(), vocab.len());
        for (i, term) in vocab.iter().enumerate() {
            // "zzz" is outside the vocabulary but still counts towards the total
            let tf = match term {
                "a" => 0.25,
                "b" => 0.5,
                _ => 0.0,
            };
            let expected = tf * idf.get(i).unwrap();
            assert!((vec[i] - expected).abs() < EPS, "term {term}");
        }
    }

    #[test]
    fn empty_text_gives_zero_vector() {
        let (docs, vocab) = corpus_of(&[&["a", "b"], &["c"]]);
        let idf = estimate_idf(&docs, &vocab);
        let vec = vectorize("", &vocab, &idf);
        assert_eq!(vec, vec![0.0; vocab.len()]);
    }

    #[test]
    fn f32_engine_agrees_with_f64() {
        let (docs, vocab) = corpus_of(&[&["x", "y"], &["y", "z"], &["z"]]);
        let corpus = Corpus::from_documents(&docs);
        let idf64 = IDFVector::<f64>::from_corpus::<DefaultTFIDFEngine>(&corpus, &vocab);
        let idf32 = IDFVector::<f32>::from_corpus::<DefaultTFIDFEngine>(&corpus, &vocab);
        for (a, b) in idf64.iter().zip(idf32.iter()) {
            assert!((a - *b as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn vectorize_all_keeps_order() {
        let (docs, vocab) = corpus_of(&[&["a"], &["b"], &["a", "c"]]);
        let idf = estimate_idf(&docs, &vocab);
        let texts = ["a", "b", "a c"];
        let all = vectorize_all(&texts, &vocab, &idf);
        for (text, vec) in texts.iter().zip(all.iter()) {
            assert_eq!(*vec, vectorize(text, &vocab, &idf));
        }
    }
}
