use std::collections::HashSet;

use indexmap::IndexMap;
use rayon::prelude::*;

/// keep document count and per-term document frequency
///
/// Built once per run by folding each document's token set into a partial
/// corpus and merging the partials. Read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    /// number of documents
    doc_num: u64,
    /// term -> number of documents containing it
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new, empty instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Build from every document's token sequence.
    /// Each document counts at most once per term.
    pub fn from_documents<D, T>(docs: &[D]) -> Self
    where
        D: AsRef<[T]> + Sync,
        T: AsRef<str> + Sync,
    {
        docs.par_iter()
            .fold(Corpus::new, |mut corpus, tokens| {
                corpus.add_set(tokens.as_ref());
                corpus
            })
            .reduce(Corpus::new, |mut left, right| {
                left.merge_corpus(&right);
                left
            })
    }

    /// Add one document's terms to the corpus.
    /// Repeated terms within the slice are counted once.
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        let mut seen: HashSet<&str> = HashSet::with_capacity(terms.len());
        for term in terms {
            let term = term.as_ref();
            if !seen.insert(term) {
                continue;
            }
            if let Some(count) = self.term_counts.get_mut(term) {
                *count += 1;
            } else {
                self.term_counts.insert(term.into(), 1);
            }
        }
    }

    /// Merge another corpus into self
    pub fn merge_corpus(&mut self, other: &Corpus) {
        for (term, &count_other) in other.term_counts.iter() {
            self.term_counts
                .entry(term.clone())
                .and_modify(|count| *count += count_other)
                .or_insert(count_other);
        }
        self.doc_num += other.doc_num;
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a term, 0 when unseen
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_documents_not_occurrences() {
        let docs = vec![
            vec!["cats", "and", "dogs", "dogs"],
            vec!["dogs", "and", "birds"],
        ];
        let corpus = Corpus::from_documents(&docs);

        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_term_count("and"), 2);
        assert_eq!(corpus.get_term_count("dogs"), 2);
        assert_eq!(corpus.get_term_count("cats"), 1);
        assert_eq!(corpus.get_term_count("birds"), 1);
        assert_eq!(corpus.get_term_count("fish"), 0);
        assert_eq!(corpus.vocab_size(), 4);
    }

    #[test]
    fn empty_documents_still_count() {
        let docs: Vec<Vec<&str>> = vec![vec![], vec!["a"], vec![]];
        let corpus = Corpus::from_documents(&docs);
        assert_eq!(corpus.get_doc_num(), 3);
        assert_eq!(corpus.get_term_count("a"), 1);
    }

    #[test]
    fn merge_adds_counts() {
        let mut left = Corpus::new();
        left.add_set(&["a", "b"]);
        let mut right = Corpus::new();
        right.add_set(&["b", "c"]);
        right.add_set(&["b"]);

        left.merge_corpus(&right);
        assert_eq!(left.get_doc_num(), 3);
        assert_eq!(left.get_term_count("a"), 1);
        assert_eq!(left.get_term_count("b"), 3);
        assert_eq!(left.get_term_count("c"), 1);
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let docs: Vec<Vec<String>> = (0..300)
            .map(|i| vec![format!("t{}", i % 13), format!("t{}", i % 13), format!("u{}", i % 5)])
            .collect();
        let mut sequential = Corpus::new();
        for doc in &docs {
            sequential.add_set(doc);
        }
        let parallel = Corpus::from_documents(&docs);

        assert_eq!(parallel.get_doc_num(), sequential.get_doc_num());
        for i in 0..13 {
            let term = format!("t{i}");
            assert_eq!(parallel.get_term_count(&term), sequential.get_term_count(&term));
        }
        assert_eq!(parallel.get_term_count("u0"), 60);
    }
}
