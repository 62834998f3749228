use indexmap::IndexSet;
use rayon::prelude::*;

/// Vocabulary
/// The ordered set of distinct terms that defines the feature space.
///
/// Every term has a stable index: dimension `i` of every vector built
/// against one `Vocabulary` instance refers to `vocabulary.term(i)`.
/// Terms are kept in first-occurrence order over the input documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

impl Vocabulary {
    /// Build the vocabulary from every document's token sequence.
    ///
    /// Each worker folds its share of documents into a partial set and the
    /// partial sets are merged left to right, so the resulting order is the
    /// same as a sequential scan.
    pub fn build<D, T>(docs: &[D]) -> Self
    where
        D: AsRef<[T]> + Sync,
        T: AsRef<str> + Sync,
    {
        let terms = docs
            .par_iter()
            .fold(IndexSet::new, |mut set: IndexSet<Box<str>>, tokens| {
                for token in tokens.as_ref() {
                    let token = token.as_ref();
                    if !set.contains(token) {
                        set.insert(token.into());
                    }
                }
                set
            })
            .reduce(IndexSet::new, |mut left, right| {
                left.extend(right);
                left
            });
        Self { terms }
    }

    /// Vocabulary from an externally supplied term list.
    /// Duplicates collapse onto their first position.
    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            terms: terms.into_iter().map(|t| t.as_ref().into()).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Dimension index of a term
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at a dimension index
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| t.as_ref())
    }

    /// Terms in dimension order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }
}
