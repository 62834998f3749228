use std::{collections::HashMap, io::Write, time::Instant};

use indexmap::IndexMap;
use log::{info, warn};
use num::Float;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    document::label_of,
    error::{Result, SimilarityError},
    vectorizer::{
        compute::compare::{Compare, DefaultCompare},
        evaluate::scoring::PairHits,
    },
};

/// Decimal digits kept in every score
pub const SCORE_DIGITS: i32 = 4;

/// Round a score to `SCORE_DIGITS` decimal digits
#[inline]
pub fn round_score(score: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DIGITS);
    (score * scale).round() / scale
}

/// What to do when two documents map to the same label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Last write wins. Every collision is logged.
    /// Pairs of documents sharing a label are skipped.
    #[default]
    Overwrite,
    /// Fail with `SimilarityError::DuplicateLabel`
    Strict,
}

/// Similarity Matrix
/// label -> (label -> cosine similarity), rounded to 4 decimals.
///
/// - no diagonal entries (`matrix[x][x]` never exists)
/// - symmetric: `get(a, b) == get(b, a)`
/// - rows and columns follow input document order
/// - every label has a row, possibly empty (single document corpus)
///
/// Serializes as a nested map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SimilarityMatrix {
    rows: IndexMap<String, IndexMap<String, f64>>,
}

impl SimilarityMatrix {
    pub fn new() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }

    /// Score between two labels
    #[inline]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.rows.get(a).and_then(|row| row.get(b)).copied()
    }

    /// Scores of one label against every other label
    #[inline]
    pub fn row(&self, label: &str) -> Option<&IndexMap<String, f64>> {
        self.rows.get(label)
    }

    /// Labels in row order
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> {
        self.rows.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, f64>)> {
        self.rows.iter().map(|(k, row)| (k.as_str(), row))
    }

    /// number of rows
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every unordered pair once, highest score first, equal scores by label
    pub fn ranked_pairs(&self) -> PairHits {
        let mut list = Vec::new();
        for (i, (left, row)) in self.rows.iter().enumerate() {
            for (right, &score) in row {
                match self.rows.get_index_of(right.as_str()) {
                    Some(j) if j > i => list.push((left.clone(), right.clone(), score)),
                    _ => {}
                }
            }
        }
        let mut hits = PairHits::new(list);
        hits.sort_by_score();
        hits
    }

    pub fn write_json<W: Write>(&self, writer: W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_json::to_writer(writer, self)?;
        }
        Ok(())
    }

    pub fn write_cbor<W: Write>(&self, writer: W) -> Result<()> {
        serde_cbor::to_writer(writer, self)?;
        Ok(())
    }
}

/// index of the unordered pair (i, j), i < j, in row-major upper-triangle order
#[inline(always)]
fn pair_index(n: usize, i: usize, j: usize) -> usize {
    debug_assert!(i < j && j < n);
    i * n - i * (i + 1) / 2 + (j - i - 1)
}

/// Compute the pairwise cosine similarity of every vector and key the result
/// by the label (base file name) of each identifier.
///
/// Each unordered pair is scored once on the rayon pool at full precision,
/// then rounded and mirrored.
pub fn similarity_matrix<N, V>(
    vectors: &IndexMap<String, V>,
    policy: CollisionPolicy,
) -> Result<SimilarityMatrix>
where
    N: Float + Send + Sync,
    V: AsRef<[N]> + Sync,
{
    let start = Instant::now();
    let ids: Vec<&str> = vectors.keys().map(|k| k.as_str()).collect();
    let labels: Vec<&str> = ids.iter().map(|id| label_of(id)).collect();
    let n = ids.len();

    let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(n);
    for (i, &label) in labels.iter().enumerate() {
        if let Some(&first) = first_seen.get(label) {
            match policy {
                CollisionPolicy::Strict => {
                    return Err(SimilarityError::DuplicateLabel {
                        label: label.to_string(),
                        first: ids[first].to_string(),
                        second: ids[i].to_string(),
                    });
                }
                CollisionPolicy::Overwrite => {
                    warn!(
                        "label `{}` is shared by `{}` and `{}`; later scores overwrite",
                        label, ids[first], ids[i]
                    );
                }
            }
        } else {
            first_seen.insert(label, i);
        }
    }

    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();
    let slices: Vec<&[N]> = vectors.values().map(|v| v.as_ref()).collect();
    let scores: Vec<f64> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let score = <DefaultCompare as Compare<N>>::cosine_similarity(slices[i], slices[j]);
            round_score(score)
        })
        .collect();

    let mut rows: IndexMap<String, IndexMap<String, f64>> = IndexMap::with_capacity(n);
    for i in 0..n {
        let row = rows.entry(labels[i].to_string()).or_default();
        for j in 0..n {
            if i == j || labels[i] == labels[j] {
                continue;
            }
            let score = scores[pair_index(n, i.min(j), i.max(j))];
            row.insert(labels[j].to_string(), score);
        }
    }

    info!(
        "[time] similarity pairs={} labels={} elapsed={:.2}ms",
        pairs.len(),
        rows.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(SimilarityMatrix { rows })
}
