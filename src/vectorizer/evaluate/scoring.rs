use std::fmt::{self, Debug, Display};

use serde::Serialize;

/// Structure to store ranked document pairs
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct PairHits {
    /// (left label, right label, score)
    pub list: Vec<(String, String, f64)>,
}

impl PairHits {
    /// Create a new PairHits instance
    pub fn new(list: Vec<(String, String, f64)>) -> Self {
        PairHits { list }
    }

    /// Sort results by descending score, equal scores by (left, right) label
    pub fn sort_by_score(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|(_, _, s)| !s.is_nan());
        self.list.sort_by(|a, b| {
            b.2.total_cmp(&a.2)
                .then_with(|| a.0.cmp(&b.0))
                .then_with(|| a.1.cmp(&b.1))
        });
        self
    }

    /// Keep only the first `n` entries
    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for PairHits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "PairHits [")?;
            for (left, right, score) in &self.list {
                writeln!(f, "    {:?} <-> {:?}: {:.4}", left, right, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for PairHits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (left, right, score) in &self.list {
            writeln!(f, "{:.4}\t{}\t{}", score, left, right)?;
        }
        Ok(())
    }
}
