use serde::{Deserialize, Serialize};

use crate::aggregate::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Sort by count descending. The sort is stable over the table's
/// first-occurrence order, which settles ties.
pub fn rank(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut ranked = table.entries().to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// First `n` entries; `n <= 0` selects nothing and an oversized `n` selects all.
pub fn top_n(ranked: &[RankedEntry], n: i64) -> &[RankedEntry] {
    let n = if n <= 0 {
        0
    } else {
        usize::try_from(n).unwrap_or(usize::MAX)
    };
    &ranked[..n.min(ranked.len())]
}
