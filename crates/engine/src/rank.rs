//! Ranking and top-K truncation.

use sifter_primitives::ScoredRecord;

/// Default number of records in the top-K view.
pub const DEFAULT_TOP_K: usize = 10;

/// Sort records by composite score, best first.
///
/// The sort is stable: records with exactly equal scores keep their
/// original relative order, which is the engine's documented tie-break.
#[must_use]
pub fn rank(mut scored: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// The top `k` ranked records.
///
/// A plain truncating view: no computation beyond slicing. Shorter inputs
/// are returned whole.
#[must_use]
pub fn top_k(ranked: &[ScoredRecord], k: usize) -> &[ScoredRecord] {
    &ranked[..k.min(ranked.len())]
}
