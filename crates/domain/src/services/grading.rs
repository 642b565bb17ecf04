//! Grade distribution shaping.

use std::collections::HashMap;

use crate::models::analytics::GradeBucket;
use crate::models::mark::{LetterGrade, ALL_LETTER_GRADES};

/// Expands raw per-letter counts into the full fixed-order distribution.
///
/// SQL grouping only returns letters that occur; dashboards want all five
/// buckets every time, zeros included, so the counts always sum to the
/// number of marks behind them.
pub fn normalize_distribution(
    counts: impl IntoIterator<Item = (LetterGrade, i64)>,
) -> Vec<GradeBucket> {
    let by_grade: HashMap<LetterGrade, i64> = counts.into_iter().collect();

    ALL_LETTER_GRADES
        .iter()
        .map(|&grade| GradeBucket {
            grade,
            count: by_grade.get(&grade).copied().unwrap_or(0),
        })
        .collect()
}
