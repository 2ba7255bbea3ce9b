use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Misclassification tally of an evaluation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub total: usize,
    pub errors: usize,
}

impl ErrorReport {
    /// Count outcomes where `true` means the prediction matched the truth.
    pub fn from_outcomes<I: IntoIterator<Item = bool>>(outcomes: I) -> Self {
        let mut report = ErrorReport::default();
        for correct in outcomes {
            report.record(correct);
        }
        report
    }

    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if !correct {
            self.errors += 1;
        }
    }

    /// Fraction of misclassified samples; 0.0 for an empty report.
    pub fn error_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.errors as f64 / self.total as f64
        }
    }
}

impl AddAssign for ErrorReport {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.errors += rhs.errors;
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} errors out of {} ({:.4} error rate)",
            self.errors,
            self.total,
            self.error_rate()
        )
    }
}

/// Most frequent label of the sequence.
///
/// When several labels share the top count, the one whose first occurrence
/// comes earliest in the sequence wins. `None` for an empty sequence.
pub fn majority<'a, L, I>(labels: I) -> Option<&'a L>
where
    L: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a L>,
{
    // label -> (count, first position)
    let mut counts: HashMap<&L, (usize, usize)> = HashMap::new();
    for (pos, label) in labels.into_iter().enumerate() {
        counts.entry(label).or_insert((0, pos)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
        .map(|(label, _)| label)
}
