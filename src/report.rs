//! Per-class evaluation report.
//!
//! Pairs the raw tally counters with class names and the derived recall and
//! precision values so callers can print or serialize the outcome of a
//! validation pass.

use crate::classes::ClassList;
use crate::error::{MicroEvalError, Result};
use crate::metrics::tally::ClassTally;
use serde::{Deserialize, Serialize};

/// Named per-class results of one validation pass.
///
/// `recall` and `precision` hold `None` for classes whose statistic is
/// undefined (no ground truths, or no predictions) so reporting can
/// distinguish "no data" from "zero".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    pub classes: Vec<String>,
    pub true_positives: Vec<u64>,
    pub false_positives: Vec<u64>,
    pub ground_truths: Vec<u64>,
    pub recall: Vec<Option<f64>>,
    pub precision: Vec<Option<f64>>,
}

impl EvalReport {
    /// Build a report from a finished tally and the class list.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list's length differs from the tally's
    /// class count.
    pub fn from_tally(tally: &ClassTally, classes: &ClassList) -> Result<Self> {
        if classes.num_classes() != tally.num_classes() {
            return Err(MicroEvalError::TallySizeMismatch(
                classes.num_classes(),
                tally.num_classes(),
            ));
        }
        Ok(Self {
            classes: classes.names().to_vec(),
            true_positives: tally.true_positives().to_vec(),
            false_positives: tally.false_positives().to_vec(),
            ground_truths: tally.ground_truths().to_vec(),
            recall: tally.recall(),
            precision: tally.precision(),
        })
    }

    /// Number of classes covered by the report.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Get a formatted multi-line summary of the report.
    pub fn summary_string(&self) -> String {
        let mut out = String::from("=== Per-Class Validation Results ===\n");
        for (i, name) in self.classes.iter().enumerate() {
            out.push_str(&format!(
                "{}: tp={} fp={} gt={} recall={} precision={}\n",
                name,
                self.true_positives[i],
                self.false_positives[i],
                self.ground_truths[i],
                format_metric(self.recall[i]),
                format_metric(self.precision[i]),
            ));
        }
        out.push_str("====================================");
        out
    }

    /// Print the summary to stdout.
    pub fn print_summary(&self) {
        println!("{}", self.summary_string());
    }
}

fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "undefined".to_string(),
    }
}
