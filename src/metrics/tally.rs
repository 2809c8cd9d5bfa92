//! Per-class true-positive / false-positive / ground-truth tallies.

use crate::error::{MicroEvalError, Result};
use serde::{Deserialize, Serialize};

/// Per-class counters accumulated over one validation pass.
///
/// The class index space is fixed at construction and shared by detections,
/// ground truths, and these counters. Counters only increase within a pass;
/// a new pass starts from a fresh tally. Recall and precision are derived on
/// demand, never stored.
///
/// This is an explicit accumulator value: it is created by the caller,
/// threaded through the batch loop, and can be merged with tallies produced
/// by independently scored batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTally {
    true_positives: Vec<u64>,
    false_positives: Vec<u64>,
    ground_truths: Vec<u64>,
}

impl ClassTally {
    /// Create a zeroed tally for `num_classes` classes.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_classes` is zero.
    pub fn new(num_classes: usize) -> Result<Self> {
        if num_classes == 0 {
            return Err(MicroEvalError::EmptyClassList(
                "tally requires at least one class".to_string(),
            ));
        }
        Ok(Self {
            true_positives: vec![0; num_classes],
            false_positives: vec![0; num_classes],
            ground_truths: vec![0; num_classes],
        })
    }

    /// Number of classes in the tally's index space.
    pub fn num_classes(&self) -> usize {
        self.true_positives.len()
    }

    /// Per-class true-positive counts.
    pub fn true_positives(&self) -> &[u64] {
        &self.true_positives
    }

    /// Per-class false-positive counts.
    pub fn false_positives(&self) -> &[u64] {
        &self.false_positives
    }

    /// Per-class ground-truth object counts.
    pub fn ground_truths(&self) -> &[u64] {
        &self.ground_truths
    }

    /// Record one true positive for `class_id`.
    pub fn add_true_positive(&mut self, class_id: usize) -> Result<()> {
        self.check_class(class_id)?;
        self.true_positives[class_id] += 1;
        Ok(())
    }

    /// Record one false positive for `class_id`.
    pub fn add_false_positive(&mut self, class_id: usize) -> Result<()> {
        self.check_class(class_id)?;
        self.false_positives[class_id] += 1;
        Ok(())
    }

    /// Record one ground-truth object of `class_id`.
    pub fn add_ground_truth(&mut self, class_id: usize) -> Result<()> {
        self.check_class(class_id)?;
        self.ground_truths[class_id] += 1;
        Ok(())
    }

    /// Check that `class_id` is inside the tally's index space.
    pub fn check_class(&self, class_id: usize) -> Result<()> {
        if class_id >= self.num_classes() {
            return Err(MicroEvalError::ClassIdOutOfRange {
                class_id,
                num_classes: self.num_classes(),
            });
        }
        Ok(())
    }

    /// Fold another tally into this one.
    ///
    /// # Errors
    ///
    /// Returns an error if the two tallies cover different class counts.
    pub fn merge(&mut self, other: &ClassTally) -> Result<()> {
        if self.num_classes() != other.num_classes() {
            return Err(MicroEvalError::TallySizeMismatch(
                self.num_classes(),
                other.num_classes(),
            ));
        }
        for c in 0..self.num_classes() {
            self.true_positives[c] += other.true_positives[c];
            self.false_positives[c] += other.false_positives[c];
            self.ground_truths[c] += other.ground_truths[c];
        }
        Ok(())
    }

    /// Derive per-class recall: `tp[c] / ground_truths[c]`.
    ///
    /// A class with no ground-truth objects has no defined recall and yields
    /// `None` rather than a NaN, so downstream reporting can distinguish
    /// "no data" from "zero recall".
    pub fn recall(&self) -> Vec<Option<f64>> {
        self.true_positives
            .iter()
            .zip(self.ground_truths.iter())
            .map(|(&tp, &gt)| {
                if gt == 0 {
                    None
                } else {
                    Some(tp as f64 / gt as f64)
                }
            })
            .collect()
    }

    /// Derive per-class precision: `tp[c] / (tp[c] + fp[c])`.
    ///
    /// A class with no predictions at all yields `None`.
    pub fn precision(&self) -> Vec<Option<f64>> {
        self.true_positives
            .iter()
            .zip(self.false_positives.iter())
            .map(|(&tp, &fp)| {
                if tp + fp == 0 {
                    None
                } else {
                    Some(tp as f64 / (tp + fp) as f64)
                }
            })
            .collect()
    }
}
