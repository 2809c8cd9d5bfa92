//! # microavg-eval
//!
//! A Rust library for micro-averaged per-class object-detection validation
//! metrics.
//!
//! This library scores a detector's post-NMS outputs against ground-truth
//! annotations, image by image, and accumulates per-class true-positive /
//! false-positive / ground-truth counts, from which it derives:
//! - **Recall** per class: `tp / ground_truths`
//! - **Precision** per class: `tp / (tp + fp)`
//!
//! It is deliberately simpler than a ranking-aware mAP metric (which is
//! expected to run in parallel upstream): every detection is counted once
//! at a single IoU threshold, and a detection is matched against the
//! *first* ground truth of its class in annotation order rather than by
//! greedy best-IoU assignment.
//!
//! ## Features
//!
//! - Per-class recall/precision accumulation over a batched validation pass
//! - IoU (Intersection over Union) between corner-format bounding boxes
//! - Class list loading from a JSON configuration file
//! - Stripping of the padding sentinel from batched ground-truth labels
//! - Confidence-threshold filtering of raw detections
//! - Named per-class reports, exportable as Polars DataFrames
//!
//! ## Quick Start
//!
//! ```rust
//! use microavg_eval::scorer::DetectionScorer;
//! use microavg_eval::types::{BoundingBox, Detection, GroundTruth};
//!
//! # fn main() -> microavg_eval::error::Result<()> {
//! let mut scorer = DetectionScorer::new(2, 0.5)?;
//!
//! // One image: a correct class-0 detection on its ground truth.
//! scorer.update(
//!     &[Detection::new(0, 0.9, BoundingBox::new(0.0, 0.0, 10.0, 10.0))],
//!     &[GroundTruth::new(0, BoundingBox::new(0.0, 0.0, 10.0, 10.0))],
//! )?;
//!
//! let tally = scorer.tally();
//! assert_eq!(tally.recall()[0], Some(1.0));
//! assert_eq!(tally.precision()[0], Some(1.0));
//! // No class-1 data anywhere: undefined, not zero.
//! assert_eq!(tally.recall()[1], None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Degenerate statistics
//!
//! A class with zero ground truths has no defined recall, and a class with
//! zero predictions has no defined precision. Both are reported as `None`
//! rather than a float NaN or an error, so downstream reporting can tell
//! "no data" apart from "zero recall".

pub mod classes;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod polars_utils;
pub mod report;
pub mod scorer;
pub mod threshold;
pub mod types;

// Re-export commonly used types and functions
pub use classes::ClassList;
pub use error::{MicroEvalError, Result};
pub use labels::{decode_batch_labels, decode_image_labels, PAD_VAL};
pub use metrics::{calculate_iou, calculate_iou_matrix, ClassTally};
pub use report::EvalReport;
pub use scorer::{score, DetectionScorer};
pub use threshold::filter_by_confidence;
pub use types::{BoundingBox, Detection, GroundTruth, ImageResult};
