//! Per-class detection scorer.
//!
//! Accumulates true-positive / false-positive / ground-truth counts per
//! class, image by image, and derives micro-averaged per-class recall and
//! precision. This is deliberately distinct from a ranking-aware mAP
//! metric: it counts every post-NMS detection once at a single IoU
//! threshold.

use crate::classes::ClassList;
use crate::error::{MicroEvalError, Result};
use crate::metrics::iou::calculate_iou;
use crate::metrics::tally::ClassTally;
use crate::report::EvalReport;
use crate::types::{Detection, GroundTruth, ImageResult};

/// Validate an IoU threshold, which must lie in (0, 1].
fn validate_iou_threshold(threshold: f64) -> Result<()> {
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(MicroEvalError::InvalidThreshold(format!(
            "IoU threshold must be in (0, 1], got {}",
            threshold
        )));
    }
    Ok(())
}

/// Accumulates per-class counts over one validation pass.
///
/// Create one scorer per pass, feed it every image (or batch) of the
/// validation set in loader order, then read the tally or build a report.
/// The scorer never mutates its inputs and holds no state beyond the tally.
///
/// # Example
///
/// ```
/// use microavg_eval::scorer::DetectionScorer;
/// use microavg_eval::types::{BoundingBox, Detection, GroundTruth};
///
/// # fn main() -> microavg_eval::error::Result<()> {
/// let mut scorer = DetectionScorer::new(2, 0.5)?;
/// scorer.update(
///     &[Detection::new(0, 0.9, BoundingBox::new(0.0, 0.0, 10.0, 10.0))],
///     &[GroundTruth::new(0, BoundingBox::new(0.0, 0.0, 10.0, 10.0))],
/// )?;
/// assert_eq!(scorer.tally().true_positives(), &[1, 0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DetectionScorer {
    iou_threshold: f64,
    tally: ClassTally,
}

impl DetectionScorer {
    /// Create a scorer for a fixed class index space.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `iou_threshold` is outside (0, 1]
    /// or `num_classes` is zero.
    pub fn new(num_classes: usize, iou_threshold: f64) -> Result<Self> {
        validate_iou_threshold(iou_threshold)?;
        Ok(Self {
            iou_threshold,
            tally: ClassTally::new(num_classes)?,
        })
    }

    /// The IoU threshold detections must strictly exceed to count.
    pub fn iou_threshold(&self) -> f64 {
        self.iou_threshold
    }

    /// Number of classes in the scorer's index space.
    pub fn num_classes(&self) -> usize {
        self.tally.num_classes()
    }

    /// Score one image's detections against its ground truths.
    ///
    /// For each detection, the **first** ground truth in list order with the
    /// same class id is selected; a detection with no same-class ground
    /// truth in the image is a false positive regardless of overlap.
    /// Against the selected ground truth, IoU strictly above the threshold
    /// counts as a true positive, anything else as a false positive.
    ///
    /// This is not a one-to-one assignment: a single ground truth can
    /// satisfy any number of detections of its class. Every ground truth
    /// increments its class's ground-truth count exactly once, matched or
    /// not.
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error if any class id in either input is
    /// outside the configured range; no counter is updated in that case.
    pub fn update(
        &mut self,
        detections: &[Detection],
        ground_truths: &[GroundTruth],
    ) -> Result<()> {
        // Reject bad class ids up front so a failed image leaves the tally
        // untouched.
        for det in detections {
            self.tally.check_class(det.class_id)?;
        }
        for gt in ground_truths {
            self.tally.check_class(gt.class_id)?;
        }

        for det in detections {
            match ground_truths.iter().find(|gt| gt.class_id == det.class_id) {
                // Predicted class not present in this image at all.
                None => self.tally.add_false_positive(det.class_id)?,
                Some(gt) => {
                    let iou = calculate_iou(&det.bbox, &gt.bbox);
                    // The class equality re-check is redundant after the
                    // find above but kept explicit, mirroring the original
                    // counting rule.
                    if iou > self.iou_threshold && det.class_id == gt.class_id {
                        self.tally.add_true_positive(gt.class_id)?;
                    } else {
                        self.tally.add_false_positive(det.class_id)?;
                    }
                }
            }
        }

        // Unconditional: total ground-truth objects per class, independent
        // of what the detector produced.
        for gt in ground_truths {
            self.tally.add_ground_truth(gt.class_id)?;
        }

        Ok(())
    }

    /// Score one [`ImageResult`].
    pub fn update_image(&mut self, image: &ImageResult) -> Result<()> {
        self.update(&image.detections, &image.ground_truths)
    }

    /// Score a batch of images in order.
    pub fn update_batch(&mut self, images: &[ImageResult]) -> Result<()> {
        for image in images {
            self.update_image(image)?;
        }
        Ok(())
    }

    /// The accumulated tally.
    pub fn tally(&self) -> &ClassTally {
        &self.tally
    }

    /// Consume the scorer and return its tally.
    pub fn into_tally(self) -> ClassTally {
        self.tally
    }

    /// Build a named per-class report from the accumulated counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list's length differs from the
    /// scorer's class count.
    pub fn report(&self, classes: &ClassList) -> Result<EvalReport> {
        EvalReport::from_tally(&self.tally, classes)
    }
}

/// Score a full validation pass in one call.
///
/// `batch_detections[i]` and `batch_ground_truths[i]` are the detections
/// and ground truths of image `i`; the two outer sequences must have the
/// same length. Returns per-class `(recall, precision)`, with `None` for
/// classes whose statistic is undefined (no ground truths, or no
/// predictions).
///
/// # Errors
///
/// Returns a configuration error for an invalid `iou_threshold`, a batch
/// mismatch error for unequal input lengths, and a data-integrity error for
/// class ids outside `[0, num_classes)`.
pub fn score(
    batch_detections: &[Vec<Detection>],
    batch_ground_truths: &[Vec<GroundTruth>],
    num_classes: usize,
    iou_threshold: f64,
) -> Result<(Vec<Option<f64>>, Vec<Option<f64>>)> {
    if batch_detections.len() != batch_ground_truths.len() {
        return Err(MicroEvalError::BatchMismatch(format!(
            "{} detection lists vs {} ground-truth lists",
            batch_detections.len(),
            batch_ground_truths.len()
        )));
    }

    let mut scorer = DetectionScorer::new(num_classes, iou_threshold)?;
    for (detections, ground_truths) in batch_detections.iter().zip(batch_ground_truths.iter()) {
        scorer.update(detections, ground_truths)?;
    }

    let tally = scorer.into_tally();
    Ok((tally.recall(), tally.precision()))
}
