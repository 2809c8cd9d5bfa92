//! Confidence score thresholding utilities.

use crate::error::{MicroEvalError, Result};
use crate::types::Detection;

/// Filter detections by confidence score threshold.
///
/// Keeps detections whose score is strictly above the threshold, matching
/// the filtering applied before display or downstream consumption of raw
/// detector output.
///
/// # Arguments
///
/// * `detections` - Detections to filter, in detector order
/// * `threshold` - Minimum confidence score (0.0 to 1.0)
///
/// # Returns
///
/// Returns a new vector containing only detections with score > threshold,
/// preserving order.
///
/// # Errors
///
/// Returns an error if the threshold is not in the valid range [0.0, 1.0].
///
/// # Example
///
/// ```
/// use microavg_eval::threshold::filter_by_confidence;
/// use microavg_eval::types::{BoundingBox, Detection};
///
/// let detections = vec![
///     Detection::new(0, 0.9, BoundingBox::new(0.0, 0.0, 10.0, 10.0)),
///     Detection::new(0, 0.3, BoundingBox::new(20.0, 20.0, 30.0, 30.0)),
/// ];
///
/// let filtered = filter_by_confidence(&detections, 0.5).unwrap();
/// assert_eq!(filtered.len(), 1);
/// ```
pub fn filter_by_confidence(detections: &[Detection], threshold: f64) -> Result<Vec<Detection>> {
    validate_confidence_threshold(threshold)?;

    Ok(detections
        .iter()
        .filter(|det| det.score > threshold)
        .cloned()
        .collect())
}

/// Validate that a confidence threshold is in the valid range [0.0, 1.0].
fn validate_confidence_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(MicroEvalError::InvalidThreshold(format!(
            "Confidence threshold must be between 0.0 and 1.0, got {}",
            threshold
        )));
    }
    Ok(())
}
