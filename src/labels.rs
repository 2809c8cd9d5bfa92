//! Decoding of padded ground-truth label rows.
//!
//! Batched data loaders pad every image's label tensor to the batch's
//! longest annotation list so the batch is rectangular. Padding rows are
//! filled with a sentinel value; they must be stripped before the rows are
//! treated as real ground-truth objects.

use crate::error::{MicroEvalError, Result};
use crate::types::{BoundingBox, GroundTruth};

/// Sentinel value used by the upstream loader for padding rows.
pub const PAD_VAL: f64 = -1.0;

/// Decode one image's padded label rows into ground-truth objects.
///
/// Each row is `[xmin, ymin, xmax, ymax, class_id, ...]`; trailing columns
/// (such as a difficulty flag) are ignored. Rows whose class id is negative
/// are padding and are skipped.
///
/// # Errors
///
/// Returns a data-integrity error for rows shorter than 5 values or with a
/// non-integral class id.
///
/// # Example
///
/// ```
/// use microavg_eval::labels::decode_image_labels;
///
/// let rows = vec![
///     vec![0.0, 0.0, 10.0, 10.0, 1.0],
///     vec![-1.0, -1.0, -1.0, -1.0, -1.0], // padding
/// ];
/// let ground_truths = decode_image_labels(&rows).unwrap();
/// assert_eq!(ground_truths.len(), 1);
/// assert_eq!(ground_truths[0].class_id, 1);
/// ```
pub fn decode_image_labels(rows: &[Vec<f64>]) -> Result<Vec<GroundTruth>> {
    let mut ground_truths = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        if row.len() < 5 {
            return Err(MicroEvalError::InvalidLabelRow(format!(
                "row {} has {} values, expected at least 5",
                row_idx,
                row.len()
            )));
        }

        let class_val = row[4];
        if class_val < 0.0 {
            // Padding row.
            continue;
        }
        if class_val.fract() != 0.0 {
            return Err(MicroEvalError::InvalidLabelRow(format!(
                "row {} has non-integral class id {}",
                row_idx, class_val
            )));
        }

        ground_truths.push(GroundTruth::new(
            class_val as usize,
            BoundingBox::new(row[0], row[1], row[2], row[3]),
        ));
    }

    Ok(ground_truths)
}

/// Decode a batch of padded per-image label rows.
pub fn decode_batch_labels(batch: &[Vec<Vec<f64>>]) -> Result<Vec<Vec<GroundTruth>>> {
    batch.iter().map(|rows| decode_image_labels(rows)).collect()
}
