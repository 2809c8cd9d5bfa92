//! Intersection over Union (IoU) calculation.

use crate::types::BoundingBox;

/// Calculate the Intersection over Union (IoU) between two bounding boxes.
///
/// IoU is defined as the area of intersection divided by the area of union.
///
/// # Arguments
///
/// * `bbox1` - First bounding box (corner format)
/// * `bbox2` - Second bounding box (corner format)
///
/// # Returns
///
/// Returns a value between 0.0 (no overlap) and 1.0 (perfect overlap).
///
/// # Example
///
/// ```
/// use microavg_eval::metrics::iou::calculate_iou;
/// use microavg_eval::types::BoundingBox;
///
/// let bbox1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
/// let bbox2 = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
/// let iou = calculate_iou(&bbox1, &bbox2);
/// assert!(iou > 0.0 && iou < 1.0);
/// ```
pub fn calculate_iou(bbox1: &BoundingBox, bbox2: &BoundingBox) -> f64 {
    // Intersection corners
    let x_left = bbox1.xmin.max(bbox2.xmin);
    let y_top = bbox1.ymin.max(bbox2.ymin);
    let x_right = bbox1.xmax.min(bbox2.xmax);
    let y_bottom = bbox1.ymax.min(bbox2.ymax);

    // No intersection
    if x_right < x_left || y_bottom < y_top {
        return 0.0;
    }

    let intersection_area = (x_right - x_left) * (y_bottom - y_top);

    let union_area = bbox1.area() + bbox2.area() - intersection_area;

    // Avoid division by zero
    if union_area == 0.0 {
        return 0.0;
    }

    intersection_area / union_area
}

/// Calculate the IoU matrix between two sets of bounding boxes.
///
/// # Returns
///
/// Returns a 2D vector where `result[i][j]` is the IoU between `bboxes1[i]`
/// and `bboxes2[j]`.
pub fn calculate_iou_matrix(bboxes1: &[BoundingBox], bboxes2: &[BoundingBox]) -> Vec<Vec<f64>> {
    bboxes1
        .iter()
        .map(|bbox1| {
            bboxes2
                .iter()
                .map(|bbox2| calculate_iou(bbox1, bbox2))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_boxes() {
        let bbox1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let bbox2 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let iou = calculate_iou(&bbox1, &bbox2);
        assert!((iou - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_overlap() {
        let bbox1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let bbox2 = BoundingBox::new(20.0, 20.0, 30.0, 30.0);
        let iou = calculate_iou(&bbox1, &bbox2);
        assert_eq!(iou, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let bbox1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let bbox2 = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        let iou = calculate_iou(&bbox1, &bbox2);

        // Intersection: 5x5 = 25
        // Union: 100 + 100 - 25 = 175
        assert!((iou - 25.0 / 175.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_area_boxes() {
        let bbox1 = BoundingBox::new(10.0, 10.0, 10.0, 10.0);
        let bbox2 = BoundingBox::new(10.0, 10.0, 10.0, 10.0);
        assert_eq!(calculate_iou(&bbox1, &bbox2), 0.0);
    }

    #[test]
    fn test_iou_matrix() {
        let bboxes1 = vec![
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(5.0, 5.0, 15.0, 15.0),
        ];
        let bboxes2 = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];

        let matrix = calculate_iou_matrix(&bboxes1, &bboxes2);
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0].len(), 1);
        assert!((matrix[0][0] - 1.0).abs() < 1e-10);
    }
}
