//! Core data types for detections and ground-truth annotations.

use serde::{Deserialize, Serialize};

/// Represents a bounding box in corner format (xmin, ymin, xmax, ymax).
///
/// Coordinates are in pixel units of the resized detector input where:
/// - xmin: Left coordinate
/// - ymin: Top coordinate
/// - xmax: Right coordinate
/// - ymax: Bottom coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self { xmin, ymin, xmax, ymax }
    }

    /// Get the width of the bounding box.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Get the height of the bounding box.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Get the area of the bounding box.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check if the bounding box is valid (positive extent on both axes).
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

/// One predicted object instance for one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Index into the fixed class list.
    pub class_id: usize,
    /// Confidence score, conventionally in [0, 1].
    pub score: f64,
    pub bbox: BoundingBox,
}

impl Detection {
    /// Create a new detection.
    pub fn new(class_id: usize, score: f64, bbox: BoundingBox) -> Self {
        Self { class_id, score, bbox }
    }
}

/// One annotated object instance for one image. No score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruth {
    /// Index into the fixed class list.
    pub class_id: usize,
    pub bbox: BoundingBox,
}

impl GroundTruth {
    /// Create a new ground-truth annotation.
    pub fn new(class_id: usize, bbox: BoundingBox) -> Self {
        Self { class_id, bbox }
    }
}

/// Detector output and annotations for a single image.
///
/// Both sequences keep the order they were produced in: detections in the
/// detector's post-NMS selection order, ground truths in dataset-annotation
/// order. The matching procedure depends on these orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    pub detections: Vec<Detection>,
    pub ground_truths: Vec<GroundTruth>,
}

impl ImageResult {
    /// Create a new image result.
    pub fn new(detections: Vec<Detection>, ground_truths: Vec<GroundTruth>) -> Self {
        Self { detections, ground_truths }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_dimensions() {
        let bbox = BoundingBox::new(10.0, 20.0, 40.0, 80.0);
        assert_eq!(bbox.width(), 30.0);
        assert_eq!(bbox.height(), 60.0);
        assert_eq!(bbox.area(), 1800.0);
        assert!(bbox.is_valid());
    }

    #[test]
    fn test_degenerate_bbox_is_invalid() {
        let point = BoundingBox::new(10.0, 10.0, 10.0, 10.0);
        assert!(!point.is_valid());

        let inverted = BoundingBox::new(40.0, 40.0, 10.0, 10.0);
        assert!(!inverted.is_valid());
    }

    #[test]
    fn test_image_result_roundtrip() {
        let image = ImageResult::new(
            vec![Detection::new(0, 0.9, BoundingBox::new(0.0, 0.0, 10.0, 10.0))],
            vec![GroundTruth::new(0, BoundingBox::new(0.0, 0.0, 10.0, 10.0))],
        );

        let json = serde_json::to_string(&image).unwrap();
        let back: ImageResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, image);
    }
}
