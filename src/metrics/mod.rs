//! Metric primitives: IoU and per-class tallies.

pub mod iou;
pub mod tally;

pub use iou::{calculate_iou, calculate_iou_matrix};
pub use tally::ClassTally;
