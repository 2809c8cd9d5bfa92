//! Basic scoring example demonstrating core functionality.

use microavg_eval::classes::ClassList;
use microavg_eval::labels::decode_batch_labels;
use microavg_eval::metrics::iou::calculate_iou;
use microavg_eval::scorer::DetectionScorer;
use microavg_eval::threshold::filter_by_confidence;
use microavg_eval::types::{BoundingBox, Detection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Per-Class Detection Scoring Example ===\n");

    // Example 1: IoU Calculation
    println!("1. IoU Calculation");
    let bbox1 = BoundingBox::new(10.0, 10.0, 60.0, 60.0);
    let bbox2 = BoundingBox::new(30.0, 30.0, 80.0, 80.0);
    let iou = calculate_iou(&bbox1, &bbox2);
    println!("   IoU between overlapping boxes: {:.4}", iou);
    println!();

    // Example 2: Class list from a JSON configuration
    println!("2. Class List");
    let classes = ClassList::load_from_string(r#"{"classes": ["ball", "robot", "goal"]}"#)?;
    println!("   {} classes: {:?}", classes.num_classes(), classes.names());
    println!();

    // Example 3: Decode padded ground-truth labels as produced by a
    // batched data loader (pad value -1).
    println!("3. Padded Label Decoding");
    let padded_batch = vec![
        vec![
            vec![20.0, 30.0, 120.0, 140.0, 0.0],
            vec![-1.0, -1.0, -1.0, -1.0, -1.0],
        ],
        vec![
            vec![50.0, 50.0, 90.0, 110.0, 1.0],
            vec![150.0, 40.0, 210.0, 100.0, 2.0],
        ],
    ];
    let batch_ground_truths = decode_batch_labels(&padded_batch)?;
    println!(
        "   image 0: {} objects, image 1: {} objects",
        batch_ground_truths[0].len(),
        batch_ground_truths[1].len()
    );
    println!();

    // Example 4: Filter raw detections by confidence, then score the pass.
    println!("4. Scoring a Validation Pass");
    let raw_batch_detections = vec![
        vec![
            Detection::new(0, 0.95, BoundingBox::new(22.0, 28.0, 118.0, 142.0)),
            Detection::new(2, 0.05, BoundingBox::new(0.0, 0.0, 10.0, 10.0)),
        ],
        vec![
            Detection::new(1, 0.88, BoundingBox::new(48.0, 52.0, 92.0, 108.0)),
            Detection::new(2, 0.75, BoundingBox::new(300.0, 300.0, 340.0, 360.0)),
        ],
    ];

    let mut scorer = DetectionScorer::new(classes.num_classes(), 0.5)?;
    for (raw_detections, ground_truths) in
        raw_batch_detections.iter().zip(batch_ground_truths.iter())
    {
        let detections = filter_by_confidence(raw_detections, 0.3)?;
        scorer.update(&detections, ground_truths)?;
    }

    let report = scorer.report(&classes)?;
    report.print_summary();

    Ok(())
}
