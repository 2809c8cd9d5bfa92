//! End-to-end tests of a full validation pass: decode padded labels, score
//! batches, build a named report.

use microavg_eval::classes::ClassList;
use microavg_eval::labels::decode_batch_labels;
use microavg_eval::report::EvalReport;
use microavg_eval::scorer::{score, DetectionScorer};
use microavg_eval::types::{BoundingBox, Detection, GroundTruth};

fn det(class_id: usize, score: f64, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Detection {
    Detection::new(class_id, score, BoundingBox::new(xmin, ymin, xmax, ymax))
}

fn gt(class_id: usize, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> GroundTruth {
    GroundTruth::new(class_id, BoundingBox::new(xmin, ymin, xmax, ymax))
}

#[test]
fn test_perfect_pass_gives_perfect_metrics() {
    // Every detection exactly matches a ground truth, one detection per
    // first-listed ground truth.
    let batch_detections = vec![
        vec![det(0, 0.95, 0.0, 0.0, 10.0, 10.0)],
        vec![det(1, 0.9, 50.0, 50.0, 80.0, 80.0)],
        vec![det(0, 0.85, 5.0, 5.0, 25.0, 25.0)],
    ];
    let batch_ground_truths = vec![
        vec![gt(0, 0.0, 0.0, 10.0, 10.0)],
        vec![gt(1, 50.0, 50.0, 80.0, 80.0)],
        vec![gt(0, 5.0, 5.0, 25.0, 25.0)],
    ];

    let (recall, precision) = score(&batch_detections, &batch_ground_truths, 2, 0.5).unwrap();
    assert_eq!(recall, vec![Some(1.0), Some(1.0)]);
    assert_eq!(precision, vec![Some(1.0), Some(1.0)]);
}

#[test]
fn test_mixed_pass() {
    let mut scorer = DetectionScorer::new(3, 0.5).unwrap();

    // Image 1: correct class-0 detection plus a class-2 detection with no
    // class-2 ground truth in the image.
    scorer
        .update(
            &[
                det(0, 0.9, 0.0, 0.0, 10.0, 10.0),
                det(2, 0.8, 0.0, 0.0, 10.0, 10.0),
            ],
            &[gt(0, 0.0, 0.0, 10.0, 10.0)],
        )
        .unwrap();

    // Image 2: a class-1 detection that misses its ground truth.
    scorer
        .update(
            &[det(1, 0.7, 100.0, 100.0, 110.0, 110.0)],
            &[gt(1, 0.0, 0.0, 10.0, 10.0)],
        )
        .unwrap();

    // Image 3: ground truths only, nothing detected.
    scorer
        .update(&[], &[gt(1, 0.0, 0.0, 10.0, 10.0), gt(2, 20.0, 20.0, 30.0, 30.0)])
        .unwrap();

    let tally = scorer.tally();
    assert_eq!(tally.true_positives(), &[1, 0, 0]);
    assert_eq!(tally.false_positives(), &[0, 1, 1]);
    assert_eq!(tally.ground_truths(), &[1, 2, 1]);

    assert_eq!(tally.recall(), vec![Some(1.0), Some(0.0), Some(0.0)]);
    assert_eq!(tally.precision(), vec![Some(1.0), Some(0.0), Some(0.0)]);
}

#[test]
fn test_rerunning_pass_is_idempotent_for_ground_truth_counts() {
    let batch_ground_truths = vec![
        vec![gt(0, 0.0, 0.0, 10.0, 10.0), gt(1, 20.0, 20.0, 30.0, 30.0)],
        vec![gt(1, 40.0, 40.0, 50.0, 50.0)],
    ];

    // A "no-op detector" pass and a pass with detections must agree on
    // ground-truth counts.
    let empty: Vec<Vec<Detection>> = vec![vec![], vec![]];
    let with_dets = vec![
        vec![det(0, 0.9, 0.0, 0.0, 10.0, 10.0)],
        vec![det(1, 0.9, 40.0, 40.0, 50.0, 50.0)],
    ];

    for batch_detections in [&empty, &with_dets] {
        let mut scorer = DetectionScorer::new(2, 0.5).unwrap();
        for (dets, gts) in batch_detections.iter().zip(batch_ground_truths.iter()) {
            scorer.update(dets, gts).unwrap();
        }
        assert_eq!(scorer.tally().ground_truths(), &[1, 2]);
    }
}

#[test]
fn test_padded_labels_through_scorer() {
    // Batch of two images as the loader would pad them: second image has
    // one real object and one padding row.
    let padded = vec![
        vec![
            vec![0.0, 0.0, 10.0, 10.0, 0.0],
            vec![20.0, 20.0, 30.0, 30.0, 1.0],
        ],
        vec![
            vec![5.0, 5.0, 15.0, 15.0, 1.0],
            vec![-1.0, -1.0, -1.0, -1.0, -1.0],
        ],
    ];
    let batch_ground_truths = decode_batch_labels(&padded).unwrap();
    assert_eq!(batch_ground_truths[0].len(), 2);
    assert_eq!(batch_ground_truths[1].len(), 1);

    let batch_detections = vec![
        vec![det(0, 0.9, 0.0, 0.0, 10.0, 10.0)],
        vec![det(1, 0.8, 5.0, 5.0, 15.0, 15.0)],
    ];

    let (recall, _precision) = score(&batch_detections, &batch_ground_truths, 2, 0.5).unwrap();
    assert_eq!(recall[0], Some(1.0));
    assert_eq!(recall[1], Some(0.5));
}

#[test]
fn test_report_from_full_pass() {
    let classes = ClassList::load_from_string(r#"{"classes": ["ball", "robot"]}"#).unwrap();
    let mut scorer = DetectionScorer::new(classes.num_classes(), 0.5).unwrap();

    scorer
        .update(
            &[det(0, 0.9, 0.0, 0.0, 10.0, 10.0)],
            &[gt(0, 0.0, 0.0, 10.0, 10.0)],
        )
        .unwrap();
    scorer.update(&[], &[gt(1, 0.0, 0.0, 10.0, 10.0)]).unwrap();

    let report = scorer.report(&classes).unwrap();
    assert_eq!(report.classes, vec!["ball", "robot"]);
    assert_eq!(report.recall, vec![Some(1.0), Some(0.0)]);
    assert_eq!(report.precision, vec![Some(1.0), None]);

    // Reports serialize cleanly for downstream logging.
    let json = serde_json::to_string(&report).unwrap();
    let back: EvalReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_parallel_batch_tallies_merge_to_sequential_result() {
    let images: Vec<(Vec<Detection>, Vec<GroundTruth>)> = vec![
        (
            vec![det(0, 0.9, 0.0, 0.0, 10.0, 10.0)],
            vec![gt(0, 0.0, 0.0, 10.0, 10.0)],
        ),
        (
            vec![det(1, 0.8, 50.0, 50.0, 60.0, 60.0)],
            vec![gt(1, 0.0, 0.0, 10.0, 10.0)],
        ),
        (vec![], vec![gt(0, 0.0, 0.0, 10.0, 10.0)]),
    ];

    let mut sequential = DetectionScorer::new(2, 0.5).unwrap();
    for (dets, gts) in &images {
        sequential.update(dets, gts).unwrap();
    }

    // Score the first two images and the third independently, then merge.
    let mut first = DetectionScorer::new(2, 0.5).unwrap();
    first.update(&images[0].0, &images[0].1).unwrap();
    first.update(&images[1].0, &images[1].1).unwrap();
    let mut second = DetectionScorer::new(2, 0.5).unwrap();
    second.update(&images[2].0, &images[2].1).unwrap();

    let mut merged = first.into_tally();
    merged.merge(&second.into_tally()).unwrap();

    assert_eq!(&merged, sequential.tally());
}
