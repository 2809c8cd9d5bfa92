/// Utilities for working with Polars DataFrames
///
/// This module provides helper functions for validating and converting
/// Polars DataFrames holding detections, ground-truth annotations, and
/// per-class evaluation reports.

use polars::prelude::*;
use std::collections::BTreeMap;

use crate::error::MicroEvalError;
use crate::report::EvalReport;
use crate::types::{BoundingBox, Detection, GroundTruth};

/// Validate that a DataFrame contains all required columns
///
/// # Arguments
///
/// * `df` - The DataFrame to validate
/// * `required_columns` - Slice of required column names
///
/// # Returns
///
/// `Ok(())` if all columns are present, error otherwise
pub fn validate_columns(df: &DataFrame, required_columns: &[&str]) -> Result<(), MicroEvalError> {
    let column_names: Vec<String> = df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for col in required_columns {
        if !column_names.iter().any(|c| c == col) {
            return Err(MicroEvalError::MissingColumn(col.to_string()));
        }
    }

    Ok(())
}

/// Validate the schema of a detections DataFrame
///
/// Expected columns: image_id, class_id, score, bbox
pub fn validate_detections_schema(df: &DataFrame) -> Result<(), MicroEvalError> {
    validate_columns(df, &["image_id", "class_id", "score", "bbox"])?;
    validate_id_columns(df)?;

    let score_dtype = df.column("score")?.dtype();
    if !matches!(score_dtype, DataType::Float64 | DataType::Float32) {
        return Err(MicroEvalError::InvalidDataFrame(
            format!("score must be Float64 or Float32, got {:?}", score_dtype)
        ));
    }

    Ok(())
}

/// Validate the schema of a ground-truth DataFrame
///
/// Expected columns: image_id, class_id, bbox
pub fn validate_ground_truth_schema(df: &DataFrame) -> Result<(), MicroEvalError> {
    validate_columns(df, &["image_id", "class_id", "bbox"])?;
    validate_id_columns(df)
}

fn validate_id_columns(df: &DataFrame) -> Result<(), MicroEvalError> {
    let image_id_dtype = df.column("image_id")?.dtype();
    if !matches!(image_id_dtype, DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32) {
        return Err(MicroEvalError::InvalidDataFrame(
            format!("image_id must be integer type, got {:?}", image_id_dtype)
        ));
    }

    let class_id_dtype = df.column("class_id")?.dtype();
    if !matches!(class_id_dtype, DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32) {
        return Err(MicroEvalError::InvalidDataFrame(
            format!("class_id must be integer type, got {:?}", class_id_dtype)
        ));
    }

    Ok(())
}

/// Extract a bounding box from a Polars Series at a given index
///
/// # Arguments
///
/// * `bbox_series` - Series containing bbox data (expected to be List type)
/// * `idx` - Index of the bbox to extract
///
/// # Returns
///
/// A `BoundingBox` built from 4 values `[xmin, ymin, xmax, ymax]`
pub fn extract_bbox_from_series(bbox_series: &Series, idx: usize) -> Result<BoundingBox, MicroEvalError> {
    // Handle List type
    if let Ok(list_ca) = bbox_series.list() {
        let bbox_series = list_ca.get_as_series(idx)
            .ok_or_else(|| MicroEvalError::InvalidDataFrame(
                format!("Could not extract bbox at index {}", idx)
            ))?;

        let bbox_values = bbox_series.f64()?;
        let bbox: Vec<f64> = bbox_values.into_iter()
            .map(|v| v.unwrap_or(0.0))
            .collect();

        if bbox.len() != 4 {
            return Err(MicroEvalError::InvalidBoundingBox(
                format!("Bbox must have 4 elements, got {}", bbox.len())
            ));
        }

        Ok(BoundingBox::new(bbox[0], bbox[1], bbox[2], bbox[3]))
    } else {
        Err(MicroEvalError::InvalidDataFrame(
            "bbox column must be of List type".to_string()
        ))
    }
}

/// Convert a detections DataFrame into per-image ordered detection lists
///
/// Rows are grouped by `image_id`; within an image, the DataFrame's row
/// order is preserved, which is assumed to be the detector's post-NMS
/// selection order.
pub fn detections_from_dataframe(
    df: &DataFrame,
) -> Result<BTreeMap<i64, Vec<Detection>>, MicroEvalError> {
    validate_detections_schema(df)?;

    let image_ids = df.column("image_id")?.cast(&DataType::Int64)?;
    let image_ids = image_ids.i64()?;
    let class_ids = df.column("class_id")?.cast(&DataType::Int64)?;
    let class_ids = class_ids.i64()?;
    let scores = df.column("score")?.cast(&DataType::Float64)?;
    let scores = scores.f64()?;
    let bboxes = df.column("bbox")?;

    let mut by_image: BTreeMap<i64, Vec<Detection>> = BTreeMap::new();
    for idx in 0..df.height() {
        let image_id = require_value(image_ids.get(idx), "image_id", idx)?;
        let class_id = require_value(class_ids.get(idx), "class_id", idx)?;
        let score = require_value(scores.get(idx), "score", idx)?;
        let class_id = non_negative_class(class_id, idx)?;
        let bbox = extract_bbox_from_series(bboxes, idx)?;

        by_image
            .entry(image_id)
            .or_default()
            .push(Detection::new(class_id, score, bbox));
    }

    Ok(by_image)
}

/// Convert a ground-truth DataFrame into per-image ordered annotation lists
pub fn ground_truths_from_dataframe(
    df: &DataFrame,
) -> Result<BTreeMap<i64, Vec<GroundTruth>>, MicroEvalError> {
    validate_ground_truth_schema(df)?;

    let image_ids = df.column("image_id")?.cast(&DataType::Int64)?;
    let image_ids = image_ids.i64()?;
    let class_ids = df.column("class_id")?.cast(&DataType::Int64)?;
    let class_ids = class_ids.i64()?;
    let bboxes = df.column("bbox")?;

    let mut by_image: BTreeMap<i64, Vec<GroundTruth>> = BTreeMap::new();
    for idx in 0..df.height() {
        let image_id = require_value(image_ids.get(idx), "image_id", idx)?;
        let class_id = require_value(class_ids.get(idx), "class_id", idx)?;
        let class_id = non_negative_class(class_id, idx)?;
        let bbox = extract_bbox_from_series(bboxes, idx)?;

        by_image
            .entry(image_id)
            .or_default()
            .push(GroundTruth::new(class_id, bbox));
    }

    Ok(by_image)
}

fn require_value<T>(value: Option<T>, column: &str, idx: usize) -> Result<T, MicroEvalError> {
    value.ok_or_else(|| MicroEvalError::InvalidDataFrame(
        format!("null {} at row {}", column, idx)
    ))
}

fn non_negative_class(class_id: i64, idx: usize) -> Result<usize, MicroEvalError> {
    if class_id < 0 {
        return Err(MicroEvalError::InvalidDataFrame(
            format!("negative class_id {} at row {}", class_id, idx)
        ));
    }
    Ok(class_id as usize)
}

/// Export an evaluation report as a DataFrame
///
/// One row per class; undefined recall/precision values become nulls.
pub fn report_to_dataframe(report: &EvalReport) -> Result<DataFrame, MicroEvalError> {
    let df = df! {
        "class" => report.classes.clone(),
        "true_positives" => report.true_positives.clone(),
        "false_positives" => report.false_positives.clone(),
        "ground_truths" => report.ground_truths.clone(),
        "recall" => report.recall.clone(),
        "precision" => report.precision.clone(),
    }?;

    Ok(df)
}
