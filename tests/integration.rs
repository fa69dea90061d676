//! Integration tests for the anillos regression pipeline.
//!
//! These tests verify end-to-end workflows: raw records through encoding,
//! dataset assembly, least-squares fitting, and per-sample prediction.

use anillos::encoding::{encode_line, FEATURE_LEN};
use anillos::prelude::*;

// First rows of the UCI abalone dataset.
const RECORDS: [&str; 10] = [
    "M,0.455,0.365,0.095,0.514,0.2245,0.101,0.15,15",
    "M,0.35,0.265,0.09,0.2255,0.0995,0.0485,0.07,7",
    "F,0.53,0.42,0.135,0.677,0.2565,0.1415,0.21,9",
    "M,0.44,0.365,0.125,0.516,0.2155,0.114,0.155,10",
    "I,0.33,0.255,0.08,0.205,0.0895,0.0395,0.055,7",
    "I,0.425,0.3,0.095,0.3515,0.141,0.0775,0.12,8",
    "F,0.53,0.415,0.15,0.7775,0.237,0.1415,0.33,20",
    "F,0.545,0.425,0.125,0.768,0.294,0.1495,0.26,16",
    "M,0.475,0.37,0.125,0.5095,0.2165,0.1125,0.165,9",
    "F,0.55,0.44,0.15,0.8945,0.3145,0.151,0.32,19",
];

#[test]
fn test_full_pipeline() {
    let dataset = Dataset::from_lines(RECORDS).expect("valid records");
    assert_eq!(dataset.n_samples(), 10);
    assert_eq!(dataset.features().shape(), (10, FEATURE_LEN));

    let mut model = LinearRegression::new();
    model
        .fit(dataset.features(), dataset.targets())
        .expect("fit succeeds on the collinear one-hot design");

    // 10 feature weights plus the bias weight, bias last
    let weights = model.coefficient_vector();
    assert_eq!(weights.len(), 11);
    for w in &weights {
        assert!(w.is_finite());
    }

    // Per-sample reporting: batch predict agrees with predict_one
    let predictions = model.predict(dataset.features()).expect("fitted model");
    assert_eq!(predictions.len(), dataset.n_samples());
    for i in 0..dataset.n_samples() {
        let single = model
            .predict_one(&dataset.sample_features(i))
            .expect("matching feature length");
        assert!((predictions[i] - single).abs() < 1e-9);
    }
}

#[test]
fn test_fit_quality_on_real_rows() {
    let dataset = Dataset::from_lines(RECORDS).expect("valid records");

    let mut model = LinearRegression::new();
    model
        .fit(dataset.features(), dataset.targets())
        .expect("fit succeeds");

    let r2 = model.score(dataset.features(), dataset.targets());
    assert!(r2 > 0.0, "linear fit should beat the mean baseline: {r2}");
    assert!(r2 <= 1.0 + 1e-12);

    let predictions = model.predict(dataset.features()).expect("fitted model");
    let err = rmse(&predictions, dataset.targets());
    assert!(err.is_finite());
    assert!(err >= 0.0);
}

#[test]
fn test_encoded_features_match_dataset_rows() {
    let dataset = Dataset::from_lines(RECORDS).expect("valid records");

    for (i, record) in RECORDS.iter().enumerate() {
        let encoded = encode_line(record, i + 1).expect("valid record");
        let row = dataset.sample_features(i);
        assert_eq!(&encoded.as_slice()[..FEATURE_LEN], row.as_slice());
        assert_eq!(encoded[FEATURE_LEN], dataset.targets()[i]);
    }
}

#[test]
fn test_file_to_predictions_workflow() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for record in RECORDS {
        writeln!(file, "{record}").expect("write record");
    }

    let dataset = Dataset::load(file.path()).expect("file loads");
    let mut model = LinearRegression::new();
    model
        .fit(dataset.features(), dataset.targets())
        .expect("fit succeeds");

    let predictions = model.predict(dataset.features()).expect("fitted model");
    assert_eq!(predictions.len(), 10);
}

#[test]
fn test_malformed_file_is_fatal() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "{}", RECORDS[0]).expect("write record");
    writeln!(file, "M,0.35,oops,0.09,0.2255,0.0995,0.0485,0.07,7").expect("write record");

    let err = Dataset::load(file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 2"));
    assert!(msg.contains("oops"));
}

#[test]
fn test_empty_file_fails_at_fit() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "").expect("truncate");

    let dataset = Dataset::load(file.path()).expect("empty dataset loads");
    assert_eq!(dataset.n_samples(), 0);

    let mut model = LinearRegression::new();
    let err = model.fit(dataset.features(), dataset.targets()).unwrap_err();
    assert!(matches!(err, AnillosError::EmptyDataset));
}

#[test]
fn test_metrics_consistency() {
    let actual = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let predicted = Vector::from_slice(&[1.1, 2.2, 2.9, 4.1, 4.8]);

    let r2 = r_squared(&predicted, &actual);
    let mse_val = mse(&predicted, &actual);
    let rmse_val = rmse(&predicted, &actual);
    let mae_val = mae(&predicted, &actual);

    assert!(r2 > 0.95);
    assert!((rmse_val - mse_val.sqrt()).abs() < 1e-12);
    assert!(mae_val <= rmse_val + 1e-12);
}
