//! # Configuration Tests
//!
//! Defaults, partial JSON documents, predictor selection, and validation.

use std::io::Write;

use rstest::rstest;
use tomasim_core::common::SimError;
use tomasim_core::config::{BranchPredictorKind, Config};

#[test]
fn defaults_describe_reference_machine() {
    let config = Config::default();
    let p = &config.pipeline;
    assert_eq!(p.fetch_queue_capacity, 16);
    assert_eq!((p.int_rs_size, p.fp_rs_size), (4, 2));
    assert_eq!((p.int_fu_count, p.fp_fu_count), (2, 1));
    assert_eq!((p.int_latency, p.fp_latency), (4, 9));
    assert_eq!(config.general.max_cycles, None);
    assert_eq!(config.predictor.kind, BranchPredictorKind::TwoBit);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_document_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.pipeline.int_rs_size, 4);
    assert_eq!(config.predictor.perceptron.threshold, 63);
    assert_eq!(config.predictor.two_level.history_bits, 6);
}

#[test]
fn partial_document_overrides_named_fields_only() {
    let json = r#"{
        "general": { "max_cycles": 1000 },
        "pipeline": { "int_fu_count": 1, "fp_latency": 12 },
        "predictor": { "kind": "Perceptron", "perceptron": { "history_length": 16 } }
    }"#;
    let config = Config::from_json(json).unwrap();

    assert_eq!(config.general.max_cycles, Some(1000));
    assert_eq!(config.pipeline.int_fu_count, 1);
    assert_eq!(config.pipeline.fp_latency, 12);
    assert_eq!(config.pipeline.int_rs_size, 4);
    assert_eq!(config.predictor.kind, BranchPredictorKind::Perceptron);
    assert_eq!(config.predictor.perceptron.history_length, 16);
    assert_eq!(config.predictor.perceptron.table_size, 512);
}

#[rstest]
#[case("TwoBit", BranchPredictorKind::TwoBit)]
#[case("two-bit", BranchPredictorKind::TwoBit)]
#[case("TwoLevel", BranchPredictorKind::TwoLevel)]
#[case("two-level", BranchPredictorKind::TwoLevel)]
#[case("perceptron", BranchPredictorKind::Perceptron)]
fn predictor_kind_names(#[case] name: &str, #[case] expected: BranchPredictorKind) {
    let json = format!(r#"{{ "predictor": {{ "kind": "{name}" }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().predictor.kind, expected);
}

#[test]
fn unknown_predictor_kind_is_json_error() {
    let err = Config::from_json(r#"{ "predictor": { "kind": "tage" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Json(_)));
}

#[rstest]
#[case::zero_int_rs(r#"{ "pipeline": { "int_rs_size": 0 } }"#, "int_rs_size")]
#[case::zero_fp_units(r#"{ "pipeline": { "fp_fu_count": 0 } }"#, "fp_fu_count")]
#[case::zero_queue(r#"{ "pipeline": { "fetch_queue_capacity": 0 } }"#, "fetch_queue_capacity")]
#[case::zero_latency(r#"{ "pipeline": { "int_latency": 0 } }"#, "int_latency")]
#[case::two_bit_not_pow2(r#"{ "predictor": { "two_bit": { "entries": 1000 } } }"#, "two_bit.entries")]
#[case::history_not_pow2(
    r#"{ "predictor": { "two_level": { "history_entries": 3 } } }"#,
    "history_entries"
)]
#[case::history_bits_zero(r#"{ "predictor": { "two_level": { "history_bits": 0 } } }"#, "history_bits")]
#[case::pattern_table_too_wide(
    r#"{ "predictor": { "two_level": { "history_bits": 16, "pc_bits": 16 } } }"#,
    "history_bits + pc_bits"
)]
#[case::perceptron_table(r#"{ "predictor": { "perceptron": { "table_size": 100 } } }"#, "table_size")]
#[case::perceptron_short(r#"{ "predictor": { "perceptron": { "history_length": 1 } } }"#, "history_length")]
#[case::perceptron_long(r#"{ "predictor": { "perceptron": { "history_length": 65 } } }"#, "history_length")]
#[case::perceptron_threshold(r#"{ "predictor": { "perceptron": { "threshold": 0 } } }"#, "threshold")]
fn invalid_configs_rejected(#[case] json: &str, #[case] field: &str) {
    match Config::from_json(json) {
        Err(SimError::InvalidConfig(msg)) => assert!(msg.contains(field), "{msg}"),
        other => panic!("expected InvalidConfig for {field}, got {other:?}"),
    }
}

#[test]
fn widest_pattern_table_accepted() {
    let json = r#"{ "predictor": { "two_level": { "history_bits": 16, "pc_bits": 4 } } }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.predictor.two_level.history_bits + config.predictor.two_level.pc_bits, 20);
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "pipeline": {{ "int_rs_size": 8 }} }}"#).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.pipeline.int_rs_size, 8);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SimError::Io { .. }));
}
