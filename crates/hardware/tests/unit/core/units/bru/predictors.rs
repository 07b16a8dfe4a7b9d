//! # Branch Predictor Tests
//!
//! Behavioral checks run against every predictor through the configurable
//! wrapper, plus pattern-specific accuracy checks for each algorithm.

use rstest::rstest;
use tomasim_core::config::{BranchPredictorKind, PredictorConfig};
use tomasim_core::core::units::bru::{BranchPredictor, BranchPredictorWrapper};
use tomasim_core::sim::branch_sim::{BranchRecord, run_predictor};

fn predictor(kind: BranchPredictorKind) -> BranchPredictorWrapper {
    BranchPredictorWrapper::new(&PredictorConfig {
        kind,
        ..PredictorConfig::default()
    })
}

fn train(bp: &mut impl BranchPredictor, pc: u64, taken: bool) {
    let predicted = bp.predict(pc);
    bp.update(pc, taken, predicted, pc + 0x40);
}

/// A single branch at one PC following `pattern` repeatedly.
fn repeating(pc: u64, pattern: &[bool], len: usize) -> Vec<BranchRecord> {
    pattern
        .iter()
        .cycle()
        .take(len)
        .map(|&taken| BranchRecord { pc, taken, target: 0 })
        .collect()
}

#[rstest]
fn learns_always_taken(
    #[values(
        BranchPredictorKind::TwoBit,
        BranchPredictorKind::TwoLevel,
        BranchPredictorKind::Perceptron
    )]
    kind: BranchPredictorKind,
) {
    let mut bp = predictor(kind);
    for _ in 0..20 {
        train(&mut bp, 0x400, true);
    }
    assert!(bp.predict(0x400), "{kind:?} did not learn a taken branch");
}

#[rstest]
fn learns_never_taken(
    #[values(
        BranchPredictorKind::TwoBit,
        BranchPredictorKind::TwoLevel,
        BranchPredictorKind::Perceptron
    )]
    kind: BranchPredictorKind,
) {
    let mut bp = predictor(kind);
    for _ in 0..20 {
        train(&mut bp, 0x400, false);
    }
    assert!(!bp.predict(0x400), "{kind:?} did not learn a not-taken branch");
}

#[test]
fn fresh_predictors_predict_not_taken() {
    assert!(!predictor(BranchPredictorKind::TwoBit).predict(0x1234));
    assert!(!predictor(BranchPredictorKind::TwoLevel).predict(0x1234));
}

#[test]
fn two_bit_tracks_branches_independently() {
    let mut bp = predictor(BranchPredictorKind::TwoBit);
    for _ in 0..4 {
        train(&mut bp, 0x1000, true);
        train(&mut bp, 0x1004, false);
    }
    assert!(bp.predict(0x1000));
    assert!(!bp.predict(0x1004));
}

#[test]
fn two_bit_fails_on_alternation() {
    let mut bp = predictor(BranchPredictorKind::TwoBit);
    let stats = run_predictor(&mut bp, &repeating(0x400, &[true, false], 1000));
    assert!(stats.accuracy() < 0.6, "accuracy {}", stats.accuracy());
}

#[test]
fn two_level_learns_alternation() {
    let mut bp = predictor(BranchPredictorKind::TwoLevel);
    let stats = run_predictor(&mut bp, &repeating(0x400, &[true, false], 1000));
    assert!(stats.accuracy() > 0.95, "accuracy {}", stats.accuracy());
}

#[rstest]
#[case::alternating(&[true, false])]
#[case::loop_of_eight(&[true, true, true, true, true, true, true, false])]
fn perceptron_learns_periodic_patterns(#[case] pattern: &[bool]) {
    let mut bp = predictor(BranchPredictorKind::Perceptron);
    let _ = run_predictor(&mut bp, &repeating(0x400, pattern, 400));

    let stats = run_predictor(&mut bp, &repeating(0x400, pattern, 400));
    assert!(stats.accuracy() > 0.95, "accuracy {}", stats.accuracy());
}

#[test]
fn two_level_beats_two_bit_on_loops() {
    let pattern = [true, true, true, false];
    let branches = repeating(0x800, &pattern, 2000);

    let two_bit = run_predictor(&mut predictor(BranchPredictorKind::TwoBit), &branches);
    let two_level = run_predictor(&mut predictor(BranchPredictorKind::TwoLevel), &branches);
    assert!(two_level.mispredictions < two_bit.mispredictions);
}
