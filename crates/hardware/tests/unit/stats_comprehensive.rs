//! Comprehensive tests for simulation statistics.

use tomasim_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::{TestContext, TraceBuilder};

#[test]
fn test_stats_default() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.fetched, 0);
    assert_eq!(stats.cdb_broadcasts, 0);
    assert!(stats.ipc().abs() < f64::EPSILON);
}

#[test]
fn test_stats_ipc_counts_fetched() {
    let stats = SimStats {
        cycles: 16,
        fetched: 4,
        ..SimStats::default()
    };
    assert!((stats.ipc() - 0.25).abs() < 1e-9);
}

#[test]
fn test_stats_print_all_sections() {
    let stats = SimStats {
        cycles: 1000,
        fetched: 500,
        dispatch_stalls: 120,
        cdb_broadcasts: 300,
        ..SimStats::default()
    };
    // Should not panic
    stats.print();
}

#[test]
fn test_stats_print_each_section() {
    let stats = SimStats::default();
    for section in STATS_SECTIONS {
        stats.print_sections(&[(*section).to_string()]);
    }
}

#[test]
fn test_stats_serialize_field_names() {
    let stats = SimStats {
        cycles: 9,
        fetched: 1,
        ..SimStats::default()
    };
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["cycles"], 9);
    assert_eq!(json["fetched"], 1);
    assert_eq!(json["cdb_conflicts"], 0);
    assert_eq!(json["stores_completed"], 0);
}

#[test]
fn test_stats_from_mixed_run() {
    let ctx = TestContext::new();
    let mut trace = TraceBuilder::new()
        .int(&[], &["r1"])
        .fp(&["r1"], &["f2"])
        .load(&["r1"], &["r3"])
        .store(&["r3", "f2"])
        .branch(&["r3"])
        .trap()
        .build();

    let (cycles, engine) = ctx.run_engine(&mut trace);
    let stats = engine.stats();
    assert_eq!(stats.cycles, cycles);
    assert_eq!(stats.fetched, 5);
    assert_eq!(stats.traps_skipped, 1);
    assert_eq!(stats.dispatched_int, 3);
    assert_eq!(stats.dispatched_fp, 1);
    assert_eq!(stats.branches_dropped, 1);
    assert_eq!(stats.cdb_broadcasts, 3);
    assert_eq!(stats.stores_completed, 1);
}
