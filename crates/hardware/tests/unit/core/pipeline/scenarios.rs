//! # Timing Scenarios
//!
//! End-to-end runs over small traces whose timing was worked out by hand.
//! Every cycle number below follows from: dispatch to a station one cycle
//! after fetch, issue stamped on dispatch, execution starting the cycle
//! after issue at the earliest, results visible one cycle after the CDB,
//! and retirement one cycle after the broadcast.

use pretty_assertions::assert_eq;
use tomasim_core::isa::Timestamps;

use crate::common::harness::nth;
use crate::common::{TestContext, TraceBuilder};

/// Tests four independent integer ops serialized on a single integer unit.
///
/// Executions start at 3, 7, 11, 15 and broadcast at 7, 11, 15, 19; the last
/// retires in cycle 20 and the returned counter is 21.
#[test]
fn four_independent_ops_single_unit() {
    let ctx = TestContext::new().with_pipeline(|p| {
        p.int_rs_size = 4;
        p.int_fu_count = 1;
    });
    let mut trace = TraceBuilder::new()
        .int(&[], &["r1"])
        .int(&[], &["r2"])
        .int(&[], &["r3"])
        .int(&[], &["r4"])
        .build();

    assert_eq!(ctx.run(&mut trace), 21);

    let exec: Vec<_> = trace.iter().map(|i| i.timing.execute).collect();
    let cdb: Vec<_> = trace.iter().map(|i| i.timing.cdb).collect();
    assert_eq!(exec, vec![Some(3), Some(7), Some(11), Some(15)]);
    assert_eq!(cdb, vec![Some(7), Some(11), Some(15), Some(19)]);
}

/// Tests that every timestamp of the first instruction is exact.
#[test]
fn first_instruction_timestamps() {
    let ctx = TestContext::new();
    let mut trace = TraceBuilder::new().int(&["r2"], &["r1"]).build();

    assert_eq!(ctx.run(&mut trace), 9);
    assert_eq!(
        nth(&trace, 0).timing,
        Timestamps {
            dispatch: Some(1),
            issue: Some(2),
            execute: Some(3),
            cdb: Some(7),
        }
    );
}

/// Tests a RAW pair: the consumer starts the cycle after its producer's broadcast.
#[test]
fn raw_pair_waits_for_broadcast() {
    let ctx = TestContext::new();
    let mut trace = TraceBuilder::new()
        .int(&[], &["r1"])
        .int(&["r1"], &["r2"])
        .build();

    assert_eq!(ctx.run(&mut trace), 14);

    let producer = nth(&trace, 0);
    let consumer = nth(&trace, 1);
    assert_eq!(producer.timing.execute, Some(3));
    assert_eq!(producer.timing.cdb, Some(7));
    assert_eq!(consumer.timing.execute, Some(8));
    assert_eq!(consumer.timing.cdb, Some(12));
}

/// Tests that a RAW hazard through a load behaves like one through a compute op.
#[test]
fn raw_through_load() {
    let ctx = TestContext::new();
    let mut trace = TraceBuilder::new()
        .load(&["r2"], &["r1"])
        .int(&["r1"], &["r3"])
        .build();

    assert_eq!(ctx.run(&mut trace), 14);
    assert_eq!(nth(&trace, 1).timing.execute, Some(8));
}

/// Tests that an integer op overtakes an older, independent FP op at the CDB.
#[test]
fn int_reaches_cdb_before_older_fp() {
    let ctx = TestContext::new();
    let mut trace = TraceBuilder::new()
        .fp(&[], &["f1"])
        .int(&[], &["r1"])
        .build();

    assert_eq!(ctx.run(&mut trace), 14);

    let fp = nth(&trace, 0);
    let int = nth(&trace, 1);
    assert_eq!((fp.timing.execute, fp.timing.cdb), (Some(3), Some(12)));
    assert_eq!((int.timing.execute, int.timing.cdb), (Some(4), Some(8)));
}

/// Tests FP and integer ops released by the same broadcast.
///
/// Both wait on I1 (CDB 7) and start in cycle 8; the integer op broadcasts
/// after 4 cycles, the older FP op only after 9.
#[test]
fn int_overtakes_fp_started_same_cycle() {
    let ctx = TestContext::new();
    let mut trace = TraceBuilder::new()
        .int(&[], &["r1"])
        .fp(&["r1"], &["f2"])
        .int(&["r1"], &["r3"])
        .build();

    assert_eq!(ctx.run(&mut trace), 19);

    let fp = nth(&trace, 1);
    let int = nth(&trace, 2);
    assert_eq!(fp.timing.execute, Some(8));
    assert_eq!(int.timing.execute, Some(8));
    assert_eq!(int.timing.cdb, Some(12));
    assert_eq!(fp.timing.cdb, Some(17));
}

/// Tests unit and CDB arbitration by program order.
///
/// I3 and I4 both wait on I1 and start together on the two integer units in
/// cycle 8, finishing in 12. I3 wins the bus in 12; in 13 the FP op I2
/// (finished that cycle) beats I4 by program order; I4 broadcasts in 14.
#[test]
fn cdb_contention_resolved_by_program_order() {
    let ctx = TestContext::new();
    let mut trace = TraceBuilder::new()
        .int(&[], &["r1"])
        .fp(&[], &["f1"])
        .int(&["r1"], &["r3"])
        .int(&["r1"], &["r4"])
        .build();

    let (cycles, engine) = ctx.run_engine(&mut trace);
    assert_eq!(cycles, 16);

    let timing: Vec<_> = trace
        .iter()
        .map(|i| (i.timing.execute, i.timing.cdb))
        .collect();
    assert_eq!(
        timing,
        vec![
            (Some(3), Some(7)),
            (Some(4), Some(13)),
            (Some(8), Some(12)),
            (Some(8), Some(14)),
        ]
    );

    let stats = engine.stats();
    assert_eq!(stats.cdb_broadcasts, 4);
    assert_eq!(stats.cdb_conflicts, 2);
    assert_eq!(stats.dispatched_int, 3);
    assert_eq!(stats.dispatched_fp, 1);
    assert_eq!(stats.cycles, 16);
}

/// Tests that a full reservation bank stalls dispatch in order.
///
/// The second op sits at the queue head from cycle 2 to 6 and is re-stamped
/// each cycle, so its dispatch stamp is the last cycle it waited.
#[test]
fn dispatch_stall_restamps_head() {
    let ctx = TestContext::new().with_pipeline(|p| {
        p.int_rs_size = 1;
        p.int_fu_count = 1;
    });
    let mut trace = TraceBuilder::new()
        .int(&[], &["r1"])
        .int(&[], &["r2"])
        .build();

    let (cycles, engine) = ctx.run_engine(&mut trace);
    assert_eq!(cycles, 14);
    assert_eq!(engine.stats().dispatch_stalls, 4);
    assert_eq!(
        nth(&trace, 1).timing,
        Timestamps {
            dispatch: Some(6),
            issue: Some(7),
            execute: Some(8),
            cdb: Some(12),
        }
    );
}

/// Tests that a consumer depends on the youngest of two writers (WAW).
#[test]
fn waw_consumer_tracks_latest_writer() {
    let ctx = TestContext::new();
    let mut trace = TraceBuilder::new()
        .int(&[], &["r1"])
        .int(&[], &["r1"])
        .int(&["r1"], &["r5"])
        .build();

    assert_eq!(ctx.run(&mut trace), 15);

    let consumer = nth(&trace, 2);
    assert_eq!(consumer.deps[0], Some(tomasim_core::isa::InstId(1)));
    assert_eq!(consumer.timing.execute, Some(9));
    assert_eq!(nth(&trace, 1).timing.cdb, Some(8));
}
