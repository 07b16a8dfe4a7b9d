//! Simulation statistics collection and reporting.
//!
//! This module tracks what the Tomasulo engine did during a run. It provides:
//! 1. **Cycle and IPC:** Total cycles, fetched instructions, and derived IPC.
//! 2. **Front end:** Traps skipped at fetch and branches dropped at dispatch.
//! 3. **Dispatch:** Per-class dispatch counts and structural stalls.
//! 4. **Completion:** CDB broadcasts, CDB conflicts, and stores completed without the bus.

use serde::Serialize;

/// Counters collected by [`TomasuloEngine`](crate::core::pipeline::engine::TomasuloEngine).
///
/// Counters never influence timing; they are read after the run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Cycle count returned by the run.
    pub cycles: u64,
    /// Non-trap instructions placed in the fetch queue.
    pub fetched: u64,
    /// Trap instructions skipped by fetch.
    pub traps_skipped: u64,
    /// Branches popped at dispatch without occupying a station.
    pub branches_dropped: u64,
    /// Instructions placed in integer reservation stations.
    pub dispatched_int: u64,
    /// Instructions placed in floating-point reservation stations.
    pub dispatched_fp: u64,
    /// Cycles the queue head waited for a free reservation station.
    pub dispatch_stalls: u64,
    /// Results broadcast on the CDB.
    pub cdb_broadcasts: u64,
    /// Finished instructions that lost CDB arbitration (counted once per losing cycle).
    pub cdb_conflicts: u64,
    /// Stores that completed without using the CDB.
    pub stores_completed: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"frontend"`, `"backend"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "frontend", "backend"];

impl SimStats {
    /// Instructions per cycle, counting every fetched instruction.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.fetched as f64 / self.cycles as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1) as f64;

        if want("summary") {
            println!("\n==========================================================");
            println!("TOMASULO PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.fetched);
            println!("sim_ipc                  {:.4}", self.ipc());
            println!("----------------------------------------------------------");
        }
        if want("frontend") {
            println!("FRONT END");
            println!("  fetch.traps_skipped    {}", self.traps_skipped);
            println!("  dispatch.branches      {}", self.branches_dropped);
            println!("  dispatch.int           {}", self.dispatched_int);
            println!("  dispatch.fp            {}", self.dispatched_fp);
            println!(
                "  dispatch.stalls        {} ({:.2}%)",
                self.dispatch_stalls,
                (self.dispatch_stalls as f64 / cyc) * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("backend") {
            println!("BACK END");
            println!("  cdb.broadcasts         {}", self.cdb_broadcasts);
            println!(
                "  cdb.utilization        {:.2}%",
                (self.cdb_broadcasts as f64 / cyc) * 100.0
            );
            println!("  cdb.conflicts          {}", self.cdb_conflicts);
            println!("  stores.completed       {}", self.stores_completed);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
