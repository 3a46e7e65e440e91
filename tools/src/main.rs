//! report-runner: one-shot report build for the stakeholder request desk.
//!
//! No flags and no environment knobs: a run is always the fixed
//! 240-record, seed-42 window, so the output tree is reproducible
//! byte-for-byte. Outputs land under the current directory in
//! data/raw/, outputs/, and images/. Set RUST_LOG=debug for
//! per-stage detail.

use anyhow::Result;
use requestdesk_core::config::GeneratorConfig;
use requestdesk_core::pipeline::{self, RunReport};
use requestdesk_core::report::OutputLayout;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig::default();
    let layout = OutputLayout::under(Path::new("."));

    println!("Stakeholder Request Desk — report-runner");
    println!("  seed:    {}", config.seed);
    println!("  records: {}", config.n);
    println!("  window:  {} .. {}", config.window.start, config.window.end);
    println!();

    let report = pipeline::run(&config, &layout)?;
    print_summary(&report);

    Ok(())
}

fn print_summary(report: &RunReport) {
    let overall = &report.overall;

    println!("=== RUN SUMMARY ===");
    println!("  total requests: {}", overall.total_requests);
    println!("  closed:         {}", overall.closed_requests);
    println!("  open:           {}", overall.open_requests);
    println!("  breached:       {}", overall.breached_requests);
    println!("  breach rate:    {:.2}% of closed", overall.breach_rate_closed);
    println!("  avg turnaround: {:.2} days", overall.avg_turnaround_days_closed);
    println!();
    println!("  team rows:      {}", report.team_rows);
    println!("  backlog rows:   {}", report.backlog_rows);
    println!("  monthly rows:   {}", report.monthly_rows);

    println!();
    println!("=== OUTPUTS ===");
    for path in &report.outputs {
        println!("  {}", path.display());
    }
    for path in &report.charts {
        println!("  {}", path.display());
    }
}
