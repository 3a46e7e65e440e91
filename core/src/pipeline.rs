//! One-shot pipeline orchestration.
//!
//! Stage order is fixed: generate the synthetic log, enrich it, reduce
//! the four summary views, render the charts, then write the run
//! manifest. Determinism is governed solely by the seed in
//! `GeneratorConfig`; everything downstream of the generator is a pure
//! function of its output.

use crate::charts;
use crate::config::GeneratorConfig;
use crate::enricher::enrich;
use crate::error::{DeskError, DeskResult};
use crate::generator::generate_requests;
use crate::metrics::{
    avg_turnaround_by_priority, backlog_age_buckets, backlog_pivot, monthly_breach_rate,
    overall_summary, team_sla_metrics, OverallSummary,
};
use crate::report::{write_csv, write_svg, OutputLayout};
use crate::rng::DeskRng;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// What a completed run produced. Serialized as-is to
/// outputs/run_manifest.json so a consumer can check a report's
/// provenance without re-running anything.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub request_count: usize,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub overall: OverallSummary,
    pub team_rows: usize,
    pub backlog_rows: usize,
    pub monthly_rows: usize,
    pub outputs: Vec<PathBuf>,
    pub charts: Vec<PathBuf>,
}

/// Run the full pipeline once into `layout`. All-or-nothing: the
/// first I/O failure aborts the run.
pub fn run(config: &GeneratorConfig, layout: &OutputLayout) -> DeskResult<RunReport> {
    if config.window.start > config.window.end {
        return Err(DeskError::InvalidConfig {
            reason: format!(
                "window start {} is after window end {}",
                config.window.start, config.window.end
            ),
        });
    }
    layout.create_all()?;

    // Stage 1: generate the raw log.
    let mut rng = DeskRng::new(config.seed);
    let requests = generate_requests(config, &mut rng);
    log::info!("generated {} requests (seed {})", requests.len(), config.seed);
    let mut outputs = Vec::new();
    outputs.push(write_csv(&layout.raw_dir.join("requests.csv"), &requests)?);

    // Stage 2: enrich. The window end doubles as "today" for ageing.
    let enriched = enrich(&requests, config.window.end);
    outputs.push(write_csv(
        &layout.out_dir.join("requests_enriched.csv"),
        &enriched,
    )?);

    // Stage 3: the four summary views.
    let overall = overall_summary(&enriched);
    let team_metrics = team_sla_metrics(&enriched);
    let backlog = backlog_age_buckets(&enriched);
    let monthly = monthly_breach_rate(&enriched);
    outputs.push(write_csv(
        &layout.out_dir.join("sla_summary.csv"),
        std::slice::from_ref(&overall),
    )?);
    outputs.push(write_csv(
        &layout.out_dir.join("team_sla_metrics.csv"),
        &team_metrics,
    )?);
    outputs.push(write_csv(
        &layout.out_dir.join("backlog_age_buckets.csv"),
        &backlog,
    )?);
    outputs.push(write_csv(
        &layout.out_dir.join("monthly_breach_rate.csv"),
        &monthly,
    )?);
    log::info!(
        "aggregated {} closed / {} open, breach rate {:.2}%",
        overall.closed_requests,
        overall.open_requests,
        overall.breach_rate_closed
    );

    // Stage 4: charts.
    let pivot = backlog_pivot(&backlog);
    let turnaround = avg_turnaround_by_priority(&enriched);
    let chart_paths = vec![
        write_svg(
            &layout.img_dir.join("sla_breach_rate.svg"),
            &charts::breach_rate_line_svg(&monthly),
        )?,
        write_svg(
            &layout.img_dir.join("backlog_by_team.svg"),
            &charts::backlog_stacked_svg(&pivot),
        )?,
        write_svg(
            &layout.img_dir.join("avg_turnaround_by_priority.svg"),
            &charts::turnaround_bar_svg(&turnaround),
        )?,
        write_svg(&layout.img_dir.join("workflow.svg"), &charts::workflow_svg())?,
    ];

    let mut report = RunReport {
        seed: config.seed,
        request_count: requests.len(),
        window_start: config.window.start,
        window_end: config.window.end,
        overall,
        team_rows: team_metrics.len(),
        backlog_rows: backlog.len(),
        monthly_rows: monthly.len(),
        outputs,
        charts: chart_paths,
    };

    // Stage 5: manifest. Written last so its presence marks a complete
    // run; the manifest lists the data outputs, not itself.
    let manifest_path = layout.out_dir.join("run_manifest.json");
    let manifest = serde_json::to_string_pretty(&report)?;
    std::fs::write(&manifest_path, manifest)?;
    log::info!("run manifest at {}", manifest_path.display());
    report.outputs.push(manifest_path);

    Ok(report)
}
