//! requestdesk-core — synthetic stakeholder-request log and SLA reporting.
//!
//! One run, three stages: generate a seeded synthetic request log,
//! enrich it with derived compliance fields, and reduce it to the four
//! summary views (overall, per-team, backlog ageing, monthly breach
//! rate) plus their charts. `pipeline::run` is the front door; the
//! stage modules are public so tests and tooling can drive them
//! individually.

pub mod calendar;
pub mod charts;
pub mod config;
pub mod enricher;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod rng;
pub mod types;
