//! Synthetic request-log generation.
//!
//! The draw order per record is FIXED: request date, team, type,
//! priority, closure roll, completion offset or open-status pick,
//! estimated hours, actual-hours multiplier (closed records only),
//! channel. Reordering or adding a draw shifts every later value in
//! the stream, so treat the order as part of the output format.

use crate::calendar::add_business_days;
use crate::config::{
    GeneratorConfig, ACTUAL_MIN_HOURS, ACTUAL_MULT_MEAN, ACTUAL_MULT_STD, CHANNELS,
    CLOSE_PROB_AGE_DIVISOR, CLOSE_PROB_BASE, CLOSE_PROB_CAP, COMPLETION_MIN_BDAYS,
    COMPLETION_STD_BDAYS, ESTIMATE_MIN_HOURS, ESTIMATE_STD_HOURS, OPEN_STATUSES,
    PRIORITY_WEIGHTS, REQUEST_TYPE_WEIGHTS, TEAM_WEIGHTS,
};
use crate::rng::DeskRng;
use crate::types::{request_id, Channel, Priority, RequestType, Status, Team};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One synthetic stakeholder request, column-for-column the raw
/// requests.csv row. Immutable once generated; enrichment derives a
/// separate view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub request_id: String,
    pub request_date: NaiveDate,
    pub requester_team: Team,
    pub request_type: RequestType,
    pub priority: Priority,
    pub channel: Channel,
    pub due_date: NaiveDate,
    pub status: Status,
    pub completed_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub actual_hours: Option<f64>,
}

/// Generate `config.n` records from `rng`. Pure in the seed: the same
/// config and a fresh rng always reproduce the same batch.
pub fn generate_requests(config: &GeneratorConfig, rng: &mut DeskRng) -> Vec<Request> {
    let window = config.window;
    let span_days = window.span_days() as u64;
    let team_weights = TEAM_WEIGHTS.map(|(_, w)| w);
    let type_weights = REQUEST_TYPE_WEIGHTS.map(|(_, w)| w);
    let priority_weights = PRIORITY_WEIGHTS.map(|(_, w)| w);

    (1..=config.n)
        .map(|index| {
            let request_date = window.start + Duration::days(rng.next_u64_below(span_days) as i64);
            let requester_team = TEAM_WEIGHTS[rng.weighted(&team_weights)].0;
            let request_type = REQUEST_TYPE_WEIGHTS[rng.weighted(&type_weights)].0;
            let priority = PRIORITY_WEIGHTS[rng.weighted(&priority_weights)].0;

            let due_date =
                add_business_days(request_date, i64::from(priority.sla_target_bdays()));

            let age_days = (window.end - request_date).num_days();
            let close_prob =
                (CLOSE_PROB_BASE + age_days as f64 / CLOSE_PROB_AGE_DIVISOR).min(CLOSE_PROB_CAP);

            let (status, completed_date) = if rng.chance(close_prob) {
                (Status::Done, Some(draw_completion(rng, priority, request_date, window.end)))
            } else {
                (rng.pick(&OPEN_STATUSES), None)
            };

            let estimated_hours = round1(
                rng.normal(request_type.estimated_mean_hours(), ESTIMATE_STD_HOURS),
            )
            .max(ESTIMATE_MIN_HOURS);

            // The multiplier draw happens only for closed records, so open
            // records cost one fewer draw than closed ones.
            let actual_hours = match status {
                Status::Done => Some(
                    round1(estimated_hours * rng.normal(ACTUAL_MULT_MEAN, ACTUAL_MULT_STD))
                        .max(ACTUAL_MIN_HOURS),
                ),
                _ => None,
            };

            let channel = rng.pick(&CHANNELS);

            Request {
                request_id: request_id(index),
                request_date,
                requester_team,
                request_type,
                priority,
                channel,
                due_date,
                status,
                completed_date,
                estimated_hours,
                actual_hours,
            }
        })
        .collect()
}

/// Draw a completion date: normal latency in business days, truncated
/// toward zero, floored at one business day, then clamped so it never
/// lands past the window end.
fn draw_completion(
    rng: &mut DeskRng,
    priority: Priority,
    request_date: NaiveDate,
    window_end: NaiveDate,
) -> NaiveDate {
    let drawn = rng.normal(priority.completion_mean_bdays(), COMPLETION_STD_BDAYS);
    let offset_bdays = (drawn as i64).max(COMPLETION_MIN_BDAYS);
    let completed = add_business_days(request_date, offset_bdays);
    completed.min(window_end)
}

/// Round to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
