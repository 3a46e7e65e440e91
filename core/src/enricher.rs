//! Per-record compliance derivation.
//!
//! Pure view over the generated records: raw columns are copied
//! through untouched and the derived columns are appended after them.
//! Open records never count as breached; their age runs from the
//! request date to the supplied "today" boundary instead of to a
//! completion date.

use crate::calendar::month_floor;
use crate::generator::Request;
use crate::types::{Channel, Priority, RequestType, Status, Team};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A request row plus its derived SLA and ageing columns, in the
/// column order of requests_enriched.csv.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRequest {
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
    pub is_closed: bool,
    pub turnaround_days_calendar: Option<i64>,
    pub age_days_calendar: i64,
    pub sla_target_bdays: u32,
    pub sla_breached: bool,
    pub month: NaiveDate,
}

/// Derive the enriched view of `requests`, preserving input order.
/// `today` is the ageing boundary for open records; production runs
/// pass the window end.
pub fn enrich(requests: &[Request], today: NaiveDate) -> Vec<EnrichedRequest> {
    requests.iter().map(|req| enrich_one(req, today)).collect()
}

fn enrich_one(req: &Request, today: NaiveDate) -> EnrichedRequest {
    let is_closed = req.status.is_done();
    let turnaround_days_calendar = req
        .completed_date
        .map(|done| (done - req.request_date).num_days());
    let age_days_calendar = match turnaround_days_calendar {
        Some(days) if is_closed => days,
        _ => (today - req.request_date).num_days(),
    };
    // Strictly-after comparison: finishing on the due date is on time.
    // The stored completion date is what gets compared, clamped or not.
    let sla_breached = is_closed
        && req
            .completed_date
            .is_some_and(|done| done > req.due_date);

    EnrichedRequest {
        request_id: req.request_id.clone(),
        request_date: req.request_date,
        requester_team: req.requester_team,
        request_type: req.request_type,
        priority: req.priority,
        channel: req.channel,
        due_date: req.due_date,
        status: req.status,
        completed_date: req.completed_date,
        estimated_hours: req.estimated_hours,
        actual_hours: req.actual_hours,
        is_closed,
        turnaround_days_calendar,
        age_days_calendar,
        sla_target_bdays: req.priority.sla_target_bdays(),
        sla_breached,
        month: month_floor(req.request_date),
    }
}
