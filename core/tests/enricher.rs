//! Enrichment derivation rules on handcrafted records.

use chrono::NaiveDate;
use requestdesk_core::enricher::enrich;
use requestdesk_core::generator::Request;
use requestdesk_core::types::{Channel, Priority, RequestType, Status, Team};

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The fixed ageing boundary used by production runs.
fn today() -> NaiveDate {
    d(2025, 12, 31)
}

/// An open Urgent request raised on Friday 2024-03-01, due two
/// business days later on Tuesday 2024-03-05.
fn base_request(id: &str) -> Request {
    Request {
        request_id: id.to_string(),
        request_date: d(2024, 3, 1),
        requester_team: Team::Finance,
        request_type: RequestType::KpiReport,
        priority: Priority::Urgent,
        channel: Channel::Email,
        due_date: d(2024, 3, 5),
        status: Status::Open,
        completed_date: None,
        estimated_hours: 3.0,
        actual_hours: None,
    }
}

#[test]
fn open_records_age_to_today_and_never_breach() {
    let rows = enrich(&[base_request("REQ-00001")], today());
    let row = &rows[0];
    assert!(!row.is_closed);
    assert_eq!(row.turnaround_days_calendar, None);
    assert_eq!(row.age_days_calendar, (today() - d(2024, 3, 1)).num_days());
    assert!(!row.sla_breached, "open records must never count as breached");
    assert_eq!(row.sla_target_bdays, 2);
}

#[test]
fn in_progress_counts_as_open() {
    let mut req = base_request("REQ-00002");
    req.status = Status::InProgress;
    let rows = enrich(&[req], today());
    let row = &rows[0];
    assert!(!row.is_closed);
    assert_eq!(row.turnaround_days_calendar, None);
}

/// Completion exactly on the due date is on time: the breach
/// comparison is strictly-after.
#[test]
fn closed_on_the_due_date_is_not_breached() {
    let mut req = base_request("REQ-00003");
    req.status = Status::Done;
    req.completed_date = Some(d(2024, 3, 5));
    req.actual_hours = Some(3.2);
    let rows = enrich(&[req], today());
    let row = &rows[0];
    assert!(row.is_closed);
    assert_eq!(row.turnaround_days_calendar, Some(4));
    assert_eq!(row.age_days_calendar, 4, "closed records age to their completion");
    assert!(!row.sla_breached);
}

#[test]
fn closed_after_the_due_date_is_breached() {
    let mut req = base_request("REQ-00004");
    req.status = Status::Done;
    req.completed_date = Some(d(2024, 3, 6));
    req.actual_hours = Some(3.2);
    let rows = enrich(&[req], today());
    let row = &rows[0];
    assert!(row.sla_breached);
    assert_eq!(row.turnaround_days_calendar, Some(5));
}

#[test]
fn month_column_groups_a_calendar_month() {
    let mut requests = Vec::new();
    for (i, date) in [d(2024, 7, 1), d(2024, 7, 15), d(2024, 7, 31), d(2024, 8, 1)]
        .into_iter()
        .enumerate()
    {
        let mut req = base_request(&format!("REQ-0000{}", i + 1));
        req.request_date = date;
        requests.push(req);
    }
    let rows = enrich(&requests, today());
    assert_eq!(rows[0].month, d(2024, 7, 1));
    assert_eq!(rows[1].month, d(2024, 7, 1));
    assert_eq!(rows[2].month, d(2024, 7, 1));
    assert_eq!(rows[3].month, d(2024, 8, 1));
}

#[test]
fn enrichment_preserves_order_and_raw_fields() {
    let mut second = base_request("REQ-00002");
    second.estimated_hours = 5.5;
    let requests = vec![base_request("REQ-00001"), second];
    let rows = enrich(&requests, today());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].request_id, "REQ-00001");
    assert_eq!(rows[1].request_id, "REQ-00002");
    assert_eq!(rows[1].estimated_hours, 5.5);
    assert_eq!(rows[0].requester_team, Team::Finance);
    assert_eq!(rows[0].channel, Channel::Email);
}
