//! Summary reductions over the enriched request set.
//!
//! Four independent views, each a pure pass over the rows: overall SLA
//! summary, per-team metrics, backlog ageing buckets, and monthly
//! breach rate. Every rate guards its denominator; an empty group
//! reports 0 rather than an error or a NaN. Output ordering is pinned
//! so repeated runs produce identical files.

use crate::enricher::EnrichedRequest;
use crate::types::{Priority, Team};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── View 1: overall summary ────────────────────────────────────────

/// The single sla_summary.csv row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSummary {
    pub total_requests: u64,
    pub closed_requests: u64,
    pub open_requests: u64,
    pub breached_requests: u64,
    pub breach_rate_closed: f64,
    pub avg_turnaround_days_closed: f64,
}

/// Headline counts and rates. Breach rate and turnaround are computed
/// over closed requests only.
pub fn overall_summary(rows: &[EnrichedRequest]) -> OverallSummary {
    let total = rows.len() as u64;
    let closed: Vec<&EnrichedRequest> = rows.iter().filter(|r| r.is_closed).collect();
    let breached = closed.iter().filter(|r| r.sla_breached).count() as u64;

    let breach_rate_closed = if closed.is_empty() {
        0.0
    } else {
        round2(breached as f64 / closed.len() as f64 * 100.0)
    };
    let avg_turnaround_days_closed = if closed.is_empty() {
        0.0
    } else {
        let day_sum: i64 = closed
            .iter()
            .filter_map(|r| r.turnaround_days_calendar)
            .sum();
        round2(day_sum as f64 / closed.len() as f64)
    };

    OverallSummary {
        total_requests: total,
        closed_requests: closed.len() as u64,
        open_requests: total - closed.len() as u64,
        breached_requests: breached,
        breach_rate_closed,
        avg_turnaround_days_closed,
    }
}

// ── View 2: per-team SLA metrics ───────────────────────────────────

/// One team_sla_metrics.csv row. Teams with no closed requests do not
/// appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSlaRow {
    pub requester_team: Team,
    pub closed_requests: u64,
    pub breach_rate: f64,
    pub avg_turnaround_days: f64,
}

/// Closed-request volume, breach rate, and average turnaround per
/// team, busiest teams first. Ties break on the team label so the
/// order never depends on hash iteration.
pub fn team_sla_metrics(rows: &[EnrichedRequest]) -> Vec<TeamSlaRow> {
    let mut groups: HashMap<Team, (u64, u64, i64)> = HashMap::new();
    for row in rows.iter().filter(|r| r.is_closed) {
        let entry = groups.entry(row.requester_team).or_default();
        entry.0 += 1;
        if row.sla_breached {
            entry.1 += 1;
        }
        entry.2 += row.turnaround_days_calendar.unwrap_or(0);
    }

    let mut out: Vec<TeamSlaRow> = groups
        .into_iter()
        .map(|(team, (closed, breached, day_sum))| TeamSlaRow {
            requester_team: team,
            closed_requests: closed,
            breach_rate: round2(breached as f64 / closed as f64 * 100.0),
            avg_turnaround_days: round2(day_sum as f64 / closed as f64),
        })
        .collect();
    out.sort_by(|a, b| {
        b.closed_requests
            .cmp(&a.closed_requests)
            .then_with(|| a.requester_team.as_str().cmp(b.requester_team.as_str()))
    });
    out
}

// ── View 3: backlog ageing ─────────────────────────────────────────

/// Ageing bucket for open requests. Boundaries are inclusive on the
/// upper edge: an age of exactly 60 days is still `31-60 days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBucket {
    #[serde(rename = "0-7 days")]
    Days0To7,
    #[serde(rename = "8-14 days")]
    Days8To14,
    #[serde(rename = "15-30 days")]
    Days15To30,
    #[serde(rename = "31-60 days")]
    Days31To60,
    #[serde(rename = "60+ days")]
    Days60Plus,
}

impl AgeBucket {
    /// Youngest to oldest; also the report column order.
    pub const ALL: [AgeBucket; 5] = [
        AgeBucket::Days0To7,
        AgeBucket::Days8To14,
        AgeBucket::Days15To30,
        AgeBucket::Days31To60,
        AgeBucket::Days60Plus,
    ];

    pub fn for_age(age_days: i64) -> AgeBucket {
        match age_days {
            ..=7 => AgeBucket::Days0To7,
            8..=14 => AgeBucket::Days8To14,
            15..=30 => AgeBucket::Days15To30,
            31..=60 => AgeBucket::Days31To60,
            _ => AgeBucket::Days60Plus,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgeBucket::Days0To7 => "0-7 days",
            AgeBucket::Days8To14 => "8-14 days",
            AgeBucket::Days15To30 => "15-30 days",
            AgeBucket::Days31To60 => "31-60 days",
            AgeBucket::Days60Plus => "60+ days",
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        match self {
            AgeBucket::Days0To7 => 0,
            AgeBucket::Days8To14 => 1,
            AgeBucket::Days15To30 => 2,
            AgeBucket::Days31To60 => 3,
            AgeBucket::Days60Plus => 4,
        }
    }
}

/// One backlog_age_buckets.csv row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogRow {
    pub requester_team: Team,
    pub age_bucket: AgeBucket,
    pub open_requests: u64,
}

/// Open-request counts per (team, bucket). Every team that appears in
/// the open set gets all five buckets, zero counts included, ordered
/// by team label then bucket age.
pub fn backlog_age_buckets(rows: &[EnrichedRequest]) -> Vec<BacklogRow> {
    let mut counts: HashMap<(Team, AgeBucket), u64> = HashMap::new();
    let mut teams: Vec<Team> = Vec::new();
    for row in rows.iter().filter(|r| !r.is_closed) {
        let bucket = AgeBucket::for_age(row.age_days_calendar);
        *counts.entry((row.requester_team, bucket)).or_insert(0) += 1;
        if !teams.contains(&row.requester_team) {
            teams.push(row.requester_team);
        }
    }
    teams.sort_by_key(|t| t.as_str());

    let mut out = Vec::with_capacity(teams.len() * AgeBucket::ALL.len());
    for &team in &teams {
        for bucket in AgeBucket::ALL {
            out.push(BacklogRow {
                requester_team: team,
                age_bucket: bucket,
                open_requests: counts.get(&(team, bucket)).copied().unwrap_or(0),
            });
        }
    }
    out
}

/// Backlog rows re-shaped as one matrix row per team (label order) and
/// one cell per bucket (age order), for the stacked chart.
pub fn backlog_pivot(buckets: &[BacklogRow]) -> Vec<(Team, [u64; 5])> {
    let mut teams: Vec<Team> = Vec::new();
    for row in buckets {
        if !teams.contains(&row.requester_team) {
            teams.push(row.requester_team);
        }
    }
    teams.sort_by_key(|t| t.as_str());

    teams
        .into_iter()
        .map(|team| {
            let mut cells = [0u64; 5];
            for row in buckets.iter().filter(|r| r.requester_team == team) {
                cells[row.age_bucket.index()] += row.open_requests;
            }
            (team, cells)
        })
        .collect()
}

// ── View 4: monthly breach rate ────────────────────────────────────

/// One monthly_breach_rate.csv row. `month` is the first-of-month
/// date the request fell in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBreachRow {
    pub month: NaiveDate,
    pub breached: u64,
    pub closed: u64,
    pub breach_rate: f64,
}

/// Breach rate over closed requests grouped by request month,
/// ascending. Months with no closed requests produce no row.
pub fn monthly_breach_rate(rows: &[EnrichedRequest]) -> Vec<MonthlyBreachRow> {
    let mut groups: HashMap<NaiveDate, (u64, u64)> = HashMap::new();
    for row in rows.iter().filter(|r| r.is_closed) {
        let entry = groups.entry(row.month).or_default();
        entry.1 += 1;
        if row.sla_breached {
            entry.0 += 1;
        }
    }

    let mut months: Vec<NaiveDate> = groups.keys().copied().collect();
    months.sort();
    months
        .into_iter()
        .map(|month| {
            let (breached, closed) = groups[&month];
            MonthlyBreachRow {
                month,
                breached,
                closed,
                breach_rate: round2(breached as f64 / closed as f64 * 100.0),
            }
        })
        .collect()
}

// ── Chart inputs ───────────────────────────────────────────────────

/// Average calendar turnaround of closed requests per priority, in
/// presentation order (Low through Urgent). A priority with no closed
/// requests reports 0.
pub fn avg_turnaround_by_priority(rows: &[EnrichedRequest]) -> Vec<(Priority, f64)> {
    Priority::ALL
        .iter()
        .map(|&priority| {
            let days: Vec<i64> = rows
                .iter()
                .filter(|r| r.is_closed && r.priority == priority)
                .filter_map(|r| r.turnaround_days_calendar)
                .collect();
            let avg = if days.is_empty() {
                0.0
            } else {
                days.iter().sum::<i64>() as f64 / days.len() as f64
            };
            (priority, avg)
        })
        .collect()
}

/// Round to two decimal places (rates and day averages).
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
