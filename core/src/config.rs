//! Model parameters for the synthetic request log.
//!
//! Every number the generator draws against lives here as a named
//! constant, so tests assert against the same tables the generator
//! samples from. There is deliberately no file loading and no CLI
//! surface: a run is fully described by `GeneratorConfig`.

use crate::types::{Channel, Priority, RequestType, Status, Team};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Draw weights ───────────────────────────────────────────────────

/// Relative draw weights for the requesting team.
pub const TEAM_WEIGHTS: [(Team, u32); 7] = [
    (Team::Operations, 18),
    (Team::Finance, 14),
    (Team::Marketing, 16),
    (Team::Sales, 12),
    (Team::Hr, 8),
    (Team::CustomerSupport, 18),
    (Team::Training, 14),
];

/// Relative draw weights for the request type.
pub const REQUEST_TYPE_WEIGHTS: [(RequestType, u32); 7] = [
    (RequestType::KpiReport, 20),
    (RequestType::DataExtract, 18),
    (RequestType::DashboardUpdate, 16),
    (RequestType::DataQualityIssue, 14),
    (RequestType::OneOffAnalysis, 12),
    (RequestType::AutomationRequest, 10),
    (RequestType::AccessPermissions, 10),
];

/// Relative draw weights for priority.
pub const PRIORITY_WEIGHTS: [(Priority, u32); 4] = [
    (Priority::Low, 30),
    (Priority::Medium, 45),
    (Priority::High, 18),
    (Priority::Urgent, 7),
];

/// Intake channels, drawn uniformly.
pub const CHANNELS: [Channel; 4] = [
    Channel::Email,
    Channel::Teams,
    Channel::Jira,
    Channel::InPerson,
];

/// Non-closed records split uniformly between these two states.
pub const OPEN_STATUSES: [Status; 2] = [Status::Open, Status::InProgress];

// ── Closure and latency model ──────────────────────────────────────

/// Closure probability is BASE + age_days / DIVISOR, capped at CAP, so
/// older records are more likely to have been finished.
pub const CLOSE_PROB_BASE: f64 = 0.25;
pub const CLOSE_PROB_AGE_DIVISOR: f64 = 500.0;
pub const CLOSE_PROB_CAP: f64 = 0.95;

/// Std-dev of the completion-latency draw, in business days. The mean
/// comes from `Priority::completion_mean_bdays`.
pub const COMPLETION_STD_BDAYS: f64 = 3.0;
/// Completion never lands on the request date itself.
pub const COMPLETION_MIN_BDAYS: i64 = 1;

// ── Effort model ───────────────────────────────────────────────────

/// Std-dev of the estimated-effort draw, in hours. The mean comes from
/// `RequestType::estimated_mean_hours`.
pub const ESTIMATE_STD_HOURS: f64 = 1.2;
pub const ESTIMATE_MIN_HOURS: f64 = 0.5;

/// Actual hours are the estimate times a normal multiplier: mild
/// systematic overrun with real spread.
pub const ACTUAL_MULT_MEAN: f64 = 1.05;
pub const ACTUAL_MULT_STD: f64 = 0.25;
pub const ACTUAL_MIN_HOURS: f64 = 0.25;

// ── Run parameters ─────────────────────────────────────────────────

/// The simulated reporting window. Request dates are drawn uniformly
/// from it, and `end` doubles as the "today" boundary when ageing open
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SimWindow {
    /// Calendar days spanned, inclusive of both endpoints.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl Default for SimWindow {
    fn default() -> Self {
        Self {
            start: ymd(2024, 1, 1),
            end: ymd(2025, 12, 31),
        }
    }
}

/// Generator parameters. `Default` is the production run: 240 records
/// from seed 42 over the fixed two-year window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub n: usize,
    pub seed: u64,
    pub window: SimWindow,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n: 240,
            seed: 42,
            window: SimWindow::default(),
        }
    }
}

impl GeneratorConfig {
    /// Small config for unit tests that don't need the full batch.
    pub fn default_test() -> Self {
        Self {
            n: 40,
            seed: 7,
            window: SimWindow::default(),
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date literal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_spans_two_calendar_years() {
        let window = SimWindow::default();
        assert_eq!(window.span_days(), 731); // 2024 is a leap year
    }

    #[test]
    fn weight_tables_sum_to_expected_totals() {
        let team_total: u32 = TEAM_WEIGHTS.iter().map(|&(_, w)| w).sum();
        let type_total: u32 = REQUEST_TYPE_WEIGHTS.iter().map(|&(_, w)| w).sum();
        let priority_total: u32 = PRIORITY_WEIGHTS.iter().map(|&(_, w)| w).sum();
        assert_eq!(team_total, 100);
        assert_eq!(type_total, 100);
        assert_eq!(priority_total, 100);
    }
}
