//! Shared domain vocabulary for the request desk.
//!
//! Every categorical column of a request row is a closed enum here.
//! Report labels live on the variants as serde renames so the CSV layer
//! never formats them by hand, and per-variant model constants (SLA
//! targets, latency and effort means) are match methods so adding a
//! variant without its table entry fails to compile.

use serde::{Deserialize, Serialize};

/// Business team a request comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Operations,
    Finance,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    Training,
}

impl Team {
    pub const ALL: [Team; 7] = [
        Team::Operations,
        Team::Finance,
        Team::Marketing,
        Team::Sales,
        Team::Hr,
        Team::CustomerSupport,
        Team::Training,
    ];

    /// Report label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Team::Operations => "Operations",
            Team::Finance => "Finance",
            Team::Marketing => "Marketing",
            Team::Sales => "Sales",
            Team::Hr => "HR",
            Team::CustomerSupport => "Customer Support",
            Team::Training => "Training",
        }
    }
}

/// What kind of work the desk is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestType {
    #[serde(rename = "KPI Report")]
    KpiReport,
    #[serde(rename = "Data Extract")]
    DataExtract,
    #[serde(rename = "Dashboard Update")]
    DashboardUpdate,
    #[serde(rename = "Data Quality Issue")]
    DataQualityIssue,
    #[serde(rename = "One-off Analysis")]
    OneOffAnalysis,
    #[serde(rename = "Automation Request")]
    AutomationRequest,
    #[serde(rename = "Access/Permissions")]
    AccessPermissions,
}

impl RequestType {
    pub const ALL: [RequestType; 7] = [
        RequestType::KpiReport,
        RequestType::DataExtract,
        RequestType::DashboardUpdate,
        RequestType::DataQualityIssue,
        RequestType::OneOffAnalysis,
        RequestType::AutomationRequest,
        RequestType::AccessPermissions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestType::KpiReport => "KPI Report",
            RequestType::DataExtract => "Data Extract",
            RequestType::DashboardUpdate => "Dashboard Update",
            RequestType::DataQualityIssue => "Data Quality Issue",
            RequestType::OneOffAnalysis => "One-off Analysis",
            RequestType::AutomationRequest => "Automation Request",
            RequestType::AccessPermissions => "Access/Permissions",
        }
    }

    /// Mean of the estimated-effort draw, in hours.
    pub fn estimated_mean_hours(self) -> f64 {
        match self {
            RequestType::KpiReport => 3.0,
            RequestType::DataExtract => 1.5,
            RequestType::DashboardUpdate => 4.0,
            RequestType::DataQualityIssue => 2.5,
            RequestType::OneOffAnalysis => 5.0,
            RequestType::AutomationRequest => 6.0,
            RequestType::AccessPermissions => 1.0,
        }
    }
}

/// Request priority. Variant order is the presentation order used by
/// reports and charts (least to most urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    /// SLA target in business days from the request date.
    pub fn sla_target_bdays(self) -> u32 {
        match self {
            Priority::Urgent => 2,
            Priority::High => 5,
            Priority::Medium => 10,
            Priority::Low => 15,
        }
    }

    /// Mean of the completion-latency draw, in business days.
    pub fn completion_mean_bdays(self) -> f64 {
        match self {
            Priority::Urgent => 3.0,
            Priority::High => 7.0,
            Priority::Medium => 12.0,
            Priority::Low => 18.0,
        }
    }
}

/// How the request arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Email,
    Teams,
    Jira,
    #[serde(rename = "In person")]
    InPerson,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Teams => "Teams",
            Channel::Jira => "Jira",
            Channel::InPerson => "In person",
        }
    }
}

/// Workflow state of a request. `Done` is the only closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, Status::Done)
    }
}

/// Stable request identifier for a 1-based record index: "REQ-00001".
pub fn request_id(index: usize) -> String {
    format!("REQ-{index:05}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_serialized_form() {
        for team in Team::ALL {
            let json = serde_json::to_string(&team).unwrap();
            assert_eq!(json, format!("\"{}\"", team.as_str()));
        }
        for request_type in RequestType::ALL {
            let json = serde_json::to_string(&request_type).unwrap();
            assert_eq!(json, format!("\"{}\"", request_type.as_str()));
        }
    }

    #[test]
    fn sla_targets_tighten_with_priority() {
        assert_eq!(Priority::Urgent.sla_target_bdays(), 2);
        assert_eq!(Priority::High.sla_target_bdays(), 5);
        assert_eq!(Priority::Medium.sla_target_bdays(), 10);
        assert_eq!(Priority::Low.sla_target_bdays(), 15);
    }

    #[test]
    fn request_ids_are_zero_padded_to_five_digits() {
        assert_eq!(request_id(1), "REQ-00001");
        assert_eq!(request_id(240), "REQ-00240");
        assert_eq!(request_id(99999), "REQ-99999");
    }
}
