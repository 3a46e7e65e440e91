//! SVG chart generation for the report images.
//!
//! Hand-built documents, no charting crate: each function lays out one
//! figure with fixed margins, scales the data to the plot area, and
//! returns the finished SVG text. Rendering stays deterministic
//! because the inputs arrive already ordered.

use crate::metrics::{AgeBucket, MonthlyBreachRow};
use crate::types::{Priority, Team};

/// Segment colours for the ageing buckets, youngest to oldest.
const BUCKET_COLORS: [&str; 5] = ["#3b82f6", "#059669", "#f59e0b", "#d97706", "#dc2626"];

const LINE_COLOR: &str = "#3b82f6";
const AXIS_COLOR: &str = "#e5e7eb";
const TEXT_COLOR: &str = "#6b7280";
const TITLE_COLOR: &str = "#374151";

/// Monthly SLA breach rate as a line with a marker per month.
pub fn breach_rate_line_svg(rows: &[MonthlyBreachRow]) -> String {
    let width = 720;
    let height = 320;
    let margin = 60;
    let chart_width = width - 2 * margin;
    let chart_height = height - 2 * margin;

    if rows.is_empty() {
        return String::from("<svg></svg>");
    }

    let max_rate = rows.iter().map(|r| r.breach_rate).fold(0.0f64, f64::max);
    let y_max = ((max_rate / 10.0).ceil() * 10.0).max(10.0);
    let x_step = chart_width as f64 / (rows.len().saturating_sub(1)).max(1) as f64;

    let mut path = String::from("M");
    let mut markers = String::new();
    let mut x_labels = String::new();
    for (i, row) in rows.iter().enumerate() {
        let x = margin as f64 + i as f64 * x_step;
        let y = margin as f64 + chart_height as f64 * (1.0 - row.breach_rate / y_max);
        let cmd = if i == 0 {
            format!("{x:.1},{y:.1}")
        } else {
            format!(" L{x:.1},{y:.1}")
        };
        path.push_str(&cmd);
        markers.push_str(&format!(
            r##"<circle cx="{x:.1}" cy="{y:.1}" r="3" fill="{LINE_COLOR}"/>"##
        ));

        let label_y = height - margin + 14;
        x_labels.push_str(&format!(
            r##"<text x="{x:.1}" y="{label_y}" text-anchor="end" font-size="9" fill="{TEXT_COLOR}" transform="rotate(-45, {x:.1}, {label_y})">{}</text>"##,
            row.month.format("%Y-%m")
        ));
    }

    let mid_y = margin as f64 + chart_height as f64 / 2.0;
    format!(
        r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" style="background:white">
  <text x="{title_x}" y="22" text-anchor="middle" font-size="14" font-weight="600" fill="{TITLE_COLOR}">Monthly SLA Breach Rate (Closed Requests)</text>
  <text x="{title_x}" y="{xlabel_y}" text-anchor="middle" font-size="12" fill="{TEXT_COLOR}">Month</text>
  <text x="15" y="{ylabel_y}" text-anchor="middle" font-size="12" fill="{TEXT_COLOR}" transform="rotate(-90, 15, {ylabel_y})">Breach rate (%)</text>
  <line x1="{margin}" y1="{axis_y}" x2="{right}" y2="{axis_y}" stroke="{AXIS_COLOR}" stroke-width="2"/>
  <line x1="{margin}" y1="{margin}" x2="{margin}" y2="{axis_y}" stroke="{AXIS_COLOR}" stroke-width="2"/>
  <line x1="{margin}" y1="{mid_y:.1}" x2="{right}" y2="{mid_y:.1}" stroke="{AXIS_COLOR}" stroke-width="1" stroke-dasharray="4,3"/>
  <text x="{tick_x}" y="{margin_tick}" text-anchor="end" font-size="10" fill="{TEXT_COLOR}">{y_max:.0}</text>
  <text x="{tick_x}" y="{mid_tick:.1}" text-anchor="end" font-size="10" fill="{TEXT_COLOR}">{y_mid:.0}</text>
  <text x="{tick_x}" y="{axis_y}" text-anchor="end" font-size="10" fill="{TEXT_COLOR}">0</text>
  <path d="{path}" fill="none" stroke="{LINE_COLOR}" stroke-width="2"/>
  {markers}
  {x_labels}
</svg>"##,
        title_x = width / 2,
        xlabel_y = height - 8,
        ylabel_y = (height + margin) / 2,
        axis_y = height - margin,
        right = width - margin,
        tick_x = margin - 6,
        margin_tick = margin + 4,
        mid_tick = mid_y + 4.0,
        y_mid = y_max / 2.0,
    )
}

/// Open requests per team as one stacked bar per team, one colour per
/// ageing bucket.
pub fn backlog_stacked_svg(pivot: &[(Team, [u64; 5])]) -> String {
    let width = 720;
    let height = 360;
    let margin = 60;
    let chart_width = width - 2 * margin;
    let chart_height = height - 2 * margin;

    if pivot.is_empty() {
        return String::from("<svg></svg>");
    }

    let max_total = pivot
        .iter()
        .map(|(_, cells)| cells.iter().sum::<u64>())
        .max()
        .unwrap_or(0)
        .max(1);

    let slot = chart_width as f64 / pivot.len() as f64;
    let bar_width = slot * 0.6;
    let y_base = (margin + chart_height) as f64;

    let mut bars = String::new();
    let mut x_labels = String::new();
    for (i, (team, cells)) in pivot.iter().enumerate() {
        let x = margin as f64 + i as f64 * slot + slot * 0.2;
        let mut y = y_base;
        for (bucket_index, &count) in cells.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let segment_height = count as f64 / max_total as f64 * chart_height as f64;
            y -= segment_height;
            bars.push_str(&format!(
                r##"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{segment_height:.1}" fill="{}" opacity="0.85"/>"##,
                BUCKET_COLORS[bucket_index]
            ));
        }

        let label_x = x + bar_width / 2.0;
        let label_y = height - margin + 14;
        x_labels.push_str(&format!(
            r##"<text x="{label_x:.1}" y="{label_y}" text-anchor="end" font-size="10" fill="{TEXT_COLOR}" transform="rotate(-45, {label_x:.1}, {label_y})">{}</text>"##,
            team.as_str()
        ));
    }

    let mut legend = String::new();
    for (i, bucket) in AgeBucket::ALL.iter().enumerate() {
        let swatch_y = 30 + i * 16;
        let text_y = swatch_y + 10;
        legend.push_str(&format!(
            r##"<rect x="{swatch_x}" y="{swatch_y}" width="12" height="12" fill="{}" opacity="0.8"/>
  <text x="{text_x}" y="{text_y}" font-size="11" fill="{TITLE_COLOR}">{}</text>
  "##,
            BUCKET_COLORS[i],
            bucket.as_str(),
            swatch_x = width - 150,
            text_x = width - 133,
        ));
    }

    format!(
        r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" style="background:white">
  <text x="{title_x}" y="22" text-anchor="middle" font-size="14" font-weight="600" fill="{TITLE_COLOR}">Open Requests by Team (Aging Buckets)</text>
  <text x="{title_x}" y="{xlabel_y}" text-anchor="middle" font-size="12" fill="{TEXT_COLOR}">Team</text>
  <text x="15" y="{ylabel_y}" text-anchor="middle" font-size="12" fill="{TEXT_COLOR}" transform="rotate(-90, 15, {ylabel_y})">Open requests</text>
  <line x1="{margin}" y1="{axis_y}" x2="{right}" y2="{axis_y}" stroke="{AXIS_COLOR}" stroke-width="2"/>
  <line x1="{margin}" y1="{margin}" x2="{margin}" y2="{axis_y}" stroke="{AXIS_COLOR}" stroke-width="2"/>
  <text x="{tick_x}" y="{margin_tick}" text-anchor="end" font-size="10" fill="{TEXT_COLOR}">{max_total}</text>
  <text x="{tick_x}" y="{axis_y}" text-anchor="end" font-size="10" fill="{TEXT_COLOR}">0</text>
  {bars}
  {x_labels}
  {legend}
</svg>"##,
        title_x = width / 2,
        xlabel_y = height - 8,
        ylabel_y = (height + margin) / 2,
        axis_y = height - margin,
        right = width - margin,
        tick_x = margin - 6,
        margin_tick = margin + 4,
    )
}

/// Average turnaround of closed requests per priority as plain bars,
/// Low through Urgent left to right.
pub fn turnaround_bar_svg(data: &[(Priority, f64)]) -> String {
    let width = 560;
    let height = 300;
    let margin = 55;
    let chart_width = width - 2 * margin;
    let chart_height = height - 2 * margin;

    if data.is_empty() {
        return String::from("<svg></svg>");
    }

    let max_avg = data.iter().map(|&(_, avg)| avg).fold(0.0f64, f64::max).max(1.0);
    let slot = chart_width as f64 / data.len() as f64;
    let bar_width = slot * 0.6;
    let y_base = (margin + chart_height) as f64;

    let mut bars = String::new();
    let mut x_labels = String::new();
    for (i, (priority, avg)) in data.iter().enumerate() {
        let x = margin as f64 + i as f64 * slot + slot * 0.2;
        let bar_height = avg / max_avg * chart_height as f64;
        let y = y_base - bar_height;
        if bar_height > 0.0 {
            bars.push_str(&format!(
                r##"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{bar_height:.1}" fill="{LINE_COLOR}" opacity="0.85"/>"##
            ));
        }
        bars.push_str(&format!(
            r##"<text x="{value_x:.1}" y="{value_y:.1}" text-anchor="middle" font-size="10" fill="{TITLE_COLOR}">{avg:.1}</text>"##,
            value_x = x + bar_width / 2.0,
            value_y = y - 5.0,
        ));

        x_labels.push_str(&format!(
            r##"<text x="{label_x:.1}" y="{label_y}" text-anchor="middle" font-size="11" fill="{TEXT_COLOR}">{}</text>"##,
            priority.as_str(),
            label_x = x + bar_width / 2.0,
            label_y = height - margin + 18,
        ));
    }

    format!(
        r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" style="background:white">
  <text x="{title_x}" y="22" text-anchor="middle" font-size="14" font-weight="600" fill="{TITLE_COLOR}">Average Turnaround (Closed Requests)</text>
  <text x="{title_x}" y="{xlabel_y}" text-anchor="middle" font-size="12" fill="{TEXT_COLOR}">Priority</text>
  <text x="15" y="{ylabel_y}" text-anchor="middle" font-size="12" fill="{TEXT_COLOR}" transform="rotate(-90, 15, {ylabel_y})">Days (calendar)</text>
  <line x1="{margin}" y1="{axis_y}" x2="{right}" y2="{axis_y}" stroke="{AXIS_COLOR}" stroke-width="2"/>
  <line x1="{margin}" y1="{margin}" x2="{margin}" y2="{axis_y}" stroke="{AXIS_COLOR}" stroke-width="2"/>
  <text x="{tick_x}" y="{margin_tick}" text-anchor="end" font-size="10" fill="{TEXT_COLOR}">{max_avg:.0}</text>
  <text x="{tick_x}" y="{axis_y}" text-anchor="end" font-size="10" fill="{TEXT_COLOR}">0</text>
  {bars}
  {x_labels}
</svg>"##,
        title_x = width / 2,
        xlabel_y = height - 8,
        ylabel_y = (height + margin) / 2,
        axis_y = height - margin,
        right = width - margin,
        tick_x = margin - 6,
        margin_tick = margin + 4,
    )
}

/// The pipeline's four stages as a one-line text diagram.
pub fn workflow_svg() -> String {
    let width = 760;
    let height = 150;
    let stage_y = height / 2 + 10;

    let stages = [
        (0.02, "Requests Log (CSV)"),
        (0.30, "\u{2192}  SLA + Aging Metrics"),
        (0.62, "\u{2192}  Outputs (CSV/DB)"),
        (0.86, "\u{2192}  Dashboard"),
    ];
    let mut texts = String::new();
    for (fraction, label) in stages {
        let x = fraction * width as f64;
        texts.push_str(&format!(
            r##"<text x="{x:.0}" y="{stage_y}" font-size="13" fill="{TITLE_COLOR}">{label}</text>
  "##
        ));
    }

    format!(
        r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" style="background:white">
  <text x="{title_x}" y="24" text-anchor="middle" font-size="14" font-weight="600" fill="{TITLE_COLOR}">Workflow</text>
  {texts}
</svg>"##,
        title_x = width / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn month_row(month: NaiveDate, breach_rate: f64) -> MonthlyBreachRow {
        MonthlyBreachRow {
            month,
            breached: 1,
            closed: 2,
            breach_rate,
        }
    }

    #[test]
    fn line_chart_has_one_marker_per_month() {
        let rows = vec![
            month_row(d(2024, 1, 1), 50.0),
            month_row(d(2024, 2, 1), 0.0),
            month_row(d(2024, 3, 1), 25.0),
        ];
        let svg = breach_rate_line_svg(&rows);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Monthly SLA Breach Rate (Closed Requests)"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("2024-01"));
        assert!(svg.contains("2024-03"));
    }

    #[test]
    fn line_chart_handles_empty_input() {
        assert_eq!(breach_rate_line_svg(&[]), "<svg></svg>");
    }

    #[test]
    fn stacked_chart_draws_only_nonzero_segments() {
        let pivot = vec![
            (Team::Finance, [2u64, 0, 0, 0, 1]),
            (Team::Sales, [0u64, 0, 0, 0, 0]),
        ];
        let svg = backlog_stacked_svg(&pivot);
        assert!(svg.contains("Open Requests by Team (Aging Buckets)"));
        // Segment rects carry opacity 0.85; legend swatches use 0.8.
        assert_eq!(svg.matches(r#"opacity="0.85""#).count(), 2);
        assert!(svg.contains("Finance"));
        assert!(svg.contains("Sales"));
        assert!(svg.contains("60+ days"));
    }

    #[test]
    fn turnaround_chart_orders_priorities_low_to_urgent() {
        let data = vec![
            (Priority::Low, 16.0),
            (Priority::Medium, 12.5),
            (Priority::High, 7.0),
            (Priority::Urgent, 2.4),
        ];
        let svg = turnaround_bar_svg(&data);
        assert!(svg.contains("Average Turnaround (Closed Requests)"));
        let low = svg.find(">Low<").unwrap();
        let medium = svg.find(">Medium<").unwrap();
        let high = svg.find(">High<").unwrap();
        let urgent = svg.find(">Urgent<").unwrap();
        assert!(low < medium && medium < high && high < urgent);
    }

    #[test]
    fn workflow_diagram_names_all_four_stages() {
        let svg = workflow_svg();
        assert!(svg.contains("Workflow"));
        assert!(svg.contains("Requests Log (CSV)"));
        assert!(svg.contains("SLA + Aging Metrics"));
        assert!(svg.contains("Outputs (CSV/DB)"));
        assert!(svg.contains("Dashboard"));
    }
}
