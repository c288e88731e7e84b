//! Dashboard KPI aggregation.
//!
//! Pure logic over ticket and installation slices; `now` is passed in so the
//! scheduled-visit window is deterministic under test.

use chrono::Duration;
use serde::Serialize;

use crate::models::{Installation, Ticket};
use crate::status::InstallationStatus;
use crate::types::Timestamp;

/// Width of the scheduled-visit window.
pub const SCHEDULED_VISIT_WINDOW_DAYS: i64 = 7;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Tickets that are open or in progress.
    pub open_tickets: usize,
    /// Open/in-progress tickets created no later than `now + 7 days`.
    ///
    /// Tickets carry no scheduled-visit date, so for stored data this is
    /// always equal to `open_tickets`. Kept literal until a visit date
    /// exists on the model.
    pub scheduled_visits: usize,
    pub active_installations: usize,
    /// Mean `resolved_at - created_at` in days, one decimal place.
    pub avg_resolution_time: f64,
}

/// Compute every dashboard KPI in one pass over the inputs.
pub fn compute_dashboard_stats(
    tickets: &[Ticket],
    installations: &[Installation],
    now: Timestamp,
) -> DashboardStats {
    let window_end = now + Duration::days(SCHEDULED_VISIT_WINDOW_DAYS);

    let open_tickets = tickets.iter().filter(|t| t.status.is_open()).count();
    let scheduled_visits = tickets
        .iter()
        .filter(|t| t.status.is_open() && t.created_at <= window_end)
        .count();
    let active_installations = installations
        .iter()
        .filter(|i| i.status == InstallationStatus::Active)
        .count();

    DashboardStats {
        open_tickets,
        scheduled_visits,
        active_installations,
        avg_resolution_time: average_resolution_days(tickets),
    }
}

/// Mean resolution time in days over tickets with a `resolved_at`, rounded
/// to one decimal place. Zero resolved tickets yields exactly `0.0`.
pub fn average_resolution_days(tickets: &[Ticket]) -> f64 {
    let durations: Vec<i64> = tickets
        .iter()
        .filter_map(|t| t.resolved_at.map(|r| (r - t.created_at).num_milliseconds()))
        .collect();

    if durations.is_empty() {
        return 0.0;
    }

    let total_ms: f64 = durations.iter().map(|&ms| ms as f64).sum();
    let mean_days = total_ms / durations.len() as f64 / MILLIS_PER_DAY;
    round_one_decimal(mean_days)
}

/// Round half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
