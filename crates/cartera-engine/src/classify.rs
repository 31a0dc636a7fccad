use cartera_types::ClientRecord;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// A follow-up older than this many days marks the client as stale.
/// Fixed by the sales workflow, not configurable.
pub const STALE_AFTER_DAYS: u64 = 30;

/// Follow-up recency bucket for a single client. Exactly one holds for
/// every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    /// No follow-up on file at all.
    Unmanaged,
    /// Last follow-up strictly older than the cutoff.
    Stale,
    /// Followed up within the window.
    Current,
}

/// Classify one record against `today`.
pub fn status_of(today: NaiveDate, record: &ClientRecord) -> ContactStatus {
    let cutoff = today - Days::new(STALE_AFTER_DAYS);
    match record.last_contact {
        None => ContactStatus::Unmanaged,
        Some(date) if date < cutoff => ContactStatus::Stale,
        Some(_) => ContactStatus::Current,
    }
}

/// Client with no recorded follow-up, listed as (name, city).
#[derive(Debug, Clone, Serialize)]
pub struct UnmanagedClient {
    pub name: String,
    pub city: String,
}

/// Client whose last follow-up fell out of the window, listed with the
/// stored date.
#[derive(Debug, Clone, Serialize)]
pub struct StaleClient {
    pub name: String,
    pub last_contact: NaiveDate,
}

/// Outcome of classifying a scoped set.
///
/// `AllCurrent` is a distinct outcome rather than an empty report: the
/// caller renders a different message when nobody needs attention.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Coverage {
    AllCurrent,
    NeedsAttention(CoverageReport),
}

/// The two attention lists, in original roster row order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoverageReport {
    pub unmanaged: Vec<UnmanagedClient>,
    pub stale: Vec<StaleClient>,
}

impl CoverageReport {
    pub fn unmanaged_count(&self) -> usize {
        self.unmanaged.len()
    }

    pub fn stale_count(&self) -> usize {
        self.stale.len()
    }
}

/// Partition `records` into the unmanaged and stale lists, preserving
/// row order. Current clients are not listed.
pub fn classify(today: NaiveDate, records: &[ClientRecord]) -> Coverage {
    let mut report = CoverageReport::default();

    for record in records {
        match (status_of(today, record), record.last_contact) {
            (ContactStatus::Unmanaged, _) => report.unmanaged.push(UnmanagedClient {
                name: record.display_name.clone(),
                city: record.city.clone(),
            }),
            (ContactStatus::Stale, Some(last_contact)) => report.stale.push(StaleClient {
                name: record.display_name.clone(),
                last_contact,
            }),
            _ => {}
        }
    }

    if report.unmanaged.is_empty() && report.stale.is_empty() {
        Coverage::AllCurrent
    } else {
        Coverage::NeedsAttention(report)
    }
}
