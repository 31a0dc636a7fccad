use cartera_types::{Roster, columns, format_date};
use chrono::NaiveDate;

/// The two dates captured when a follow-up is recorded.
#[derive(Debug, Clone, Copy)]
pub struct FollowUp {
    pub last_contact: NaiveDate,
    pub next_contact: NaiveDate,
}

/// Record a follow-up on every row whose display name equals `client`.
///
/// Display names are not unique, and matching rows are all updated on
/// purpose rather than guessing which duplicate was meant. Returns the
/// number of rows touched; 0 means the name is unknown and the roster is
/// unchanged. Persisting the mutation is the caller's job.
pub fn record_follow_up(roster: &mut Roster, client: &str, follow_up: FollowUp) -> usize {
    let last = format_date(follow_up.last_contact);
    let next = format_date(follow_up.next_contact);

    let matching: Vec<usize> = (0..roster.len())
        .filter(|&row| roster.cell(row, columns::NOMBRE_TERCERO) == client)
        .collect();

    for &row in &matching {
        roster.set_cell(row, columns::FECHA_GESTION, last.clone());
        roster.set_cell(row, columns::PROXIMA_GESTION, next.clone());
    }

    matching.len()
}
