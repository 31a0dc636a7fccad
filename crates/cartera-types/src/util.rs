use chrono::{NaiveDate, NaiveDateTime};

/// Format used when writing follow-up dates back to the roster.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a roster cell into a date.
///
/// Accepts ISO dates, the `DD/MM/YYYY` form older rosters carry, and ISO
/// datetimes (time part discarded). Anything else reads as absent rather
/// than an error; the roster treats date cells as free-form text.
pub fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(cell, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(cell, "%d/%m/%Y"))
        .or_else(|_| NaiveDateTime::parse_from_str(cell, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .ok()
}

/// Format a date the way the roster stores it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
