use chrono::NaiveDate;
use is_terminal::IsTerminal;

/// Color only when stdout is a terminal; piped output stays plain.
pub fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

/// Display form of an optional roster date.
pub fn fmt_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => cartera_types::format_date(d),
        None => "-".to_string(),
    }
}
