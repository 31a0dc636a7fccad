pub mod columns;
mod record;
mod roster;
mod util;

pub use record::ClientRecord;
pub use roster::Roster;
pub use util::{DATE_FORMAT, format_date, parse_date};
