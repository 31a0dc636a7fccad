use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::columns;
use crate::roster::Roster;
use crate::util::parse_date;

/// Typed snapshot of one roster row.
///
/// `row` points back into the roster so callers can address the exact
/// record even when display names collide. Text fields mirror the cells
/// verbatim; the two date fields are parsed, with unparseable or empty
/// cells reading as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub row: usize,
    pub salesperson: String,
    pub display_name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub address: String,
    pub last_contact: Option<NaiveDate>,
    pub next_contact: Option<NaiveDate>,
}

impl Roster {
    /// Snapshot one row as a typed record.
    pub fn client(&self, row: usize) -> ClientRecord {
        ClientRecord {
            row,
            salesperson: self.cell(row, columns::VENDEDOR).to_string(),
            display_name: self.cell(row, columns::NOMBRE_TERCERO).to_string(),
            phone: self.cell(row, columns::TELEFONO).to_string(),
            email: self.cell(row, columns::EMAIL).to_string(),
            city: self.cell(row, columns::CIUDAD).to_string(),
            address: self.cell(row, columns::DIRECCION).to_string(),
            last_contact: parse_date(self.cell(row, columns::FECHA_GESTION)),
            next_contact: parse_date(self.cell(row, columns::PROXIMA_GESTION)),
        }
    }

    /// Snapshot every row, in row order.
    pub fn clients(&self) -> Vec<ClientRecord> {
        (0..self.len()).map(|row| self.client(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(
            vec![
                "VENDEDOR".into(),
                "NOMBRE TERCERO".into(),
                "TELEFONO".into(),
                "EMAIL".into(),
                "CIUDAD".into(),
                "DIRECCION".into(),
                "fecha gestion".into(),
                "proxima gestion".into(),
            ],
            vec![vec![
                "Marta".into(),
                "Ana Ruiz".into(),
                "300 123 4567".into(),
                "ana@example.com".into(),
                "Bogotá".into(),
                "Cra 7 # 12-34".into(),
                "2026-06-20".into(),
                "no aplica".into(),
            ]],
        )
    }

    #[test]
    fn snapshots_text_fields_verbatim() {
        let client = roster().client(0);
        assert_eq!(client.display_name, "Ana Ruiz");
        assert_eq!(client.phone, "300 123 4567");
        assert_eq!(client.city, "Bogotá");
    }

    #[test]
    fn parses_dates_and_treats_garbage_as_absent() {
        let client = roster().client(0);
        assert_eq!(
            client.last_contact,
            NaiveDate::from_ymd_opt(2026, 6, 20),
        );
        assert_eq!(client.next_contact, None);
    }
}
