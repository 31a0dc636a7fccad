use crate::args::OutputFormat;
use crate::render;
use anyhow::Result;
use cartera_types::{ClientRecord, Roster};
use serde::Serialize;

/// The columns the supervisor table shows, per row.
#[derive(Debug, Serialize)]
struct OverviewRow {
    vendedor: String,
    nombre: String,
    ciudad: String,
    fecha_gestion: Option<chrono::NaiveDate>,
    proxima_gestion: Option<chrono::NaiveDate>,
}

impl From<ClientRecord> for OverviewRow {
    fn from(record: ClientRecord) -> Self {
        Self {
            vendedor: record.salesperson,
            nombre: record.display_name,
            ciudad: record.city,
            fecha_gestion: record.last_contact,
            proxima_gestion: record.next_contact,
        }
    }
}

pub fn handle(roster: &Roster, vendedor: Option<String>, format: OutputFormat) -> Result<()> {
    let scope = super::resolve_scope(roster, vendedor)?;
    let rows: Vec<OverviewRow> = scope
        .records(roster)
        .into_iter()
        .map(OverviewRow::from)
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Plain => print_table(&rows),
    }

    Ok(())
}

fn print_table(rows: &[OverviewRow]) {
    if rows.is_empty() {
        println!("(roster vacío)");
        return;
    }

    let headers = [
        "VENDEDOR",
        "NOMBRE TERCERO",
        "CIUDAD",
        "fecha gestion",
        "proxima gestion",
    ];

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.vendedor.clone(),
                row.nombre.clone(),
                row.ciudad.clone(),
                render::fmt_date(row.fecha_gestion),
                render::fmt_date(row.proxima_gestion),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = headers.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    print_row(&headers.map(str::to_string), &widths);
    for row in &cells {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<1$}", cell, *width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}
