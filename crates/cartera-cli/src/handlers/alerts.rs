use crate::args::OutputFormat;
use crate::render;
use anyhow::Result;
use cartera_engine::{Coverage, CoverageReport, classify};
use cartera_types::Roster;
use chrono::Local;
use owo_colors::OwoColorize;

pub fn handle(roster: &Roster, vendedor: Option<String>, format: OutputFormat) -> Result<()> {
    let scope = super::resolve_scope(roster, vendedor)?;
    let records = scope.records(roster);

    let today = Local::now().date_naive();
    let coverage = classify(today, &records);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&coverage)?),
        OutputFormat::Plain => print_coverage(&coverage),
    }

    Ok(())
}

fn print_coverage(coverage: &Coverage) {
    match coverage {
        Coverage::AllCurrent => {
            let message = "Todos los clientes tienen gestiones recientes.";
            if render::use_color() {
                println!("{}", message.green());
            } else {
                println!("{}", message);
            }
        }
        Coverage::NeedsAttention(report) => print_report(report),
    }
}

fn print_report(report: &CoverageReport) {
    if !report.unmanaged.is_empty() {
        let heading = format!(
            "{} cliente(s) sin gestión registrada:",
            report.unmanaged_count()
        );
        if render::use_color() {
            println!("{}", heading.red());
        } else {
            println!("{}", heading);
        }
        for client in &report.unmanaged {
            println!("- {} ({})", client.name, client.city);
        }
    }

    if !report.stale.is_empty() {
        let heading = format!(
            "{} cliente(s) con gestión antigua (+30 días):",
            report.stale_count()
        );
        if render::use_color() {
            println!("{}", heading.yellow());
        } else {
            println!("{}", heading);
        }
        for client in &report.stale {
            println!(
                "- {} — última gestión: {}",
                client.name,
                cartera_types::format_date(client.last_contact)
            );
        }
    }
}
