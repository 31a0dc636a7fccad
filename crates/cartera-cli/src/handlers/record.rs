use crate::args::OutputFormat;
use crate::config::Config;
use anyhow::Result;
use cartera_engine::{FollowUp, record_follow_up};
use cartera_store::RosterFile;
use cartera_types::{Roster, format_date};
use chrono::{Days, Local, NaiveDate};

pub fn handle(
    file: &RosterFile,
    roster: &mut Roster,
    client: &str,
    last: Option<NaiveDate>,
    next: Option<NaiveDate>,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let today = Local::now().date_naive();
    let follow_up = FollowUp {
        last_contact: last.unwrap_or(today),
        next_contact: next.unwrap_or_else(|| today + Days::new(config.next_lead_days)),
    };

    let touched = record_follow_up(roster, client, follow_up);
    if touched == 0 {
        anyhow::bail!(
            "no client named '{}' in the roster; nothing was saved",
            client
        );
    }

    // The in-memory roster keeps the edit even if this fails; the error
    // message tells the user the file itself was not updated.
    file.save(roster)?;

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "client": client,
                "rows_updated": touched,
                "fecha_gestion": format_date(follow_up.last_contact),
                "proxima_gestion": format_date(follow_up.next_contact),
                "saved_to": file.path(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => {
            println!(
                "Gestión registrada para {} ({} registro(s) actualizados).",
                client, touched
            );
            println!(
                "Última gestión: {}  Próxima gestión: {}",
                format_date(follow_up.last_contact),
                format_date(follow_up.next_contact)
            );
            println!("Guardado en {}.", file.path().display());
        }
    }

    Ok(())
}
