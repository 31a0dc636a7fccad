use crate::args::OutputFormat;
use anyhow::Result;
use cartera_engine::whatsapp_link;
use cartera_types::Roster;

pub fn handle(roster: &Roster, client: &str, message: &str, format: OutputFormat) -> Result<()> {
    let records = roster.clients();
    // First match wins for display, like the original detail card; the
    // duplicate-name ambiguity only matters when recording.
    let Some(record) = records.iter().find(|c| c.display_name == client) else {
        anyhow::bail!("no client named '{}' in the roster", client);
    };

    let link = whatsapp_link(&record.phone, message);

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "client": record,
                "whatsapp_link": link,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => {
            println!("Cliente: {}", record.display_name);
            println!("Teléfono: {}", or_dash(&record.phone));
            println!("Email: {}", or_dash(&record.email));
            println!("Ciudad: {}", or_dash(&record.city));
            println!("Dirección: {}", or_dash(&record.address));
            if let Some(link) = link {
                println!("WhatsApp: {}", link);
            }
        }
    }

    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
