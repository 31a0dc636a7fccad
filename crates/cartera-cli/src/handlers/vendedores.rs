use crate::args::OutputFormat;
use anyhow::Result;
use cartera_engine::salespeople_sorted;
use cartera_types::Roster;

pub fn handle(roster: &Roster, format: OutputFormat) -> Result<()> {
    let names = salespeople_sorted(roster);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&names)?),
        OutputFormat::Plain => {
            if names.is_empty() {
                println!("(sin vendedores en el roster)");
            }
            for name in names {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
