use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{CONFIG_FILE, Config};
use anyhow::Result;
use cartera_store::RosterFile;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_from(&cli.dir.join(CONFIG_FILE))?;
    let file = RosterFile::locate(&cli.dir)?;
    let mut roster = file.load()?;

    match cli.command {
        Commands::Alerts { vendedor } => handlers::alerts::handle(&roster, vendedor, cli.format),

        Commands::Overview { vendedor } => {
            handlers::overview::handle(&roster, vendedor, cli.format)
        }

        Commands::Vendedores => handlers::vendedores::handle(&roster, cli.format),

        Commands::Show { client, message } => handlers::show::handle(
            &roster,
            &client,
            message.as_deref().unwrap_or(&config.greeting),
            cli.format,
        ),

        Commands::Record { client, last, next } => {
            handlers::record::handle(&file, &mut roster, &client, last, next, &config, cli.format)
        }
    }
}
