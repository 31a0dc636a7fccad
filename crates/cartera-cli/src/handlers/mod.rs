pub mod alerts;
pub mod overview;
pub mod record;
pub mod show;
pub mod vendedores;

use anyhow::Result;
use cartera_engine::{ALL_SENTINEL, Scope, salespeople, salespeople_sorted};
use cartera_types::Roster;

/// Resolve an optional --vendedor flag into a scope.
///
/// No flag and the "Todos" sentinel both mean the whole roster; anything
/// else must be one of the distinct VENDEDOR values actually present.
pub(crate) fn resolve_scope(roster: &Roster, vendedor: Option<String>) -> Result<Scope> {
    match vendedor {
        None => Ok(Scope::Everyone),
        Some(name) if name == ALL_SENTINEL => Ok(Scope::Everyone),
        Some(name) => {
            if salespeople(roster).iter().any(|known| *known == name) {
                Ok(Scope::Salesperson(name))
            } else {
                anyhow::bail!(
                    "unknown vendedor '{}'; present in the roster: {}",
                    name,
                    salespeople_sorted(roster).join(", ")
                );
            }
        }
    }
}
