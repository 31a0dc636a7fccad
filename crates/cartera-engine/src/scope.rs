use cartera_types::{ClientRecord, Roster, columns};

/// Sentinel the supervisor filter accepts for "no narrowing".
pub const ALL_SENTINEL: &str = "Todos";

/// View scope for the current role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// One salesperson's clients. The match on VENDEDOR is exact and
    /// case-sensitive.
    Salesperson(String),
    /// The whole roster (supervisor default, or the "Todos" filter).
    Everyone,
}

impl Scope {
    /// Records visible under this scope, in roster row order. Pure
    /// filtering; the roster is never mutated.
    pub fn records(&self, roster: &Roster) -> Vec<ClientRecord> {
        roster
            .clients()
            .into_iter()
            .filter(|client| match self {
                Scope::Salesperson(name) => client.salesperson == *name,
                Scope::Everyone => true,
            })
            .collect()
    }
}

/// Distinct non-empty VENDEDOR values, in first-appearance row order.
/// Values are kept verbatim; the scope match is exact, so the set must
/// be too.
pub fn salespeople(roster: &Roster) -> Vec<String> {
    let mut seen = Vec::new();
    for row in 0..roster.len() {
        let vendedor = roster.cell(row, columns::VENDEDOR);
        if vendedor.is_empty() {
            continue;
        }
        if !seen.iter().any(|known| known == vendedor) {
            seen.push(vendedor.to_string());
        }
    }
    seen
}

/// The same distinct set sorted alphabetically, the order the supervisor
/// filter presents it in.
pub fn salespeople_sorted(roster: &Roster) -> Vec<String> {
    let mut names = salespeople(roster);
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(
            vec!["VENDEDOR".into(), "NOMBRE TERCERO".into()],
            vec![
                vec!["Marta".into(), "Ana Ruiz".into()],
                vec!["Pedro".into(), "Luis Prado".into()],
                vec!["Marta".into(), "Carla Ortiz".into()],
                vec!["".into(), "Sin Vendedor".into()],
            ],
        )
    }

    #[test]
    fn salesperson_scope_filters_exactly() {
        let records = Scope::Salesperson("Marta".into()).records(&roster());
        let names: Vec<_> = records.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, ["Ana Ruiz", "Carla Ortiz"]);
    }

    #[test]
    fn salesperson_match_is_case_sensitive() {
        let records = Scope::Salesperson("marta".into()).records(&roster());
        assert!(records.is_empty());
    }

    #[test]
    fn everyone_scope_sees_the_whole_roster() {
        assert_eq!(Scope::Everyone.records(&roster()).len(), 4);
    }

    #[test]
    fn salespeople_are_distinct_nonempty_in_row_order() {
        assert_eq!(salespeople(&roster()), ["Marta", "Pedro"]);
    }

    #[test]
    fn sorted_variant_is_alphabetical() {
        let r = Roster::new(
            vec!["VENDEDOR".into()],
            vec![
                vec!["Pedro".into()],
                vec!["Ana".into()],
                vec!["Marta".into()],
            ],
        );
        assert_eq!(salespeople_sorted(&r), ["Ana", "Marta", "Pedro"]);
    }
}
