//! Decides how `member` reaches `team` for each kind of query.

use crate::query::{JoinSpec, Predicate, Table};

/// Join for queries that project `teamName`: members without a team must
/// still come back, with a NULL team name.
pub fn for_projection() -> JoinSpec {
    JoinSpec::left_outer()
}

/// Join for queries that return full `Team` entities alongside members.
/// Same rows as [`for_projection`], with every team column loaded.
pub fn for_entity_graph() -> JoinSpec {
    JoinSpec::left_outer().fetch()
}

/// Join for queries that only filter. A team is needed only when the
/// predicate names a team column, and then an inner join suffices since a
/// NULL team can never satisfy an equality.
pub fn for_filter(predicate: &Predicate) -> Option<JoinSpec> {
    predicate
        .references(Table::Team)
        .then(JoinSpec::inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Column, JoinKind, JoinMode};

    #[test]
    fn test_projection_is_plain_outer() {
        let join = for_projection();
        assert_eq!(join.kind, JoinKind::LeftOuter);
        assert_eq!(join.mode, JoinMode::Plain);
    }

    #[test]
    fn test_entity_graph_fetches() {
        let join = for_entity_graph();
        assert_eq!(join.kind, JoinKind::LeftOuter);
        assert!(join.is_fetch());
    }

    #[test]
    fn test_filter_joins_only_when_needed() {
        assert_eq!(for_filter(&Predicate::All), None);
        assert_eq!(for_filter(&Predicate::ge(Column::MemberAge, 3)), None);
        assert_eq!(
            for_filter(&Predicate::eq(Column::TeamName, "teamA")),
            Some(JoinSpec::inner())
        );
    }
}
