//! Translates a [`MemberSearchCondition`] into a single predicate.
//!
//! Each present field becomes one [`MemberFilter`]; the predicate is the
//! AND-fold of their fragments starting from `Predicate::All`, so an empty
//! condition matches every row. Contradictory ranges (`ageGoe > ageLoe`)
//! pass through unchanged and simply match nothing.

use roster_entity::search::MemberSearchCondition;

use crate::query::{Column, Predicate};

/// One present search criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberFilter {
    /// `member.username = ?`
    UsernameEq(String),
    /// `team.name = ?`
    TeamNameEq(String),
    /// `member.age >= ?`
    AgeGoe(i32),
    /// `member.age <= ?`
    AgeLoe(i32),
}

impl MemberFilter {
    /// The criteria present in `condition`, in declaration order.
    ///
    /// Blank text criteria count as absent.
    pub fn from_condition(condition: &MemberSearchCondition) -> Vec<Self> {
        [
            has_text(&condition.username).map(Self::UsernameEq),
            has_text(&condition.team_name).map(Self::TeamNameEq),
            condition.age_goe.map(Self::AgeGoe),
            condition.age_loe.map(Self::AgeLoe),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// The predicate fragment for this criterion.
    pub fn to_predicate(&self) -> Predicate {
        match self {
            Self::UsernameEq(username) => Predicate::eq(Column::MemberUsername, username.as_str()),
            Self::TeamNameEq(name) => Predicate::eq(Column::TeamName, name.as_str()),
            Self::AgeGoe(age) => Predicate::ge(Column::MemberAge, *age),
            Self::AgeLoe(age) => Predicate::le(Column::MemberAge, *age),
        }
    }
}

/// Build the combined predicate for `condition`.
pub fn build_predicate(condition: &MemberSearchCondition) -> Predicate {
    MemberFilter::from_condition(condition)
        .iter()
        .map(MemberFilter::to_predicate)
        .fold(Predicate::All, Predicate::and)
}

fn has_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_condition_matches_all() {
        assert_eq!(
            build_predicate(&MemberSearchCondition::new()),
            Predicate::All
        );
    }

    #[test]
    fn test_single_field_is_not_wrapped() {
        let condition = MemberSearchCondition::new().username("member1");
        assert_eq!(
            build_predicate(&condition),
            Predicate::eq(Column::MemberUsername, "member1")
        );
    }

    #[test]
    fn test_all_fields_are_conjoined() {
        let condition = MemberSearchCondition::new()
            .username("member4")
            .team_name("teamB")
            .age_goe(35)
            .age_loe(40);

        assert_eq!(
            build_predicate(&condition),
            Predicate::And(vec![
                Predicate::eq(Column::MemberUsername, "member4"),
                Predicate::eq(Column::TeamName, "teamB"),
                Predicate::ge(Column::MemberAge, 35),
                Predicate::le(Column::MemberAge, 40),
            ])
        );
    }

    #[test]
    fn test_inverted_range_passes_through() {
        let condition = MemberSearchCondition::new().age_goe(40).age_loe(10);
        assert_eq!(
            MemberFilter::from_condition(&condition),
            vec![MemberFilter::AgeGoe(40), MemberFilter::AgeLoe(10)]
        );
    }

    #[test]
    fn test_blank_text_is_absent() {
        let condition = MemberSearchCondition::new().username("  ").team_name("");
        assert!(MemberFilter::from_condition(&condition).is_empty());
        assert_eq!(build_predicate(&condition), Predicate::All);
    }
}
