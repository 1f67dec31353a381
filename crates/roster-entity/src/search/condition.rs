//! Optional search criteria for members.

use serde::{Deserialize, Serialize};

use roster_core::types::form::empty_as_none;

/// Caller-constructed search criteria. Every field is independently
/// optional and an absent field places no constraint on its dimension.
///
/// Bound from query strings as `username`, `teamName`, `ageGoe` and
/// `ageLoe` (the long forms `ageGreaterOrEqual` / `ageLessOrEqual` are
/// accepted too).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchCondition {
    /// Exact member username.
    #[serde(default)]
    pub username: Option<String>,
    /// Exact team name.
    #[serde(default)]
    pub team_name: Option<String>,
    /// Inclusive lower age bound.
    #[serde(
        default,
        rename = "ageGoe",
        alias = "ageGreaterOrEqual",
        deserialize_with = "empty_as_none"
    )]
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound.
    #[serde(
        default,
        rename = "ageLoe",
        alias = "ageLessOrEqual",
        deserialize_with = "empty_as_none"
    )]
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    /// An empty condition that matches every member.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Constrain the team name.
    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    /// Constrain the minimum age.
    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    /// Constrain the maximum age.
    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_short_and_long_names() {
        let short: MemberSearchCondition =
            serde_json::from_str(r#"{"teamName":"teamB","ageGoe":35,"ageLoe":40}"#)
                .expect("short names");
        let long: MemberSearchCondition = serde_json::from_str(
            r#"{"teamName":"teamB","ageGreaterOrEqual":35,"ageLessOrEqual":40}"#,
        )
        .expect("long names");

        assert_eq!(short, long);
        assert_eq!(
            short,
            MemberSearchCondition::new()
                .team_name("teamB")
                .age_goe(35)
                .age_loe(40)
        );
    }

    #[test]
    fn test_blank_age_is_absent() {
        let condition: MemberSearchCondition =
            serde_json::from_str(r#"{"ageGoe":"","teamName":"teamB","ageLoe":"40"}"#)
                .expect("blank age");
        assert_eq!(
            condition,
            MemberSearchCondition::new().team_name("teamB").age_loe(40)
        );
    }
}
