//! Member entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use roster_core::types::{MemberId, TeamId};

use crate::team::Team;

/// A member row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Store-assigned identifier.
    pub id: MemberId,
    /// Login name; may be absent.
    pub username: Option<String>,
    /// Age in years.
    pub age: i32,
    /// The team this member belongs to, if any.
    pub team_id: Option<TeamId>,
}

/// A member loaded together with its team in one round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWithTeam {
    /// The member row.
    #[serde(flatten)]
    pub member: Member,
    /// The referenced team, fully materialized.
    pub team: Option<Team>,
}

/// Data required to create a new member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMember {
    /// Login name (optional).
    pub username: Option<String>,
    /// Age in years.
    pub age: i32,
    /// Team to join (optional).
    pub team_id: Option<TeamId>,
}

impl CreateMember {
    /// A member without a team.
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            username: Some(username.into()),
            age,
            team_id: None,
        }
    }

    /// A member that belongs to `team`.
    pub fn in_team(username: impl Into<String>, age: i32, team: TeamId) -> Self {
        Self {
            team_id: Some(team),
            ..Self::new(username, age)
        }
    }

    /// A member without a username.
    pub fn anonymous(age: i32) -> Self {
        Self {
            username: None,
            age,
            team_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_with_team_flattens() {
        let value = serde_json::to_value(MemberWithTeam {
            member: Member {
                id: MemberId(1),
                username: Some("member1".to_string()),
                age: 10,
                team_id: Some(TeamId(5)),
            },
            team: Some(Team {
                id: TeamId(5),
                name: "teamA".to_string(),
            }),
        })
        .expect("serialize");

        assert_eq!(value["username"], "member1");
        assert_eq!(value["teamId"], 5);
        assert!(value.get("team_id").is_none());
        assert_eq!(value["team"]["name"], "teamA");
    }

    #[test]
    fn test_create_member_builders() {
        let member = CreateMember::in_team("member1", 10, TeamId(2));
        assert_eq!(member.username.as_deref(), Some("member1"));
        assert_eq!(member.team_id, Some(TeamId(2)));
        assert!(CreateMember::anonymous(100).username.is_none());
    }
}
