//! Maps joined rows into result records and entities.
//!
//! Every field comes from the single joined row, so no mapping here ever
//! issues a further query.

use roster_entity::member::{Member, MemberWithTeam};
use roster_entity::search::MemberTeamDto;
use roster_entity::team::Team;

use crate::query::JoinedRow;

/// `member.id → memberId`, `member.username → username`,
/// `member.age → age`, `team.name → teamName`.
pub fn to_member_team(row: JoinedRow) -> MemberTeamDto {
    MemberTeamDto {
        member_id: row.member_id,
        username: row.username,
        age: row.age,
        team_name: row.team_name,
    }
}

/// The member columns of a row.
pub fn to_member(row: JoinedRow) -> Member {
    Member {
        id: row.member_id,
        username: row.username,
        age: row.age,
        team_id: row.team_id,
    }
}

/// A member with its team materialized from a fetch-join row.
pub fn to_member_with_team(row: JoinedRow) -> MemberWithTeam {
    let team = match (row.team_id, row.team_name.clone()) {
        (Some(id), Some(name)) => Some(Team { id, name }),
        _ => None,
    };
    MemberWithTeam {
        member: to_member(row),
        team,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::types::{MemberId, TeamId};

    fn row(team: Option<(i64, &str)>) -> JoinedRow {
        JoinedRow {
            member_id: MemberId(4),
            username: Some("member4".to_string()),
            age: 40,
            team_id: team.map(|(id, _)| TeamId(id)),
            team_name: team.map(|(_, name)| name.to_string()),
        }
    }

    #[test]
    fn test_member_team_mapping() {
        let dto = to_member_team(row(Some((2, "teamB"))));
        assert_eq!(
            dto,
            MemberTeamDto {
                member_id: MemberId(4),
                username: Some("member4".to_string()),
                age: 40,
                team_name: Some("teamB".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_team_maps_to_none() {
        assert_eq!(to_member_team(row(None)).team_name, None);
        assert_eq!(to_member_with_team(row(None)).team, None);
    }

    #[test]
    fn test_member_with_team() {
        let graph = to_member_with_team(row(Some((2, "teamB"))));
        assert_eq!(graph.member.team_id, Some(TeamId(2)));
        assert_eq!(
            graph.team,
            Some(Team {
                id: TeamId(2),
                name: "teamB".to_string()
            })
        );
    }
}
