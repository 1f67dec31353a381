//! Flat result record produced by member searches.

use serde::{Deserialize, Serialize};

use roster_core::types::MemberId;

/// One matching member with its team name resolved through the join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    /// Member identifier.
    pub member_id: MemberId,
    /// Member username.
    pub username: Option<String>,
    /// Member age.
    pub age: i32,
    /// Name of the member's team; `None` when the member has no team.
    pub team_name: Option<String>,
}
