//! Search condition and projected result records.

pub mod condition;
pub mod record;

pub use condition::MemberSearchCondition;
pub use record::MemberTeamDto;
