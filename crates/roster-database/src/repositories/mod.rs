//! Repository implementations.

pub mod member;
pub mod team;

pub use member::MemberRepository;
pub use team::TeamRepository;
