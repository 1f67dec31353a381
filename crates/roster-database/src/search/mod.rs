//! Member search: condition → predicate → join → projection → page.

pub mod engine;
pub mod join;
pub mod predicate;
pub mod projection;

pub use engine::SearchEngine;
pub use predicate::{MemberFilter, build_predicate};
