//! # roster-entity
//!
//! Domain entity models for Roster. `Team` and `Member` mirror the two
//! store tables; the `search` module holds the transient search condition
//! and the flat result record a search projects into.

pub mod member;
pub mod search;
pub mod team;
