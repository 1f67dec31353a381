//! Core type definitions used across the Roster workspace.

pub mod form;
pub mod id;
pub mod pagination;
pub mod sorting;

pub use id::*;
pub use pagination::{CountStrategy, Page, PageRequest};
pub use sorting::{NullsOrder, SortDirection, SortField};
