//! Core traits defined in `roster-core` and implemented by other crates.

pub mod search;

pub use search::SearchRepository;
