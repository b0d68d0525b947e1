//! In-memory data providers for the Ronda valuation framework.
//!
//! This crate supplies library-level implementations of the two provider
//! interfaces the engine depends on:
//! - [`InMemoryHistoryProvider`] - quarterly records keyed by symbol
//! - [`StaticBenchmarkProvider`] - per-sector valuation multiples, from a
//!   built-in table or a JSON document
//!
//! Live market-data fetching is intentionally out of scope; applications
//! that source statements elsewhere implement the traits in
//! `ronda-traits` directly.

#![warn(missing_docs)]

pub mod benchmarks;
pub mod history;

// Re-export main types
pub use benchmarks::StaticBenchmarkProvider;
pub use history::InMemoryHistoryProvider;
