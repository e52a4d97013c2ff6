//! A guided tour of standard sequence-query operations.
//!
//! `seq-query` runs filtering, partitioning, projection, quantifier,
//! manipulation and aggregation operations over small fixed in-memory
//! collections and renders each result. Runs are deterministic: the same
//! sample data always yields the same transcript, byte-for-byte.

pub mod demo;
pub mod logging;
pub mod query;
pub mod report;
pub mod types;
