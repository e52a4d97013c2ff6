//! Standard sequence-query operations.
//!
//! Every operation borrows or consumes its input and returns a fresh value;
//! nothing here mutates a caller's collection. Only the aggregates on empty
//! input and chunking with a zero size can fail.

pub mod aggregation;
pub mod filtering;
pub mod manipulation;
pub mod partitioning;
pub mod projection;
pub mod quantifiers;

use thiserror::Error;

pub use aggregation::{count, count_where, max, max_by, try_count_without_enumerating};
pub use filtering::{filter, of_type};
pub use manipulation::{append, prepend};
pub use partitioning::{skip, skip_last, skip_while, take, take_last, take_while};
pub use projection::{cast, chunk, select, select_indexed, select_many};
pub use quantifiers::{all, any, contains};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Sequence contains no elements: {operation} requires at least one")]
    EmptySequence { operation: &'static str },

    #[error("Invalid chunk size: {0} (must be greater than zero)")]
    InvalidChunkSize(usize),
}
