//! The demonstration driver: every query operation, in a fixed order, over
//! [`SampleData`].

use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use crate::query::{self, QueryError};
use crate::report::{Section, Transcript};
use crate::types::SampleData;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Query failed: {0}")]
    Query(#[from] QueryError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub const FILTERING: &str = "I) Filtering";
pub const PARTITIONING: &str = "II) Partitioning";
pub const PROJECTION: &str = "III) Projection";
pub const QUANTITY_CHECKS: &str = "IV) Existence or Quantity Checks";
pub const MANIPULATION: &str = "V) Sequence Manipulation";
pub const AGGREGATION: &str = "VI) Aggregation Methods";

/// Accumulates sections, attaching each group heading to the first entry only.
struct Recorder {
    sections: Vec<Section>,
    pending_group: Option<&'static str>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            sections: Vec::new(),
            pending_group: None,
        }
    }

    fn group(&mut self, heading: &'static str) {
        self.pending_group = Some(heading);
    }

    fn record<T: Serialize>(&mut self, label: &str, result: T) -> Result<(), DemoError> {
        let result = serde_json::to_value(result)?;
        debug!(label, %result, "recorded");
        self.sections.push(Section {
            group: self.pending_group.take().map(str::to_string),
            label: label.to_string(),
            result,
        });
        Ok(())
    }
}

pub fn run(data: &SampleData) -> Result<Transcript, DemoError> {
    info!(
        integers = data.integers.len(),
        mixed = data.mixed.len(),
        people = data.people.len(),
        "starting sequence query demonstration"
    );

    let ints = &data.integers;
    let mut rec = Recorder::new();

    rec.group(FILTERING);
    rec.record("Where", query::filter(ints.iter().copied(), |x| *x > 2))?;
    rec.record("OfType", query::of_type::<String, _>(&data.mixed))?;

    rec.group(PARTITIONING);
    rec.record("Skip", query::skip(ints, 3))?;
    rec.record("Take", query::take(ints, 30))?;
    rec.record("SkipLast", query::skip_last(ints, 2))?;
    rec.record("TakeLast", query::take_last(ints, 2))?;
    rec.record("SkipWhile", query::skip_while(ints, |x| **x < 2))?;
    rec.record("TakeWhile", query::take_while(ints, |x| **x < 2))?;

    rec.group(PROJECTION);
    rec.record(
        "Select",
        query::select_indexed(ints, |x, i| format!("{i},{x}")),
    )?;
    rec.record(
        "SelectMany",
        query::select_many(&data.nested, |inner| {
            query::select_indexed(inner, |x, i| format!("{i}: {x}"))
        }),
    )?;
    rec.record("Cast", query::cast::<i64, _>(ints.iter().copied()))?;
    rec.record("Chunk", query::chunk(ints, 3)?)?;

    rec.group(QUANTITY_CHECKS);
    rec.record("Any", query::any(ints, |x| **x > 2))?;
    rec.record("All", query::all(ints, |x| **x > 2))?;
    rec.record("Contains", query::contains(ints, &3))?;

    rec.group(MANIPULATION);
    rec.record("Append", query::append(ints, 2))?;
    rec.record("Prepend", query::prepend(ints, 3))?;

    rec.group(AGGREGATION);
    rec.record("Count", query::count(query::filter(ints, |x| **x > 2)))?;
    let count = query::try_count_without_enumerating(&ints.iter());
    rec.record(
        "TryGetNonEnumeratedCount",
        json!({ "obtained": count.is_some(), "count": count }),
    )?;
    rec.record("Max", query::max(query::filter(ints, |x| **x <= 2))?)?;
    rec.record("MaxBy", query::max_by(&data.people, |p| p.age)?)?;

    let transcript = Transcript::new(rec.sections);
    info!(sections = transcript.sections.len(), "demonstration complete");
    Ok(transcript)
}
