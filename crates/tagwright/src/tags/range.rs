//! `{{ loop }}`: render the content once per number in a range.
//!
//! ```text
//! {{ loop times="3" }}{value}{{ /loop }}
//! {{ loop from="10" to="0" step="5" }}{value}{{ /loop }}
//! ```

use crate::runtime::{Tag, TagClass, TagError};
use crate::types::{Data, Value};

pub const LOOP_HANDLE: &str = "loop";

/// Most iterations a single `loop` tag may render.
pub const MAX_LOOP_ITERATIONS: u32 = 10_000;

pub(crate) fn class() -> TagClass {
    TagClass::new(LOOP_HANDLE).with_method("index", index)
}

fn index(tag: &mut Tag<'_>, _args: &[Value]) -> Result<Value, TagError> {
    let values = range_values(tag)?;
    if values.is_empty() {
        return tag.parse_no_results(Data::new());
    }

    let total = values.len();
    let items = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let mut item = Data::new();
            item.insert("value".to_string(), Value::Number(value));
            item.insert("index".to_string(), Value::from(index));
            item.insert("count".to_string(), Value::from(index + 1));
            item.insert("first".to_string(), Value::Bool(index == 0));
            item.insert("last".to_string(), Value::Bool(index + 1 == total));
            item
        })
        .collect();

    tag.parse_loop(items, true)
}

/// `times` counts from 1; otherwise `from` (default 1) runs to `to`, in
/// either direction, by `step`. A missing `to` or non-positive `times`
/// yields nothing. Ranges longer than [`MAX_LOOP_ITERATIONS`] fail.
fn range_values(tag: &Tag<'_>) -> Result<Vec<i64>, TagError> {
    let params = tag.params();
    let (from, to) = match params.int("times") {
        Some(times) if times < 1 => return Ok(Vec::new()),
        Some(times) => (1, times),
        None => match params.int("to") {
            Some(to) => (params.int("from").unwrap_or(1), to),
            None => return Ok(Vec::new()),
        },
    };
    let step = params.int("step").map_or(1, i64::unsigned_abs).max(1);

    let span = (i128::from(from) - i128::from(to)).unsigned_abs();
    let iterations = span / u128::from(step) + 1;
    if iterations > u128::from(MAX_LOOP_ITERATIONS) {
        return Err(TagError::render(format!(
            "loop of {iterations} iterations exceeds the limit of {MAX_LOOP_ITERATIONS}"
        )));
    }

    let step = usize::try_from(step).unwrap_or(usize::MAX);
    Ok(if from <= to {
        (from..=to).step_by(step).collect()
    } else {
        (to..=from).rev().step_by(step).collect()
    })
}
