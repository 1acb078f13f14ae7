//! Operation scripts: sequences of set/clear requests applied to a store.
//!
//! Text form is `set:START:LEN` or `clear:START:LEN`. Rejected requests are
//! recorded and skipped so the rest of the script still runs.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::RangeError;
use crate::store::BitRangeStore;

/// Capacity of the store the demonstration sequence runs on.
pub const DEMO_CAPACITY: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Set,
    Clear,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Set => write!(f, "set"),
            OpKind::Clear => write!(f, "clear"),
        }
    }
}

/// One range request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOp {
    pub kind: OpKind,
    pub start: usize,
    pub length: usize,
}

impl RangeOp {
    pub const fn set(start: usize, length: usize) -> Self {
        RangeOp {
            kind: OpKind::Set,
            start,
            length,
        }
    }

    pub const fn clear(start: usize, length: usize) -> Self {
        RangeOp {
            kind: OpKind::Clear,
            start,
            length,
        }
    }

    pub fn apply(&self, store: &mut BitRangeStore) -> Result<(), RangeError> {
        match self.kind {
            OpKind::Set => store.set_range(self.start, self.length),
            OpKind::Clear => store.clear_range(self.start, self.length),
        }
    }
}

impl fmt::Display for RangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.start, self.length)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpParseError {
    #[error("expected KIND:START:LEN, got '{0}'")]
    Shape(String),
    #[error("unknown operation '{0}' (expected set or clear)")]
    Kind(String),
    #[error("invalid {field} '{value}': not a non-negative integer")]
    Number { field: &'static str, value: String },
}

fn parse_field(field: &'static str, value: &str) -> Result<usize, OpParseError> {
    value.trim().parse().map_err(|_| OpParseError::Number {
        field,
        value: value.to_string(),
    })
}

impl FromStr for RangeOp {
    type Err = OpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [kind, start, length] = parts.as_slice() else {
            return Err(OpParseError::Shape(s.to_string()));
        };
        let kind = match kind.trim().to_ascii_lowercase().as_str() {
            "set" => OpKind::Set,
            "clear" => OpKind::Clear,
            _ => return Err(OpParseError::Kind(kind.to_string())),
        };
        Ok(RangeOp {
            kind,
            start: parse_field("start", start)?,
            length: parse_field("length", length)?,
        })
    }
}

/// The classic walk-through on a [`DEMO_CAPACITY`]-bit store. The second
/// step runs past the end and is rejected.
pub fn demo_script() -> [RangeOp; 4] {
    [
        RangeOp::set(311, 68),
        RangeOp::set(518, 88),
        RangeOp::set(78, 168),
        RangeOp::clear(121, 18),
    ]
}

/// Outcome of [`run_script`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub applied: usize,
    pub rejected: Vec<(RangeOp, RangeError)>,
}

impl ScriptReport {
    pub fn all_applied(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Applies `ops` in order. `on_step` sees each op, its result, and the store
/// after the attempt.
pub fn run_script<'a, I, F>(store: &mut BitRangeStore, ops: I, mut on_step: F) -> ScriptReport
where
    I: IntoIterator<Item = &'a RangeOp>,
    F: FnMut(&RangeOp, &Result<(), RangeError>, &BitRangeStore),
{
    let mut report = ScriptReport::default();
    for op in ops {
        let result = op.apply(store);
        on_step(op, &result, store);
        match result {
            Ok(()) => report.applied += 1,
            Err(err) => report.rejected.push((*op, err)),
        }
    }
    tracing::debug!(
        applied = report.applied,
        rejected = report.rejected.len(),
        "script finished"
    );
    report
}
