//! # Line Qubit
//!
//! A qubit on a 1D line, identified by its integer position `x`.

use crate::errors::QubitError;
use crate::proto::{self, ProtoDict};
use crate::qubit_id::{QubitId, QubitOrdering};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A qubit on a 1D lattice.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineQubit {
    x: i64,
}

impl LineQubit {
    /// Type tag used for hashing and diagnostics.
    pub const TYPE_TAG: &'static str = "LineQubit";

    /// Create a line qubit at position `x`.
    pub const fn new(x: i64) -> Self {
        Self { x }
    }

    /// Position on the line.
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// True iff `other` is a line qubit one step away.
    pub fn is_adjacent(&self, other: &dyn QubitId) -> bool {
        other
            .as_any()
            .downcast_ref::<LineQubit>()
            .is_some_and(|other| self.x.abs_diff(other.x) == 1)
    }

    /// Read a line qubit from a dict with an `"x"` key.
    pub fn from_proto_dict(dict: &ProtoDict) -> Result<Self, QubitError> {
        proto::require_keys(dict, &["x"])?;
        Ok(Self::new(proto::int_field(dict, "x")?))
    }
}

impl Hash for LineQubit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::TYPE_TAG.hash(state);
        self.x.hash(state);
    }
}

impl fmt::Debug for LineQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineQubit({})", self.x)
    }
}

impl fmt::Display for LineQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.x)
    }
}

impl QubitId for LineQubit {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn compare(&self, other: &dyn QubitId) -> QubitOrdering {
        QubitOrdering::compare_same_type(self, other, |a, b| a.x.cmp(&b.x))
    }

    fn hash_fields(&self, mut state: &mut dyn Hasher) {
        self.x.hash(&mut state);
    }

    fn to_proto_dict(&self) -> ProtoDict {
        let mut dict = ProtoDict::new();
        dict.insert("x".to_string(), Value::from(self.x));
        dict
    }
}
