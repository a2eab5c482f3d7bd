//! # Grid Qubit
//!
//! A qubit on a 2D square lattice, identified by its `(row, col)` coordinate.
//!
//! Grid qubits use row-major ordering:
//!
//! ```text
//! GridQubit(0, 0) < GridQubit(0, 1) < GridQubit(1, 0) < GridQubit(1, 1)
//! ```
//!
//! ## Proto Dict Format
//!
//! ```json
//! { "row": 3, "col": 4 }
//! ```

use crate::errors::QubitError;
use crate::proto::{self, ProtoDict};
use crate::qubit_id::{QubitId, QubitOrdering};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A qubit on a 2D square lattice.
///
/// The coordinate is fixed at construction. Any integers are accepted,
/// including negative ones.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridQubit {
    row: i64,
    col: i64,
}

impl GridQubit {
    /// Type tag used for hashing and diagnostics.
    pub const TYPE_TAG: &'static str = "GridQubit";

    const PROTO_KEYS: [&'static str; 2] = ["row", "col"];

    /// Create a grid qubit at `(row, col)`.
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Lattice row.
    pub const fn row(&self) -> i64 {
        self.row
    }

    /// Lattice column.
    pub const fn col(&self) -> i64 {
        self.col
    }

    /// Determines if two qubits are adjacent qubits.
    ///
    /// True iff `other` exposes a grid coordinate exactly one step away along
    /// a single axis. Unlike equality, this accepts any identifier that
    /// reports itself through [`QubitId::as_grid_qubit`].
    pub fn is_adjacent(&self, other: &dyn QubitId) -> bool {
        other.as_grid_qubit().is_some_and(|other| {
            self.row
                .abs_diff(other.row)
                .checked_add(self.col.abs_diff(other.col))
                == Some(1)
        })
    }

    /// Process-independent hash, see [`QubitId`].
    pub fn stable_hash(&self) -> u64 {
        <dyn QubitId>::stable_hash(self)
    }

    /// Read a grid qubit from a dict with `"row"` and `"col"` keys.
    pub fn from_proto_dict(dict: &ProtoDict) -> Result<Self, QubitError> {
        proto::require_keys(dict, &Self::PROTO_KEYS)?;
        let row = proto::int_field(dict, "row")?;
        let col = proto::int_field(dict, "col")?;
        Ok(Self::new(row, col))
    }

    /// Encode the proto dict as a JSON string.
    pub fn to_proto_json(&self) -> Result<String, QubitError> {
        Ok(serde_json::to_string(&Value::Object(self.to_proto_dict()))?)
    }

    /// Decode a grid qubit from a JSON object string.
    pub fn from_proto_json(json: &str) -> Result<Self, QubitError> {
        Self::from_proto_dict(&proto::parse_object(json)?)
    }
}

impl From<(i64, i64)> for GridQubit {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl Hash for GridQubit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::TYPE_TAG.hash(state);
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl fmt::Debug for GridQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridQubit({}, {})", self.row, self.col)
    }
}

impl fmt::Display for GridQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl QubitId for GridQubit {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn compare(&self, other: &dyn QubitId) -> QubitOrdering {
        QubitOrdering::compare_same_type(self, other, |a, b| {
            (a.row, a.col).cmp(&(b.row, b.col))
        })
    }

    fn hash_fields(&self, mut state: &mut dyn Hasher) {
        self.row.hash(&mut state);
        self.col.hash(&mut state);
    }

    fn as_grid_qubit(&self) -> Option<&GridQubit> {
        Some(self)
    }

    fn to_proto_dict(&self) -> ProtoDict {
        let mut dict = ProtoDict::new();
        dict.insert("row".to_string(), Value::from(self.row));
        dict.insert("col".to_string(), Value::from(self.col));
        dict
    }
}
