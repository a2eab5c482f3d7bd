//! # Qubit Identifier Capability
//!
//! Defines the contract every qubit identifier variant implements so that
//! identifiers of different kinds can live side by side in the same circuit.
//!
//! ## Comparison Rules
//!
//! - Identifiers of the same concrete type compare by their fields.
//! - Identifiers of different concrete types are `Incomparable`: never equal,
//!   never ordered, and comparing them never panics.
//! - Hashing covers the variant's type tag, so `GridQubit(1, 2)` and a
//!   hypothetical variant with the same fields land in different buckets.
//!
//! ## Example Implementation
//!
//! ```rust,ignore
//! use qubit_types::{ProtoDict, QubitId, QubitOrdering};
//! use std::any::Any;
//! use std::hash::{Hash, Hasher};
//!
//! #[derive(Debug)]
//! pub struct MyQubit(u32);
//!
//! impl QubitId for MyQubit {
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn type_tag(&self) -> &'static str { "MyQubit" }
//!     fn compare(&self, other: &dyn QubitId) -> QubitOrdering {
//!         QubitOrdering::compare_same_type(self, other, |a, b| a.0.cmp(&b.0))
//!     }
//!     fn hash_fields(&self, mut state: &mut dyn Hasher) { self.0.hash(&mut state) }
//!     fn to_proto_dict(&self) -> ProtoDict { ProtoDict::new() }
//! }
//! ```

use crate::grid_qubit::GridQubit;
use crate::proto::ProtoDict;
use siphasher::sip::SipHasher13;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Result of comparing two qubit identifiers.
///
/// `Incomparable` is returned when the operands are different concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QubitOrdering {
    /// Left operand sorts first.
    Less,
    /// Operands are the same identifier.
    Equal,
    /// Left operand sorts last.
    Greater,
    /// Operands are different kinds of identifier.
    Incomparable,
}

impl QubitOrdering {
    /// Compare `this` against `other` using `cmp` when `other` is also a `T`.
    pub fn compare_same_type<T, F>(this: &T, other: &dyn QubitId, cmp: F) -> Self
    where
        T: QubitId,
        F: FnOnce(&T, &T) -> Ordering,
    {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => cmp(this, other).into(),
            None => QubitOrdering::Incomparable,
        }
    }

    /// The standard ordering, or `None` when incomparable.
    #[must_use]
    pub fn to_ordering(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Equal => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
            Self::Incomparable => None,
        }
    }

    /// Returns true if the operands are equal.
    #[must_use]
    pub fn is_eq(self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Returns true if the operands are different kinds of identifier.
    #[must_use]
    pub fn is_incomparable(self) -> bool {
        matches!(self, Self::Incomparable)
    }
}

impl From<Ordering> for QubitOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl fmt::Display for QubitOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Less => write!(f, "Less"),
            Self::Equal => write!(f, "Equal"),
            Self::Greater => write!(f, "Greater"),
            Self::Incomparable => write!(f, "Incomparable"),
        }
    }
}

/// A unique label for a quantum bit within a circuit.
///
/// `Debug` gives the constructor-like form (`GridQubit(3, 4)`) and `Display`
/// the compact human form (`(3, 4)`).
pub trait QubitId: Any + fmt::Debug + fmt::Display + Send + Sync {
    /// Upcast for exact-type checks.
    fn as_any(&self) -> &dyn Any;

    /// Stable name of the concrete variant.
    fn type_tag(&self) -> &'static str;

    /// Compare against any identifier.
    fn compare(&self, other: &dyn QubitId) -> QubitOrdering;

    /// Feed the variant's fields (not its type tag) into `state`.
    fn hash_fields(&self, state: &mut dyn Hasher);

    /// The grid coordinate this identifier stands for, if any.
    ///
    /// Adjacency on the grid consults this rather than the exact type, so a
    /// wrapper around a `GridQubit` can be adjacent to one while still never
    /// comparing equal to it.
    fn as_grid_qubit(&self) -> Option<&GridQubit> {
        None
    }

    /// The proto dict form of this identifier.
    fn to_proto_dict(&self) -> ProtoDict;

    /// Constructor-like representation for debugging.
    fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }

    /// Compact human-readable representation.
    fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl dyn QubitId {
    /// Process-independent hash of the type tag and fields.
    ///
    /// Uses SipHash-1-3 with zero keys so the value does not change between
    /// runs or toolchains.
    pub fn stable_hash(&self) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(0, 0);
        Hash::hash(self, &mut hasher);
        hasher.finish()
    }
}

impl PartialEq for dyn QubitId {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}

impl PartialOrd for dyn QubitId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).to_ordering()
    }
}

impl Hash for dyn QubitId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_tag().hash(state);
        self.hash_fields(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineQubit, NamedQubit};

    #[test]
    fn test_ordering_conversion() {
        assert_eq!(QubitOrdering::from(Ordering::Less), QubitOrdering::Less);
        assert_eq!(QubitOrdering::Equal.to_ordering(), Some(Ordering::Equal));
        assert_eq!(QubitOrdering::Incomparable.to_ordering(), None);
        assert!(QubitOrdering::Incomparable.is_incomparable());
        assert!(!QubitOrdering::Greater.is_eq());
    }

    #[test]
    fn test_cross_type_comparison_is_incomparable() {
        let grid: &dyn QubitId = &GridQubit::new(0, 1);
        let line: &dyn QubitId = &LineQubit::new(1);

        assert_eq!(grid.compare(line), QubitOrdering::Incomparable);
        assert!(grid != line);
        assert_eq!(grid.partial_cmp(line), None);
        assert!(!grid.lt(line));
        assert!(!grid.le(line));
        assert!(!grid.gt(line));
        assert!(!grid.ge(line));
    }

    #[test]
    fn test_dyn_relational_operators() {
        let a: &dyn QubitId = &GridQubit::new(0, 0);
        let b: &dyn QubitId = &GridQubit::new(0, 1);

        assert!(a.lt(b));
        assert!(a.le(b));
        assert!(a.le(a));
        assert!(b.gt(a));
        assert!(b.ge(b));
        assert!(a < b);
    }

    #[test]
    fn test_stable_hash_includes_type_tag() {
        let line: &dyn QubitId = &LineQubit::new(5);
        let named: &dyn QubitId = &NamedQubit::new("5");
        let line_again: &dyn QubitId = &LineQubit::new(5);

        assert_eq!(line.stable_hash(), line_again.stable_hash());
        assert_ne!(line.stable_hash(), named.stable_hash());
    }

    #[test]
    fn test_default_string_forms() {
        let q: &dyn QubitId = &GridQubit::new(3, 4);
        assert_eq!(q.to_debug_string(), "GridQubit(3, 4)");
        assert_eq!(q.to_display_string(), "(3, 4)");
    }
}
