//! # Qubit Types Crate
//!
//! Value types that identify qubits inside a quantum-circuit framework.
//!
//! ## Design Principles
//!
//! - **Immutable identifiers**: All identifiers are fixed at construction and
//!   are safe to use as map keys and set members.
//! - **One capability, many variants**: `GridQubit`, `LineQubit` and
//!   `NamedQubit` all implement the object-safe `QubitId` trait.
//! - **No panics across variants**: Comparing identifiers of different kinds
//!   yields `QubitOrdering::Incomparable`.
//! - **Proto dicts**: Each identifier round-trips through a small JSON object
//!   so it can be embedded in larger protocol messages.
//!
//! ## Example
//!
//! ```
//! use qubit_types::{GridQubit, QubitId};
//!
//! let a = GridQubit::new(0, 0);
//! let b = GridQubit::new(0, 1);
//! assert!(a < b);
//! assert!(a.is_adjacent(&b));
//! assert_eq!(format!("{b:?}"), "GridQubit(0, 1)");
//! assert_eq!(GridQubit::from_proto_dict(&b.to_proto_dict()).unwrap(), b);
//! ```

pub mod errors;
pub mod grid_qubit;
pub mod line_qubit;
pub mod named_qubit;
pub mod proto;
pub mod qubit_id;

pub use errors::QubitError;
pub use grid_qubit::GridQubit;
pub use line_qubit::LineQubit;
pub use named_qubit::NamedQubit;
pub use proto::ProtoDict;
pub use qubit_id::{QubitId, QubitOrdering};
