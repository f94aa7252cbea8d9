//! # cannet — CAN network catalog & canonical identifier assignment
//!
//! An in-memory model of a CAN bus (node interfaces, messages, signals)
//! and a deterministic two-pass algorithm that assigns canonical numeric
//! identifiers to nodes and messages from externally supplied name→ID
//! tables. No async, no threads, no I/O mid-pass — a synchronous,
//! in-place, idempotent transformation.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────┐
//! │      IdAssigner        │ ← the two-pass renumbering
//! │  ┌─────────────────┐  │
//! │  │      Bus         │  │ ← ordered node interfaces
//! │  │  ┌─────────────┐ │  │
//! │  │  │ NodeIface   │ │  │ ← name + mutable NodeId
//! │  │  │  Messages   │ │  │ ← name + mutable MessageId
//! │  │  │   Signals   │ │  │ ← name + value type
//! │  │  └─────────────┘ │  │
//! │  └─────────────────┘  │
//! │  ┌─────────────────┐  │
//! │  │    IdTables      │  │ ← canonical name→ID configuration
//! │  └─────────────────┘  │
//! └───────────────────────┘
//! ```
//!
//! The assignment runs in two stages: a positional default sweep gives
//! every interface `base_offset + index`, then canonical overrides are
//! applied — node table entries win where present, message table entries
//! win unconditionally, and unmatched message names are reported as
//! warnings in the [`AssignReport`] rather than failing the run.

pub mod assign;
pub mod bus;
pub mod dsl;
pub mod error;
pub mod model;
pub mod patch;
pub mod table;

// Re-exports for convenience.
pub use assign::{AssignReport, DEFAULT_BASE_OFFSET, IdAssigner};
pub use bus::Bus;
pub use dsl::BusBuilder;
pub use error::{CatalogError, CatalogResult};
pub use model::{Message, MessageId, NodeId, NodeInterface, Signal, SignalType};
pub use patch::{rename_signal_type, replace_signal_type};
pub use table::IdTables;
