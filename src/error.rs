//! Structured error types for the catalog.
//!
//! All fallible public APIs return `Result<T, CatalogError>`. Every
//! variant here is fatal in the sense of the assignment pass: a rejected
//! identifier update, a failed lookup, or a malformed table aborts the
//! whole run. Unmatched message names during the override sweep are *not*
//! errors — they accumulate in [`AssignReport`](crate::assign::AssignReport)
//! as warnings.

use thiserror::Error;

/// The top-level error type for the catalog and the assignment pass.
#[derive(Debug, Error)]
pub enum CatalogError {
    // ── Identifier errors ─────────────────────────────────

    /// A node identifier outside the representable range was supplied.
    #[error("node id {value} is out of range (max {max})")]
    NodeIdOutOfRange { value: u32, max: u32 },

    /// A message identifier outside the 11-bit CAN ID space was supplied.
    #[error("message id {value} is out of range (max {max})")]
    MessageIdOutOfRange { value: u32, max: u32 },

    /// An identifier update would give two interfaces on one bus the same
    /// node ID.
    #[error("node id {id} is already held by node \"{holder}\"")]
    DuplicateNodeId { id: u32, holder: String },

    // ── Lookup errors ─────────────────────────────────────

    /// A node name was referenced but no interface with that name is
    /// attached to the bus.
    #[error("node \"{0}\" not found on bus")]
    NodeNotFound(String),

    /// A message name was referenced but the interface owns no such
    /// message.
    #[error("message \"{message}\" not found in node \"{node}\"")]
    MessageNotFound { node: String, message: String },

    /// A signal name was referenced but the message owns no such signal.
    #[error("signal \"{signal}\" not found in message \"{message}\"")]
    SignalNotFound { message: String, signal: String },

    // ── Construction errors ───────────────────────────────

    /// Two interfaces with the same node name on one bus.
    #[error("duplicate node name \"{0}\" on bus")]
    DuplicateNodeName(String),

    /// Two messages with the same name in one interface's local view.
    #[error("duplicate message name \"{message}\" in node \"{node}\"")]
    DuplicateMessageName { node: String, message: String },

    /// Two signals with the same name in one message.
    #[error("duplicate signal name \"{signal}\" in message \"{message}\"")]
    DuplicateSignalName { message: String, signal: String },

    /// A signal type with a bit size outside `1..=64`.
    #[error("signal type \"{name}\" has invalid bit size {size}")]
    InvalidSignalSize { name: String, size: u8 },

    /// A builder call arrived before the entity it attaches to was opened.
    #[error("builder: {0}")]
    BuilderMisuse(String),

    /// The same key declared twice while building an ID table.
    #[error("duplicate table entry for \"{0}\"")]
    DuplicateTableEntry(String),

    // ── Table I/O errors ──────────────────────────────────

    /// The ID table file could not be read.
    #[error("failed to read id tables: {0}")]
    TableIo(#[from] std::io::Error),

    /// The ID table document could not be parsed.
    #[error("malformed id tables: {0}")]
    TableParse(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_duplicate_node_id() {
        let e = CatalogError::DuplicateNodeId { id: 5, holder: "DASH".into() };
        assert_eq!(e.to_string(), "node id 5 is already held by node \"DASH\"");
    }

    #[test]
    fn test_error_display_message_not_found() {
        let e = CatalogError::MessageNotFound {
            node: "BMS".into(),
            message: "BMS__status".into(),
        };
        assert!(e.to_string().contains("BMS__status"));
        assert!(e.to_string().contains("BMS"));
    }

    #[test]
    fn test_error_is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(CatalogError::NodeNotFound("X".into()));
        assert!(!e.to_string().is_empty());
    }

    #[test]
    fn test_catalog_result_err() {
        let r: CatalogResult<u32> = Err(CatalogError::NodeIdOutOfRange { value: 9000, max: 1023 });
        assert!(r.is_err());
    }
}
