//! `Message` — a named frame owned by one node interface.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

use super::id::MessageId;
use super::signal::Signal;

/// A message (frame) in the catalog.
///
/// Owned by exactly one [`NodeInterface`](super::node::NodeInterface).
/// The identifier is mutable in place; the identifier-assignment pass
/// overwrites it from the canonical message table. Message identifiers
/// carry no uniqueness constraint (see [`MessageId`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    name: String,
    id: MessageId,
    signals: Vec<Signal>,
}

impl Message {
    /// Create a message with an initial identifier and no signals.
    pub fn new(name: &str, id: MessageId) -> Self {
        Message {
            name: name.to_string(),
            id,
            signals: Vec::new(),
        }
    }

    /// The message's name — the lookup key for the canonical ID table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current identifier.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Overwrite the identifier. Always succeeds: message identifiers are
    /// range-checked at [`MessageId`] construction and are allowed to
    /// collide across messages.
    pub fn update_id(&mut self, id: MessageId) {
        self.id = id;
    }

    /// Attach a signal. Signal names are unique within a message.
    pub fn add_signal(&mut self, signal: Signal) -> Result<(), CatalogError> {
        if self.signals.iter().any(|s| s.name() == signal.name()) {
            return Err(CatalogError::DuplicateSignalName {
                message: self.name.clone(),
                signal: signal.name().to_string(),
            });
        }
        self.signals.push(signal);
        Ok(())
    }

    /// Signals in stable (insertion) order.
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Look up a signal by name.
    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.name() == name)
    }

    /// Look up a signal by name, mutably.
    pub fn signal_mut(&mut self, name: &str) -> Option<&mut Signal> {
        self.signals.iter_mut().find(|s| s.name() == name)
    }
}
