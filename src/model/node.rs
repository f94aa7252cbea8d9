//! `NodeInterface` — a named endpoint attached to a bus.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

use super::id::NodeId;
use super::message::Message;

/// A node interface: the attachment of one node (ECU) to one bus.
///
/// Owns the messages that node transmits on the bus, in a stable
/// (insertion) order. The node identifier is mutable in place; bus-level
/// uniqueness is enforced by [`Bus`](crate::bus::Bus), not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInterface {
    name: String,
    id: NodeId,
    messages: Vec<Message>,
}

impl NodeInterface {
    /// Create an interface with an initial identifier and no messages.
    pub fn new(name: &str, id: NodeId) -> Self {
        NodeInterface {
            name: name.to_string(),
            id,
            messages: Vec::new(),
        }
    }

    /// The node's name — the lookup key for the canonical ID table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current node identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Overwrite the node identifier.
    ///
    /// Range is enforced by [`NodeId`] construction; uniqueness across a
    /// bus is enforced by [`Bus::update_node_id`](crate::bus::Bus::update_node_id),
    /// which is what the assignment pass goes through.
    pub fn update_id(&mut self, id: NodeId) {
        self.id = id;
    }

    /// Attach a message. Message names are unique within an interface's
    /// local view.
    pub fn add_message(&mut self, message: Message) -> Result<(), CatalogError> {
        if self.messages.iter().any(|m| m.name() == message.name()) {
            return Err(CatalogError::DuplicateMessageName {
                node: self.name.clone(),
                message: message.name().to_string(),
            });
        }
        self.messages.push(message);
        Ok(())
    }

    /// Messages in stable (insertion) order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages in stable order, mutably.
    pub fn messages_mut(&mut self) -> &mut [Message] {
        &mut self.messages
    }

    /// Look up a message by name within this interface's local view.
    pub fn message(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.name() == name)
    }

    /// Look up a message by name, mutably.
    pub fn message_mut(&mut self, name: &str) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.name() == name)
    }
}
