//! Node and message identifiers — lightweight, ordered, copyable newtypes.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A numeric identifier for a node interface on a bus.
///
/// `NodeId` is intentionally a newtype around `u32` rather than a bare
/// integer to prevent accidental confusion with message identifiers or
/// positional indices at compile time. Values are range-checked at
/// construction; node IDs are additionally unique per bus, enforced by
/// [`Bus::update_node_id`](crate::bus::Bus::update_node_id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NodeId(u32);

impl NodeId {
    /// Largest representable node identifier.
    pub const MAX_RAW: u32 = 1023;

    /// Create a node ID, rejecting out-of-range values.
    pub fn try_new(id: u32) -> Result<Self, CatalogError> {
        if id > Self::MAX_RAW {
            return Err(CatalogError::NodeIdOutOfRange { value: id, max: Self::MAX_RAW });
        }
        Ok(NodeId(id))
    }

    /// Return the underlying integer.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for NodeId {
    type Error = CatalogError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        NodeId::try_new(id)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> u32 {
        id.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// A numeric identifier for a message.
///
/// Bounded by the 11-bit CAN identifier space. Unlike [`NodeId`], message
/// identifiers carry no uniqueness constraint: a fleet convention may
/// deliberately map several message names to one shared identifier (e.g. a
/// common announce frame), and the model permits that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MessageId(u32);

impl MessageId {
    /// Largest representable message identifier (11-bit CAN ID space).
    pub const MAX_RAW: u32 = 2047;

    /// Create a message ID, rejecting out-of-range values.
    pub fn try_new(id: u32) -> Result<Self, CatalogError> {
        if id > Self::MAX_RAW {
            return Err(CatalogError::MessageIdOutOfRange { value: id, max: Self::MAX_RAW });
        }
        Ok(MessageId(id))
    }

    /// Return the underlying integer.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for MessageId {
    type Error = CatalogError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        MessageId::try_new(id)
    }
}

impl From<MessageId> for u32 {
    fn from(id: MessageId) -> u32 {
        id.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M{}", self.0)
    }
}
