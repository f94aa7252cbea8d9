//! `Bus` — an ordered catalog of node interfaces.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::model::{NodeId, NodeInterface};

/// A CAN bus: a named, ordered collection of node interfaces.
///
/// Interface order is the insertion order and is stable across the life
/// of the bus; the assignment pass relies on it for the positional
/// default sweep. Node identifiers are unique per bus, enforced by
/// [`Bus::update_node_id`]; message identifiers are not (see
/// [`MessageId`](crate::model::MessageId)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    name: String,
    baudrate: Option<u32>,
    interfaces: Vec<NodeInterface>,
}

impl Bus {
    /// Create an empty bus.
    pub fn new(name: &str) -> Self {
        Bus {
            name: name.to_string(),
            baudrate: None,
            interfaces: Vec::new(),
        }
    }

    /// The bus's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the bus.
    pub fn update_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Baudrate in bit/s, if one has been set.
    pub fn baudrate(&self) -> Option<u32> {
        self.baudrate
    }

    /// Set the baudrate in bit/s.
    pub fn set_baudrate(&mut self, baudrate: u32) {
        self.baudrate = Some(baudrate);
    }

    /// Attach an interface. Node names are unique per bus.
    pub fn add_interface(&mut self, interface: NodeInterface) -> CatalogResult<()> {
        if self.interfaces.iter().any(|i| i.name() == interface.name()) {
            return Err(CatalogError::DuplicateNodeName(interface.name().to_string()));
        }
        self.interfaces.push(interface);
        Ok(())
    }

    /// Node interfaces in stable (insertion) order.
    pub fn interfaces(&self) -> &[NodeInterface] {
        &self.interfaces
    }

    /// Node interfaces in stable order, mutably.
    pub fn interfaces_mut(&mut self) -> &mut [NodeInterface] {
        &mut self.interfaces
    }

    /// Number of attached interfaces.
    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }

    /// Look up an interface by node name.
    pub fn interface(&self, node_name: &str) -> CatalogResult<&NodeInterface> {
        self.interfaces
            .iter()
            .find(|i| i.name() == node_name)
            .ok_or_else(|| CatalogError::NodeNotFound(node_name.to_string()))
    }

    /// Look up an interface by node name, mutably.
    pub fn interface_mut(&mut self, node_name: &str) -> CatalogResult<&mut NodeInterface> {
        self.interfaces
            .iter_mut()
            .find(|i| i.name() == node_name)
            .ok_or_else(|| CatalogError::NodeNotFound(node_name.to_string()))
    }

    /// Overwrite the node identifier of the interface at `index`.
    ///
    /// This is the mutator the assignment pass goes through: it rejects
    /// the update if another interface on this bus already holds the
    /// identifier. Re-setting an interface to the identifier it already
    /// holds succeeds.
    pub fn update_node_id(&mut self, index: usize, id: NodeId) -> CatalogResult<()> {
        if let Some(holder) = self
            .interfaces
            .iter()
            .enumerate()
            .find(|(i, iface)| *i != index && iface.id() == id)
        {
            return Err(CatalogError::DuplicateNodeId {
                id: id.raw(),
                holder: holder.1.name().to_string(),
            });
        }
        self.interfaces[index].update_id(id);
        Ok(())
    }
}
