//! Fluent builder DSL for catalog construction.
//!
//! Provides an ergonomic API that hides the boilerplate of creating a
//! bus, attaching interfaces, messages, and signals — the shape a DBC
//! import would otherwise materialize. Used by the demo binary and
//! throughout the tests.

use crate::bus::Bus;
use crate::error::{CatalogError, CatalogResult};
use crate::model::{Message, MessageId, NodeId, NodeInterface, Signal, SignalType};

// ── BusBuilder ────────────────────────────────────────────────────────

/// Fluent builder for constructing a [`Bus`].
///
/// `node` opens an interface; `message` attaches a message to the most
/// recently opened interface; `signal` attaches a signal to the most
/// recently opened message. Name collisions and misordered calls are
/// reported at [`build`](Self::build).
///
/// # Example
/// ```rust
/// use cannet::dsl::BusBuilder;
/// use cannet::model::SignalType;
///
/// let bus = BusBuilder::new("Main CAN Bus")
///     .baudrate(1_000_000)
///     .node("DASH")
///     .message("DASH__announce")
///     .signal("FW_major_version", SignalType::integer("uint8_t", 8, false).unwrap())
///     .node("BMS")
///     .message("BMS__status")
///     .build()
///     .unwrap();
/// assert_eq!(bus.interface_count(), 2);
/// ```
pub struct BusBuilder {
    name: String,
    baudrate: Option<u32>,
    nodes: Vec<NodeDraft>,
    misuse: Option<String>,
}

struct NodeDraft {
    name: String,
    id: u32,
    messages: Vec<MessageDraft>,
}

struct MessageDraft {
    name: String,
    id: u32,
    signals: Vec<Signal>,
}

impl BusBuilder {
    /// Create a builder for a bus with the given name.
    pub fn new(name: &str) -> Self {
        BusBuilder {
            name: name.to_string(),
            baudrate: None,
            nodes: Vec::new(),
            misuse: None,
        }
    }

    /// Set the bus baudrate in bit/s.
    pub fn baudrate(mut self, baudrate: u32) -> Self {
        self.baudrate = Some(baudrate);
        self
    }

    // ── Nodes ─────────────────────────────────────────────────

    /// Open a node interface with a zero pre-assignment identifier.
    pub fn node(self, name: &str) -> Self {
        self.node_with_id(name, 0)
    }

    /// Open a node interface with an explicit pre-assignment identifier,
    /// as a DBC import carrying existing IDs would.
    pub fn node_with_id(mut self, name: &str, id: u32) -> Self {
        self.nodes.push(NodeDraft {
            name: name.to_string(),
            id,
            messages: Vec::new(),
        });
        self
    }

    // ── Messages ──────────────────────────────────────────────

    /// Attach a message with a zero pre-assignment identifier to the most
    /// recently opened interface.
    pub fn message(self, name: &str) -> Self {
        self.message_with_id(name, 0)
    }

    /// Attach a message with an explicit pre-assignment identifier.
    pub fn message_with_id(mut self, name: &str, id: u32) -> Self {
        match self.nodes.last_mut() {
            Some(node) => node.messages.push(MessageDraft {
                name: name.to_string(),
                id,
                signals: Vec::new(),
            }),
            None => self.note_misuse(format!("message \"{}\" declared before any node", name)),
        }
        self
    }

    // ── Signals ───────────────────────────────────────────────

    /// Attach a signal to the most recently attached message.
    pub fn signal(mut self, name: &str, ty: SignalType) -> Self {
        match self.nodes.last_mut().and_then(|n| n.messages.last_mut()) {
            Some(message) => message.signals.push(Signal::new(name, ty)),
            None => self.note_misuse(format!("signal \"{}\" declared before any message", name)),
        }
        self
    }

    // ── Build ─────────────────────────────────────────────────

    /// Validate every entry and produce the bus.
    pub fn build(self) -> CatalogResult<Bus> {
        if let Some(msg) = self.misuse {
            return Err(CatalogError::BuilderMisuse(msg));
        }

        let mut bus = Bus::new(&self.name);
        if let Some(baudrate) = self.baudrate {
            bus.set_baudrate(baudrate);
        }

        for node in self.nodes {
            let mut interface = NodeInterface::new(&node.name, NodeId::try_new(node.id)?);
            for message in node.messages {
                let mut msg = Message::new(&message.name, MessageId::try_new(message.id)?);
                for signal in message.signals {
                    msg.add_signal(signal)?;
                }
                interface.add_message(msg)?;
            }
            bus.add_interface(interface)?;
        }
        Ok(bus)
    }

    fn note_misuse(&mut self, msg: String) {
        // Only the first misuse is reported; later ones are noise.
        if self.misuse.is_none() {
            self.misuse = Some(msg);
        }
    }
}
