//! The in-memory CAN network data model.
//!
//! Entities mirror the shape a bus description import produces: a bus
//! holds node interfaces, each interface owns messages, each message owns
//! signals. Identifiers are mutated in place by the assignment pass; the
//! pass never creates or destroys entities.

mod id;
mod message;
mod node;
mod signal;

pub use id::{MessageId, NodeId};
pub use message::Message;
pub use node::NodeInterface;
pub use signal::{Signal, SignalType};
