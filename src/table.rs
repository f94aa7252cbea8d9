//! `IdTables` — the canonical name→ID tables, as configuration.
//!
//! The tables are immutable for the duration of a run. They come either
//! from a JSON document (`{"nodes": {...}, "messages": {...}}`) or from
//! the fluent builder; the assignment algorithm itself carries no
//! embedded vehicle data.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::model::{MessageId, NodeId};

/// Canonical identifier tables for one vehicle configuration.
///
/// Not every node needs an entry: nodes absent from the table keep their
/// positional default. Several message names may map to one value (a
/// shared announce frame, for instance) — that is a supported convention,
/// not a conflict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTables {
    #[serde(default)]
    nodes: IndexMap<String, NodeId>,
    #[serde(default)]
    messages: IndexMap<String, MessageId>,
}

impl IdTables {
    /// Start building tables from literal entries.
    pub fn builder() -> IdTablesBuilder {
        IdTablesBuilder::default()
    }

    /// Load tables from a JSON string.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load tables from any reader producing a JSON document.
    pub fn from_json_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load tables from a JSON file on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        Self::from_json_reader(File::open(path)?)
    }

    /// Canonical identifier for a node name, if the table has one.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.nodes.get(name).copied()
    }

    /// Canonical identifier for a message name, if the table has one.
    pub fn message_id(&self, name: &str) -> Option<MessageId> {
        self.messages.get(name).copied()
    }

    /// Node entries in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.nodes.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Message entries in declaration order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, MessageId)> {
        self.messages.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Number of node entries.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of message entries.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

/// Fluent construction of [`IdTables`] from literal entries.
///
/// Values are range-checked and duplicate keys rejected at [`build`](Self::build).
#[derive(Debug, Default)]
pub struct IdTablesBuilder {
    nodes: Vec<(String, u32)>,
    messages: Vec<(String, u32)>,
}

impl IdTablesBuilder {
    /// Declare a canonical node identifier.
    pub fn node(mut self, name: &str, id: u32) -> Self {
        self.nodes.push((name.to_string(), id));
        self
    }

    /// Declare a canonical message identifier.
    pub fn message(mut self, name: &str, id: u32) -> Self {
        self.messages.push((name.to_string(), id));
        self
    }

    /// Validate every entry and produce the tables.
    pub fn build(self) -> CatalogResult<IdTables> {
        let mut nodes = IndexMap::new();
        for (name, raw) in self.nodes {
            let id = NodeId::try_new(raw)?;
            if nodes.insert(name.clone(), id).is_some() {
                return Err(CatalogError::DuplicateTableEntry(name));
            }
        }
        let mut messages = IndexMap::new();
        for (name, raw) in self.messages {
            let id = MessageId::try_new(raw)?;
            if messages.insert(name.clone(), id).is_some() {
                return Err(CatalogError::DuplicateTableEntry(name));
            }
        }
        Ok(IdTables { nodes, messages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_round_trip() {
        let tables = IdTables::builder()
            .node("DASH", 5)
            .node("BMS", 4)
            .message("DASH__announce", 100)
            .message("BMS__announce", 100)
            .build()
            .unwrap();

        assert_eq!(tables.node_id("DASH"), Some(NodeId::try_new(5).unwrap()));
        assert_eq!(tables.node_id("TPMS"), None);
        // Shared value across two message names is legal.
        assert_eq!(tables.message_id("DASH__announce"), tables.message_id("BMS__announce"));
        assert_eq!(tables.node_count(), 2);
        assert_eq!(tables.message_count(), 2);
    }

    #[test]
    fn test_builder_rejects_duplicate_key() {
        let err = IdTables::builder()
            .node("DASH", 5)
            .node("DASH", 6)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("DASH"));
    }

    #[test]
    fn test_builder_rejects_out_of_range() {
        assert!(IdTables::builder().message("M", 4096).build().is_err());
        assert!(IdTables::builder().node("N", 1024).build().is_err());
    }

    #[test]
    fn test_json_loading() {
        let json = r#"{
            "nodes": { "DASH": 5, "BMS": 4 },
            "messages": { "DASH__announce": 100, "BMS__status": 76 }
        }"#;
        let tables = IdTables::from_json_str(json).unwrap();
        assert_eq!(tables.node_id("BMS").unwrap().raw(), 4);
        assert_eq!(tables.message_id("BMS__status").unwrap().raw(), 76);
    }

    #[test]
    fn test_json_rejects_out_of_range() {
        let json = r#"{ "nodes": {}, "messages": { "M": 9999 } }"#;
        assert!(IdTables::from_json_str(json).is_err());
    }

    #[test]
    fn test_json_missing_sections_default_empty() {
        let tables = IdTables::from_json_str("{}").unwrap();
        assert_eq!(tables.node_count(), 0);
        assert_eq!(tables.message_count(), 0);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let tables = IdTables::builder()
            .node("C", 3)
            .node("A", 1)
            .node("B", 2)
            .build()
            .unwrap();
        let names: Vec<&str> = tables.nodes().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
