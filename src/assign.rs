//! The two-pass canonical identifier assignment.
//!
//! Pass 1 gives every node interface a provisional, position-based
//! identifier (`base_offset + index`), so a node missing from the
//! canonical table never ends up with an undefined or colliding ID.
//! Pass 2 overwrites identifiers from the canonical tables: node
//! interfaces are walked in reverse order and overridden where the node
//! table names them; messages are then walked forward and overridden
//! unconditionally where matched, with unmatched names surfaced as
//! warnings rather than failures.
//!
//! The whole pass is synchronous and mutates the bus in place. Any
//! rejected identifier update is fatal and aborts the run; re-running
//! the pass on an unchanged catalog is idempotent.

use crate::bus::Bus;
use crate::error::CatalogResult;
use crate::model::NodeId;
use crate::table::IdTables;

/// Default provisional-ID base, chosen above the canonical ranges in use
/// so defaults cannot collide with table values.
pub const DEFAULT_BASE_OFFSET: u32 = 100;

// ── AssignReport ──────────────────────────────────────────────────────

/// Outcome of one assignment pass.
///
/// Unmatched message names are the only expected anomaly in normal
/// operation (new or renamed messages awaiting a table entry); they are
/// collected here and logged, never treated as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignReport {
    /// Interfaces whose identifier came from the node table.
    pub assigned_nodes: usize,
    /// Messages whose identifier came from the message table.
    pub assigned_messages: usize,
    /// Message names with no table entry, in traversal order.
    pub unmatched_messages: Vec<String>,
}

impl AssignReport {
    /// True when every message matched a table entry.
    pub fn is_clean(&self) -> bool {
        self.unmatched_messages.is_empty()
    }
}

// ── IdAssigner ────────────────────────────────────────────────────────

/// Applies the canonical identifier tables to a bus.
pub struct IdAssigner<'a> {
    tables: &'a IdTables,
    base_offset: u32,
}

impl<'a> IdAssigner<'a> {
    /// Create an assigner with the default base offset.
    pub fn new(tables: &'a IdTables) -> Self {
        IdAssigner {
            tables,
            base_offset: DEFAULT_BASE_OFFSET,
        }
    }

    /// Override the provisional-ID base offset.
    ///
    /// Callers picking a custom offset must keep it clear of the
    /// canonical node values; a table value landing on a provisional ID
    /// surfaces as a duplicate-node-id error during the override sweep.
    pub fn with_base_offset(mut self, base_offset: u32) -> Self {
        self.base_offset = base_offset;
        self
    }

    /// Run the full pass: default sweep, node overrides, message
    /// overrides. Fatal on any rejected identifier update.
    pub fn apply(&self, bus: &mut Bus) -> CatalogResult<AssignReport> {
        let mut report = AssignReport::default();
        self.default_sweep(bus)?;
        self.override_node_ids(bus, &mut report)?;
        self.override_message_ids(bus, &mut report);
        Ok(report)
    }

    /// Pass 1: interface at position `i` gets `base_offset + i`.
    fn default_sweep(&self, bus: &mut Bus) -> CatalogResult<()> {
        for index in 0..bus.interface_count() {
            let id = NodeId::try_new(self.base_offset + index as u32)?;
            bus.update_node_id(index, id)?;
        }
        log::debug!(
            "default sweep: {} interfaces from base {}",
            bus.interface_count(),
            self.base_offset
        );
        Ok(())
    }

    /// Pass 2a: canonical node overrides, reverse traversal.
    ///
    /// Reverse order is kept for bit-for-bit reproducibility with the
    /// original tool; each interface is visited exactly once, so the
    /// final mapping is order-independent.
    fn override_node_ids(&self, bus: &mut Bus, report: &mut AssignReport) -> CatalogResult<()> {
        for index in (0..bus.interface_count()).rev() {
            let Some(id) = self.tables.node_id(bus.interfaces()[index].name()) else {
                continue;
            };
            bus.update_node_id(index, id)?;
            report.assigned_nodes += 1;
        }
        Ok(())
    }

    /// Pass 2b: canonical message overrides, forward traversal, with
    /// warn-and-continue on unmatched names.
    fn override_message_ids(&self, bus: &mut Bus, report: &mut AssignReport) {
        for interface in bus.interfaces_mut() {
            for message in interface.messages_mut() {
                match self.tables.message_id(message.name()) {
                    Some(id) => {
                        message.update_id(id);
                        report.assigned_messages += 1;
                    }
                    None => {
                        log::warn!("no canonical id for message \"{}\"", message.name());
                        report.unmatched_messages.push(message.name().to_string());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::BusBuilder;
    use crate::error::CatalogError;
    use crate::model::{MessageId, NodeId};

    fn three_nodes() -> Bus {
        BusBuilder::new("test")
            .node("A")
            .node("B")
            .node("C")
            .build()
            .unwrap()
    }

    fn ids(bus: &Bus) -> Vec<u32> {
        bus.interfaces().iter().map(|i| i.id().raw()).collect()
    }

    #[test]
    fn test_default_sweep_is_positional() {
        let mut bus = three_nodes();
        let tables = IdTables::builder().build().unwrap();
        let report = IdAssigner::new(&tables).apply(&mut bus).unwrap();

        assert_eq!(ids(&bus), vec![100, 101, 102]);
        assert_eq!(report.assigned_nodes, 0);
    }

    #[test]
    fn test_default_sweep_ids_are_distinct() {
        let mut bus = BusBuilder::new("test")
            .node("n0")
            .node("n1")
            .node("n2")
            .node("n3")
            .node("n4")
            .build()
            .unwrap();
        let tables = IdTables::builder().build().unwrap();
        IdAssigner::new(&tables).apply(&mut bus).unwrap();

        let mut seen = ids(&bus);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), bus.interface_count());
    }

    #[test]
    fn test_node_override_from_table() {
        let mut bus = three_nodes();
        let tables = IdTables::builder().node("B", 2).build().unwrap();
        let report = IdAssigner::new(&tables).apply(&mut bus).unwrap();

        assert_eq!(ids(&bus), vec![100, 2, 102]);
        assert_eq!(report.assigned_nodes, 1);
    }

    #[test]
    fn test_untabled_nodes_keep_defaults() {
        let mut bus = three_nodes();
        let tables = IdTables::builder().node("A", 1).node("C", 3).build().unwrap();
        IdAssigner::new(&tables).apply(&mut bus).unwrap();

        assert_eq!(bus.interface("B").unwrap().id(), NodeId::try_new(101).unwrap());
    }

    #[test]
    fn test_custom_base_offset() {
        let mut bus = three_nodes();
        let tables = IdTables::builder().build().unwrap();
        IdAssigner::new(&tables)
            .with_base_offset(500)
            .apply(&mut bus)
            .unwrap();

        assert_eq!(ids(&bus), vec![500, 501, 502]);
    }

    #[test]
    fn test_message_override_allows_shared_ids() {
        let mut bus = BusBuilder::new("test")
            .node("N")
            .message("m1")
            .message("m2")
            .message("m3")
            .build()
            .unwrap();
        let tables = IdTables::builder()
            .message("m1", 5)
            .message("m3", 5)
            .build()
            .unwrap();
        let report = IdAssigner::new(&tables).apply(&mut bus).unwrap();

        let iface = bus.interface("N").unwrap();
        assert_eq!(iface.message("m1").unwrap().id(), MessageId::try_new(5).unwrap());
        assert_eq!(iface.message("m3").unwrap().id(), MessageId::try_new(5).unwrap());
        // m2 has no entry: identifier inherited from construction, untouched.
        assert_eq!(iface.message("m2").unwrap().id(), MessageId::try_new(0).unwrap());
        assert_eq!(report.assigned_messages, 2);
        assert_eq!(report.unmatched_messages, vec!["m2".to_string()]);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_unmatched_messages_in_traversal_order() {
        let mut bus = BusBuilder::new("test")
            .node("N1")
            .message("N1__alpha")
            .node("N2")
            .message("N2__beta")
            .message("N2__gamma")
            .build()
            .unwrap();
        let tables = IdTables::builder().message("N2__beta", 7).build().unwrap();
        let report = IdAssigner::new(&tables).apply(&mut bus).unwrap();

        assert_eq!(
            report.unmatched_messages,
            vec!["N1__alpha".to_string(), "N2__gamma".to_string()]
        );
    }

    #[test]
    fn test_pass_is_idempotent() {
        let mut bus = BusBuilder::new("test")
            .node("A")
            .message("A__announce")
            .node("B")
            .message("B__announce")
            .node("C")
            .build()
            .unwrap();
        let tables = IdTables::builder()
            .node("B", 2)
            .message("A__announce", 70)
            .message("B__announce", 70)
            .build()
            .unwrap();

        let assigner = IdAssigner::new(&tables);
        let first = assigner.apply(&mut bus).unwrap();
        let snapshot = bus.clone();
        let second = assigner.apply(&mut bus).unwrap();

        assert_eq!(bus, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_canonical_node_ids_are_fatal() {
        let mut bus = three_nodes();
        let tables = IdTables::builder().node("A", 7).node("B", 7).build().unwrap();
        let err = IdAssigner::new(&tables).apply(&mut bus).unwrap_err();

        // Reverse traversal assigns B first; A's update then collides.
        match err {
            CatalogError::DuplicateNodeId { id, holder } => {
                assert_eq!(id, 7);
                assert_eq!(holder, "B");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_default_sweep_collision_with_imported_id_is_fatal() {
        // The third interface imported with 101; the sweep hits it while
        // assigning 101 to the second interface.
        let mut bus = BusBuilder::new("test")
            .node("p")
            .node("q")
            .node_with_id("r", 101)
            .build()
            .unwrap();
        let tables = IdTables::builder().build().unwrap();
        let err = IdAssigner::new(&tables).apply(&mut bus).unwrap_err();

        match err {
            CatalogError::DuplicateNodeId { id, holder } => {
                assert_eq!(id, 101);
                assert_eq!(holder, "r");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_base_offset_overflowing_id_range_is_fatal() {
        let mut bus = three_nodes();
        let tables = IdTables::builder().build().unwrap();
        let err = IdAssigner::new(&tables)
            .with_base_offset(NodeId::MAX_RAW - 1)
            .apply(&mut bus)
            .unwrap_err();

        assert!(matches!(err, CatalogError::NodeIdOutOfRange { .. }));
    }

    #[test]
    fn test_empty_bus_is_a_no_op() {
        let mut bus = BusBuilder::new("empty").build().unwrap();
        let tables = IdTables::builder().node("ghost", 1).build().unwrap();
        let report = IdAssigner::new(&tables).apply(&mut bus).unwrap();

        assert_eq!(report, AssignReport::default());
        assert!(report.is_clean());
    }
}
