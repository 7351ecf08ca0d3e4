//! Unicast binding table (9.6).
//!
//! Each entry ties a local client cluster instance to one remote cluster
//! instance on a peer node. Fanout walks the table and dispatches once
//! per matching entry.

use crate::constants::{ClusterId, EndpointId, FabricIndex, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingEntry {
    pub local_endpoint_id: EndpointId,
    pub cluster_id: ClusterId,
    pub fabric_index: FabricIndex,
    pub node_id: NodeId,
    pub remote_endpoint_id: EndpointId,
}

#[derive(Debug, Default)]
pub struct BindingTable {
    entries: Vec<BindingEntry>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicate entries are kept; fanout then fires once per copy,
    /// mirroring how the table behaves when written over the wire.
    pub fn add(&mut self, entry: BindingEntry) {
        self.entries.push(entry);
    }

    pub fn remove(&mut self, entry: &BindingEntry) {
        if let Some(pos) = self.entries.iter().position(|e| e == entry) {
            self.entries.remove(pos);
        }
    }

    pub fn matching(
        &self,
        local_endpoint_id: EndpointId,
        cluster_id: ClusterId,
    ) -> impl Iterator<Item = &BindingEntry> {
        self.entries
            .iter()
            .filter(move |e| e.local_endpoint_id == local_endpoint_id && e.cluster_id == cluster_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(local: EndpointId, cluster: ClusterId, node: NodeId) -> BindingEntry {
        BindingEntry {
            local_endpoint_id: local,
            cluster_id: cluster,
            fabric_index: 1,
            node_id: node,
            remote_endpoint_id: 1,
        }
    }

    #[test]
    fn matching_filters_on_endpoint_and_cluster() {
        let mut table = BindingTable::new();
        table.add(entry(1, 0x0006, 10));
        table.add(entry(1, 0x0008, 11));
        table.add(entry(2, 0x0006, 12));
        table.add(entry(1, 0x0006, 13));

        let nodes: Vec<NodeId> = table.matching(1, 0x0006).map(|e| e.node_id).collect();
        assert_eq!(nodes, vec![10, 13]);
        assert_eq!(table.matching(3, 0x0006).count(), 0);
    }

    #[test]
    fn remove_drops_a_single_copy() {
        let mut table = BindingTable::new();
        table.add(entry(1, 0x0006, 10));
        table.add(entry(1, 0x0006, 10));
        table.remove(&entry(1, 0x0006, 10));
        assert_eq!(table.len(), 1);
    }
}
