//! Taxi path nodes, an event reachability source

use serde::{Deserialize, Serialize};

/// One node of a taxi path; its arrival/departure fields fire game events
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxiPathNode {
    pub path_id: u32,
    pub node_index: u32,
    /// Event fired on arriving at this node; 0 = none
    pub arrival_event_id: u32,
    /// Event fired on leaving this node; 0 = none
    pub departure_event_id: u32,
}

/// Store of all taxi path nodes
#[derive(Debug, Clone, Default)]
pub struct TaxiPathStore {
    nodes: Vec<TaxiPathNode>,
}

impl TaxiPathStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: TaxiPathNode) {
        self.nodes.push(node);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaxiPathNode> {
        self.nodes.iter()
    }
}
