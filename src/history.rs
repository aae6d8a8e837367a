use crate::puzzle::Arrangement;
use std::collections::HashMap;

/// Exploration metadata for one discovered arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStatus {
    pub closed: bool,
    pub cost: usize,
    /// Empty-slot position in the arrangement this node was reached from.
    pub predecessor_empty: Option<usize>,
    pub priority: usize,
    pub depth: usize,
}

impl NodeStatus {
    pub fn start() -> Self {
        Self {
            closed: false,
            cost: 0,
            predecessor_empty: None,
            priority: 0,
            depth: 0,
        }
    }
}

/// Every arrangement seen during one solve, in discovery order.
///
/// Records are never removed. Overwriting an open record keeps its original
/// slot in the order, which is what node selection scans.
#[derive(Debug, Default)]
pub struct History {
    index: HashMap<Arrangement, usize>,
    nodes: Vec<(Arrangement, NodeStatus)>,
}

impl History {
    /// Slot of the start record.
    pub const START: usize = 0;

    pub fn new(start: Arrangement) -> Self {
        let mut history = Self::default();
        history.record(start, NodeStatus::start());
        history
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, arrangement: &Arrangement) -> Option<&NodeStatus> {
        self.index.get(arrangement).map(|&slot| &self.nodes[slot].1)
    }

    /// Whether reaching `arrangement` at `cost` should be recorded: it is new,
    /// or it is still open and `cost` strictly beats the known one.
    pub fn admits(&self, arrangement: &Arrangement, cost: usize) -> bool {
        match self.get(arrangement) {
            None => true,
            Some(status) => !status.closed && cost < status.cost,
        }
    }

    /// Inserts a new record or overwrites an open one in place.
    ///
    /// Panics in debug builds if asked to overwrite a closed record.
    pub fn record(&mut self, arrangement: Arrangement, status: NodeStatus) {
        match self.index.get(&arrangement) {
            Some(&slot) => {
                debug_assert!(!self.nodes[slot].1.closed, "closed nodes are never reopened");
                self.nodes[slot].1 = status;
            }
            None => {
                self.index.insert(arrangement.clone(), self.nodes.len());
                self.nodes.push((arrangement, status));
            }
        }
    }

    /// The arrangement stored at `slot`.
    ///
    /// Slots come from [`History::START`] or [`History::select_open`].
    pub fn arrangement(&self, slot: usize) -> &Arrangement {
        &self.nodes[slot].0
    }

    pub fn status(&self, slot: usize) -> &NodeStatus {
        &self.nodes[slot].1
    }

    /// Marks the record at `slot` closed and returns its final status.
    pub fn close(&mut self, slot: usize) -> NodeStatus {
        let status = &mut self.nodes[slot].1;
        status.closed = true;
        *status
    }

    /// Open records from the latest slot back to the earliest.
    pub fn open_latest_first(&self) -> impl Iterator<Item = (usize, &NodeStatus)> {
        self.nodes
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, (_, status))| !status.closed)
            .map(|(slot, (_, status))| (slot, status))
    }

    /// Slot of the open record with the lowest priority. Ties go to the
    /// latest slot.
    pub fn select_open(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (slot, status) in self.open_latest_first() {
            if best.map_or(true, |(_, priority)| status.priority < priority) {
                best = Some((slot, status.priority));
            }
        }
        best.map(|(slot, _)| slot)
    }
}
