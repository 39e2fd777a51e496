use std::collections::HashMap;

use crate::graph::{Graph, VertexId};

/// Maps arbitrary vertex identifiers onto dense slots `0..n`.
///
/// Slots follow the graph's vertex order, so slot `i` is the `i`-th vertex
/// the store yields.
#[derive(Debug, Clone)]
pub(crate) struct DenseIndex {
    ids: Vec<VertexId>,
    slots: HashMap<VertexId, usize>,
}

impl DenseIndex {
    pub(crate) fn new(graph: &Graph) -> Self {
        let ids: Vec<VertexId> = graph.vertices().collect();
        let slots = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        Self { ids, slots }
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn slot(&self, id: VertexId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    pub(crate) fn id(&self, slot: usize) -> VertexId {
        self.ids[slot]
    }

    pub(crate) fn ids(&self) -> &[VertexId] {
        &self.ids
    }
}
