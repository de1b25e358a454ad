//! Internal storage entries for [`Graph`](super::Graph).

#[derive(Debug, Clone)]
pub(in crate::graph) struct VertexEntry<V> {
    pub(in crate::graph) value: V,
    /// Indices into the edge list, in insertion order. For undirected graphs
    /// `out` holds edges inserted with this vertex as the first endpoint.
    pub(in crate::graph) out: Vec<usize>,
    pub(in crate::graph) in_: Vec<usize>,
}

impl<V> VertexEntry<V> {
    pub(in crate::graph) fn new(value: V) -> Self {
        Self {
            value,
            out: Vec::new(),
            in_: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry<E> {
    pub(in crate::graph) source: usize,
    pub(in crate::graph) target: usize,
    pub(in crate::graph) label: E,
    pub(in crate::graph) weight: f64,
}
