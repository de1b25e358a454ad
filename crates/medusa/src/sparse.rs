//! Immutable sparse graphs over integer vertices.
//!
//! Built once from an edge list and stored in compressed adjacency arrays
//! (offsets plus a flat neighbor array), for workloads where the mutable
//! [`Graph`](crate::Graph) container is more structure than needed. Mirrors
//! the upstream sparse integer graph types.

use crate::error::{Error, Result};

/// Undirected graph on vertices `0..order`, fixed at construction.
///
/// Neighbor slices preserve edge-list order per vertex. Edges are identified
/// by their position in the constructing edge list.
#[derive(Debug, Clone)]
pub struct SparseUndirectedGraph {
    offsets: Vec<usize>,
    neighbors: Vec<usize>,
    /// Edge-list index backing each adjacency slot.
    slot_edges: Vec<usize>,
    edge_count: usize,
}

impl SparseUndirectedGraph {
    pub fn new(order: usize, edges: &[(usize, usize)]) -> Result<Self> {
        for &(u, v) in edges {
            let far = u.max(v);
            if far >= order {
                return Err(Error::VertexNotFound(far.to_string()));
            }
        }

        let mut degrees = vec![0usize; order];
        for &(u, v) in edges {
            degrees[u] += 1;
            degrees[v] += 1;
        }

        let mut offsets = Vec::with_capacity(order + 1);
        let mut total = 0usize;
        offsets.push(0);
        for &d in &degrees {
            total += d;
            offsets.push(total);
        }

        let mut neighbors = vec![0usize; total];
        let mut slot_edges = vec![0usize; total];
        let mut cursor = offsets[..order].to_vec();
        for (edge_ix, &(u, v)) in edges.iter().enumerate() {
            neighbors[cursor[u]] = v;
            slot_edges[cursor[u]] = edge_ix;
            cursor[u] += 1;
            neighbors[cursor[v]] = u;
            slot_edges[cursor[v]] = edge_ix;
            cursor[v] += 1;
        }

        Ok(Self {
            offsets,
            neighbors,
            slot_edges,
            edge_count: edges.len(),
        })
    }

    pub fn order(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn neighbors(&self, v: usize) -> Result<&[usize]> {
        self.check_vertex(v)?;
        Ok(&self.neighbors[self.offsets[v]..self.offsets[v + 1]])
    }

    /// Edge-list indices of the edges incident to `v`. A self-loop appears
    /// twice, consistent with [`degree`](Self::degree).
    pub fn incident_edges(&self, v: usize) -> Result<&[usize]> {
        self.check_vertex(v)?;
        Ok(&self.slot_edges[self.offsets[v]..self.offsets[v + 1]])
    }

    /// Degree of `v`; a self-loop contributes two.
    pub fn degree(&self, v: usize) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.offsets[v + 1] - self.offsets[v])
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.order() {
            return Err(Error::VertexNotFound(v.to_string()));
        }
        Ok(())
    }
}

/// Weighted variant of [`SparseUndirectedGraph`]; weights are addressed by
/// edge-list index.
#[derive(Debug, Clone)]
pub struct SparseUndirectedWeightedGraph {
    graph: SparseUndirectedGraph,
    weights: Vec<f64>,
}

impl SparseUndirectedWeightedGraph {
    pub fn new(order: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let pairs: Vec<(usize, usize)> = edges.iter().map(|&(u, v, _)| (u, v)).collect();
        let graph = SparseUndirectedGraph::new(order, &pairs)?;
        let weights = edges.iter().map(|&(_, _, w)| w).collect();
        Ok(Self { graph, weights })
    }

    pub fn order(&self) -> usize {
        self.graph.order()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, v: usize) -> Result<&[usize]> {
        self.graph.neighbors(v)
    }

    pub fn incident_edges(&self, v: usize) -> Result<&[usize]> {
        self.graph.incident_edges(v)
    }

    pub fn degree(&self, v: usize) -> Result<usize> {
        self.graph.degree(v)
    }

    pub fn edge_weight(&self, edge: usize) -> Option<f64> {
        self.weights.get(edge).copied()
    }
}
