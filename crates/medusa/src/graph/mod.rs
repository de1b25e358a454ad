//! Graph container APIs.
//!
//! Baseline: JGraphT's `Graph` interface and its default in-memory
//! implementations. Vertices are values (`V: Eq + Hash`), edges are opaque
//! [`EdgeId`] handles carrying an optional label and a weight. Storage is an
//! insertion-ordered entry list plus a hash index, so every iteration order in
//! the public API is deterministic.

use rustc_hash::FxBuildHasher;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};

mod entries;
mod options;

use entries::{EdgeEntry, VertexEntry};
pub use options::GraphSpec;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Weight assigned to edges that were added without an explicit weight.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Stable opaque handle to an edge of a [`Graph`].
///
/// Graphs are build-once containers (no removal operations), so a handle stays
/// valid for the life of the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub struct Graph<V, E = ()>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    spec: GraphSpec,
    default_edge_label: Box<dyn Fn() -> E + Send + Sync>,

    vertices: Vec<VertexEntry<V>>,
    vertex_index: HashMap<V, usize>,

    edges: Vec<EdgeEntry<E>>,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    pub fn new(spec: GraphSpec) -> Self {
        Self {
            spec,
            default_edge_label: Box::new(E::default),
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            edges: Vec::new(),
        }
    }

    pub fn spec(&self) -> GraphSpec {
        self.spec
    }

    pub fn is_directed(&self) -> bool {
        self.spec.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.spec.weighted
    }

    pub fn allows_multiple_edges(&self) -> bool {
        self.spec.multi_edges
    }

    pub fn allows_self_loops(&self) -> bool {
        self.spec.self_loops
    }

    pub fn set_default_edge_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        self.default_edge_label = Box::new(f);
        self
    }

    // ---- vertices ----

    /// Adds a vertex. Returns `false` if the value is already present.
    pub fn add_vertex(&mut self, value: V) -> bool {
        if self.vertex_index.contains_key(&value) {
            return false;
        }
        let ix = self.vertices.len();
        self.vertex_index.insert(value.clone(), ix);
        self.vertices.push(VertexEntry::new(value));
        true
    }

    pub fn contains_vertex(&self, value: &V) -> bool {
        self.vertex_index.contains_key(value)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter().map(|v| &v.value)
    }

    pub(crate) fn index_of(&self, value: &V) -> Result<usize> {
        self.vertex_index
            .get(value)
            .copied()
            .ok_or_else(|| Error::VertexNotFound(format!("{value:?}")))
    }

    pub(crate) fn vertex_value_at(&self, ix: usize) -> &V {
        &self.vertices[ix].value
    }

    // ---- edges ----

    /// Adds an edge with the default label.
    ///
    /// Semantics follow the upstream `addEdge`: a missing endpoint or a
    /// forbidden self-loop is an error; a duplicate edge on a flavor without
    /// parallel edges leaves the graph unchanged and returns `Ok(None)`. For
    /// undirected flavors the reversed endpoint pair names the same edge.
    pub fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<EdgeId>> {
        self.add_edge_entry(source, target, None)
    }

    pub fn add_edge_with_label(&mut self, source: &V, target: &V, label: E) -> Result<Option<EdgeId>> {
        self.add_edge_entry(source, target, Some(label))
    }

    fn add_edge_entry(&mut self, source: &V, target: &V, label: Option<E>) -> Result<Option<EdgeId>> {
        let s_ix = self.index_of(source)?;
        let t_ix = self.index_of(target)?;

        if s_ix == t_ix && !self.spec.self_loops {
            return Err(Error::SelfLoopsNotAllowed);
        }
        if !self.spec.multi_edges && self.find_edge_ix(s_ix, t_ix).is_some() {
            return Ok(None);
        }

        let ix = self.edges.len();
        self.edges.push(EdgeEntry {
            source: s_ix,
            target: t_ix,
            label: label.unwrap_or_else(|| (self.default_edge_label)()),
            weight: DEFAULT_EDGE_WEIGHT,
        });
        self.vertices[s_ix].out.push(ix);
        self.vertices[t_ix].in_.push(ix);
        Ok(Some(EdgeId(ix)))
    }

    fn find_edge_ix(&self, s_ix: usize, t_ix: usize) -> Option<usize> {
        for &e in &self.vertices[s_ix].out {
            if self.edges[e].target == t_ix {
                return Some(e);
            }
        }
        if !self.spec.directed {
            for &e in &self.vertices[s_ix].in_ {
                if self.edges[e].source == t_ix {
                    return Some(e);
                }
            }
        }
        None
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Looks up an edge between two vertices. `None` when either vertex is
    /// absent or no such edge exists.
    pub fn get_edge(&self, source: &V, target: &V) -> Option<EdgeId> {
        let s_ix = *self.vertex_index.get(source)?;
        let t_ix = *self.vertex_index.get(target)?;
        self.find_edge_ix(s_ix, t_ix).map(EdgeId)
    }

    pub fn contains_edge(&self, source: &V, target: &V) -> bool {
        self.get_edge(source, target).is_some()
    }

    /// All edges between two vertices, in insertion order. Empty when either
    /// vertex is absent.
    pub fn get_all_edges(&self, source: &V, target: &V) -> Vec<EdgeId> {
        let (Some(&s_ix), Some(&t_ix)) = (
            self.vertex_index.get(source),
            self.vertex_index.get(target),
        ) else {
            return Vec::new();
        };

        let mut out: Vec<EdgeId> = Vec::new();
        for &e in &self.vertices[s_ix].out {
            if self.edges[e].target == t_ix {
                out.push(EdgeId(e));
            }
        }
        if !self.spec.directed {
            for &e in &self.vertices[s_ix].in_ {
                let entry = &self.edges[e];
                // Self-loops already appear in `out`.
                if entry.source == t_ix && entry.source != entry.target {
                    out.push(EdgeId(e));
                }
            }
        }
        out.sort_by_key(|e| e.0);
        out
    }

    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(&V, &V)> {
        let entry = self.edges.get(edge.0)?;
        Some((
            &self.vertices[entry.source].value,
            &self.vertices[entry.target].value,
        ))
    }

    pub fn edge_label(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.0).map(|e| &e.label)
    }

    pub fn edge_label_mut(&mut self, edge: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(edge.0).map(|e| &mut e.label)
    }

    /// Weight of an edge; [`DEFAULT_EDGE_WEIGHT`] unless set.
    pub fn edge_weight(&self, edge: EdgeId) -> Option<f64> {
        self.edges.get(edge.0).map(|e| e.weight)
    }

    /// Sets an edge weight. Errors on unweighted flavors, as upstream does.
    pub fn set_edge_weight(&mut self, edge: EdgeId, weight: f64) -> Result<()> {
        if !self.spec.weighted {
            return Err(Error::NotWeighted);
        }
        let entry = self
            .edges
            .get_mut(edge.0)
            .ok_or(Error::EdgeNotFound(edge.0))?;
        entry.weight = weight;
        Ok(())
    }

    // ---- adjacency ----

    /// All edges incident to a vertex, in insertion order. Self-loops appear
    /// once.
    pub fn edges_of(&self, vertex: &V) -> Result<Vec<EdgeId>> {
        let ix = self.index_of(vertex)?;
        let entry = &self.vertices[ix];
        let mut out: Vec<EdgeId> = entry.out.iter().copied().map(EdgeId).collect();
        for &e in &entry.in_ {
            if self.edges[e].source != self.edges[e].target {
                out.push(EdgeId(e));
            }
        }
        out.sort_by_key(|e| e.0);
        Ok(out)
    }

    /// Degree of a vertex. A self-loop contributes two, the upstream rule.
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        let ix = self.index_of(vertex)?;
        let entry = &self.vertices[ix];
        Ok(entry.out.len() + entry.in_.len())
    }

    pub fn out_degree(&self, vertex: &V) -> Result<usize> {
        let ix = self.index_of(vertex)?;
        Ok(self.vertices[ix].out.len())
    }

    pub fn in_degree(&self, vertex: &V) -> Result<usize> {
        let ix = self.index_of(vertex)?;
        Ok(self.vertices[ix].in_.len())
    }

    /// Distinct adjacent vertices, in first-encounter order. For directed
    /// graphs both edge directions count, as in upstream `neighborSetOf`.
    pub fn neighbors_of(&self, vertex: &V) -> Result<Vec<&V>> {
        let ix = self.index_of(vertex)?;
        let mut seen = vec![false; self.vertices.len()];
        let mut out: Vec<&V> = Vec::new();
        for n_ix in self.incident_indices(ix) {
            if !seen[n_ix] {
                seen[n_ix] = true;
                out.push(&self.vertices[n_ix].value);
            }
        }
        Ok(out)
    }

    /// Vertex indices reachable by one traversal step. Directed graphs follow
    /// outgoing edges only; undirected graphs follow every incident edge.
    pub(crate) fn successor_indices(&self, ix: usize) -> Vec<usize> {
        let entry = &self.vertices[ix];
        let mut out: Vec<usize> = entry.out.iter().map(|&e| self.edges[e].target).collect();
        if !self.spec.directed {
            for &e in &entry.in_ {
                if self.edges[e].source != self.edges[e].target {
                    out.push(self.edges[e].source);
                }
            }
        }
        out
    }

    /// Vertex indices at the opposite end of every incident edge, both
    /// directions.
    pub(crate) fn incident_indices(&self, ix: usize) -> Vec<usize> {
        let entry = &self.vertices[ix];
        let mut out: Vec<usize> = entry.out.iter().map(|&e| self.edges[e].target).collect();
        for &e in &entry.in_ {
            if self.edges[e].source != self.edges[e].target {
                out.push(self.edges[e].source);
            }
        }
        out
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone + fmt::Debug + fmt::Display,
    E: Default + 'static,
{
    /// Renders an edge as `(source : target)`, the upstream `DefaultEdge`
    /// string form used when printing adjacency.
    pub fn format_edge(&self, edge: EdgeId) -> Option<String> {
        let entry = self.edges.get(edge.0)?;
        Some(format!(
            "({} : {})",
            self.vertices[entry.source].value, self.vertices[entry.target].value
        ))
    }
}
