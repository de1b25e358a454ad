//! Graph generators.
//!
//! Each generator draws fresh vertices from a [`VertexSupplier`] and wires
//! them into an existing graph, returning the created vertices in creation
//! order. On a directed target every undirected pair becomes two arcs, the
//! upstream `CompleteGraphGenerator` behavior.

use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::supplier::VertexSupplier;

pub trait GraphGenerator<V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    fn generate_into<S>(&self, graph: &mut Graph<V, E>, supplier: &mut S) -> Result<Vec<V>>
    where
        S: VertexSupplier<V>;
}

fn draw_vertices<V, E, S>(graph: &mut Graph<V, E>, supplier: &mut S, order: usize) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
    S: VertexSupplier<V>,
{
    let mut created = Vec::with_capacity(order);
    for _ in 0..order {
        let v = supplier.next_vertex();
        if !graph.add_vertex(v.clone()) {
            return Err(Error::DuplicateVertex(format!("{v:?}")));
        }
        created.push(v);
    }
    Ok(created)
}

/// Generates the complete graph K_order: one edge per unordered pair of
/// distinct vertices, `order * (order - 1) / 2` edges on an undirected target.
///
/// Orders 0 and 1 produce no edges. The edge count is quadratic in `order`;
/// memory is the only limit.
#[derive(Debug, Clone, Copy)]
pub struct CompleteGenerator {
    order: usize,
}

impl CompleteGenerator {
    pub fn new(order: usize) -> Self {
        Self { order }
    }
}

impl<V, E> GraphGenerator<V, E> for CompleteGenerator
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    fn generate_into<S>(&self, graph: &mut Graph<V, E>, supplier: &mut S) -> Result<Vec<V>>
    where
        S: VertexSupplier<V>,
    {
        debug!(order = self.order, "generating complete graph");
        let created = draw_vertices(graph, supplier, self.order)?;
        for i in 0..created.len() {
            for j in (i + 1)..created.len() {
                graph.add_edge(&created[i], &created[j])?;
                if graph.is_directed() {
                    graph.add_edge(&created[j], &created[i])?;
                }
            }
        }
        Ok(created)
    }
}

/// Generates a linear path: `order - 1` edges chaining the created vertices.
#[derive(Debug, Clone, Copy)]
pub struct PathGenerator {
    order: usize,
}

impl PathGenerator {
    pub fn new(order: usize) -> Self {
        Self { order }
    }
}

impl<V, E> GraphGenerator<V, E> for PathGenerator
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    fn generate_into<S>(&self, graph: &mut Graph<V, E>, supplier: &mut S) -> Result<Vec<V>>
    where
        S: VertexSupplier<V>,
    {
        debug!(order = self.order, "generating path graph");
        let created = draw_vertices(graph, supplier, self.order)?;
        for pair in created.windows(2) {
            graph.add_edge(&pair[0], &pair[1])?;
        }
        Ok(created)
    }
}

/// Generates a ring: edges `i -> (i + 1) mod order`.
///
/// Order 2 on an undirected simple target collapses to a single edge, since
/// the second wrap-around edge duplicates the first.
#[derive(Debug, Clone, Copy)]
pub struct RingGenerator {
    order: usize,
}

impl RingGenerator {
    pub fn new(order: usize) -> Self {
        Self { order }
    }
}

impl<V, E> GraphGenerator<V, E> for RingGenerator
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    fn generate_into<S>(&self, graph: &mut Graph<V, E>, supplier: &mut S) -> Result<Vec<V>>
    where
        S: VertexSupplier<V>,
    {
        debug!(order = self.order, "generating ring graph");
        let created = draw_vertices(graph, supplier, self.order)?;
        if created.len() >= 2 {
            for i in 0..created.len() {
                graph.add_edge(&created[i], &created[(i + 1) % created.len()])?;
            }
        }
        Ok(created)
    }
}
