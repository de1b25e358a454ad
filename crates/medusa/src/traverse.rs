//! Lazy traversal iterators.
//!
//! Both iterators borrow the graph immutably and yield each reachable vertex
//! exactly once. They are single-use: build a fresh iterator to traverse
//! again. Order is deterministic because the container iterates vertices and
//! incident edges in insertion order; depth-first exploration descends into
//! the first-inserted neighbor first.

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::Graph;

/// Depth-first vertex iterator.
///
/// [`DepthFirstIterator::new`] starts at the first inserted vertex and, once a
/// component is exhausted, continues from the next unvisited vertex in
/// insertion order until the whole graph is covered, the upstream behavior of
/// an iterator constructed without a start vertex. [`DepthFirstIterator::from_vertex`]
/// confines the walk to the component reachable from `start`.
pub struct DepthFirstIterator<'g, V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    graph: &'g Graph<V, E>,
    stack: Vec<usize>,
    visited: Vec<bool>,
    /// Insertion-order scan position for cross-component refills; `None` in
    /// single-component mode.
    cursor: Option<usize>,
}

impl<'g, V, E> DepthFirstIterator<'g, V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    pub fn new(graph: &'g Graph<V, E>) -> Self {
        Self {
            graph,
            stack: Vec::new(),
            visited: vec![false; graph.vertex_count()],
            cursor: Some(0),
        }
    }

    /// Fails with [`Error::VertexNotFound`](crate::Error::VertexNotFound)
    /// before any traversal work when `start` is absent.
    pub fn from_vertex(graph: &'g Graph<V, E>, start: &V) -> Result<Self> {
        let start_ix = graph.index_of(start)?;
        Ok(Self {
            graph,
            stack: vec![start_ix],
            visited: vec![false; graph.vertex_count()],
            cursor: None,
        })
    }
}

impl<'g, V, E> Iterator for DepthFirstIterator<'g, V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<&'g V> {
        loop {
            while let Some(ix) = self.stack.pop() {
                if self.visited[ix] {
                    continue;
                }
                self.visited[ix] = true;
                let successors = self.graph.successor_indices(ix);
                // Reversed so the first-inserted neighbor is popped first.
                for &n_ix in successors.iter().rev() {
                    if !self.visited[n_ix] {
                        self.stack.push(n_ix);
                    }
                }
                return Some(self.graph.vertex_value_at(ix));
            }

            let cursor = self.cursor.as_mut()?;
            while *cursor < self.visited.len() && self.visited[*cursor] {
                *cursor += 1;
            }
            if *cursor >= self.visited.len() {
                self.cursor = None;
                return None;
            }
            self.stack.push(*cursor);
        }
    }
}

/// Breadth-first vertex iterator with the same start rules as
/// [`DepthFirstIterator`].
pub struct BreadthFirstIterator<'g, V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    graph: &'g Graph<V, E>,
    queue: VecDeque<usize>,
    visited: Vec<bool>,
    cursor: Option<usize>,
}

impl<'g, V, E> BreadthFirstIterator<'g, V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    pub fn new(graph: &'g Graph<V, E>) -> Self {
        Self {
            graph,
            queue: VecDeque::new(),
            visited: vec![false; graph.vertex_count()],
            cursor: Some(0),
        }
    }

    pub fn from_vertex(graph: &'g Graph<V, E>, start: &V) -> Result<Self> {
        let start_ix = graph.index_of(start)?;
        let mut visited = vec![false; graph.vertex_count()];
        visited[start_ix] = true;
        Ok(Self {
            graph,
            queue: VecDeque::from([start_ix]),
            visited,
            cursor: None,
        })
    }
}

impl<'g, V, E> Iterator for BreadthFirstIterator<'g, V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<&'g V> {
        loop {
            if let Some(ix) = self.queue.pop_front() {
                for n_ix in self.graph.successor_indices(ix) {
                    if !self.visited[n_ix] {
                        self.visited[n_ix] = true;
                        self.queue.push_back(n_ix);
                    }
                }
                return Some(self.graph.vertex_value_at(ix));
            }

            let cursor = self.cursor.as_mut()?;
            while *cursor < self.visited.len() && self.visited[*cursor] {
                *cursor += 1;
            }
            if *cursor >= self.visited.len() {
                self.cursor = None;
                return None;
            }
            self.visited[*cursor] = true;
            self.queue.push_back(*cursor);
        }
    }
}
