//! Helper algorithms over [`Graph`].

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use crate::graph::Graph;

/// Connected components in the undirected sense (edge direction ignored),
/// each listed in discovery order; components ordered by their first vertex's
/// insertion order.
pub fn connected_components<V, E>(g: &Graph<V, E>) -> Vec<Vec<V>>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Default + 'static,
{
    let mut seen = vec![false; g.vertex_count()];
    let mut out: Vec<Vec<V>> = Vec::new();

    for start in 0..g.vertex_count() {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut comp: Vec<V> = Vec::new();
        let mut q: VecDeque<usize> = VecDeque::new();
        q.push_back(start);
        while let Some(ix) = q.pop_front() {
            comp.push(g.vertex_value_at(ix).clone());
            for n_ix in g.incident_indices(ix) {
                if !seen[n_ix] {
                    seen[n_ix] = true;
                    q.push_back(n_ix);
                }
            }
        }
        out.push(comp);
    }

    out
}
