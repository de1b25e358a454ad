#![forbid(unsafe_code)]

//! Graph containers, generators, and traversal iterators.
//!
//! Baseline: JGraphT's core APIs (`SimpleGraph` and its flavor siblings,
//! `CompleteGraphGenerator`, `DepthFirstIterator`), expressed as a single
//! runtime-agnostic Rust crate.

pub mod alg;
pub mod error;
pub mod generate;
pub mod graph;
pub mod sparse;
pub mod supplier;
pub mod traverse;

pub use error::{Error, Result};
pub use generate::{CompleteGenerator, GraphGenerator, PathGenerator, RingGenerator};
pub use graph::{DEFAULT_EDGE_WEIGHT, EdgeId, Graph, GraphSpec};
pub use sparse::{SparseUndirectedGraph, SparseUndirectedWeightedGraph};
pub use supplier::{IntegerVertexSupplier, StringVertexSupplier, VertexSupplier};
pub use traverse::{BreadthFirstIterator, DepthFirstIterator};
