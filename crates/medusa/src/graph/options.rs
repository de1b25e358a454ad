//! Graph flavor configuration.
//!
//! JGraphT models its graph type zoo (`SimpleGraph`, `Multigraph`, `Pseudograph`,
//! directed and weighted variants) as separate classes; here the flavor is a set
//! of flags fixed at construction time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSpec {
    pub directed: bool,
    pub multi_edges: bool,
    pub self_loops: bool,
    pub weighted: bool,
}

impl Default for GraphSpec {
    fn default() -> Self {
        Self::simple()
    }
}

impl GraphSpec {
    /// Undirected, no parallel edges, no self-loops.
    pub const fn simple() -> Self {
        Self {
            directed: false,
            multi_edges: false,
            self_loops: false,
            weighted: false,
        }
    }

    /// Undirected, parallel edges allowed, no self-loops.
    pub const fn multigraph() -> Self {
        Self {
            multi_edges: true,
            ..Self::simple()
        }
    }

    /// Undirected, parallel edges and self-loops allowed.
    pub const fn pseudograph() -> Self {
        Self {
            multi_edges: true,
            self_loops: true,
            ..Self::simple()
        }
    }

    /// Undirected, no parallel edges, self-loops allowed.
    pub const fn default_undirected() -> Self {
        Self {
            self_loops: true,
            ..Self::simple()
        }
    }

    /// Directed, no parallel edges, no self-loops.
    pub const fn simple_directed() -> Self {
        Self {
            directed: true,
            ..Self::simple()
        }
    }

    /// Directed, parallel edges allowed, no self-loops.
    pub const fn directed_multigraph() -> Self {
        Self {
            directed: true,
            ..Self::multigraph()
        }
    }

    /// Directed, parallel edges and self-loops allowed.
    pub const fn directed_pseudograph() -> Self {
        Self {
            directed: true,
            ..Self::pseudograph()
        }
    }

    /// Directed, no parallel edges, self-loops allowed.
    pub const fn default_directed() -> Self {
        Self {
            directed: true,
            ..Self::default_undirected()
        }
    }

    /// Enables edge weights on any flavor.
    pub const fn weighted(self) -> Self {
        Self {
            weighted: true,
            ..self
        }
    }
}
