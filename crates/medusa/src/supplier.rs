//! Fresh-vertex suppliers used by the generators.
//!
//! Upstream passes a `java.util.function.Supplier` whose closed-over counter
//! hands out fresh labels; here the counter is explicit state owned by the
//! supplier value and threaded through generator calls as `&mut`.

/// Source of fresh vertex values for a generator run.
pub trait VertexSupplier<V> {
    fn next_vertex(&mut self) -> V;
}

impl<V, F> VertexSupplier<V> for F
where
    F: FnMut() -> V,
{
    fn next_vertex(&mut self) -> V {
        self()
    }
}

/// Yields `"v0"`, `"v1"`, ... (or any other prefix).
#[derive(Debug, Clone)]
pub struct StringVertexSupplier {
    prefix: String,
    next: usize,
}

impl StringVertexSupplier {
    pub fn new() -> Self {
        Self::with_prefix("v")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl Default for StringVertexSupplier {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexSupplier<String> for StringVertexSupplier {
    fn next_vertex(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        format!("{}{}", self.prefix, id)
    }
}

/// Yields `0, 1, 2, ...`.
#[derive(Debug, Clone, Default)]
pub struct IntegerVertexSupplier {
    next: usize,
}

impl IntegerVertexSupplier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VertexSupplier<usize> for IntegerVertexSupplier {
    fn next_vertex(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}
