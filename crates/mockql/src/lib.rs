//! MockQL: a throwaway persistence layer from plain type descriptors.
//!
//! ## Crate layout
//! - `core`: descriptor contract, schema model, builder, SQL generator.
//! - `emit`: Rust model/service source emitter.
//! - `store`: path-keyed SQLite connection registry.
//!
//! The `prelude` mirrors the surface an adapter needs to describe types
//! and build a model.

pub use mockql_core as core;
pub use mockql_emit as emit;
pub use mockql_store as store;

use mockql_core::{
    build::{BuildError, ModelBuilder},
    descriptor::TypeGraph,
    model::Model,
};

/// Workspace version re-export for downstream tooling.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use mockql_core::Error;

///
/// MockQl
///
/// Service entry point: owns a descriptor graph and converts root types
/// into fully annotated models on demand.
///

#[derive(Clone, Debug, Default)]
pub struct MockQl {
    graph: TypeGraph,
}

impl MockQl {
    #[must_use]
    pub fn new(graph: TypeGraph) -> Self {
        Self { graph }
    }

    #[must_use]
    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    /// Convert the given root types and everything they reach.
    pub fn build_model<I, S>(&self, roots: I) -> Result<Model, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ModelBuilder::new(&self.graph).build(roots)
    }
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::MockQl;
    pub use mockql_core::prelude::*;
}
