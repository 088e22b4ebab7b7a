//! Core of MockQL: schema inference over plain type descriptors and
//! deterministic SQL template generation.
//!
//! ## Crate layout
//! - `descriptor`: the adapter-supplied input contract (type graph).
//! - `model`: the inferred relational schema (fields, references, tables).
//! - `build`: recursive model builder with cycle-safe traversal.
//! - `sql`: pure statement generator, one action map per table.
//! - `naming`: the single snake-case authority for generated identifiers.
//! - `validate`: post-build reference closure checks.
//!
//! The core is pure and synchronous: no I/O, no connections, no ambient
//! state. Anything that touches a database lives in collaborator crates.

pub mod build;
pub mod descriptor;
pub mod model;
pub mod naming;
pub mod sql;
pub mod types;
pub mod validate;

use crate::{build::BuildError, sql::SqlError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::ModelBuilder,
        descriptor::{MemberDescriptor, MemberKind, TypeDescriptor, TypeGraph},
        model::{Field, Model, Reference, Table},
        types::{Primitive, SqlAction},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    SqlError(#[from] SqlError),
}
