//! The adapter-supplied input contract.
//!
//! A boundary adapter inspects whatever its host language offers (runtime
//! reflection, macros, an IDL) and flattens each data type into a
//! [`TypeDescriptor`]: a name plus an ordered list of members. Only
//! readable-and-writable, non-synthetic data members may be included; that
//! filtering is the adapter's responsibility. The core never inspects a
//! language runtime directly.

use crate::types::Primitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// TypeGraph
///
/// Registry of every descriptor the builder may need to resolve, keyed by
/// type name. Complex members name their target type; the graph is where
/// those names are looked up, so it must be closed over everything the
/// roots reach.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TypeGraph {
    types: BTreeMap<String, TypeDescriptor>,
}

impl TypeGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, replacing any previous one with the same name.
    pub fn insert(&mut self, ty: TypeDescriptor) {
        self.types.insert(ty.name.clone(), ty);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

impl FromIterator<TypeDescriptor> for TypeGraph {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        let mut graph = Self::new();
        for ty in iter {
            graph.insert(ty);
        }

        graph
    }
}

///
/// TypeDescriptor
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub members: Vec<MemberDescriptor>,
}

impl TypeDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Append a member, preserving declaration order.
    #[must_use]
    pub fn member(
        mut self,
        name: impl Into<String>,
        kind: MemberKind,
        nullable: bool,
    ) -> Self {
        self.members.push(MemberDescriptor {
            name: name.into(),
            kind,
            nullable,
        });

        self
    }
}

///
/// MemberDescriptor
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MemberDescriptor {
    pub name: String,
    pub kind: MemberKind,

    /// Computed by the adapter from its language's nullability facility
    /// (optional wrapper, nullable annotation). Consumed verbatim.
    pub nullable: bool,
}

///
/// MemberKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MemberKind {
    /// A column-representable scalar.
    Primitive(Primitive),

    /// A nested object type, by type name. Becomes a foreign-key reference
    /// to the named type's table.
    Complex(String),
}

impl MemberKind {
    #[must_use]
    pub fn complex(name: impl Into<String>) -> Self {
        Self::Complex(name.into())
    }
}

impl From<Primitive> for MemberKind {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}
