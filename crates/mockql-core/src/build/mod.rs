//! Schema inference: walks a graph of type descriptors and produces a
//! fully annotated [`Model`].
//!
//! Traversal is memoized by type name. A name enters the visiting set
//! before its members are classified, so self-references and mutual cycles
//! terminate, and diamond-shared sub-types yield exactly one table. That
//! check is the only termination guarantee and is never bypassed.


use crate::{
    descriptor::{MemberDescriptor, MemberKind, TypeDescriptor, TypeGraph},
    model::{Field, Model, Reference, Table},
    sql::{self, SqlError},
    types::Primitive,
};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// BuildError
///
/// All variants are fatal: the whole conversion aborts and no partial
/// model is returned.
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("invalid id type on '{type_name}.{member}': {kind} (an id must be Uuid or Int)")]
    InvalidIdType {
        type_name: String,
        member: String,
        kind: String,
    },

    #[error("member '{type_name}.{member}' references unknown type '{target}'")]
    UnknownType {
        type_name: String,
        member: String,
        target: String,
    },

    #[error("unknown root type '{name}'")]
    UnknownRootType { name: String },

    #[error(transparent)]
    Sql(#[from] SqlError),
}

/// Build a model from root type names, resolving members against `graph`.
pub fn build_model<I, S>(graph: &TypeGraph, roots: I) -> Result<Model, BuildError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ModelBuilder::new(graph).build(roots)
}

///
/// ModelBuilder
///
/// Single-pass, synchronous, in-memory. Owns the model under construction;
/// the caller owns the descriptor graph.
///

pub struct ModelBuilder<'a> {
    graph: &'a TypeGraph,
    visiting: BTreeSet<String>,
    model: Model,
}

impl<'a> ModelBuilder<'a> {
    #[must_use]
    pub fn new(graph: &'a TypeGraph) -> Self {
        Self {
            graph,
            visiting: BTreeSet::new(),
            model: Model::new(),
        }
    }

    /// Convert every root type and everything transitively reachable from
    /// them. Consumes the builder; a failed build yields no model at all.
    pub fn build<I, S>(mut self, roots: I) -> Result<Model, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let graph = self.graph;

        for root in roots {
            let name = root.as_ref();
            let ty = graph.get(name).ok_or_else(|| BuildError::UnknownRootType {
                name: name.to_string(),
            })?;

            self.convert_type(ty)?;
        }

        Ok(self.model)
    }

    fn convert_type(&mut self, ty: &TypeDescriptor) -> Result<(), BuildError> {
        // Memo check: already processed, or currently being processed
        // further up the stack.
        if !self.visiting.insert(ty.name.clone()) {
            return Ok(());
        }

        let graph = self.graph;
        let mut fields: Vec<Field> = Vec::new();
        let mut references: Vec<Reference> = Vec::new();
        let mut primary_key: Option<Field> = None;

        for member in &ty.members {
            if member.name.eq_ignore_ascii_case("id") {
                let field = Self::convert_id_member(ty, member)?;
                primary_key = Some(field.clone());
                fields.push(field);
                continue;
            }

            match &member.kind {
                MemberKind::Primitive(primitive) => {
                    fields.push(Field::new(&member.name, *primitive, member.nullable));
                }
                MemberKind::Complex(target) => {
                    references.push(Reference::new(format!("{}_id", member.name), target));

                    let target_ty =
                        graph.get(target).ok_or_else(|| BuildError::UnknownType {
                            type_name: ty.name.clone(),
                            member: member.name.clone(),
                            target: target.clone(),
                        })?;

                    self.convert_type(target_ty)?;
                }
            }
        }

        // No explicit id member: synthesize the default Uuid key at index 0.
        let primary_key = match primary_key {
            Some(pk) => pk,
            None => {
                let pk = Field::new("id", Primitive::Uuid, false);
                fields.insert(0, pk.clone());
                pk
            }
        };

        let mut table = Table::new(&ty.name, fields, references, primary_key);
        table.actions = sql::generate(&table)?;

        self.model.add_table(table);

        Ok(())
    }

    // The "id" member is reserved: it must carry a key-capable kind and
    // always becomes the non-nullable primary key.
    fn convert_id_member(
        ty: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Result<Field, BuildError> {
        match &member.kind {
            MemberKind::Primitive(primitive) if primitive.supports_id() => {
                Ok(Field::new(&member.name, *primitive, false))
            }
            MemberKind::Primitive(primitive) => Err(BuildError::InvalidIdType {
                type_name: ty.name.clone(),
                member: member.name.clone(),
                kind: primitive.to_string(),
            }),
            MemberKind::Complex(target) => Err(BuildError::InvalidIdType {
                type_name: ty.name.clone(),
                member: member.name.clone(),
                kind: target.clone(),
            }),
        }
    }
}
