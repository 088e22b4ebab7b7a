use crate::{
    model::{Field, Reference},
    types::SqlAction,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Table
///
/// A finished table: ordered fields (first-encountered member order, except
/// a synthesized primary key which sits at index 0), references, exactly
/// one primary key, and the generated SQL keyed by action.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Table {
    pub name: String,
    pub fields: Vec<Field>,
    pub references: Vec<Reference>,

    /// Always one of the fields above; kind Uuid or Int, never nullable.
    pub primary_key: Field,

    pub actions: BTreeMap<SqlAction, String>,
}

impl Table {
    pub(crate) fn new(
        name: impl Into<String>,
        fields: Vec<Field>,
        references: Vec<Reference>,
        primary_key: Field,
    ) -> Self {
        Self {
            name: name.into(),
            fields,
            references,
            primary_key,
            actions: BTreeMap::new(),
        }
    }

    /// The generated SQL text for one action.
    #[must_use]
    pub fn action(&self, action: SqlAction) -> Option<&str> {
        self.actions.get(&action).map(String::as_str)
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields excluding the identity member, in declaration order.
    pub fn data_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_id())
    }
}
