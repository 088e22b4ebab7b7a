use crate::types::Primitive;
use serde::{Deserialize, Serialize};

///
/// Field
///
/// A single column-backed member. Immutable after creation; names are
/// unique within their table, case-insensitively.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: Primitive,
    pub nullable: bool,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Primitive, nullable: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable,
        }
    }

    /// Whether this field is the reserved identity member.
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.name.eq_ignore_ascii_case("id")
    }
}
