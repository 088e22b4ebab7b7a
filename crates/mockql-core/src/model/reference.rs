use serde::{Deserialize, Serialize};

///
/// Reference
///
/// A foreign-key relationship to another table. Carries no `Field` of its
/// own; generation renders it as a NOT NULL blob column plus a table-level
/// foreign-key constraint against the target's `id`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Reference {
    /// Column name, by convention `<member>_id`.
    pub column: String,

    /// Name of the referenced table.
    pub target: String,
}

impl Reference {
    #[must_use]
    pub fn new(column: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            target: target.into(),
        }
    }
}
