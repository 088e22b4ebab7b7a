use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Primitive
///
/// The closed set of column-representable scalar kinds.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum Primitive {
    Blob,
    Bool,
    Int,
    Real,
    Text,
    Uuid,
}

impl Primitive {
    /// Whether this kind may back a primary key.
    #[must_use]
    pub const fn supports_id(self) -> bool {
        matches!(self, Self::Int | Self::Uuid)
    }
}

///
/// SqlAction
///
/// The six operations generated per table. The rendered key names are a
/// stable public contract; downstream consumers bind to them literally.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum SqlAction {
    #[display("CREATE_TABLE")]
    CreateTable,

    #[display("DELETE")]
    Delete,

    #[display("INSERT")]
    Insert,

    #[display("SELECT_ALL")]
    SelectAll,

    #[display("SELECT_BY_ID")]
    SelectById,

    #[display("UPDATE")]
    Update,
}

impl SqlAction {
    pub const ALL: [Self; 6] = [
        Self::CreateTable,
        Self::Delete,
        Self::Insert,
        Self::SelectAll,
        Self::SelectById,
        Self::Update,
    ];
}

#[cfg(test)]
mod tests {
    use super::SqlAction;

    #[test]
    fn action_keys_are_the_stable_contract() {
        let keys: Vec<String> = SqlAction::ALL.iter().map(ToString::to_string).collect();

        assert_eq!(
            keys,
            [
                "CREATE_TABLE",
                "DELETE",
                "INSERT",
                "SELECT_ALL",
                "SELECT_BY_ID",
                "UPDATE"
            ]
        );
    }
}
