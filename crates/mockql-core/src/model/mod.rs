//! The inferred relational schema. Pure data: behavior beyond invariant
//! helpers lives in `build` and `sql`.

pub mod field;
pub mod reference;
pub mod table;

pub use field::Field;
pub use reference::Reference;
pub use table::Table;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Model
///
/// Mapping from table name to table. The key set doubles as the traversal
/// memo during building: a name present here (or in the builder's visiting
/// set) is never processed twice, which is what breaks reference cycles.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Model {
    tables: BTreeMap<String, Table>,
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a finished table under its name. Idempotent per name.
    pub(crate) fn add_table(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
    }

    #[must_use]
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    #[must_use]
    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table names in deterministic (sorted) order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// All tables in deterministic (sorted-by-name) order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }
}
