//! Post-build model checks.
//!
//! The builder guarantees reference closure by construction (it recurses
//! into every referenced type before returning), so these checks exist for
//! consumers that deserialize or assemble models out-of-band.

use crate::model::Model;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ReferenceError
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
pub enum ReferenceError {
    #[error("table '{from_table}' column '{from_column}' references missing table '{target}'")]
    TableNotFound {
        from_table: String,
        from_column: String,
        target: String,
    },
}

/// Check that the table set is closed under the reference relation.
///
/// Returns every dangling reference, in deterministic table order; an
/// empty vec means the model is closed.
#[must_use]
pub fn validate_references(model: &Model) -> Vec<ReferenceError> {
    let mut errors = Vec::new();

    for table in model.tables() {
        for reference in &table.references {
            if !model.has_table(&reference.target) {
                errors.push(ReferenceError::TableNotFound {
                    from_table: table.name.clone(),
                    from_column: reference.column.clone(),
                    target: reference.target.clone(),
                });
            }
        }
    }

    errors
}
