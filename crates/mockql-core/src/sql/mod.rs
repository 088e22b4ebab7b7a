//! Statement generation: a pure function of table content.
//!
//! Identical table content always yields byte-identical text. Nothing
//! ambient (configuration, locale, time) may influence the output; the
//! determinism is a tested property and downstream caches rely on it.

#[cfg(test)]
mod tests;

use crate::{
    model::Table,
    naming::{param, sql_case},
    types::{Primitive, SqlAction},
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// SqlError
///

#[derive(Debug, ThisError)]
pub enum SqlError {
    /// A primary-key kind that cannot be rendered into DDL. Defensive:
    /// the builder rejects such keys before a table reaches generation.
    #[error("unsupported id type '{kind}' on table '{table}'")]
    UnsupportedIdType { table: String, kind: String },
}

/// Generate the six SQL templates for a finished table.
pub fn generate(table: &Table) -> Result<BTreeMap<SqlAction, String>, SqlError> {
    let mut actions = BTreeMap::new();

    actions.insert(SqlAction::CreateTable, create_table(table)?);
    actions.insert(SqlAction::Insert, insert(table));
    actions.insert(SqlAction::Update, update(table));
    actions.insert(SqlAction::Delete, delete(table));
    actions.insert(SqlAction::SelectById, select_by_id(table));
    actions.insert(SqlAction::SelectAll, select_all(table));

    Ok(actions)
}

// Column type mapping, used only by CREATE_TABLE.
const fn column_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Int | Primitive::Bool => "INTEGER",
        Primitive::Real => "REAL",
        Primitive::Text => "TEXT",
        Primitive::Uuid | Primitive::Blob => "BLOB",
    }
}

// Settable column names (non-id fields, then reference columns), already
// normalized. This fixed order is shared by INSERT and UPDATE.
fn settable_columns(table: &Table) -> Vec<String> {
    let mut columns: Vec<String> = table
        .data_fields()
        .map(|field| sql_case(&field.name))
        .collect();

    columns.extend(table.references.iter().map(|r| sql_case(&r.column)));

    columns
}

fn create_table(table: &Table) -> Result<String, SqlError> {
    let table_name = sql_case(&table.name);
    let mut lines: Vec<String> = Vec::new();

    match table.primary_key.ty {
        Primitive::Uuid => lines.push(
            "    id BLOB PRIMARY KEY NOT NULL DEFAULT (lower(hex(randomblob(16))))".to_string(),
        ),
        Primitive::Int => lines.push("    id INTEGER PRIMARY KEY AUTOINCREMENT".to_string()),
        kind => {
            return Err(SqlError::UnsupportedIdType {
                table: table.name.clone(),
                kind: kind.to_string(),
            });
        }
    }

    for field in table.data_fields() {
        let null_part = if field.nullable { "NULL" } else { "NOT NULL" };
        lines.push(format!(
            "    {} {} {}",
            sql_case(&field.name),
            column_type(field.ty),
            null_part
        ));
    }

    for reference in &table.references {
        lines.push(format!("    {} BLOB NOT NULL", sql_case(&reference.column)));
    }

    for reference in &table.references {
        lines.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {} (id)",
            sql_case(&reference.column),
            sql_case(&reference.target)
        ));
    }

    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n);",
        table_name,
        lines.join(",\n")
    ))
}

fn insert(table: &Table) -> String {
    let table_name = sql_case(&table.name);
    let columns = settable_columns(table);

    // A table whose only column is the id has nothing to bind.
    if columns.is_empty() {
        return format!("INSERT INTO {table_name} DEFAULT VALUES;");
    }

    let params: Vec<String> = columns.iter().map(|c| param(c)).collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table_name,
        columns.join(", "),
        params.join(", ")
    )
}

fn update(table: &Table) -> String {
    let table_name = sql_case(&table.name);
    let columns = settable_columns(table);

    // Degenerate but valid: a no-op touch keeps the template total.
    if columns.is_empty() {
        return format!("UPDATE {table_name} SET id = id WHERE id = @id;");
    }

    let set_parts: Vec<String> = columns.iter().map(|c| format!("{c} = @{c}")).collect();

    format!(
        "UPDATE {} SET {} WHERE id = @id;",
        table_name,
        set_parts.join(", ")
    )
}

fn delete(table: &Table) -> String {
    format!("DELETE FROM {} WHERE id = @id;", sql_case(&table.name))
}

fn select_by_id(table: &Table) -> String {
    format!("SELECT * FROM {} WHERE id = @id;", sql_case(&table.name))
}

fn select_all(table: &Table) -> String {
    format!("SELECT * FROM {};", sql_case(&table.name))
}
