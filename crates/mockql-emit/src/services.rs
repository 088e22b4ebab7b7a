//! SQLite-backed service sources, one per table.
//!
//! Each service borrows a connection, carries the table's generated SQL as
//! associated constants, and binds named parameters for the write paths.

use crate::rust_type;
use convert_case::{Case, Casing};
use mockql_core::{
    model::Table,
    naming::sql_case,
    types::SqlAction,
};

/// Render the service struct for one table.
pub(crate) fn render(table: &Table) -> String {
    let struct_name = table.name.to_case(Case::Pascal);
    let module = sql_case(&table.name);
    let service_name = format!("{struct_name}Service");
    let id_type = rust_type(table.primary_key.ty);
    let id_param = if id_type == "Vec<u8>" { "&[u8]" } else { id_type };

    let mut out = String::new();

    out.push_str("//! Generated by mockql. Do not edit.\n\n");
    out.push_str("use rusqlite::{Connection, Result, named_params};\n\n");
    out.push_str(&format!("use super::super::models::{module}::{struct_name};\n\n"));

    out.push_str(&format!("pub struct {service_name}<'a> {{\n"));
    out.push_str("    conn: &'a Connection,\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl<'a> {service_name}<'a> {{\n"));

    for action in SqlAction::ALL {
        if let Some(sql) = table.action(action) {
            out.push_str(&format!(
                "    pub const {action}: &'static str = \"{}\";\n",
                escape(sql)
            ));
        }
    }

    out.push_str(
        "\n    pub fn new(conn: &'a Connection) -> Self {\n        Self { conn }\n    }\n",
    );

    out.push_str(
        "\n    pub fn create_table(&self) -> Result<()> {\n        \
         self.conn.execute_batch(Self::CREATE_TABLE)\n    }\n",
    );

    push_write_method(&mut out, table, &struct_name, "insert", "INSERT", false);
    push_write_method(&mut out, table, &struct_name, "update", "UPDATE", true);

    out.push_str(&format!(
        "\n    pub fn delete(&self, id: {id_param}) -> Result<usize> {{\n        \
         self.conn.execute(Self::DELETE, named_params! {{ \"@id\": id }})\n    }}\n"
    ));

    out.push_str("}\n");

    out
}

// Render insert/update, binding every settable column by name. A table
// with nothing to bind gets a parameterless execute.
fn push_write_method(
    out: &mut String,
    table: &Table,
    struct_name: &str,
    method: &str,
    action_const: &str,
    with_id: bool,
) {
    let mut bindings: Vec<String> = Vec::new();

    for field in table.data_fields() {
        let column = sql_case(&field.name);
        bindings.push(format!("            \"@{column}\": entity.{column},\n"));
    }
    for reference in &table.references {
        let column = sql_case(&reference.column);
        bindings.push(format!("            \"@{column}\": entity.{column},\n"));
    }
    if with_id {
        bindings.push("            \"@id\": entity.id,\n".to_string());
    }

    out.push_str(&format!(
        "\n    pub fn {method}(&self, entity: &{struct_name}) -> Result<usize> {{\n"
    ));

    if bindings.is_empty() {
        out.push_str(&format!(
            "        let _ = entity;\n        self.conn.execute(Self::{action_const}, [])\n"
        ));
    } else {
        out.push_str(&format!(
            "        self.conn.execute(Self::{action_const}, named_params! {{\n"
        ));
        for binding in bindings {
            out.push_str(&binding);
        }
        out.push_str("        })\n");
    }

    out.push_str("    }\n");
}

// Escape SQL text for embedding in a Rust string literal.
fn escape(sql: &str) -> String {
    sql.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
