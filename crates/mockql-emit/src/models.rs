//! Plain model struct sources, one per table.

use crate::rust_type;
use convert_case::{Case, Casing};
use mockql_core::{model::Table, naming::sql_case};

/// Render the model struct for one table.
pub(crate) fn render(table: &Table) -> String {
    let struct_name = table.name.to_case(Case::Pascal);
    let mut out = String::new();

    out.push_str("//! Generated by mockql. Do not edit.\n\n");
    out.push_str("#[derive(Clone, Debug, Default, PartialEq)]\n");
    out.push_str(&format!("pub struct {struct_name} {{\n"));

    // The key first, typed by its kind; field order then follows the table.
    out.push_str(&format!(
        "    pub id: {},\n",
        rust_type(table.primary_key.ty)
    ));

    for field in table.data_fields() {
        let base = rust_type(field.ty);
        let ty = if field.nullable {
            format!("Option<{base}>")
        } else {
            base.to_string()
        };

        out.push_str(&format!("    pub {}: {ty},\n", sql_case(&field.name)));
    }

    // Foreign keys are surfaced as raw key values, like their columns.
    for reference in &table.references {
        out.push_str(&format!("    pub {}: Vec<u8>,\n", sql_case(&reference.column)));
    }

    out.push_str("}\n");

    out
}
