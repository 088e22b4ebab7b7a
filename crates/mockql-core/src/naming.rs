//! The single naming authority for generated SQL identifiers.
//!
//! Every table name, column name, parameter placeholder, and constraint
//! reference flows through [`sql_case`]. The rule is fixed — an underscore
//! before each interior uppercase letter, then lowercase — because the
//! generated text is byte-stable by contract and must not drift with a
//! library's casing heuristics.

/// Normalize an identifier to lower snake_case.
#[must_use]
pub fn sql_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for (index, character) in name.chars().enumerate() {
        if character.is_uppercase() && index > 0 {
            out.push('_');
        }
        out.extend(character.to_lowercase());
    }

    out
}

/// Render the named parameter placeholder for an identifier.
#[must_use]
pub fn param(name: &str) -> String {
    format!("@{}", sql_case(name))
}
