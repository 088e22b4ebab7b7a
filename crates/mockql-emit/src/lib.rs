//! Source emitter: turns a finished [`Model`] into plain Rust model
//! structs and SQLite-backed service sources.
//!
//! A downstream collaborator of the core. Output is deterministic for a
//! given model: files and module listings are written in sorted table
//! order, and all text derives only from table content.

mod models;
mod services;

use mockql_core::model::Model;
use mockql_core::naming::sql_case;
use mockql_core::types::Primitive;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::info;

///
/// EmitError
///

#[derive(Debug, ThisError)]
pub enum EmitError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

///
/// ModelWriter
///
/// Writes one model module per table under `<out>/mockql/models/` and one
/// service module under `<out>/mockql/services/`, plus `mod.rs` listings.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ModelWriter;

impl ModelWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn write(&self, model: &Model, out_dir: &Path) -> Result<(), EmitError> {
        let base = out_dir.join("mockql");
        let models_dir = base.join("models");
        let services_dir = base.join("services");

        create_dir(&models_dir)?;
        create_dir(&services_dir)?;

        let mut model_mods: Vec<String> = Vec::new();
        let mut service_mods: Vec<String> = Vec::new();

        for table in model.tables() {
            let module = sql_case(&table.name);

            let model_path = models_dir.join(format!("{module}.rs"));
            write_file(&model_path, &models::render(table))?;

            let service_path = services_dir.join(format!("{module}_service.rs"));
            write_file(&service_path, &services::render(table))?;

            info!(table = %table.name, "emitted model and service sources");

            model_mods.push(module.clone());
            service_mods.push(format!("{module}_service"));
        }

        write_file(&base.join("mod.rs"), "pub mod models;\npub mod services;\n")?;
        write_file(&models_dir.join("mod.rs"), &mod_listing(&model_mods))?;
        write_file(&services_dir.join("mod.rs"), &mod_listing(&service_mods))?;

        Ok(())
    }
}

// Module listing in sorted order; model iteration is already sorted but
// the sort keeps the output stable against future reordering.
fn mod_listing(modules: &[String]) -> String {
    let mut sorted: Vec<&str> = modules.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut out = String::new();
    for module in sorted {
        out.push_str("pub mod ");
        out.push_str(module);
        out.push_str(";\n");
    }

    out
}

fn create_dir(path: &Path) -> Result<(), EmitError> {
    fs::create_dir_all(path).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), EmitError> {
    fs::write(path, content).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// Rust surface type for a column kind.
pub(crate) const fn rust_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Bool => "bool",
        Primitive::Int => "i64",
        Primitive::Real => "f64",
        Primitive::Text => "String",
        Primitive::Uuid | Primitive::Blob => "Vec<u8>",
    }
}

#[cfg(test)]
mod tests {
    use super::ModelWriter;
    use mockql_core::{
        build::build_model,
        descriptor::{MemberKind, TypeDescriptor, TypeGraph},
        types::Primitive,
    };
    use std::fs;

    fn demo_graph() -> TypeGraph {
        TypeGraph::from_iter([
            TypeDescriptor::new("Worker")
                .member("id", Primitive::Uuid.into(), false)
                .member("name", Primitive::Text.into(), false)
                .member("email", Primitive::Text.into(), true)
                .member("age", Primitive::Int.into(), false)
                .member("job", MemberKind::complex("Job"), false),
            TypeDescriptor::new("Job")
                .member("id", Primitive::Uuid.into(), false)
                .member("name", Primitive::Text.into(), false)
                .member("cash", Primitive::Real.into(), false),
        ])
    }

    #[test]
    fn writes_model_and_service_files_with_listings() {
        let model = build_model(&demo_graph(), ["Worker"]).expect("build should succeed");
        let dir = tempfile::tempdir().expect("tempdir should be created");

        ModelWriter::new()
            .write(&model, dir.path())
            .expect("emit should succeed");

        let base = dir.path().join("mockql");
        assert!(base.join("models/worker.rs").is_file());
        assert!(base.join("models/job.rs").is_file());
        assert!(base.join("services/worker_service.rs").is_file());
        assert!(base.join("services/job_service.rs").is_file());

        let listing =
            fs::read_to_string(base.join("models/mod.rs")).expect("listing should be readable");
        assert_eq!(listing, "pub mod job;\npub mod worker;\n");
    }

    #[test]
    fn worker_model_source_has_expected_fields() {
        let model = build_model(&demo_graph(), ["Worker"]).expect("build should succeed");
        let dir = tempfile::tempdir().expect("tempdir should be created");

        ModelWriter::new()
            .write(&model, dir.path())
            .expect("emit should succeed");

        let source = fs::read_to_string(dir.path().join("mockql/models/worker.rs"))
            .expect("source should be readable");

        assert!(source.contains("pub struct Worker {"));
        assert!(source.contains("pub id: Vec<u8>,"));
        assert!(source.contains("pub email: Option<String>,"));
        assert!(source.contains("pub age: i64,"));
        assert!(source.contains("pub job_id: Vec<u8>,"));
    }

    #[test]
    fn service_source_embeds_the_generated_sql() {
        let model = build_model(&demo_graph(), ["Worker"]).expect("build should succeed");
        let dir = tempfile::tempdir().expect("tempdir should be created");

        ModelWriter::new()
            .write(&model, dir.path())
            .expect("emit should succeed");

        let source = fs::read_to_string(dir.path().join("mockql/services/job_service.rs"))
            .expect("source should be readable");

        assert!(source.contains("pub struct JobService"));
        assert!(source.contains("INSERT INTO job (name, cash) VALUES (@name, @cash);"));
        assert!(source.contains("named_params!"));
    }
}
