use crate::{
    build::build_model,
    descriptor::{MemberKind, TypeDescriptor, TypeGraph},
    model::{Field, Reference, Table},
    sql::{self, SqlError},
    types::{Primitive, SqlAction},
};

fn build_job_table() -> Table {
    let graph = TypeGraph::from_iter([TypeDescriptor::new("Job")
        .member("id", Primitive::Uuid.into(), false)
        .member("name", Primitive::Text.into(), false)
        .member("cash", Primitive::Real.into(), false)]);

    let model = build_model(&graph, ["Job"]).expect("build should succeed");
    model.get_table("Job").expect("job table should exist").clone()
}

fn build_worker_table() -> Table {
    let graph = TypeGraph::from_iter([
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
    ]);

    let model = build_model(&graph, ["Worker"]).expect("build should succeed");
    model
        .get_table("Worker")
        .expect("worker table should exist")
        .clone()
}

#[test]
fn create_table_renders_uuid_key_with_random_hex_default() {
    let table = build_job_table();
    let sql = table
        .action(SqlAction::CreateTable)
        .expect("create table action");

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS job (\n\
         \x20   id BLOB PRIMARY KEY NOT NULL DEFAULT (lower(hex(randomblob(16)))),\n\
         \x20   name TEXT NOT NULL,\n\
         \x20   cash REAL NOT NULL\n\
         );"
    );
}

#[test]
fn create_table_renders_integer_key_as_autoincrement() {
    let graph = TypeGraph::from_iter([TypeDescriptor::new("Ticket")
        .member("id", Primitive::Int.into(), false)
        .member("subject", Primitive::Text.into(), false)]);

    let model = build_model(&graph, ["Ticket"]).expect("build should succeed");
    let sql = model
        .get_table("Ticket")
        .expect("ticket table should exist")
        .action(SqlAction::CreateTable)
        .expect("create table action");

    assert!(sql.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
    assert!(!sql.contains("randomblob"));
}

#[test]
fn nullable_fields_render_null_and_references_render_constraints() {
    let table = build_worker_table();
    let sql = table
        .action(SqlAction::CreateTable)
        .expect("create table action");

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS worker (\n\
         \x20   id BLOB PRIMARY KEY NOT NULL DEFAULT (lower(hex(randomblob(16)))),\n\
         \x20   name TEXT NOT NULL,\n\
         \x20   email TEXT NULL,\n\
         \x20   age INTEGER NOT NULL,\n\
         \x20   job_id BLOB NOT NULL,\n\
         \x20   FOREIGN KEY (job_id) REFERENCES job (id)\n\
         );"
    );
}

#[test]
fn insert_covers_data_fields_then_references() {
    let table = build_worker_table();

    assert_eq!(
        table.action(SqlAction::Insert).expect("insert action"),
        "INSERT INTO worker (name, email, age, job_id) \
         VALUES (@name, @email, @age, @job_id);"
    );
}

#[test]
fn update_mirrors_insert_column_order() {
    let table = build_job_table();

    assert_eq!(
        table.action(SqlAction::Update).expect("update action"),
        "UPDATE job SET name = @name, cash = @cash WHERE id = @id;"
    );
}

#[test]
fn delete_and_selects_filter_by_id() {
    let table = build_job_table();

    assert_eq!(
        table.action(SqlAction::Delete).expect("delete action"),
        "DELETE FROM job WHERE id = @id;"
    );
    assert_eq!(
        table.action(SqlAction::SelectById).expect("select by id"),
        "SELECT * FROM job WHERE id = @id;"
    );
    assert_eq!(
        table.action(SqlAction::SelectAll).expect("select all"),
        "SELECT * FROM job;"
    );
}

#[test]
fn pascal_case_names_are_snake_cased_everywhere() {
    let graph = TypeGraph::from_iter([TypeDescriptor::new("CashFlow")
        .member("id", Primitive::Uuid.into(), false)
        .member("grossAmount", Primitive::Real.into(), false)]);

    let model = build_model(&graph, ["CashFlow"]).expect("build should succeed");
    let table = model.get_table("CashFlow").expect("table should exist");

    assert_eq!(
        table.action(SqlAction::Insert).expect("insert action"),
        "INSERT INTO cash_flow (gross_amount) VALUES (@gross_amount);"
    );
}

#[test]
fn table_with_only_an_id_stays_total() {
    let graph = TypeGraph::from_iter([TypeDescriptor::new("Marker")]);

    let model = build_model(&graph, ["Marker"]).expect("build should succeed");
    let table = model.get_table("Marker").expect("table should exist");

    assert_eq!(
        table.action(SqlAction::Insert).expect("insert action"),
        "INSERT INTO marker DEFAULT VALUES;"
    );
    assert_eq!(
        table.action(SqlAction::Update).expect("update action"),
        "UPDATE marker SET id = id WHERE id = @id;"
    );
}

#[test]
fn generation_is_deterministic_for_identical_content() {
    let table = build_worker_table();

    let first = sql::generate(&table).expect("generate should succeed");
    let second = sql::generate(&table).expect("generate should succeed");

    assert_eq!(first, second);
    assert_eq!(first, table.actions);
}

#[test]
fn non_key_capable_primary_key_is_rejected_defensively() {
    // Assembled by hand; the builder never produces this shape.
    let table = Table::new(
        "Bogus",
        vec![Field::new("id", Primitive::Real, false)],
        Vec::<Reference>::new(),
        Field::new("id", Primitive::Real, false),
    );

    match sql::generate(&table) {
        Err(SqlError::UnsupportedIdType { table, kind }) => {
            assert_eq!(table, "Bogus");
            assert_eq!(kind, "Real");
        }
        other => panic!("expected UnsupportedIdType, got {other:?}"),
    }
}
