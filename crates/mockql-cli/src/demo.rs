//! The canonical demo descriptors: a Worker with a nested Job.

use mockql::prelude::*;

pub fn graph() -> TypeGraph {
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
