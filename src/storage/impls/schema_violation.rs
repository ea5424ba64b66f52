use std::fmt;
use crate::storage::enums::schema_constraint::SchemaConstraint;
use crate::storage::structs::schema_violation::SchemaViolation;

impl SchemaViolation {
    pub fn new(path: &str, constraint: SchemaConstraint) -> SchemaViolation {
        SchemaViolation {
            path: path.to_string(),
            constraint,
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.constraint)
    }
}

impl std::error::Error for SchemaViolation {}
