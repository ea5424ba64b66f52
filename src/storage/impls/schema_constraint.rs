use std::fmt;
use crate::storage::enums::schema_constraint::SchemaConstraint;

impl fmt::Display for SchemaConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SchemaConstraint::ExpectedObject => "expected an object",
            SchemaConstraint::ExpectedArray => "expected an array",
            SchemaConstraint::ExpectedString => "expected a string",
            SchemaConstraint::MissingField => "required field is missing",
            SchemaConstraint::EmptyResolverName => "resolver name is empty",
            SchemaConstraint::EmptyCertificates => "Certificates is empty",
        };
        f.write_str(message)
    }
}
