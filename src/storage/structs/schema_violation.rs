use crate::storage::enums::schema_constraint::SchemaConstraint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSONPath-like location of the offending value, e.g. `$.r1.Certificates[0].key`.
    pub path: String,
    pub constraint: SchemaConstraint,
}
