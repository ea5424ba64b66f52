#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaConstraint {
    ExpectedObject,
    ExpectedArray,
    ExpectedString,
    MissingField,
    EmptyResolverName,
    EmptyCertificates,
}
