pub mod source_ref;
pub mod schema_constraint;
pub mod schema_violation;
pub mod validated_storage;
pub mod file_storage_reader;
