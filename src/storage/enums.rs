/// Which schema rule a storage document broke.
pub mod schema_constraint;

/// Per-source storage errors.
pub mod storage_error;
