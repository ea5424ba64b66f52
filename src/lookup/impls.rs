pub mod lookup_outcome;
pub mod lookup_service;
