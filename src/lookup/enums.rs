pub mod lookup_outcome;
