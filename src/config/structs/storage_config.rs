use serde::{Deserialize, Serialize};
use crate::storage::structs::source_ref::SourceRef;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StorageConfig {
    /// Storage files in lookup priority order.
    pub sources: Vec<SourceRef>
}
