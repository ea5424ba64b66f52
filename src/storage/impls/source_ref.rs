use std::fmt;
use std::path::Path;
use crate::storage::structs::source_ref::SourceRef;

impl SourceRef {
    pub fn new(location: &str) -> SourceRef {
        SourceRef(location.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Splits a `:`-separated list of locations, dropping empty segments.
    pub fn parse_list(list: &str) -> Vec<SourceRef> {
        list.split(':')
            .filter(|location| !location.is_empty())
            .map(SourceRef::new)
            .collect()
    }
}

impl From<&str> for SourceRef {
    fn from(location: &str) -> Self {
        SourceRef::new(location)
    }
}

impl From<String> for SourceRef {
    fn from(location: String) -> Self {
        SourceRef(location)
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
