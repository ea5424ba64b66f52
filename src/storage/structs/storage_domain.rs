#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageDomain {
    pub main: String,
    pub sans: Option<Vec<String>>,
}
