use crate::lookup::enums::lookup_outcome::LookupOutcome;

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupOutcome::NotFound)
    }

    pub fn is_source_error(&self) -> bool {
        matches!(self, LookupOutcome::SourceError(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            LookupOutcome::Found(_) => "found",
            LookupOutcome::NotFound => "not_found",
            LookupOutcome::SourceError(_) => "source_error",
        }
    }
}
