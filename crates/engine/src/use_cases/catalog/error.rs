//! Catalog operation errors.

use pantry_domain::DomainError;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::retry::ConflictAware;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Gave up editing product {id} after {attempts} conflicting attempts")]
    Contention { id: String, attempts: u32 },
}

impl CatalogError {
    pub(crate) fn exhausted(self, id: &str, attempts: u32) -> Self {
        if self.is_conflict() {
            Self::Contention {
                id: id.to_string(),
                attempts,
            }
        } else {
            self
        }
    }
}

impl ConflictAware for CatalogError {
    fn is_conflict(&self) -> bool {
        matches!(self, Self::Repo(e) if e.is_conflict())
    }
}
