//! Ledger operation errors.

use pantry_domain::DomainError;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::retry::ConflictAware;

/// Errors that can occur during ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    /// Every attempt lost against a concurrent writer. Safe to retry later.
    #[error("Gave up updating {item} after {attempts} conflicting attempts")]
    Contention { item: String, attempts: u32 },
}

impl LedgerError {
    /// Turn an exhausted conflict into `Contention`; pass anything else through.
    pub(crate) fn exhausted(self, item: &str, attempts: u32) -> Self {
        if self.is_conflict() {
            Self::Contention {
                item: item.to_string(),
                attempts,
            }
        } else {
            self
        }
    }
}

impl ConflictAware for LedgerError {
    fn is_conflict(&self) -> bool {
        matches!(self, Self::Repo(e) if e.is_conflict())
    }
}
