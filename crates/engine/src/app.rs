//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::DocumentStore;
use crate::use_cases::{
    catalog::{AddProduct, DeleteProduct, EditProduct, GetProduct},
    ledger::{AddOne, LookupStock, RemoveOne},
    projection::{ListProducts, ListStock},
    CatalogUseCases, LedgerUseCases, ProjectionUseCases, RetryConfig,
};

/// Main application state.
///
/// Holds every use case, all sharing one document store.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub ledger: LedgerUseCases,
    pub catalog: CatalogUseCases,
    pub projection: ProjectionUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(store: Arc<dyn DocumentStore>, retry: RetryConfig) -> Self {
        let ledger = LedgerUseCases::new(
            Arc::new(AddOne::new(store.clone(), retry.clone())),
            Arc::new(RemoveOne::new(store.clone(), retry.clone())),
            Arc::new(LookupStock::new(store.clone())),
        );

        let catalog = CatalogUseCases::new(
            Arc::new(AddProduct::new(store.clone())),
            Arc::new(EditProduct::new(store.clone(), retry)),
            Arc::new(DeleteProduct::new(store.clone())),
            Arc::new(GetProduct::new(store.clone())),
        );

        let projection = ProjectionUseCases::new(
            Arc::new(ListStock::new(store.clone())),
            Arc::new(ListProducts::new(store)),
        );

        Self {
            use_cases: UseCases {
                ledger,
                catalog,
                projection,
            },
        }
    }
}
