//! Product catalog use cases.

use std::sync::Arc;

mod add_product;
mod delete_product;
mod edit_product;
mod error;
mod get_product;

pub use add_product::AddProduct;
pub use delete_product::DeleteProduct;
pub use edit_product::EditProduct;
pub use error::CatalogError;
pub use get_product::GetProduct;

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub add: Arc<AddProduct>,
    pub edit: Arc<EditProduct>,
    pub delete: Arc<DeleteProduct>,
    pub get: Arc<GetProduct>,
}

impl CatalogUseCases {
    pub fn new(
        add: Arc<AddProduct>,
        edit: Arc<EditProduct>,
        delete: Arc<DeleteProduct>,
        get: Arc<GetProduct>,
    ) -> Self {
        Self {
            add,
            edit,
            delete,
            get,
        }
    }
}
