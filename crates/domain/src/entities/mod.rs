//! Domain entities

mod product;
mod stock_item;

pub use product::{Product, ProductDraft, RawProductFields};
pub use stock_item::StockItem;
