//! Value objects - Immutable objects defined by their attributes

mod category;
mod names;
mod price;
mod quantity;
mod unit;

pub use category::Category;
pub use names::{ItemName, ProductName};
pub use price::Price;
pub use quantity::{Quantity, QuantityChange};
pub use unit::Unit;
