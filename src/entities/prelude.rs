pub use super::item::Entity as Item;
pub use super::item_price::Entity as ItemPrice;
pub use super::unit::Entity as Unit;
