pub mod heading;
pub mod list_item;

pub use heading::Heading;
pub use list_item::ListItem;
