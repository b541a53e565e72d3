mod item;
mod store;

pub use item::{Category, Item};
pub use store::ItemStore;
