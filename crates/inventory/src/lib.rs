//! Inventory domain module.
//!
//! Business rules for the store's stock, implemented as deterministic domain
//! logic over an in-memory map (no persistence). Console listings are written
//! to any `io::Write`.

pub mod error;
pub mod inventory;
pub mod item;
pub mod listing;
pub mod stock;

pub use error::InventoryError;
pub use inventory::{
    AddNewItem, DecreaseStock, IncreaseStock, Inventory, InventoryCommand, InventoryEvent,
    ItemAdded, StockDecreased, StockIncreased,
};
pub use item::{Category, Item};
pub use stock::Stock;
