//! Inventory domain module (event-sourced).
//!
//! The ledger decides and evolves purely; the [`Inventory`] facade composes it
//! with the append-only action log and the shopping list projection.

pub mod action;
pub mod inventory;
pub mod item;
pub mod ledger;
pub mod shopping_list;

pub use action::{ActionKind, ActionRecord};
pub use inventory::{ExpirySweep, Inventory};
pub use item::{ExpirationDate, Item, Quantity};
pub use ledger::{
    ConsumeItem, ExpireItems, InsertItem, InventoryCommand, InventoryEvent, ItemConsumed,
    ItemExpired, ItemInserted, Ledger,
};
pub use shopping_list::{Restock, ShoppingList};
