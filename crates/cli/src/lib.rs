//! Interactive driver for the larder inventory.
//!
//! The session reads one answer per line, dispatches into an explicitly
//! constructed [`larder_inventory::Inventory`], and renders results as text.

pub mod config;
pub mod menu;
pub mod render;
pub mod session;

pub use config::AppConfig;
pub use menu::MenuChoice;
pub use session::Session;
