//! Text rendering of inventory queries.
//!
//! Each function returns the lines to print, header first.

use larder_core::DomainError;
use larder_inventory::{ExpirySweep, Inventory, ShoppingList};

pub fn status(inventory: &Inventory) -> Vec<String> {
    let mut lines = vec!["--- Current Refrigerator Status ---".to_string()];
    if inventory.is_empty() {
        lines.push("The refrigerator is empty.".to_string());
        return lines;
    }
    lines.extend(inventory.status().map(|item| {
        format!(
            "- {}: {} (Expires: {})",
            item.name(),
            item.quantity(),
            item.expiration_date()
        )
    }));
    lines
}

pub fn history(inventory: &Inventory) -> Vec<String> {
    let mut lines = vec!["--- History of Actions ---".to_string()];
    let mut records = inventory.history().peekable();
    if records.peek().is_none() {
        lines.push("No actions recorded yet.".to_string());
        return lines;
    }
    lines.extend(records.map(|record| format!("- {record}")));
    lines
}

pub fn expiry_sweep(sweep: &ExpirySweep) -> Vec<String> {
    let mut lines = vec!["--- Checking Expired Products ---".to_string()];
    if !sweep.found() {
        lines.push("No expired products found.".to_string());
        return lines;
    }
    lines.extend(
        sweep
            .names()
            .map(|name| format!("Product {name} has expired. Please remove it.")),
    );
    lines
}

pub fn shopping_list(list: &ShoppingList) -> Vec<String> {
    let mut lines = vec!["--- Generated Shopping List ---".to_string()];
    if list.is_empty() {
        lines.push("No items to suggest for shopping.".to_string());
        return lines;
    }
    lines.extend(
        list.entries()
            .into_iter()
            .map(|r| format!("- Buy more {} ({})", r.name, r.total_consumed)),
    );
    lines
}

pub fn error(err: &DomainError) -> String {
    format!("Error: {err}.")
}
