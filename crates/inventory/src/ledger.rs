use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use larder_core::{Aggregate, DomainError, Entity};
use larder_events::Event;

use crate::item::{ExpirationDate, Item, Quantity};

/// Aggregate root: the item ledger (name -> item).
///
/// Enumeration order over items is unspecified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    items: HashMap<String, Item>,
    version: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Command: InsertItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertItem {
    pub name: String,
    pub quantity: f64,
    pub expiration_date: ExpirationDate,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ConsumeItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumeItem {
    pub name: String,
    pub quantity: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ExpireItems (sweep everything dated on or before `current_date`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpireItems {
    pub current_date: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryCommand {
    InsertItem(InsertItem),
    ConsumeItem(ConsumeItem),
    ExpireItems(ExpireItems),
}

/// Event: ItemInserted.
///
/// `expiration_date` only takes effect when the item is not already held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInserted {
    pub name: String,
    pub quantity: Quantity,
    pub expiration_date: ExpirationDate,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemConsumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConsumed {
    pub name: String,
    pub quantity: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemExpired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemExpired {
    pub name: String,
    pub quantity: f64,
    pub expiration_date: ExpirationDate,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemInserted(ItemInserted),
    ItemConsumed(ItemConsumed),
    ItemExpired(ItemExpired),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemInserted(_) => "inventory.item.inserted",
            InventoryEvent::ItemConsumed(_) => "inventory.item.consumed",
            InventoryEvent::ItemExpired(_) => "inventory.item.expired",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemInserted(e) => e.occurred_at,
            InventoryEvent::ItemConsumed(e) => e.occurred_at,
            InventoryEvent::ItemExpired(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Ledger {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemInserted(e) => match self.items.get_mut(&e.name) {
                // First-seen expiration date wins.
                Some(item) => item.add(e.quantity),
                None => {
                    let item = Item::new(e.name.clone(), e.quantity, e.expiration_date.clone());
                    self.items.insert(item.id().clone(), item);
                }
            },
            InventoryEvent::ItemConsumed(e) => {
                let emptied = match self.items.get_mut(&e.name) {
                    Some(item) => {
                        item.remove(e.quantity);
                        // Exact equality: fractional residue is kept.
                        item.quantity() == 0.0
                    }
                    None => false,
                };
                if emptied {
                    self.items.remove(&e.name);
                }
            }
            InventoryEvent::ItemExpired(e) => {
                self.items.remove(&e.name);
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::InsertItem(cmd) => self.handle_insert(cmd),
            InventoryCommand::ConsumeItem(cmd) => self.handle_consume(cmd),
            InventoryCommand::ExpireItems(cmd) => Ok(self.handle_expire(cmd)),
        }
    }
}

impl Ledger {
    fn handle_insert(&self, cmd: &InsertItem) -> Result<Vec<InventoryEvent>, DomainError> {
        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        let quantity = Quantity::new(cmd.quantity, "item quantity")?;
        if cmd.expiration_date.as_str().trim().is_empty() {
            return Err(DomainError::validation("expiration date cannot be empty"));
        }

        if let Some(item) = self.items.get(&cmd.name) {
            if !(item.quantity() + quantity.value()).is_finite() {
                return Err(DomainError::validation(format!(
                    "total quantity of {} would overflow",
                    cmd.name
                )));
            }
        }

        Ok(vec![InventoryEvent::ItemInserted(ItemInserted {
            name: cmd.name.clone(),
            quantity,
            expiration_date: cmd.expiration_date.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_consume(&self, cmd: &ConsumeItem) -> Result<Vec<InventoryEvent>, DomainError> {
        let quantity = Quantity::new(cmd.quantity, "consumed quantity")?;

        let item = self
            .items
            .get(&cmd.name)
            .ok_or_else(|| DomainError::not_found(&cmd.name))?;

        if item.quantity() < quantity.value() {
            return Err(DomainError::insufficient(
                &cmd.name,
                quantity.value(),
                item.quantity(),
            ));
        }

        Ok(vec![InventoryEvent::ItemConsumed(ItemConsumed {
            name: cmd.name.clone(),
            quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_expire(&self, cmd: &ExpireItems) -> Vec<InventoryEvent> {
        self.items
            .values()
            .filter(|item| item.expiration_date().is_expired_on(&cmd.current_date))
            .map(|item| {
                InventoryEvent::ItemExpired(ItemExpired {
                    name: item.name().to_string(),
                    quantity: item.quantity(),
                    expiration_date: item.expiration_date().clone(),
                    occurred_at: cmd.occurred_at,
                })
            })
            .collect()
    }
}
