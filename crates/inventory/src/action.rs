//! Action log records.
//!
//! Only inserts and consumptions are recorded; expirations are not part of the
//! action history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use larder_events::Event;

use crate::item::Quantity;
use crate::ledger::InventoryEvent;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Inserted,
    Consumed,
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ActionKind::Inserted => f.write_str("Inserted"),
            ActionKind::Consumed => f.write_str("Consumed"),
        }
    }
}

/// One successful insert or consume.
///
/// Displays as `"Inserted <qty> of <name>"` or `"Consumed <qty> of <name>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub kind: ActionKind,
    pub name: String,
    pub quantity: Quantity,
    pub occurred_at: DateTime<Utc>,
}

impl ActionRecord {
    /// The action history entry for a ledger event, if it has one.
    pub fn from_event(event: &InventoryEvent) -> Option<Self> {
        match event {
            InventoryEvent::ItemInserted(e) => Some(Self {
                kind: ActionKind::Inserted,
                name: e.name.clone(),
                quantity: e.quantity,
                occurred_at: e.occurred_at,
            }),
            InventoryEvent::ItemConsumed(e) => Some(Self {
                kind: ActionKind::Consumed,
                name: e.name.clone(),
                quantity: e.quantity,
                occurred_at: e.occurred_at,
            }),
            InventoryEvent::ItemExpired(_) => None,
        }
    }
}

impl Event for ActionRecord {
    fn event_type(&self) -> &'static str {
        match self.kind {
            ActionKind::Inserted => "inventory.action.inserted",
            ActionKind::Consumed => "inventory.action.consumed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl core::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} of {}", self.kind, self.quantity, self.name)
    }
}
