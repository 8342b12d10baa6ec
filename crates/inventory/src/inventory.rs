//! Inventory facade: the ledger plus its action log.
//!
//! Every command runs decide-then-evolve against the ledger. Accepted insert and
//! consume events are appended to the log; rejected commands change nothing.

use chrono::Utc;

use larder_core::{DomainError, DomainResult};
use larder_events::{EventLog, ProjectionRunner, execute};

use crate::action::ActionRecord;
use crate::item::{ExpirationDate, Item};
use crate::ledger::{
    ConsumeItem, ExpireItems, InsertItem, InventoryCommand, InventoryEvent, ItemExpired, Ledger,
};
use crate::shopping_list::ShoppingList;

/// Outcome of an expiration sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpirySweep {
    pub expired: Vec<ItemExpired>,
}

impl ExpirySweep {
    pub fn found(&self) -> bool {
        !self.expired.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.expired.iter().map(|e| e.name.as_str())
    }
}

/// A single-location inventory. Owns its ledger and action log exclusively.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    ledger: Ledger,
    log: EventLog<ActionRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add stock. An already-held item keeps its original expiration date.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        quantity: f64,
        expiration_date: impl Into<String>,
    ) -> DomainResult<()> {
        let cmd = InventoryCommand::InsertItem(InsertItem {
            name: name.into(),
            quantity,
            expiration_date: ExpirationDate::new(expiration_date),
            occurred_at: Utc::now(),
        });
        self.dispatch(&cmd)?;
        Ok(())
    }

    /// Take stock out. The item is removed once its quantity is exactly zero.
    pub fn consume(&mut self, name: impl Into<String>, quantity: f64) -> DomainResult<()> {
        let cmd = InventoryCommand::ConsumeItem(ConsumeItem {
            name: name.into(),
            quantity,
            occurred_at: Utc::now(),
        });
        self.dispatch(&cmd)?;
        Ok(())
    }

    /// Remove every item whose expiration date is on or before `current_date`.
    pub fn expire_sweep(&mut self, current_date: &str) -> DomainResult<ExpirySweep> {
        let cmd = InventoryCommand::ExpireItems(ExpireItems {
            current_date: current_date.to_string(),
            occurred_at: Utc::now(),
        });

        let expired = self
            .dispatch(&cmd)?
            .into_iter()
            .filter_map(|ev| match ev {
                InventoryEvent::ItemExpired(e) => Some(e),
                _ => None,
            })
            .collect::<Vec<_>>();

        tracing::info!(
            current_date,
            expired = expired.len(),
            remaining = self.ledger.len(),
            "expiration sweep finished"
        );
        Ok(ExpirySweep { expired })
    }

    /// Current items; enumeration order is unspecified.
    pub fn status(&self) -> impl Iterator<Item = &Item> + '_ {
        self.ledger.items()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Every recorded action, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> + '_ {
        self.log.payloads()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn log(&self) -> &EventLog<ActionRecord> {
        &self.log
    }

    /// Rebuild the shopping list from the full action history.
    pub fn shopping_list(&self) -> DomainResult<ShoppingList> {
        let (list, cursor) =
            ProjectionRunner::rebuild_from_scratch(ShoppingList::new, self.log.envelopes())
                .map_err(|e| DomainError::validation(e.to_string()))?;

        tracing::debug!(
            replayed = cursor.map(|c| c.last_sequence_number()).unwrap_or(0),
            "shopping list rebuilt"
        );
        Ok(list)
    }

    fn dispatch(&mut self, cmd: &InventoryCommand) -> DomainResult<Vec<InventoryEvent>> {
        let events = match execute(&mut self.ledger, cmd) {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(error = %err, "inventory command rejected");
                return Err(err);
            }
        };

        for ev in &events {
            if let Some(record) = ActionRecord::from_event(ev) {
                let env = self.log.append(record);
                tracing::debug!(
                    seq = env.sequence_number(),
                    action = %env.payload(),
                    "action recorded"
                );
            }
        }
        Ok(events)
    }
}
