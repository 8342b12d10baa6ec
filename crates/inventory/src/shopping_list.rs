//! Shopping list: total consumption per item, derived from the action log.

use std::collections::BTreeMap;

use larder_events::{EventEnvelope, Projection};

use crate::action::{ActionKind, ActionRecord};

/// Suggested restock for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Restock {
    pub name: String,
    pub total_consumed: f64,
}

/// Projection over [`ActionRecord`]s that sums consumed quantities by item name.
///
/// Disposable: rebuilt from the full log each time it is requested.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    consumed: BTreeMap<String, f64>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restock suggestions, ordered by item name.
    pub fn entries(&self) -> Vec<Restock> {
        self.consumed
            .iter()
            .map(|(name, total)| Restock {
                name: name.clone(),
                total_consumed: *total,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }
}

impl Projection for ShoppingList {
    type Ev = ActionRecord;

    fn apply(&mut self, envelope: &EventEnvelope<ActionRecord>) {
        let record = envelope.payload();
        if record.kind == ActionKind::Consumed {
            *self.consumed.entry(record.name.clone()).or_insert(0.0) += record.quantity.value();
        }
    }
}
