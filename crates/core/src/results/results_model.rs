//! Input and output shapes of the totals calculation.

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::purchases::Purchase;
use crate::states::State;

/// The part of a state the totals depend on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    /// Tax percentage, e.g. `4.5` for 4.5%
    pub tax_value: Decimal,
}

impl From<&State> for StateRecord {
    fn from(state: &State) -> Self {
        Self {
            tax_value: state.tax_value,
        }
    }
}

/// A purchase as seen by the calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub value: Decimal,
    pub is_card_purchase: bool,
    pub state: Option<StateRecord>,
}

impl PurchaseRecord {
    pub fn new(value: Decimal, is_card_purchase: bool, state: Option<StateRecord>) -> Self {
        Self {
            value,
            is_card_purchase,
            state,
        }
    }

    /// Joins a stored purchase with its state.
    ///
    /// A `state_id` that no longer resolves (the state was deleted) yields a
    /// record without state, so no state tax is applied.
    pub fn from_purchase(purchase: &Purchase, states: &HashMap<String, State>) -> Self {
        let state = purchase.state_id.as_deref().and_then(|state_id| {
            let found = states.get(state_id).map(StateRecord::from);
            if found.is_none() {
                warn!(
                    "Purchase {} references missing state {}; no state tax applied",
                    purchase.id, state_id
                );
            }
            found
        });

        Self {
            value: purchase.value,
            is_card_purchase: purchase.is_card_purchase,
            state,
        }
    }
}

/// Both totals plus the "some purchases lack tax info" flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseTotals {
    /// Plain sum of purchase values, no tax or conversion
    pub total_in_source_currency: Decimal,
    /// Taxed, converted and surcharged total
    pub total_in_target_currency: Decimal,
    pub has_purchases_without_state: bool,
}
