//! Purchase domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a recorded purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,
    pub name: String,
    /// Price in the source currency
    pub value: Decimal,
    pub is_card_purchase: bool,
    /// State the purchase was made in, if any
    pub state_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or updating a purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub value: Decimal,
    pub is_card_purchase: bool,
    pub state_id: Option<String>,
}

impl NewPurchase {
    /// Validates the purchase data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.value < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Purchase value cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
