use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::purchases_model::{NewPurchase, Purchase};
use super::purchases_traits::{PurchaseRepositoryTrait, PurchaseServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing recorded purchases
pub struct PurchaseService {
    repository: Arc<dyn PurchaseRepositoryTrait>,
}

impl PurchaseService {
    pub fn new(repository: Arc<dyn PurchaseRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PurchaseServiceTrait for PurchaseService {
    fn list_purchases(&self) -> Result<Vec<Purchase>> {
        let mut purchases = self.repository.list()?;
        purchases.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(purchases)
    }

    fn get_purchase(&self, purchase_id: &str) -> Result<Purchase> {
        self.repository.get_by_id(purchase_id)
    }

    async fn create_purchase(&self, mut new_purchase: NewPurchase) -> Result<Purchase> {
        new_purchase.validate()?;
        let purchase_id = new_purchase
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();
        debug!(
            "Creating purchase {} ({}, card: {})",
            purchase_id, new_purchase.value, new_purchase.is_card_purchase
        );
        self.repository.create(new_purchase).await
    }

    async fn update_purchase(&self, purchase: NewPurchase) -> Result<Purchase> {
        if purchase.id.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        purchase.validate()?;
        debug!("Updating purchase {:?}", purchase.id);
        self.repository.update(purchase).await
    }

    async fn delete_purchase(&self, purchase_id: &str) -> Result<()> {
        debug!("Deleting purchase {}", purchase_id);
        self.repository.delete(purchase_id).await?;
        Ok(())
    }
}
