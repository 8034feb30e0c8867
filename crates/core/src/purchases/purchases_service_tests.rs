//! Unit tests for the purchase service.

use super::*;
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, RwLock};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockPurchaseRepository {
    purchases: RwLock<Vec<Purchase>>,
}

fn to_purchase(new_purchase: NewPurchase) -> Purchase {
    Purchase {
        id: new_purchase.id.unwrap_or_default(),
        name: new_purchase.name,
        value: new_purchase.value,
        is_card_purchase: new_purchase.is_card_purchase,
        state_id: new_purchase.state_id,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    }
}

#[async_trait]
impl PurchaseRepositoryTrait for MockPurchaseRepository {
    async fn create(&self, new_purchase: NewPurchase) -> Result<Purchase> {
        let purchase = to_purchase(new_purchase);
        self.purchases.write().unwrap().push(purchase.clone());
        Ok(purchase)
    }

    async fn update(&self, new_purchase: NewPurchase) -> Result<Purchase> {
        let purchase = to_purchase(new_purchase);
        let mut purchases = self.purchases.write().unwrap();
        let slot = purchases
            .iter_mut()
            .find(|p| p.id == purchase.id)
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(purchase.id.clone())))?;
        *slot = purchase.clone();
        Ok(purchase)
    }

    async fn delete(&self, purchase_id: &str) -> Result<usize> {
        let mut purchases = self.purchases.write().unwrap();
        let before = purchases.len();
        purchases.retain(|p| p.id != purchase_id);
        Ok(before - purchases.len())
    }

    fn get_by_id(&self, purchase_id: &str) -> Result<Purchase> {
        self.purchases
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == purchase_id)
            .cloned()
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(purchase_id.to_string())))
    }

    fn list(&self) -> Result<Vec<Purchase>> {
        Ok(self.purchases.read().unwrap().clone())
    }
}

fn new_purchase(name: &str, value: Decimal) -> NewPurchase {
    NewPurchase {
        id: None,
        name: name.to_string(),
        value,
        is_card_purchase: true,
        state_id: None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_create_purchase_assigns_id() {
    let repository = Arc::new(MockPurchaseRepository::default());
    let service = PurchaseService::new(repository.clone());

    let purchase = service
        .create_purchase(new_purchase("iPad", dec!(329)))
        .await
        .unwrap();

    assert!(!purchase.id.is_empty());
    assert_eq!(service.get_purchase(&purchase.id).unwrap().value, dec!(329));
}

#[tokio::test]
async fn test_create_purchase_rejects_blank_name() {
    let repository = Arc::new(MockPurchaseRepository::default());
    let service = PurchaseService::new(repository.clone());

    let result = service.create_purchase(new_purchase("", dec!(10))).await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::MissingField(_)))
    ));
    assert!(repository.list().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_purchases_sorted_by_name() {
    let repository = Arc::new(MockPurchaseRepository::default());
    let service = PurchaseService::new(repository);

    for name in ["Watch", "Camera", "Lens"] {
        service
            .create_purchase(new_purchase(name, dec!(100)))
            .await
            .unwrap();
    }

    let names: Vec<String> = service
        .list_purchases()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Camera", "Lens", "Watch"]);
}

#[tokio::test]
async fn test_update_purchase_requires_id() {
    let service = PurchaseService::new(Arc::new(MockPurchaseRepository::default()));

    let result = service
        .update_purchase(new_purchase("Sneakers", dec!(120)))
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::MissingField(ref f))) if f == "id"
    ));
}

#[tokio::test]
async fn test_update_purchase_changes_payment_method() {
    let repository = Arc::new(MockPurchaseRepository::default());
    let service = PurchaseService::new(repository);

    let created = service
        .create_purchase(new_purchase("Backpack", dec!(80)))
        .await
        .unwrap();

    let mut edit = new_purchase("Backpack", dec!(80));
    edit.id = Some(created.id.clone());
    edit.is_card_purchase = false;
    edit.state_id = Some("fl".to_string());
    service.update_purchase(edit).await.unwrap();

    let updated = service.get_purchase(&created.id).unwrap();
    assert!(!updated.is_card_purchase);
    assert_eq!(updated.state_id.as_deref(), Some("fl"));
}

#[tokio::test]
async fn test_delete_purchase() {
    let repository = Arc::new(MockPurchaseRepository::default());
    let service = PurchaseService::new(repository);

    let created = service
        .create_purchase(new_purchase("Jacket", dec!(60)))
        .await
        .unwrap();
    service.delete_purchase(&created.id).await.unwrap();

    assert!(service.list_purchases().unwrap().is_empty());
}
