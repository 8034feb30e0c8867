//! Purchase repository and service traits.
//!
//! These traits define the contract for purchase operations without any
//! storage-specific types.

use async_trait::async_trait;

use super::purchases_model::{NewPurchase, Purchase};
use crate::errors::Result;

/// Trait defining the contract for Purchase repository operations.
#[async_trait]
pub trait PurchaseRepositoryTrait: Send + Sync {
    /// Creates a new purchase. `new_purchase.id` is always set by the service.
    async fn create(&self, new_purchase: NewPurchase) -> Result<Purchase>;

    /// Updates an existing purchase.
    async fn update(&self, purchase: NewPurchase) -> Result<Purchase>;

    /// Deletes a purchase by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, purchase_id: &str) -> Result<usize>;

    /// Retrieves a purchase by its ID.
    fn get_by_id(&self, purchase_id: &str) -> Result<Purchase>;

    /// Lists all purchases.
    fn list(&self) -> Result<Vec<Purchase>>;
}

/// Trait defining the contract for Purchase service operations.
#[async_trait]
pub trait PurchaseServiceTrait: Send + Sync {
    /// Lists all purchases ordered by name.
    fn list_purchases(&self) -> Result<Vec<Purchase>>;

    fn get_purchase(&self, purchase_id: &str) -> Result<Purchase>;

    async fn create_purchase(&self, new_purchase: NewPurchase) -> Result<Purchase>;

    /// Updates a purchase; `purchase.id` is required.
    async fn update_purchase(&self, purchase: NewPurchase) -> Result<Purchase>;

    async fn delete_purchase(&self, purchase_id: &str) -> Result<()>;
}
