//! Purchases module - domain models, services, and traits.

mod purchases_model;
mod purchases_service;
mod purchases_traits;

#[cfg(test)]
mod purchases_service_tests;

pub use purchases_model::{NewPurchase, Purchase};
pub use purchases_service::PurchaseService;
pub use purchases_traits::{PurchaseRepositoryTrait, PurchaseServiceTrait};
