//! Results module - converted purchase totals and the service that feeds them.

mod results_calculator;
mod results_model;
mod results_service;


pub use results_calculator::{
    calculate_totals, has_purchases_without_state, sum_in_source_currency,
    total_in_target_currency, ResultCalculator,
};
pub use results_model::{PurchaseRecord, PurchaseTotals, StateRecord};
pub use results_service::{ResultsService, ResultsServiceTrait};
