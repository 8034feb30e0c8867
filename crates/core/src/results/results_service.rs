use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::results_calculator::ResultCalculator;
use super::results_model::{PurchaseRecord, PurchaseTotals};
use crate::errors::Result;
use crate::purchases::PurchaseRepositoryTrait;
use crate::settings::SettingsServiceTrait;
use crate::states::{State, StateRepositoryTrait};

/// Trait for the results screen: converted totals over all recorded purchases.
pub trait ResultsServiceTrait: Send + Sync {
    /// Computes totals from the current purchases, states and rates.
    fn get_totals(&self) -> Result<PurchaseTotals>;
}

pub struct ResultsService {
    purchase_repository: Arc<dyn PurchaseRepositoryTrait>,
    state_repository: Arc<dyn StateRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
}

impl ResultsService {
    pub fn new(
        purchase_repository: Arc<dyn PurchaseRepositoryTrait>,
        state_repository: Arc<dyn StateRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
    ) -> Self {
        Self {
            purchase_repository,
            state_repository,
            settings_service,
        }
    }

    fn load_records(&self) -> Result<Vec<PurchaseRecord>> {
        let states: HashMap<String, State> = self
            .state_repository
            .list()?
            .into_iter()
            .map(|state| (state.id.clone(), state))
            .collect();

        let purchases = self.purchase_repository.list()?;
        Ok(purchases
            .iter()
            .map(|purchase| PurchaseRecord::from_purchase(purchase, &states))
            .collect())
    }
}

impl ResultsServiceTrait for ResultsService {
    fn get_totals(&self) -> Result<PurchaseTotals> {
        let records = self.load_records()?;
        let rates = self.settings_service.current_rates()?;
        debug!(
            "Computing totals for {} purchases (stored rates: {:?})",
            records.len(),
            rates
        );

        // Unset settings come back as zero and fall back to the built-in rates here.
        let mut calculator = ResultCalculator::from_rates(rates);
        calculator.set_purchases(records);
        Ok(calculator.totals())
    }
}
