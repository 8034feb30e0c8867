use log::debug;
use rust_decimal::Decimal;

use crate::results::{PurchaseRecord, PurchaseTotals};
use crate::settings::RateSettings;

/// Holds a snapshot of purchases and the current rates, and computes totals on demand.
///
/// Nothing is cached: every getter recomputes from the latest snapshot and
/// rates, so a setter always takes effect on the next call.
#[derive(Debug, Clone, Default)]
pub struct ResultCalculator {
    purchases: Vec<PurchaseRecord>,
    rates: RateSettings,
}

impl ResultCalculator {
    /// Creates a calculator with an empty snapshot.
    ///
    /// When both rates are zero the built-in defaults are used instead. If only
    /// one of them is zero, both are kept as given.
    pub fn new(conversion_rate: Decimal, surcharge_rate: Decimal) -> Self {
        Self::from_rates(RateSettings::new(conversion_rate, surcharge_rate))
    }

    /// Same as [`ResultCalculator::new`], taking the rates as one value.
    pub fn from_rates(rates: RateSettings) -> Self {
        Self {
            purchases: Vec::new(),
            rates: rates.or_defaults(),
        }
    }

    pub fn set_conversion_rate(&mut self, rate: Decimal) {
        self.rates.conversion_rate = rate;
    }

    pub fn set_surcharge_rate(&mut self, rate: Decimal) {
        self.rates.surcharge_rate = rate;
    }

    /// Replaces the working snapshot.
    pub fn set_purchases(&mut self, purchases: Vec<PurchaseRecord>) {
        self.purchases = purchases;
    }

    pub fn rates(&self) -> RateSettings {
        self.rates
    }

    pub fn total_in_source_currency(&self) -> Decimal {
        sum_in_source_currency(&self.purchases)
    }

    pub fn total_in_target_currency(&self) -> Decimal {
        total_in_target_currency(&self.purchases, &self.rates)
    }

    pub fn totals(&self) -> PurchaseTotals {
        calculate_totals(&self.purchases, &self.rates)
    }
}

/// Computes both totals for a snapshot, using the rates exactly as given.
pub fn calculate_totals(purchases: &[PurchaseRecord], rates: &RateSettings) -> PurchaseTotals {
    let totals = PurchaseTotals {
        total_in_source_currency: sum_in_source_currency(purchases),
        total_in_target_currency: total_in_target_currency(purchases, rates),
        has_purchases_without_state: has_purchases_without_state(purchases),
    };
    debug!(
        "Totals for {} purchases at {:?}: source {}, target {}",
        purchases.len(),
        rates,
        totals.total_in_source_currency,
        totals.total_in_target_currency
    );
    totals
}

/// Sum of raw purchase values. Taxes and conversion never affect it.
pub fn sum_in_source_currency(purchases: &[PurchaseRecord]) -> Decimal {
    saturating_sum(purchases.iter().map(|p| p.value))
}

/// Taxed, converted total.
///
/// 1. Split purchases into card and cash.
/// 2. Add state tax per purchase, giving a subtotal for each group.
/// 3. Convert both subtotals with `conversion_rate`.
/// 4. Add `surcharge_rate` on top of the card subtotal only.
///
/// Arithmetic saturates at `Decimal::MAX`/`Decimal::MIN` instead of panicking.
pub fn total_in_target_currency(purchases: &[PurchaseRecord], rates: &RateSettings) -> Decimal {
    let (card_subtotal, cash_subtotal) = taxed_subtotals(purchases);

    let card_subtotal_target = card_subtotal.saturating_mul(rates.conversion_rate);
    let cash_subtotal_target = cash_subtotal.saturating_mul(rates.conversion_rate);

    let card_subtotal_with_surcharge = add_percentage(card_subtotal_target, rates.surcharge_rate);

    cash_subtotal_target.saturating_add(card_subtotal_with_surcharge)
}

/// True when any purchase has no state tax information.
pub fn has_purchases_without_state(purchases: &[PurchaseRecord]) -> bool {
    purchases.iter().any(|p| p.state.is_none())
}

/// Returns (card, cash) subtotals in source currency with state tax applied.
fn taxed_subtotals(purchases: &[PurchaseRecord]) -> (Decimal, Decimal) {
    let (card, cash): (Vec<&PurchaseRecord>, Vec<&PurchaseRecord>) =
        purchases.iter().partition(|p| p.is_card_purchase);

    (
        saturating_sum(card.into_iter().map(with_state_tax)),
        saturating_sum(cash.into_iter().map(with_state_tax)),
    )
}

fn with_state_tax(purchase: &PurchaseRecord) -> Decimal {
    match purchase.state {
        Some(state) => add_percentage(purchase.value, state.tax_value),
        None => purchase.value,
    }
}

fn add_percentage(amount: Decimal, percentage: Decimal) -> Decimal {
    amount.saturating_add(amount.saturating_mul(percentage) / Decimal::ONE_HUNDRED)
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}
