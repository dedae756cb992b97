//! Adapter: a multi-currency payer made to look like the legacy USD-only
//! payment interface.
//!
//! Run with: cargo run --bin p6_adapter

use std::collections::BTreeMap;

use tracing::{error, info, warn};

use crate::error::{PatternError, Result};

const USD: &str = "USD";

fn is_usd(currency: &str) -> bool {
    currency.trim().eq_ignore_ascii_case(USD)
}

/// Whole amounts print bare (`100`), everything else with two decimals.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

// ============================================================================
// Exchange rates
// ============================================================================

/// Units of each currency per one US dollar, keyed by upper-case code.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRates {
    rates: BTreeMap<String, f64>,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        let rates = [("USD", 1.0), ("EUR", 0.92), ("GBP", 0.79), ("JPY", 150.0)]
            .into_iter()
            .map(|(code, rate)| (code.to_string(), rate))
            .collect();
        Self { rates }
    }
}

impl ExchangeRates {
    /// Start from the default table and apply `overrides` on top of it.
    pub fn with_overrides<I, K>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut rates = Self::default();
        for (currency, rate) in overrides {
            rates.set(currency.as_ref(), rate)?;
        }
        Ok(rates)
    }

    pub fn set(&mut self, currency: &str, rate: f64) -> Result<()> {
        let code = currency.trim().to_ascii_uppercase();
        if !rate.is_finite() || rate <= 0.0 {
            return Err(PatternError::invalid_rate(code, rate));
        }
        self.rates.insert(code, rate);
        Ok(())
    }

    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(&currency.trim().to_ascii_uppercase()).copied()
    }

    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}

// ============================================================================
// The interface clients already use
// ============================================================================

pub trait UsdPayment {
    fn pay_in_usd(&self, amount: f64, currency: &str) -> String;
}

/// Legacy system: refuses anything that isn't USD, but never fails loudly.
#[derive(Debug, Default)]
pub struct UsdPaymentSystem;

impl UsdPayment for UsdPaymentSystem {
    fn pay_in_usd(&self, amount: f64, currency: &str) -> String {
        if !is_usd(currency) {
            error!("Legacy system only accepts USD, but got {}", currency);
            return "Payment failed: Only USD is accepted".to_string();
        }
        format!("Paid ${} USD", format_amount(amount))
    }
}

// ============================================================================
// The new system, with a different interface
// ============================================================================

pub trait MultiCurrencyPayment {
    fn pay(&self, amount: f64, currency: &str) -> String;
}

#[derive(Debug, Default)]
pub struct MultiCurrencyPaymentSystem;

impl MultiCurrencyPayment for MultiCurrencyPaymentSystem {
    fn pay(&self, amount: f64, currency: &str) -> String {
        format!("Paid {} {}", format_amount(amount), currency)
    }
}

// ============================================================================
// Adapter
// ============================================================================

/// Speaks `UsdPayment`, pays through a `MultiCurrencyPayment`.
#[derive(Debug)]
pub struct PaymentAdapter<P = MultiCurrencyPaymentSystem> {
    payer: P,
    rates: ExchangeRates,
}

impl PaymentAdapter<MultiCurrencyPaymentSystem> {
    pub fn new(rates: ExchangeRates) -> Self {
        Self::with_payer(MultiCurrencyPaymentSystem, rates)
    }
}

impl Default for PaymentAdapter<MultiCurrencyPaymentSystem> {
    fn default() -> Self {
        Self::new(ExchangeRates::default())
    }
}

impl<P: MultiCurrencyPayment> PaymentAdapter<P> {
    pub fn with_payer(payer: P, rates: ExchangeRates) -> Self {
        Self { payer, rates }
    }

    pub fn rates(&self) -> &ExchangeRates {
        &self.rates
    }

    pub fn convert_to_usd(&self, amount: f64, currency: &str) -> Result<f64> {
        let rate = self
            .rates
            .rate(currency)
            .ok_or_else(|| PatternError::UnsupportedCurrency(currency.trim().to_ascii_uppercase()))?;
        Ok(amount / rate)
    }
}

impl<P: MultiCurrencyPayment> UsdPayment for PaymentAdapter<P> {
    fn pay_in_usd(&self, amount: f64, currency: &str) -> String {
        if is_usd(currency) {
            return self.payer.pay(amount, USD);
        }

        let usd = match self.convert_to_usd(amount, currency) {
            Ok(usd) => usd,
            Err(e) => {
                warn!("{}, assuming a rate of 1.0", e);
                amount
            }
        };
        info!(
            "Converted {} {} to {} USD",
            format_amount(amount),
            currency,
            format_amount(usd)
        );
        self.payer.pay(usd, USD)
    }
}

/// Client code that only knows the USD interface.
pub fn process_payment(system: &dyn UsdPayment, amount: f64, currency: &str) -> Vec<String> {
    let heading = if is_usd(currency) {
        format!("Processing ${} payment...", format_amount(amount))
    } else {
        format!("Processing {} {} payment...", format_amount(amount), currency)
    };

    vec![
        heading,
        format!("Result: {}", system.pay_in_usd(amount, currency)),
    ]
}

pub fn demo(rates: &ExchangeRates) -> Vec<String> {
    let mut lines = vec!["=== Legacy System (USD only) ===".to_string()];
    lines.extend(process_payment(&UsdPaymentSystem, 100.0, USD));
    lines.push(String::new());

    lines.push("=== Adapter with Multi-Currency Support ===".to_string());
    let adapter = PaymentAdapter::new(rates.clone());
    for (amount, currency) in [(100.0, "USD"), (92.0, "EUR"), (79.0, "GBP"), (15000.0, "JPY")] {
        lines.extend(process_payment(&adapter, amount, currency));
        lines.push(String::new());
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPayer {
        calls: RefCell<Vec<(f64, String)>>,
    }

    impl MultiCurrencyPayment for RecordingPayer {
        fn pay(&self, amount: f64, currency: &str) -> String {
            self.calls.borrow_mut().push((amount, currency.to_string()));
            "ok".to_string()
        }
    }

    #[test]
    fn test_rate_applied_before_delegation() {
        let adapter = PaymentAdapter::with_payer(RecordingPayer::default(), ExchangeRates::default());

        adapter.pay_in_usd(92.0, "EUR");
        adapter.pay_in_usd(79.0, "gbp");
        adapter.pay_in_usd(15000.0, "JPY");
        adapter.pay_in_usd(42.0, "USD");

        let calls = adapter.payer.calls.borrow();
        assert_eq!(calls.len(), 4);
        for (amount, currency) in &calls[..3] {
            assert!((amount - 100.0).abs() < 1e-9, "got {}", amount);
            assert_eq!(currency, "USD");
        }
        assert_eq!(calls[3], (42.0, "USD".to_string()));
    }

    #[test]
    fn test_unknown_currency_paid_at_par() {
        let adapter = PaymentAdapter::with_payer(RecordingPayer::default(), ExchangeRates::default());

        let result = adapter.pay_in_usd(10.0, "XYZ");

        assert_eq!(result, "ok");
        assert_eq!(*adapter.payer.calls.borrow(), vec![(10.0, "USD".to_string())]);
        assert_eq!(
            PaymentAdapter::new(ExchangeRates::default()).pay_in_usd(100.0, "CHF"),
            "Paid 100 USD"
        );
        assert!(matches!(
            adapter.convert_to_usd(10.0, "xyz"),
            Err(PatternError::UnsupportedCurrency(code)) if code == "XYZ"
        ));
    }

    #[test]
    fn test_legacy_system_rejects_other_currencies() {
        let legacy = UsdPaymentSystem;
        assert_eq!(legacy.pay_in_usd(100.0, "usd"), "Paid $100 USD");
        assert_eq!(legacy.pay_in_usd(100.0, "EUR"), "Payment failed: Only USD is accepted");
    }

    #[test]
    fn test_adapter_through_legacy_interface() {
        let adapter = PaymentAdapter::new(ExchangeRates::default());
        let lines = process_payment(&adapter, 92.0, "EUR");
        assert_eq!(lines, vec!["Processing 92 EUR payment...", "Result: Paid 100 USD"]);
    }

    #[test]
    fn test_rate_overrides() {
        let rates = ExchangeRates::with_overrides([("eur", 0.5), ("CHF", 0.88)]).unwrap();
        assert_eq!(rates.rate("EUR"), Some(0.5));
        assert_eq!(rates.rate("chf"), Some(0.88));
        assert_eq!(rates.rate("USD"), Some(1.0));

        let adapter = PaymentAdapter::new(rates);
        assert_eq!(
            adapter.rates().currencies().collect::<Vec<_>>(),
            vec!["CHF", "EUR", "GBP", "JPY", "USD"]
        );
        assert_eq!(adapter.pay_in_usd(10.0, "EUR"), "Paid 20 USD");
    }

    #[test]
    fn test_invalid_rates_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ExchangeRates::with_overrides([("EUR", bad)]).unwrap_err();
            assert!(matches!(err, PatternError::InvalidRate { .. }));
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0), "100");
        assert_eq!(format_amount(2.0 / 3.0), "0.67");
        assert_eq!(format_amount(12.5), "12.50");
    }

    #[test]
    fn test_demo_output() {
        let lines = demo(&ExchangeRates::default());
        assert_eq!(lines[0], "=== Legacy System (USD only) ===");
        assert_eq!(lines[1], "Processing $100 payment...");
        assert_eq!(lines[2], "Result: Paid $100 USD");
        assert_eq!(lines[4], "=== Adapter with Multi-Currency Support ===");
        assert_eq!(lines[8], "Processing 92 EUR payment...");
        assert_eq!(lines[9], "Result: Paid 100 USD");
        assert_eq!(lines[14], "Processing 15000 JPY payment...");
        assert_eq!(lines[15], "Result: Paid 100 USD");
        assert_eq!(lines.len(), 17);
    }
}
