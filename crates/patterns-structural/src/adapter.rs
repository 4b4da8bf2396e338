//! Payment processor adapter
//!
//! `StripePayment` stands in for a third-party client with its own method
//! shape (`make_payment(currency, amount)`). `StripePaymentAdapter` makes it
//! usable wherever a [`PaymentProcessor`] is expected.

use patterns_core::SharedConsole;

/// Currency the adapter charges in when the caller does not pick one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Common payment capability, amounts in whole dollars
pub trait PaymentProcessor: Send + Sync {
    fn pay(&self, amount: u32);
}

/// Processors that can charge in an explicit currency
pub trait AdvancedPaymentProcessor: PaymentProcessor {
    fn pay_in(&self, amount: u32, currency: &str);
}

/// Native processor that already speaks [`PaymentProcessor`]
pub struct PaypalPayment {
    console: SharedConsole,
}

impl PaypalPayment {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl PaymentProcessor for PaypalPayment {
    fn pay(&self, _amount: u32) {
        self.console.print_line("Paying via Paypal");
    }
}

/// Third-party client with an incompatible interface
pub struct StripePayment {
    console: SharedConsole,
}

impl StripePayment {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }

    pub fn make_payment(&self, currency: &str, amount: f64) {
        self.console
            .print_line(&format!("Paid {amount:?} {currency} using Stripe."));
    }
}

/// Adapts [`StripePayment`] to [`PaymentProcessor`]
pub struct StripePaymentAdapter {
    stripe: StripePayment,
    console: SharedConsole,
}

impl StripePaymentAdapter {
    pub fn new(stripe: StripePayment, console: SharedConsole) -> Self {
        Self { stripe, console }
    }
}

impl PaymentProcessor for StripePaymentAdapter {
    fn pay(&self, amount: u32) {
        self.pay_in(amount, DEFAULT_CURRENCY);
    }
}

impl AdvancedPaymentProcessor for StripePaymentAdapter {
    fn pay_in(&self, amount: u32, currency: &str) {
        self.console.print_line("Inside Stripe Payment Adaptor");
        self.stripe.make_payment(currency, f64::from(amount));
        self.console.print_line("Payment done by Stripe!!");
    }
}

/// Charges rupee amounts through a dollar-only processor
pub struct MultiCurrencyPayment<P> {
    inner: P,
    inr_per_usd: f64,
}

impl<P: PaymentProcessor> MultiCurrencyPayment<P> {
    pub fn new(inner: P, inr_per_usd: f64) -> Self {
        Self { inner, inr_per_usd }
    }

    /// Convert `amount_inr` to whole dollars (truncating) and pay that.
    /// Returns the dollar amount charged.
    pub fn pay_inr(&self, amount_inr: u32) -> u32 {
        let usd = self.to_usd(amount_inr);
        tracing::debug!(amount_inr, usd, rate = self.inr_per_usd, "converted payment");
        self.inner.pay(usd);
        usd
    }

    fn to_usd(&self, amount_inr: u32) -> u32 {
        // `as` saturates, so a tiny rate cannot wrap around
        (f64::from(amount_inr) / self.inr_per_usd) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use patterns_core::RecordingConsoleHandler;
    use std::sync::Arc;

    #[derive(Default)]
    struct CapturingProcessor {
        charged: Mutex<Vec<u32>>,
    }

    impl PaymentProcessor for Arc<CapturingProcessor> {
        fn pay(&self, amount: u32) {
            self.charged.lock().push(amount);
        }
    }

    #[test]
    fn stripe_adapter_wraps_call_in_usd() {
        let console = Arc::new(RecordingConsoleHandler::new());
        let adapter =
            StripePaymentAdapter::new(StripePayment::new(console.clone()), console.clone());

        adapter.pay(100);

        assert_eq!(
            console.lines(),
            vec![
                "Inside Stripe Payment Adaptor",
                "Paid 100.0 USD using Stripe.",
                "Payment done by Stripe!!",
            ]
        );
    }

    #[test]
    fn stripe_adapter_passes_currency_through() {
        let console = Arc::new(RecordingConsoleHandler::new());
        let adapter =
            StripePaymentAdapter::new(StripePayment::new(console.clone()), console.clone());

        adapter.pay_in(42, "EUR");

        assert_eq!(console.lines()[1], "Paid 42.0 EUR using Stripe.");
    }

    #[test]
    fn paypal_pays_directly() {
        let console = Arc::new(RecordingConsoleHandler::new());
        let processors: Vec<Box<dyn PaymentProcessor>> = vec![
            Box::new(PaypalPayment::new(console.clone())),
            Box::new(StripePaymentAdapter::new(
                StripePayment::new(console.clone()),
                console.clone(),
            )),
        ];
        for processor in &processors {
            processor.pay(10);
        }
        assert_eq!(console.lines()[0], "Paying via Paypal");
        assert_eq!(console.len(), 4);
    }

    #[test]
    fn multi_currency_truncates_conversion() {
        let capture = Arc::new(CapturingProcessor::default());
        let wrapper = MultiCurrencyPayment::new(capture.clone(), 80.0);

        assert_eq!(wrapper.pay_inr(8000), 100);
        assert_eq!(wrapper.pay_inr(159), 1);
        assert_eq!(wrapper.pay_inr(79), 0);
        assert_eq!(*capture.charged.lock(), vec![100, 1, 0]);
    }
}
