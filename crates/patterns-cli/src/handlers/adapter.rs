//! Payment adapter handler

use anyhow::Result;
use patterns_core::{AdapterConfig, SharedConsole};
use patterns_structural::adapter::{
    MultiCurrencyPayment, PaymentProcessor, PaypalPayment, StripePayment, StripePaymentAdapter,
};

/// Pay `amount` dollars via Paypal and via the Stripe adapter, then
/// optionally a rupee amount through the conversion wrapper
pub fn handle_adapter(
    console: &SharedConsole,
    config: &AdapterConfig,
    amount: u32,
    amount_inr: Option<u32>,
) -> Result<()> {
    let processors: Vec<Box<dyn PaymentProcessor>> = vec![
        Box::new(PaypalPayment::new(console.clone())),
        Box::new(StripePaymentAdapter::new(
            StripePayment::new(console.clone()),
            console.clone(),
        )),
    ];
    for processor in &processors {
        processor.pay(amount);
    }

    if let Some(amount_inr) = amount_inr {
        let stripe = StripePaymentAdapter::new(StripePayment::new(console.clone()), console.clone());
        let usd = MultiCurrencyPayment::new(stripe, config.inr_per_usd).pay_inr(amount_inr);
        tracing::info!(amount_inr, usd, "converted rupee payment");
    }
    Ok(())
}
