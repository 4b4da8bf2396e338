//! Checkout facade handler

use anyhow::Result;
use patterns_core::SharedConsole;
use patterns_structural::{CheckoutFacade, CheckoutReceipt};

pub fn handle_checkout(console: &SharedConsole, user_id: &str) -> Result<CheckoutReceipt> {
    let facade = CheckoutFacade::with_console(console.clone());
    let receipt = facade.checkout(user_id);
    tracing::info!(user_id, steps = receipt.steps.len(), "checkout complete");
    Ok(receipt)
}
