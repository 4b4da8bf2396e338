//! Checkout facade
//!
//! [`CheckoutFacade::checkout`] is the single entry point over four
//! independent subsystems. The steps always run, always in the same order,
//! and none of them can fail, so there is nothing to roll back.

use patterns_core::SharedConsole;
use tracing::debug;

/// One stage of a checkout, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutStep {
    ValidateCart,
    ProcessPayment,
    UpdateInventory,
    SendConfirmation,
}

impl CheckoutStep {
    /// All steps in the order checkout runs them
    pub const ALL: [CheckoutStep; 4] = [
        Self::ValidateCart,
        Self::ProcessPayment,
        Self::UpdateInventory,
        Self::SendConfirmation,
    ];
}

/// Record of a completed checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub user_id: String,
    pub steps: Vec<CheckoutStep>,
}

pub struct CartService {
    console: SharedConsole,
}

impl CartService {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }

    pub fn validate_cart(&self, user_id: &str) {
        self.console
            .print_line(&format!("Cart validated for user: {user_id}"));
    }
}

pub struct PaymentService {
    console: SharedConsole,
}

impl PaymentService {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }

    pub fn process_payment(&self, user_id: &str) {
        self.console
            .print_line(&format!("Payment processed for user: {user_id}"));
    }
}

pub struct InventoryService {
    console: SharedConsole,
}

impl InventoryService {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }

    pub fn update_stock(&self, user_id: &str) {
        self.console
            .print_line(&format!("Inventory updated for user: {user_id}"));
    }
}

pub struct NotificationService {
    console: SharedConsole,
}

impl NotificationService {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }

    pub fn send_confirmation(&self, user_id: &str) {
        self.console
            .print_line(&format!("Confirmation email sent to user: {user_id}"));
    }
}

/// Sequences the four checkout subsystems
pub struct CheckoutFacade {
    cart: CartService,
    payment: PaymentService,
    inventory: InventoryService,
    notification: NotificationService,
}

impl CheckoutFacade {
    pub fn new(
        cart: CartService,
        payment: PaymentService,
        inventory: InventoryService,
        notification: NotificationService,
    ) -> Self {
        Self {
            cart,
            payment,
            inventory,
            notification,
        }
    }

    /// All four subsystems writing to the same console
    pub fn with_console(console: SharedConsole) -> Self {
        Self::new(
            CartService::new(console.clone()),
            PaymentService::new(console.clone()),
            InventoryService::new(console.clone()),
            NotificationService::new(console),
        )
    }

    pub fn checkout(&self, user_id: &str) -> CheckoutReceipt {
        let mut steps = Vec::with_capacity(CheckoutStep::ALL.len());
        for step in CheckoutStep::ALL {
            debug!(?step, user_id, "checkout step");
            match step {
                CheckoutStep::ValidateCart => self.cart.validate_cart(user_id),
                CheckoutStep::ProcessPayment => self.payment.process_payment(user_id),
                CheckoutStep::UpdateInventory => self.inventory.update_stock(user_id),
                CheckoutStep::SendConfirmation => self.notification.send_confirmation(user_id),
            }
            steps.push(step);
        }
        CheckoutReceipt {
            user_id: user_id.to_string(),
            steps,
        }
    }
}
