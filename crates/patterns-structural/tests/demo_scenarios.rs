//! End-to-end scenarios for the structural demos, driven through the public API.

#![allow(clippy::expect_used, missing_docs)]

use patterns_core::{CompositeConfig, RecordingConsoleHandler};
use patterns_structural::adapter::{
    MultiCurrencyPayment, PaymentProcessor, PaypalPayment, StripePayment, StripePaymentAdapter,
};
use patterns_structural::bridge::{
    ConsoleLogWriter, DatabaseLogWriter, ErrorLogger, InfoLogger, Logger,
};
use patterns_structural::composite::{Permission, Role};
use patterns_structural::{
    build_notifier, Channel, CheckoutFacade, PermissionNode, ReportGenerator,
    ReportGeneratorProxy, RoleCatalog,
};
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn permission_tree_from_catalog_matches_hand_built_tree() {
    let console = RecordingConsoleHandler::new();
    let config = CompositeConfig::default();
    let catalog = RoleCatalog::from_definitions(config.roles).expect("catalog");
    let admin = catalog.resolve(&config.root).expect("resolve admin");

    PermissionNode::from(admin).show_permissions(&console);

    assert_eq!(
        console.lines(),
        vec![
            "Role: Admin",
            "Role: Editor",
            "Permission: READ",
            "Permission: WRITE",
            "Permission: DELETE",
        ]
    );
}

#[test]
fn notifier_stacks_grow_one_channel_at_a_time() {
    let console = Arc::new(RecordingConsoleHandler::new());

    build_notifier(&[], console.clone()).send("Hello World!");
    build_notifier(&[Channel::Sms], console.clone()).send("System Alert!");
    build_notifier(&[Channel::Sms, Channel::Slack], console.clone()).send("Deployment Done!");

    assert_eq!(
        console.lines(),
        vec![
            "Sending EMAIL: Hello World!",
            "Sending EMAIL: System Alert!",
            "Sending SMS: System Alert!",
            "Sending EMAIL: Deployment Done!",
            "Sending SMS: Deployment Done!",
            "Sending Slack: Deployment Done!",
        ]
    );
}

#[test]
fn checkout_and_report_share_nothing() {
    let console = Arc::new(RecordingConsoleHandler::new());
    let facade = CheckoutFacade::with_console(console.clone());
    let proxy = ReportGeneratorProxy::new(console.clone(), Duration::ZERO);

    facade.checkout("user123");
    let first = proxy.generate_report("user123");
    let second = proxy.generate_report("user123");

    assert_eq!(first, second);
    assert_eq!(console.count_prefixed("Fetching report"), 1);
    assert_eq!(console.count_prefixed("Returning cached report"), 1);
    assert_eq!(console.len(), 6);
}

#[test]
fn payment_processors_are_interchangeable() {
    let console = Arc::new(RecordingConsoleHandler::new());
    let stripe = StripePaymentAdapter::new(StripePayment::new(console.clone()), console.clone());
    let rupees = MultiCurrencyPayment::new(PaypalPayment::new(console.clone()), 80.0);

    stripe.pay(250);
    assert_eq!(rupees.pay_inr(4000), 50);

    assert_eq!(
        console.lines(),
        vec![
            "Inside Stripe Payment Adaptor",
            "Paid 250.0 USD using Stripe.",
            "Payment done by Stripe!!",
            "Paying via Paypal",
        ]
    );
}

#[test]
fn bridge_crosses_severity_and_destination() {
    let console = Arc::new(RecordingConsoleHandler::new());
    ErrorLogger::new(ConsoleLogWriter::new(console.clone())).log("Something went wrong!");
    InfoLogger::new(DatabaseLogWriter::new(console.clone())).log("Service started successfully.");

    assert_eq!(
        console.lines(),
        vec![
            "[Console] [ERROR]: Something went wrong!",
            "[Database] [INFO]: Service started successfully.",
        ]
    );
}

/// Random role trees of bounded depth
fn arb_node() -> impl Strategy<Value = PermissionNode> {
    let leaf = any::<u16>().prop_map(|n| PermissionNode::from(Permission::new(format!("P{n}"))));
    leaf.prop_recursive(4, 32, 4, |inner| {
        (any::<u16>(), prop::collection::vec(inner, 0..4)).prop_map(|(n, children)| {
            let mut role = Role::new(format!("role{n}"));
            for child in children {
                role.add(child);
            }
            PermissionNode::from(role)
        })
    })
}

fn preorder(node: &PermissionNode, out: &mut Vec<String>) {
    match node {
        PermissionNode::Permission(permission) => {
            out.push(format!("Permission: {}", permission.name()));
        }
        PermissionNode::Role(role) => {
            out.push(format!("Role: {}", role.name()));
            for child in role.children() {
                preorder(child, out);
            }
        }
    }
}

proptest! {
    /// Rendering is a depth-first pre-order walk with children in insertion order
    #[test]
    fn render_is_preorder(node in arb_node()) {
        let mut expected = Vec::new();
        preorder(&node, &mut expected);
        prop_assert_eq!(node.render(), expected);
    }

    /// Showing a tree prints exactly what render returns
    #[test]
    fn show_matches_render(node in arb_node()) {
        let console = RecordingConsoleHandler::new();
        node.show_permissions(&console);
        prop_assert_eq!(console.lines(), node.render());
    }
}
