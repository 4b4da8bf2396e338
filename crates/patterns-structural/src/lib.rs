//! Structural pattern demos
//!
//! Each module is independent of the others and writes its observable
//! behaviour as console lines through a [`patterns_core::ConsoleEffects`]
//! handle:
//!
//! - `adapter`: third-party payment API behind a common processor trait
//! - `bridge`: logger severities crossed with log writer destinations
//! - `composite`: role / permission trees
//! - `decorator`: stacked notification channels
//! - `facade`: one-call checkout over four subsystems
//! - `proxy`: memoizing report generator

#![forbid(unsafe_code)]

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod proxy;

pub use composite::{PermissionNode, RoleCatalog};
pub use decorator::{build_notifier, Channel, Notifier};
pub use facade::{CheckoutFacade, CheckoutReceipt, CheckoutStep};
pub use proxy::{CacheStats, ReportGenerator, ReportGeneratorProxy};
