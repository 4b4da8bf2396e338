//! Command handlers
//!
//! Each handler builds one demo from configuration and runs it against the
//! console it is given. `main` passes stdout; tests pass a recorder.

pub mod adapter;
pub mod bridge;
pub mod chain;
pub mod checkout;
pub mod composite;
pub mod config;
pub mod decorate;
pub mod demo;
pub mod report;
