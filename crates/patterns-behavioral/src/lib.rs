//! Behavioral pattern demos
//!
//! Currently a single pattern: a loan approval chain of responsibility in
//! which each officer either approves a request or forwards it unchanged.

#![forbid(unsafe_code)]

pub mod chain;

pub use chain::{
    Approval, ApprovalChain, ApprovalChainBuilder, JuniorOfficer, LoanHandler, Manager,
    SeniorOfficer,
};
