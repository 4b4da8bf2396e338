//! Loan approval chain handler

use anyhow::Result;
use patterns_behavioral::{Approval, ApprovalChain};
use patterns_core::{ChainConfig, SharedConsole};

/// Amounts used when none are given: one per officer
pub const DEFAULT_AMOUNTS: [f64; 3] = [7500.0, 30000.0, 100000.0];

/// Run each amount through the standard chain
pub fn handle_chain(
    console: &SharedConsole,
    config: &ChainConfig,
    amounts: &[f64],
) -> Result<Vec<Option<Approval>>> {
    let chain = ApprovalChain::standard(config, console.clone());
    tracing::info!(
        handlers = ?chain.approvers(),
        policy = ?chain.policy(),
        "running loan approval chain"
    );

    let mut approvals = Vec::with_capacity(amounts.len());
    for &amount in amounts {
        approvals.push(chain.handle_request(amount)?);
    }
    Ok(approvals)
}
