//! Loan approval chain of responsibility
//!
//! A chain is a singly linked sequence of handlers. Each link asks its
//! handler whether it approves the amount; if not, the request moves to the
//! next link unchanged. The topology is fixed once the chain is built.
//!
//! With the stock officers the three predicates partition the real line, so
//! every finite amount is approved by exactly one officer. Chains assembled
//! from other handlers can leave gaps; what happens then is governed by
//! [`UnhandledPolicy`].

use patterns_core::{ChainConfig, PatternError, Result, SharedConsole, UnhandledPolicy};
use tracing::debug;

/// A link's local decision rule
pub trait LoanHandler: Send + Sync {
    /// Title printed on approval, e.g. `Junior`
    fn title(&self) -> &str;

    /// Whether this handler approves `amount` itself
    fn approves(&self, amount: f64) -> bool;
}

/// Approves amounts up to and including its limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuniorOfficer {
    limit: f64,
}

impl JuniorOfficer {
    pub fn new(limit: f64) -> Self {
        Self { limit }
    }
}

impl Default for JuniorOfficer {
    fn default() -> Self {
        Self::new(ChainConfig::default().junior_limit)
    }
}

impl LoanHandler for JuniorOfficer {
    fn title(&self) -> &str {
        "Junior"
    }

    fn approves(&self, amount: f64) -> bool {
        amount <= self.limit
    }
}

/// Approves amounts above `floor` and up to and including `limit`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeniorOfficer {
    floor: f64,
    limit: f64,
}

impl SeniorOfficer {
    pub fn new(floor: f64, limit: f64) -> Self {
        Self { floor, limit }
    }
}

impl Default for SeniorOfficer {
    fn default() -> Self {
        let config = ChainConfig::default();
        Self::new(config.junior_limit, config.senior_limit)
    }
}

impl LoanHandler for SeniorOfficer {
    fn title(&self) -> &str {
        "Senior"
    }

    fn approves(&self, amount: f64) -> bool {
        amount > self.floor && amount <= self.limit
    }
}

/// Approves anything above its floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manager {
    floor: f64,
}

impl Manager {
    pub fn new(floor: f64) -> Self {
        Self { floor }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(ChainConfig::default().senior_limit)
    }
}

impl LoanHandler for Manager {
    fn title(&self) -> &str {
        "Manager"
    }

    fn approves(&self, amount: f64) -> bool {
        amount > self.floor
    }
}

/// The handler that accepted a request
#[derive(Debug, Clone, PartialEq)]
pub struct Approval {
    pub approver: String,
    pub amount: f64,
}

struct ChainLink {
    handler: Box<dyn LoanHandler>,
    next: Option<Box<ChainLink>>,
}

impl ChainLink {
    fn handle(&self, amount: f64) -> Option<&dyn LoanHandler> {
        if self.handler.approves(amount) {
            return Some(self.handler.as_ref());
        }
        let next = self.next.as_deref()?;
        debug!(
            from = self.handler.title(),
            to = next.handler.title(),
            amount,
            "forwarding loan request"
        );
        next.handle(amount)
    }
}

/// An immutable chain of loan handlers
pub struct ApprovalChain {
    head: Option<Box<ChainLink>>,
    policy: UnhandledPolicy,
    console: SharedConsole,
}

impl ApprovalChain {
    /// Start assembling a custom chain
    pub fn builder() -> ApprovalChainBuilder {
        ApprovalChainBuilder::default()
    }

    /// Junior -> Senior -> Manager, with limits and policy from `config`
    pub fn standard(config: &ChainConfig, console: SharedConsole) -> Self {
        Self::builder()
            .then(JuniorOfficer::new(config.junior_limit))
            .then(SeniorOfficer::new(config.junior_limit, config.senior_limit))
            .then(Manager::new(config.senior_limit))
            .on_unhandled(config.unhandled)
            .build(console)
    }

    /// Pass `amount` down the chain.
    ///
    /// Returns the approval that fired. A request that falls off the end is
    /// `Ok(None)` under [`UnhandledPolicy::Silent`] and
    /// [`PatternError::UnhandledRequest`] under [`UnhandledPolicy::Reject`].
    pub fn handle_request(&self, amount: f64) -> Result<Option<Approval>> {
        let approver = self.head.as_deref().and_then(|head| head.handle(amount));

        match approver {
            Some(handler) => {
                self.console
                    .print_line(&format!("{} approved: {amount:?}", handler.title()));
                Ok(Some(Approval {
                    approver: handler.title().to_string(),
                    amount,
                }))
            }
            None => match self.policy {
                UnhandledPolicy::Silent => {
                    debug!(amount, "loan request dropped by chain");
                    Ok(None)
                }
                UnhandledPolicy::Reject => Err(PatternError::unhandled(amount)),
            },
        }
    }

    /// Handler titles from head to tail
    pub fn approvers(&self) -> Vec<&str> {
        let mut titles = Vec::new();
        let mut link = self.head.as_deref();
        while let Some(current) = link {
            titles.push(current.handler.title());
            link = current.next.as_deref();
        }
        titles
    }

    pub fn len(&self) -> usize {
        self.approvers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn policy(&self) -> UnhandledPolicy {
        self.policy
    }
}

/// Collects handlers in forwarding order
#[derive(Default)]
pub struct ApprovalChainBuilder {
    handlers: Vec<Box<dyn LoanHandler>>,
    policy: UnhandledPolicy,
}

impl ApprovalChainBuilder {
    /// Append a handler after those already added
    pub fn then(mut self, handler: impl LoanHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn on_unhandled(mut self, policy: UnhandledPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self, console: SharedConsole) -> ApprovalChain {
        let head = self
            .handlers
            .into_iter()
            .rev()
            .fold(None, |next, handler| Some(Box::new(ChainLink { handler, next })));
        ApprovalChain {
            head,
            policy: self.policy,
            console,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use patterns_core::RecordingConsoleHandler;
    use std::sync::Arc;

    fn standard() -> (ApprovalChain, Arc<RecordingConsoleHandler>) {
        let console = Arc::new(RecordingConsoleHandler::new());
        let chain = ApprovalChain::standard(&ChainConfig::default(), console.clone());
        (chain, console)
    }

    #[test]
    fn tiers_approve_their_ranges() {
        let (chain, console) = standard();

        let junior = chain.handle_request(7500.0).unwrap().unwrap();
        let senior = chain.handle_request(30000.0).unwrap().unwrap();
        let manager = chain.handle_request(100000.0).unwrap().unwrap();

        assert_eq!(junior.approver, "Junior");
        assert_eq!(senior.approver, "Senior");
        assert_eq!(manager.approver, "Manager");
        assert_eq!(
            console.lines(),
            vec![
                "Junior approved: 7500.0",
                "Senior approved: 30000.0",
                "Manager approved: 100000.0",
            ]
        );
    }

    #[test]
    fn boundaries_are_inclusive_on_the_lower_tier() {
        let (chain, _) = standard();
        assert_eq!(chain.handle_request(10000.0).unwrap().unwrap().approver, "Junior");
        assert_eq!(chain.handle_request(10000.01).unwrap().unwrap().approver, "Senior");
        assert_eq!(chain.handle_request(50000.0).unwrap().unwrap().approver, "Senior");
        assert_eq!(chain.handle_request(50000.01).unwrap().unwrap().approver, "Manager");
    }

    #[test]
    fn gap_is_silent_by_default() {
        let console = Arc::new(RecordingConsoleHandler::new());
        let chain = ApprovalChain::builder()
            .then(JuniorOfficer::default())
            .then(SeniorOfficer::default())
            .build(console.clone());

        assert_eq!(chain.handle_request(75000.0).unwrap(), None);
        assert!(console.is_empty());
    }

    #[test]
    fn gap_rejects_when_configured() {
        let console = Arc::new(RecordingConsoleHandler::new());
        let chain = ApprovalChain::builder()
            .then(JuniorOfficer::default())
            .on_unhandled(UnhandledPolicy::Reject)
            .build(console.clone());

        assert_matches!(
            chain.handle_request(20000.0),
            Err(PatternError::UnhandledRequest { amount }) if amount == 20000.0
        );
        assert!(console.is_empty());
    }

    #[test]
    fn nan_matches_no_officer() {
        let (chain, console) = standard();
        assert_eq!(chain.handle_request(f64::NAN).unwrap(), None);
        assert!(console.is_empty());
    }

    #[test]
    fn empty_chain_handles_nothing() {
        let console = Arc::new(RecordingConsoleHandler::new());
        let chain = ApprovalChain::builder()
            .on_unhandled(UnhandledPolicy::Reject)
            .build(console);
        assert!(chain.is_empty());
        assert!(chain.handle_request(1.0).is_err());
    }

    #[test]
    fn builder_preserves_order() {
        let (chain, _) = standard();
        assert_eq!(chain.approvers(), vec!["Junior", "Senior", "Manager"]);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn first_matching_handler_wins() {
        // Two overlapping officers: the earlier link must take the request
        let console = Arc::new(RecordingConsoleHandler::new());
        let chain = ApprovalChain::builder()
            .then(Manager::new(0.0))
            .then(JuniorOfficer::new(f64::INFINITY))
            .build(console.clone());

        let approval = chain.handle_request(5.0).unwrap().unwrap();
        assert_eq!(approval.approver, "Manager");
        assert_eq!(console.len(), 1);
    }
}
