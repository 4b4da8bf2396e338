//! Property tests for the standard loan approval chain.

#![allow(clippy::expect_used, missing_docs)]

use patterns_behavioral::ApprovalChain;
use patterns_core::{ChainConfig, RecordingConsoleHandler, UnhandledPolicy};
use proptest::prelude::*;
use std::sync::Arc;

fn expected_approver(amount: f64) -> &'static str {
    if amount <= 10_000.0 {
        "Junior"
    } else if amount <= 50_000.0 {
        "Senior"
    } else {
        "Manager"
    }
}

proptest! {
    /// Every finite amount is approved by exactly one officer, the right one
    #[test]
    fn exactly_one_officer_approves(amount in -1.0e7f64..1.0e7f64) {
        let console = Arc::new(RecordingConsoleHandler::new());
        let config = ChainConfig {
            unhandled: UnhandledPolicy::Reject,
            ..ChainConfig::default()
        };
        let chain = ApprovalChain::standard(&config, console.clone());

        let approval = chain
            .handle_request(amount)
            .expect("standard chain has no gaps")
            .expect("some officer approves");

        prop_assert_eq!(approval.approver.as_str(), expected_approver(amount));
        prop_assert_eq!(console.len(), 1);
        prop_assert_eq!(console.count_prefixed(expected_approver(amount)), 1);
    }

    /// Custom limits shift the tiers without opening gaps
    #[test]
    fn custom_limits_partition_the_line(
        junior in 1.0f64..1000.0,
        spread in 1.0f64..1000.0,
        amount in 0.0f64..3000.0,
    ) {
        let config = ChainConfig {
            junior_limit: junior,
            senior_limit: junior + spread,
            unhandled: UnhandledPolicy::Reject,
        };
        let chain = ApprovalChain::standard(&config, Arc::new(RecordingConsoleHandler::new()));
        let approval = chain.handle_request(amount).expect("no gaps").expect("approved");

        let expected = if amount <= junior {
            "Junior"
        } else if amount <= junior + spread {
            "Senior"
        } else {
            "Manager"
        };
        prop_assert_eq!(approval.approver.as_str(), expected);
    }
}
