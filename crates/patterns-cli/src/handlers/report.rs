//! Report proxy handler

use anyhow::Result;
use patterns_core::{ProxyConfig, SharedConsole};
use patterns_structural::{CacheStats, ReportGenerator, ReportGeneratorProxy};
use std::time::Duration;

/// Request a report for each user id in order through one proxy
pub fn handle_report(
    console: &SharedConsole,
    config: &ProxyConfig,
    user_ids: &[String],
) -> Result<CacheStats> {
    let proxy = ReportGeneratorProxy::new(
        console.clone(),
        Duration::from_millis(config.report_delay_ms),
    );

    for user_id in user_ids {
        let report = proxy.generate_report(user_id);
        tracing::debug!(%user_id, %report, "report ready");
    }

    let stats = proxy.stats();
    tracing::info!(hits = stats.hits, misses = stats.misses, "report cache");
    Ok(stats)
}
