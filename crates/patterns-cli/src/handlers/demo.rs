//! Run every demo in sequence

use super::{adapter, bridge, chain, checkout, composite, decorate, report};
use anyhow::Result;
use patterns_core::{PatternsConfig, SharedConsole};

pub fn handle_all(console: &SharedConsole, config: &PatternsConfig) -> Result<()> {
    section(console, "Chain of Responsibility");
    chain::handle_chain(console, &config.chain, &chain::DEFAULT_AMOUNTS)?;

    section(console, "Composite");
    composite::handle_composite(console, &config.composite, None)?;

    section(console, "Decorator");
    decorate::handle_decorator_tour(console)?;

    section(console, "Facade");
    checkout::handle_checkout(console, "user123")?;

    section(console, "Proxy");
    report::handle_report(
        console,
        &config.proxy,
        &["user123".to_string(), "user123".to_string()],
    )?;

    section(console, "Adapter");
    adapter::handle_adapter(console, &config.adapter, 100, Some(8000))?;

    section(console, "Bridge");
    bridge::handle_bridge(
        console,
        "Something went wrong!",
        "Service started successfully.",
    )?;
    Ok(())
}

fn section(console: &SharedConsole, title: &str) {
    console.print_line(&format!("== {title} =="));
}
