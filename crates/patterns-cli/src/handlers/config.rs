//! Effective configuration display

use anyhow::{Context, Result};
use patterns_core::{PatternsConfig, SharedConsole};

/// Print the configuration after file loading and environment overrides
pub fn handle_show_config(console: &SharedConsole, config: &PatternsConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
    for line in rendered.lines() {
        console.print_line(line);
    }
    Ok(())
}
