//! Permission tree handler

use anyhow::Result;
use patterns_core::{CompositeConfig, SharedConsole};
use patterns_structural::{PermissionNode, RoleCatalog};

/// Resolve `root` (or the configured root) and print its permission tree
pub fn handle_composite(
    console: &SharedConsole,
    config: &CompositeConfig,
    root: Option<&str>,
) -> Result<()> {
    let catalog = RoleCatalog::from_definitions(config.roles.iter().cloned())?;
    let root = root.unwrap_or(&config.root);
    let role = catalog.resolve(root)?;

    PermissionNode::from(role).show_permissions(console.as_ref());
    Ok(())
}
