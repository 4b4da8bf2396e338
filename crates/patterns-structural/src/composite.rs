//! Role / permission composite
//!
//! A [`PermissionNode`] is either a leaf [`Permission`] or a [`Role`] that
//! owns an ordered list of child nodes. Both answer the same questions
//! (`name`, `render`, `show_permissions`), so callers treat a single
//! permission and a whole role hierarchy uniformly.
//!
//! Children are owned by value. A role cannot be added to itself or to one
//! of its own descendants because that would require moving it into a value
//! it is still part of; the type system rules out cycles in a built tree.
//! Hierarchies described by name, where a cycle *can* be written down, go
//! through [`RoleCatalog`], which rejects them with
//! [`PatternError::CyclicStructure`].

use patterns_core::{ConsoleEffects, PatternError, Result, RoleDefinition};
use std::collections::HashMap;
use tracing::debug;

/// A single named permission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    name: String,
}

impl Permission {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A named role owning child permissions and roles in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    name: String,
    children: Vec<PermissionNode>,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[PermissionNode] {
        &self.children
    }

    /// Append a child after the existing ones
    pub fn add(&mut self, child: impl Into<PermissionNode>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Builder form of [`Role::add`]
    pub fn with(mut self, child: impl Into<PermissionNode>) -> Self {
        self.add(child);
        self
    }

    /// Remove the first direct child named `name`
    pub fn remove(&mut self, name: &str) -> Option<PermissionNode> {
        let index = self.children.iter().position(|child| child.name() == name)?;
        Some(self.children.remove(index))
    }
}

/// Either a leaf permission or a role subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionNode {
    Permission(Permission),
    Role(Role),
}

impl From<Permission> for PermissionNode {
    fn from(permission: Permission) -> Self {
        Self::Permission(permission)
    }
}

impl From<Role> for PermissionNode {
    fn from(role: Role) -> Self {
        Self::Role(role)
    }
}

impl PermissionNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Permission(permission) => permission.name(),
            Self::Role(role) => role.name(),
        }
    }

    pub fn is_role(&self) -> bool {
        matches!(self, Self::Role(_))
    }

    /// Depth-first pre-order walk: a node, then each child in order
    pub fn visit<F>(&self, visitor: &mut F)
    where
        F: FnMut(&PermissionNode, usize),
    {
        self.visit_at(0, visitor);
    }

    fn visit_at<F>(&self, depth: usize, visitor: &mut F)
    where
        F: FnMut(&PermissionNode, usize),
    {
        visitor(self, depth);
        if let Self::Role(role) = self {
            for child in &role.children {
                child.visit_at(depth + 1, visitor);
            }
        }
    }

    /// The display listing, one line per node in visit order
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.visit(&mut |node, _| {
            lines.push(match node {
                Self::Permission(permission) => format!("Permission: {}", permission.name()),
                Self::Role(role) => format!("Role: {}", role.name()),
            });
        });
        lines
    }

    /// Print [`PermissionNode::render`] to `console`
    pub fn show_permissions(&self, console: &dyn ConsoleEffects) {
        for line in self.render() {
            console.print_line(&line);
        }
    }

    /// Leaf permission names reachable from this node, in visit order
    pub fn permission_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_permissions(self, &mut names);
        names
    }
}

fn collect_permissions<'a>(node: &'a PermissionNode, names: &mut Vec<&'a str>) {
    match node {
        PermissionNode::Permission(permission) => names.push(permission.name()),
        PermissionNode::Role(role) => {
            for child in &role.children {
                collect_permissions(child, names);
            }
        }
    }
}

/// Role hierarchy declared by name, resolved into owned trees on demand.
///
/// A resolved role lists its included roles first, then its own
/// permissions, each group in declaration order.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: HashMap<String, RoleDefinition>,
}

impl RoleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate role names
    pub fn from_definitions<I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = RoleDefinition>,
    {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.define(definition)?;
        }
        Ok(catalog)
    }

    pub fn define(&mut self, definition: RoleDefinition) -> Result<()> {
        if definition.name.is_empty() {
            return Err(PatternError::invalid("Role name cannot be empty"));
        }
        if self.roles.contains_key(&definition.name) {
            return Err(PatternError::invalid(format!(
                "Role '{}' defined twice",
                definition.name
            )));
        }
        self.roles.insert(definition.name.clone(), definition);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Expand `root` and everything it includes into an owned [`Role`]
    pub fn resolve(&self, root: &str) -> Result<Role> {
        let mut path = Vec::new();
        self.resolve_inner(root, &mut path)
    }

    fn resolve_inner<'a>(&'a self, name: &'a str, path: &mut Vec<&'a str>) -> Result<Role> {
        if let Some(start) = path.iter().position(|ancestor| *ancestor == name) {
            let mut cycle: Vec<&str> = path[start..].to_vec();
            cycle.push(name);
            return Err(PatternError::cyclic(cycle));
        }
        let definition = self
            .roles
            .get(name)
            .ok_or_else(|| PatternError::not_found(format!("Role '{name}'")))?;

        path.push(name);
        let mut role = Role::new(name);
        for included in &definition.includes {
            role.add(self.resolve_inner(included, path)?);
        }
        for permission in &definition.permissions {
            role.add(Permission::new(permission.as_str()));
        }
        path.pop();

        debug!(role = name, children = role.children().len(), "resolved role");
        Ok(role)
    }
}
