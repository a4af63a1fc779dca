//! Role-keyed navigation model for the dashboard shell.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::Role;

/// A sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Navigation set for the given role. Admins get the management views;
/// everyone else gets the standard user links. Settings is common to both.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        label: match role {
            Role::Admin => "Overview",
            Role::User => "Dashboard",
        },
        path: "/dashboard",
    }];

    match role {
        Role::Admin => items.extend([
            NavItem { label: "Clients", path: "/admin/clients" },
            NavItem { label: "Packages", path: "/admin/packages" },
            NavItem { label: "Reports", path: "/admin/reports" },
        ]),
        Role::User => items.push(NavItem { label: "My Plan", path: "/plan" }),
    }

    items.push(NavItem { label: "Settings", path: "/settings" });
    items
}

/// Header title for the active path: the matching nav item's label, falling
/// back to a prefix check for admin sub-routes, then the default.
pub fn page_title(path: &str, items: &[NavItem]) -> &'static str {
    if let Some(item) = items.iter().find(|item| item.path == path) {
        return item.label;
    }
    if path.starts_with("/admin") {
        return "Admin Area";
    }
    "Dashboard"
}
