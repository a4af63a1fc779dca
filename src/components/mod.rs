//! Shared components: the loading indicator, the route guard, and the
//! dashboard shell.

pub mod dashboard_layout;
pub mod loading;
pub mod protected_route;
