use super::*;

fn labels(role: Role) -> Vec<&'static str> {
    nav_items(role).iter().map(|i| i.label).collect()
}

// =============================================================
// Navigation sets per role
// =============================================================

#[test]
fn admin_nav_set() {
    assert_eq!(
        labels(Role::Admin),
        vec!["Overview", "Clients", "Packages", "Reports", "Settings"]
    );
}

#[test]
fn user_nav_set() {
    assert_eq!(labels(Role::User), vec!["Dashboard", "My Plan", "Settings"]);
}

#[test]
fn dashboard_path_is_shared_but_relabeled() {
    let admin = nav_items(Role::Admin);
    let user = nav_items(Role::User);
    assert_eq!(admin[0].path, "/dashboard");
    assert_eq!(user[0].path, "/dashboard");
    assert_ne!(admin[0].label, user[0].label);
}

// =============================================================
// Page title resolution
// =============================================================

#[test]
fn title_matches_active_nav_item() {
    let items = nav_items(Role::Admin);
    assert_eq!(page_title("/dashboard", &items), "Overview");
    assert_eq!(page_title("/admin/clients", &items), "Clients");
}

#[test]
fn title_falls_back_to_admin_area_for_admin_subroutes() {
    let items = nav_items(Role::Admin);
    assert_eq!(page_title("/admin/clients/42", &items), "Admin Area");
}

#[test]
fn title_defaults_to_dashboard() {
    let items = nav_items(Role::User);
    assert_eq!(page_title("/settings/profile", &items), "Dashboard");
    assert_eq!(page_title("/nowhere", &items), "Dashboard");
}

#[test]
fn user_title_for_dashboard_path() {
    let items = nav_items(Role::User);
    assert_eq!(page_title("/dashboard", &items), "Dashboard");
    assert_eq!(page_title("/plan", &items), "My Plan");
}
