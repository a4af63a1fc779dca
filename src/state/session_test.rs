use super::*;
use crate::net::types::Role;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        role: Role::User,
    }
}

// =============================================================
// Status derivation
// =============================================================

#[test]
fn fresh_cache_is_loading() {
    let cache = SessionCache::default();
    assert_eq!(cache.status(), SessionStatus::Loading);
    assert!(cache.is_loading());
    assert!(!cache.is_authenticated());
}

#[test]
fn resolve_absent_is_unauthenticated() {
    let mut cache = SessionCache::default();
    cache.resolve(None, 1_000.0);
    assert_eq!(cache.status(), SessionStatus::Unauthenticated);
    assert!(!cache.is_loading());
    assert!(!cache.is_authenticated());
}

#[test]
fn resolve_present_is_authenticated() {
    let mut cache = SessionCache::default();
    cache.resolve(Some(user("1")), 1_000.0);
    assert_eq!(cache.status(), SessionStatus::Authenticated(user("1")));
    assert!(cache.is_authenticated());
    assert_eq!(cache.user().map(|u| u.id.as_str()), Some("1"));
}

#[test]
fn status_is_total_after_any_resolution() {
    // Once resolved, the status is never Loading again even when stale.
    let mut cache = SessionCache::default();
    cache.resolve(Some(user("1")), 0.0);
    let long_after = FRESH_FOR_MS * 10.0;
    assert!(!cache.is_fresh(long_after));
    assert_eq!(cache.status(), SessionStatus::Authenticated(user("1")));
}

// =============================================================
// Freshness and probe gating
// =============================================================

#[test]
fn unresolved_cache_wants_probe() {
    let cache = SessionCache::default();
    assert!(cache.should_probe(0.0));
}

#[test]
fn in_flight_probe_is_not_duplicated() {
    let mut cache = SessionCache::default();
    cache.begin_probe();
    assert!(!cache.should_probe(0.0));
}

#[test]
fn resolved_absent_is_final_while_fresh() {
    // A failed/absent probe result is not retried until it goes stale.
    let mut cache = SessionCache::default();
    cache.resolve(None, 1_000.0);
    assert!(!cache.should_probe(1_000.0 + FRESH_FOR_MS / 2.0));
}

#[test]
fn stale_cache_wants_revalidation() {
    let mut cache = SessionCache::default();
    cache.resolve(Some(user("1")), 1_000.0);
    assert!(cache.should_probe(1_000.0 + FRESH_FOR_MS + 1.0));
}

#[test]
fn invalidate_drops_freshness_but_keeps_value() {
    let mut cache = SessionCache::default();
    cache.resolve(Some(user("1")), 1_000.0);
    cache.invalidate();
    assert!(cache.should_probe(1_000.0));
    assert_eq!(cache.status(), SessionStatus::Authenticated(user("1")));
}

// =============================================================
// Mutation write paths
// =============================================================

#[test]
fn store_identity_authenticates_without_refetch() {
    // Login writes the identity straight into the cache; the result is fresh,
    // so no follow-up probe of /auth/me fires.
    let mut cache = SessionCache::default();
    cache.store_identity(user("1"), 1_000.0);
    assert!(cache.is_authenticated());
    assert!(!cache.should_probe(1_000.0));
}

#[test]
fn store_identity_replaces_wholesale() {
    let mut cache = SessionCache::default();
    cache.store_identity(user("1"), 1_000.0);
    cache.store_identity(user("2"), 2_000.0);
    assert_eq!(cache.status(), SessionStatus::Authenticated(user("2")));
}

#[test]
fn sign_out_clears_identity() {
    let mut cache = SessionCache::default();
    cache.store_identity(user("1"), 1_000.0);
    cache.sign_out(2_000.0);
    assert_eq!(cache.status(), SessionStatus::Unauthenticated);
}

#[test]
fn sign_out_bumps_epoch() {
    let mut cache = SessionCache::default();
    assert_eq!(cache.epoch(), 0);
    cache.store_identity(user("1"), 1_000.0);
    assert_eq!(cache.epoch(), 0);
    cache.sign_out(2_000.0);
    assert_eq!(cache.epoch(), 1);
    cache.sign_out(3_000.0);
    assert_eq!(cache.epoch(), 2);
}

#[test]
fn probe_resolution_does_not_touch_epoch() {
    let mut cache = SessionCache::default();
    cache.resolve(None, 1_000.0);
    cache.resolve(Some(user("1")), 2_000.0);
    assert_eq!(cache.epoch(), 0);
}
