//! The session cache: sole owner of the cached identity.
//!
//! DESIGN
//! ======
//! One `SessionCache` instance lives behind the `AuthProvider`'s signal.
//! Exactly two kinds of writer exist: the session probe (`begin_probe` /
//! `resolve`) and the auth mutations (`store_identity` / `sign_out`). Every
//! reader goes through the derived [`SessionStatus`], which is total: the UI
//! never sees a state other than loading, signed out, or signed in.
//!
//! A resolved result — present or absent — is final until it goes stale
//! (5 minutes) or is invalidated; there is no automatic retry. A stale cache
//! keeps serving its previous value while a background probe revalidates it,
//! so the status never regresses to `Loading` once resolved.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// How long a resolved probe result is considered fresh, in milliseconds.
pub const FRESH_FOR_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Session state as observed by the guard and the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// The probe has never resolved; nothing is known yet.
    Loading,
    /// Resolved with no identity.
    Unauthenticated,
    /// Resolved with an identity.
    Authenticated(User),
}

/// Cached identity plus probe bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct SessionCache {
    user: Option<User>,
    resolved: bool,
    probe_in_flight: bool,
    fetched_at_ms: Option<f64>,
    epoch: u64,
}

impl SessionCache {
    /// Derive the total session status from the cache.
    pub fn status(&self) -> SessionStatus {
        if !self.resolved {
            return SessionStatus::Loading;
        }
        match &self.user {
            Some(user) => SessionStatus::Authenticated(user.clone()),
            None => SessionStatus::Unauthenticated,
        }
    }

    /// The cached identity, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True until the first probe (or mutation) resolves the session.
    pub fn is_loading(&self) -> bool {
        !self.resolved
    }

    pub fn is_authenticated(&self) -> bool {
        self.resolved && self.user.is_some()
    }

    /// Invalidation token for principal-scoped caches. Bumped on sign-out;
    /// resources that key off the epoch refetch when it changes.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the last resolution is still within the freshness window.
    pub fn is_fresh(&self, now_ms: f64) -> bool {
        match self.fetched_at_ms {
            Some(at) => self.resolved && now_ms - at < FRESH_FOR_MS,
            None => false,
        }
    }

    /// Whether a probe should be issued now. Never while one is in flight,
    /// and never while the cache is fresh — a resolved-absent result is as
    /// final as a resolved-present one.
    pub fn should_probe(&self, now_ms: f64) -> bool {
        !self.probe_in_flight && !self.is_fresh(now_ms)
    }

    /// Mark a probe as in flight so concurrent readers do not issue another.
    pub fn begin_probe(&mut self) {
        self.probe_in_flight = true;
    }

    /// Record the probe outcome. `None` means no session — an expected
    /// result, not an error.
    pub fn resolve(&mut self, user: Option<User>, now_ms: f64) {
        self.user = user;
        self.resolved = true;
        self.probe_in_flight = false;
        self.fetched_at_ms = Some(now_ms);
    }

    /// Write the identity returned by a successful login/register directly,
    /// bypassing a refetch. The cache is fresh afterwards, so no follow-up
    /// probe fires.
    pub fn store_identity(&mut self, user: User, now_ms: f64) {
        self.resolve(Some(user), now_ms);
    }

    /// Clear the identity after logout and bump the epoch: a change of
    /// principal invalidates every principal-scoped cache entry.
    pub fn sign_out(&mut self, now_ms: f64) {
        self.resolve(None, now_ms);
        self.epoch += 1;
    }

    /// Drop freshness so the next read triggers a background revalidation.
    /// The current value keeps being served until the probe resolves.
    pub fn invalidate(&mut self) {
        self.fetched_at_ms = None;
    }
}
