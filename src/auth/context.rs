//! Auth context: the provider owning the session cache and the read view
//! handed to the guard and the shell.
//!
//! DESIGN
//! ======
//! `AuthProvider` owns the one `RwSignal<SessionCache>` in the app and runs
//! the probe effect against `/auth/me`. Everything beneath it reads through
//! the [`AuthSession`] handle; the only writers are the probe effect here and
//! the mutations in [`crate::auth::mutations`]. Accessing the session outside
//! the provider subtree is a programming error and panics at the call site.

use leptos::prelude::*;

use crate::state::session::{SessionCache, SessionStatus};
use crate::net::types::User;
use crate::util::clock::now_ms;

/// Copyable handle to the session cache signal.
///
/// Components read the derived view; the crate-internal write methods are
/// the mutations' success path.
#[derive(Clone, Copy)]
pub struct AuthSession {
    cache: RwSignal<SessionCache>,
}

impl AuthSession {
    /// The cached identity, cloned out of the cache.
    pub fn user(&self) -> Option<User> {
        self.cache.with(|c| c.user().cloned())
    }

    /// True until the first probe or mutation resolves the session.
    pub fn is_loading(&self) -> bool {
        self.cache.with(SessionCache::is_loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.cache.with(SessionCache::is_authenticated)
    }

    /// Total session status driving the guard's three states.
    pub fn status(&self) -> SessionStatus {
        self.cache.with(SessionCache::status)
    }

    /// Invalidation token for principal-scoped resources; bumped on logout.
    pub fn cache_epoch(&self) -> u64 {
        self.cache.with(SessionCache::epoch)
    }

    /// Mark the cached identity stale so the next read revalidates.
    pub fn invalidate(&self) {
        self.cache.update(SessionCache::invalidate);
    }

    pub(crate) fn store_identity(&self, user: User) {
        self.cache.update(|c| c.store_identity(user, now_ms()));
    }

    pub(crate) fn sign_out(&self) {
        self.cache.update(|c| c.sign_out(now_ms()));
    }
}

/// Access the session from the surrounding [`AuthProvider`].
///
/// # Panics
///
/// Panics when called outside the provider subtree; the guard and shell must
/// always be rendered beneath it.
pub fn use_auth_session() -> AuthSession {
    use_context::<AuthSession>()
        .expect("use_auth_session must be called beneath an AuthProvider")
}

/// Provides the session context and keeps it synchronized with the backend.
///
/// On the client this probes `/auth/me` whenever the cache is unresolved or
/// stale; a stale cache keeps serving its previous value while the probe is
/// in flight. On the server no probe runs and the session stays loading.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let cache = RwSignal::new(SessionCache::default());
    provide_context(AuthSession { cache });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        // Subscribe to the cache so invalidation re-triggers the probe.
        if cache.get().should_probe(now_ms()) {
            cache.update(SessionCache::begin_probe);
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user().await;
                cache.update(|c| c.resolve(user, now_ms()));
            });
        }
    });

    children()
}
