//! Cart session store

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use printshop::cart::Cart;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::carts::{
    CartsServiceError,
    models::{CartSession, CartUuid},
};

/// How long an untouched cart is kept by default.
pub const DEFAULT_IDLE_TIMEOUT: SignedDuration = SignedDuration::from_hours(24);

/// Most carts held at once by default.
pub const DEFAULT_MAX_SESSIONS: usize = 100_000;

/// Bounds on the number and age of live carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Carts not updated for longer than this are dropped.
    pub idle_timeout: SignedDuration,

    /// Opening a cart beyond this many live carts is refused.
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl SessionLimits {
    fn is_idle(&self, session: &CartSession, now: Timestamp) -> bool {
        now.duration_since(session.updated_at) > self.idle_timeout
    }
}

/// In-memory carts, keyed by session cart id.
///
/// Each cart is only mutated while the write lock is held, so mutations to a
/// single session are applied one at a time. Idle carts read as missing and
/// are swept out whenever a new cart is opened.
#[derive(Debug, Clone, Default)]
pub struct CartSessions {
    carts: Arc<RwLock<FxHashMap<CartUuid, CartSession>>>,
    limits: SessionLimits,
}

impl CartSessions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limits(limits: SessionLimits) -> Self {
        Self {
            carts: Arc::default(),
            limits,
        }
    }

    /// Number of stored sessions, including idle ones not yet swept.
    pub async fn len(&self) -> usize {
        self.carts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.carts.read().await.is_empty()
    }

    pub(crate) async fn insert(
        &self,
        session: CartSession,
    ) -> Result<CartSession, CartsServiceError> {
        let mut carts = self.carts.write().await;

        let before = carts.len();

        carts.retain(|_uuid, stored| !self.limits.is_idle(stored, session.created_at));

        if carts.len() < before {
            debug!(evicted = before - carts.len(), "idle carts evicted");
        }

        if carts.contains_key(&session.uuid) {
            return Err(CartsServiceError::AlreadyExists);
        }

        if carts.len() >= self.limits.max_sessions {
            return Err(CartsServiceError::CapacityReached);
        }

        carts.insert(session.uuid, session.clone());

        Ok(session)
    }

    pub(crate) async fn get(&self, uuid: CartUuid) -> Option<CartSession> {
        let now = Timestamp::now();

        self.carts
            .read()
            .await
            .get(&uuid)
            .filter(|session| !self.limits.is_idle(session, now))
            .cloned()
    }

    pub(crate) async fn remove(&self, uuid: CartUuid) -> Option<CartSession> {
        let now = Timestamp::now();

        self.carts
            .write()
            .await
            .remove(&uuid)
            .filter(|session| !self.limits.is_idle(session, now))
    }

    /// Apply `change` to a cart. `change` reports whether it altered the cart;
    /// `updated_at` is only stamped when it did.
    pub(crate) async fn update<F>(
        &self,
        uuid: CartUuid,
        change: F,
    ) -> Result<CartSession, CartsServiceError>
    where
        F: FnOnce(&mut Cart<'static>) -> Result<bool, CartsServiceError> + Send,
    {
        let now = Timestamp::now();
        let mut carts = self.carts.write().await;

        if carts
            .get(&uuid)
            .is_some_and(|session| self.limits.is_idle(session, now))
        {
            carts.remove(&uuid);
        }

        let session = carts.get_mut(&uuid).ok_or(CartsServiceError::NotFound)?;

        if change(&mut session.cart)? {
            session.updated_at = now;
        }

        Ok(session.clone())
    }
}

#[cfg(test)]
mod tests {
    use printshop::{
        cart::CartError,
        checkout::CheckoutPolicy,
        posters::{PosterId, PosterSize},
    };
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use super::*;

    fn session_at(uuid: CartUuid, at: Timestamp) -> CartSession {
        CartSession {
            uuid,
            cart: Cart::new(CheckoutPolicy::default()),
            created_at: at,
            updated_at: at,
        }
    }

    fn session(uuid: CartUuid) -> CartSession {
        session_at(uuid, Timestamp::now())
    }

    fn stale(uuid: CartUuid) -> CartSession {
        session_at(uuid, Timestamp::UNIX_EPOCH)
    }

    fn limits(max_sessions: usize) -> SessionLimits {
        SessionLimits {
            idle_timeout: SignedDuration::from_hours(1),
            max_sessions,
        }
    }

    /// Place a session directly, bypassing the sweep in `insert`.
    async fn seed(sessions: &CartSessions, session: CartSession) {
        sessions.carts.write().await.insert(session.uuid, session);
    }

    #[tokio::test]
    async fn insert_duplicate_returns_already_exists() -> TestResult {
        let sessions = CartSessions::new();
        let uuid = CartUuid::new();

        sessions.insert(session(uuid)).await?;

        let result = sessions.insert(session(uuid)).await;

        assert!(
            matches!(result, Err(CartsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_stamps_updated_at_when_cart_changes() -> TestResult {
        let sessions = CartSessions::new();
        let uuid = CartUuid::new();
        let opened = session(uuid);
        let created_at = opened.created_at;

        sessions.insert(opened).await?;

        let updated = sessions
            .update(uuid, |cart| {
                cart.add_line(
                    PosterId::new("p1"),
                    PosterSize::A4,
                    1,
                    Money::from_minor(150_00, iso::INR),
                )?;

                Ok(true)
            })
            .await?;

        assert!(updated.updated_at >= created_at, "updated_at went backwards");
        assert_eq!(updated.cart.item_count(), 1);
        assert_eq!(sessions.len().await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn unchanged_cart_keeps_updated_at() -> TestResult {
        let sessions = CartSessions::new();
        let uuid = CartUuid::new();
        let opened = session(uuid);
        let updated_at = opened.updated_at;

        sessions.insert(opened).await?;

        let session = sessions.update(uuid, |_cart| Ok(false)).await?;

        assert_eq!(session.updated_at, updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn failed_update_keeps_stored_session() -> TestResult {
        let sessions = CartSessions::new();
        let uuid = CartUuid::new();
        let opened = session(uuid);
        let updated_at = opened.updated_at;

        sessions.insert(opened).await?;

        let result = sessions
            .update(uuid, |_cart| Err(CartError::InvalidQuantity.into()))
            .await;

        assert!(result.is_err(), "change should be rejected");

        let stored = sessions.get(uuid).await.ok_or("session missing")?;

        assert_eq!(stored.updated_at, updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_cart_returns_not_found() {
        let result = CartSessions::new()
            .update(CartUuid::new(), |_cart| Ok(true))
            .await;

        assert!(matches!(result, Err(CartsServiceError::NotFound)));
    }

    #[tokio::test]
    async fn remove_empties_store() -> TestResult {
        let sessions = CartSessions::new();
        let uuid = CartUuid::new();

        sessions.insert(session(uuid)).await?;

        assert!(sessions.remove(uuid).await.is_some());
        assert!(sessions.is_empty().await);
        assert!(sessions.remove(uuid).await.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn idle_carts_read_as_missing() -> TestResult {
        let sessions = CartSessions::with_limits(limits(10));
        let uuid = CartUuid::new();

        seed(&sessions, stale(uuid)).await;

        assert!(sessions.get(uuid).await.is_none());

        let result = sessions.update(uuid, |_cart| Ok(true)).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert!(sessions.is_empty().await, "idle cart should be dropped on update");

        Ok(())
    }

    #[tokio::test]
    async fn opening_a_cart_sweeps_idle_carts() -> TestResult {
        let sessions = CartSessions::with_limits(limits(10));
        let live = CartUuid::new();

        seed(&sessions, stale(CartUuid::new())).await;
        seed(&sessions, stale(CartUuid::new())).await;
        seed(&sessions, session(live)).await;

        sessions.insert(session(CartUuid::new())).await?;

        assert_eq!(sessions.len().await, 2);
        assert!(sessions.get(live).await.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn idle_cart_id_can_be_reused() -> TestResult {
        let sessions = CartSessions::with_limits(limits(10));
        let uuid = CartUuid::new();

        seed(&sessions, stale(uuid)).await;

        let reopened = sessions.insert(session(uuid)).await?;

        assert!(reopened.cart.is_empty());
        assert_eq!(sessions.len().await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn insert_beyond_capacity_is_refused() -> TestResult {
        let sessions = CartSessions::with_limits(limits(2));

        sessions.insert(session(CartUuid::new())).await?;
        sessions.insert(session(CartUuid::new())).await?;

        let result = sessions.insert(session(CartUuid::new())).await;

        assert!(
            matches!(result, Err(CartsServiceError::CapacityReached)),
            "expected CapacityReached, got {result:?}"
        );
        assert_eq!(sessions.len().await, 2);

        Ok(())
    }

    #[tokio::test]
    async fn idle_carts_free_capacity() -> TestResult {
        let sessions = CartSessions::with_limits(limits(1));

        seed(&sessions, stale(CartUuid::new())).await;

        sessions.insert(session(CartUuid::new())).await?;

        assert_eq!(sessions.len().await, 1);

        Ok(())
    }
}
