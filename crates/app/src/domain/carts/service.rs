//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use printshop::{
    cart::Cart,
    catalog::Catalog,
    checkout::{CheckoutPolicy, CheckoutSummary},
    posters::{PosterId, PosterSize},
};
use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::domain::carts::{
    errors::CartsServiceError,
    models::{CartSession, CartUuid, NewCart, NewCartItem},
    sessions::CartSessions,
};

#[derive(Debug, Clone)]
pub struct InMemoryCartsService {
    catalog: Arc<Catalog>,
    policy: CheckoutPolicy,
    sessions: CartSessions,
}

impl InMemoryCartsService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, policy: CheckoutPolicy, sessions: CartSessions) -> Self {
        Self {
            catalog,
            policy,
            sessions,
        }
    }

    fn unit_price(
        &self,
        poster_id: &PosterId,
        size: PosterSize,
    ) -> Result<Money<'static, Currency>, CartsServiceError> {
        let poster = self
            .catalog
            .get(poster_id)
            .ok_or_else(|| CartsServiceError::UnknownPoster(poster_id.clone()))?;

        poster
            .price(size)
            .copied()
            .ok_or_else(|| CartsServiceError::SizeUnavailable(poster_id.clone(), size))
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    async fn get_cart(&self, uuid: CartUuid) -> Result<CartSession, CartsServiceError> {
        self.sessions
            .get(uuid)
            .await
            .ok_or(CartsServiceError::NotFound)
    }

    async fn create_cart(&self, cart: NewCart) -> Result<CartSession, CartsServiceError> {
        let now = Timestamp::now();

        let session = self
            .sessions
            .insert(CartSession {
                uuid: cart.uuid,
                cart: Cart::new(self.policy),
                created_at: now,
                updated_at: now,
            })
            .await?;

        debug!(cart_uuid = %session.uuid, "cart session opened");

        Ok(session)
    }

    async fn delete_cart(&self, uuid: CartUuid) -> Result<(), CartsServiceError> {
        self.sessions
            .remove(uuid)
            .await
            .map(|_removed| ())
            .ok_or(CartsServiceError::NotFound)
    }

    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartSession, CartsServiceError> {
        let price = self.unit_price(&item.poster_id, item.size)?;

        self.sessions
            .update(cart, move |cart| {
                cart.add_line(item.poster_id, item.size, item.quantity, price)?;

                Ok(true)
            })
            .await
    }

    async fn update_item(
        &self,
        cart: CartUuid,
        poster_id: PosterId,
        size: PosterSize,
        quantity: u32,
    ) -> Result<CartSession, CartsServiceError> {
        self.sessions
            .update(cart, move |cart| {
                cart.update_quantity(&poster_id, size, quantity)?;

                Ok(true)
            })
            .await
    }

    async fn remove_item(
        &self,
        cart: CartUuid,
        poster_id: PosterId,
        size: PosterSize,
    ) -> Result<CartSession, CartsServiceError> {
        self.sessions
            .update(cart, move |cart| Ok(cart.remove_line(&poster_id, size).is_some()))
            .await
    }

    async fn checkout_status(
        &self,
        cart: CartUuid,
    ) -> Result<CheckoutSummary<'static>, CartsServiceError> {
        self.get_cart(cart)
            .await
            .map(|session| session.cart.checkout_summary())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve a single cart.
    async fn get_cart(&self, uuid: CartUuid) -> Result<CartSession, CartsServiceError>;

    /// Opens a new, empty cart session.
    async fn create_cart(&self, cart: NewCart) -> Result<CartSession, CartsServiceError>;

    /// Drops a cart session.
    async fn delete_cart(&self, uuid: CartUuid) -> Result<(), CartsServiceError>;

    /// Add a catalog-priced line to the given cart
    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartSession, CartsServiceError>;

    /// Replace the quantity of an existing line.
    async fn update_item(
        &self,
        cart: CartUuid,
        poster_id: PosterId,
        size: PosterSize,
        quantity: u32,
    ) -> Result<CartSession, CartsServiceError>;

    /// Remove a line; removing an absent line leaves the cart as it was.
    async fn remove_item(
        &self,
        cart: CartUuid,
        poster_id: PosterId,
        size: PosterSize,
    ) -> Result<CartSession, CartsServiceError>;

    /// Totals and whether the cart may proceed to checkout.
    async fn checkout_status(
        &self,
        cart: CartUuid,
    ) -> Result<CheckoutSummary<'static>, CartsServiceError>;
}
