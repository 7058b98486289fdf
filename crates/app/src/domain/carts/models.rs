//! Cart Models

use jiff::Timestamp;
use printshop::{
    cart::Cart,
    posters::{PosterId, PosterSize},
};

use crate::uuids::TypedUuid;

/// Cart UUID
pub type CartUuid = TypedUuid<CartSession>;

/// A browsing session's cart.
#[derive(Debug, Clone)]
pub struct CartSession {
    pub uuid: CartUuid,
    pub cart: Cart<'static>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub uuid: CartUuid,
}

/// Line to add to a cart. The unit price comes from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub poster_id: PosterId,
    pub size: PosterSize,
    pub quantity: u32,
}
