//! Carts service errors.

use printshop::{
    cart::CartError,
    posters::{PosterId, PosterSize},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("cart not found")]
    NotFound,

    #[error("too many open carts")]
    CapacityReached,

    #[error("poster {0} is not in the catalog")]
    UnknownPoster(PosterId),

    #[error("poster {0} is not printed in {1}")]
    SizeUnavailable(PosterId, PosterSize),

    #[error("cart rejected the change")]
    Cart(#[from] CartError),
}
