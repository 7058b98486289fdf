//! Errors

use salvo::http::StatusError;
use tracing::error;

use printshop::cart::CartError;
use printshop_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart already exists"),
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::UnknownPoster(poster) => {
            StatusError::not_found().brief(format!("Poster {poster} not found"))
        }
        CartsServiceError::SizeUnavailable(poster, size) => {
            StatusError::not_found().brief(format!("Poster {poster} is not printed in {size}"))
        }
        CartsServiceError::Cart(CartError::InvalidQuantity) => {
            StatusError::bad_request().brief("Quantity must be greater than zero")
        }
        CartsServiceError::Cart(CartError::Overflow) => {
            StatusError::bad_request().brief("Quantity is too large")
        }
        CartsServiceError::Cart(CartError::LineNotFound(poster, size)) => {
            StatusError::not_found().brief(format!("No {size} {poster} in cart"))
        }
        CartsServiceError::Cart(source @ CartError::CurrencyMismatch(..)) => {
            error!("catalog and cart disagree on currency: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Cart(CartError::Pricing(source)) => {
            error!("cart line could not be priced: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::CapacityReached => {
            StatusError::service_unavailable().brief("Too many open carts, try again later")
        }
    }
}
