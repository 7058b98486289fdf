//! App Router

use salvo::Router;

use crate::{carts, healthcheck, payments, posters};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("posters")
                .get(posters::index::handler)
                .push(Router::with_path("{poster}").get(posters::get::handler)),
        )
        .push(
            Router::with_path("carts")
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::delete::handler)
                        .push(Router::with_path("checkout").get(carts::checkout::handler))
                        .push(
                            Router::with_path("items")
                                .post(carts::items::create::handler)
                                .push(
                                    Router::with_path("{poster}/{size}")
                                        .put(carts::items::update::handler)
                                        .delete(carts::items::delete::handler),
                                ),
                        ),
                ),
        )
        .push(Router::with_path("payments/verify").post(payments::verify::handler))
}
