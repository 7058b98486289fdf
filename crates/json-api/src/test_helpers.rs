//! Test helpers.

use std::{collections::BTreeMap, sync::Arc};

use jiff::Timestamp;
use printshop::{
    cart::{Cart, CartError},
    catalog::Poster,
    checkout::CheckoutPolicy,
    posters::{PosterId, PosterSize},
};
use printshop_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{CartSession, CartUuid},
        },
        catalog::MockCatalogService,
        payments::MockPaymentsService,
    },
};
use rusty_money::{Money, iso};
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

pub(crate) fn state(
    catalog: MockCatalogService,
    carts: MockCartsService,
    payments: MockPaymentsService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        catalog: Arc::new(catalog),
        carts: Arc::new(carts),
        payments: Arc::new(payments),
    })
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service(
        state(catalog, MockCartsService::new(), MockPaymentsService::new()),
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service(
        state(MockCatalogService::new(), carts, MockPaymentsService::new()),
        route,
    )
}

pub(crate) fn payments_service(payments: MockPaymentsService, route: Router) -> Service {
    service(
        state(MockCatalogService::new(), MockCartsService::new(), payments),
        route,
    )
}

pub(crate) fn make_poster(id: &str) -> Poster {
    Poster {
        id: PosterId::new(id),
        title: "Interstellar".to_string(),
        category: "movies".to_string(),
        prices: BTreeMap::from([
            (PosterSize::A4, Money::from_minor(150_00, iso::INR)),
            (PosterSize::A3, Money::from_minor(249_00, iso::INR)),
        ]),
    }
}

pub(crate) fn make_session(uuid: CartUuid) -> CartSession {
    CartSession {
        uuid,
        cart: Cart::new(CheckoutPolicy::default()),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A cart holding two A4 prints of `p1` at 150.00.
pub(crate) fn make_filled_session(uuid: CartUuid) -> Result<CartSession, CartError> {
    let mut session = make_session(uuid);

    session.cart.add_line(
        PosterId::new("p1"),
        PosterSize::A4,
        2,
        Money::from_minor(150_00, iso::INR),
    )?;

    Ok(session)
}
