//! Routing definitions for the Mercato UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/admin")]
    Admin,
    #[at("/admin/orders")]
    AdminOrders,
    #[not_found]
    #[at("/404")]
    NotFound,
}
