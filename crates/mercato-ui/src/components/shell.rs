//! Top-level navigation shell.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub authenticated: bool,
    pub on_logout: Callback<()>,
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="shell">
            <header class="shell-header">
                <span class="brand">{"Mercato"}</span>
                <nav>
                    <Link<Route> to={Route::Home}>{"Shop"}</Link<Route>>
                    <Link<Route> to={Route::Admin}>{"Admin"}</Link<Route>>
                    <Link<Route> to={Route::AdminOrders}>{"Orders"}</Link<Route>>
                </nav>
                {if props.authenticated {
                    html! { <button class="ghost" onclick={on_logout}>{"Sign out"}</button> }
                } else {
                    html! { <Link<Route> to={Route::Login} classes="ghost">{"Sign in"}</Link<Route>> }
                }}
            </header>
            <main>{for props.children.iter()}</main>
        </div>
    }
}
