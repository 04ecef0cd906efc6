//! App shell wiring for the Mercato UI.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::api::ApiCtx;
use crate::components::admin::{AdminHome, AdminShell, OrdersView};
use crate::components::login::{LoginSubmit, LoginView};
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::session::SessionStore;
use crate::core::store::AppStore;
use crate::logic::gateway::describe_error;
use crate::models::{Toast, ToastRequest};
pub(crate) use routes::Route;

pub(crate) mod api;
mod routes;
pub(crate) mod stream;

#[function_component(MercatoApp)]
pub fn mercato_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url(), SessionStore::new()), ());
    let dispatch = Dispatch::<AppStore>::new();
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);
    let login_busy = use_state(|| false);
    let login_error = use_state(|| None::<String>);

    {
        // Seed the reactive credential copy from the private store on boot.
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                dispatch.reduce_mut(|store| store.credential = SessionStore::new().get());
                || ()
            },
            (),
        );
    }

    let credential = use_selector(|store: &AppStore| store.credential.clone());
    let authenticated = credential.is_some();

    let push_toast_cb = {
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |request: ToastRequest| push_toast(&toasts, &toast_id, request))
    };
    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .cloned()
                    .filter(|toast| toast.id != id)
                    .collect(),
            );
        })
    };

    let on_login = {
        let api_ctx = (*api_ctx).clone();
        let dispatch = dispatch.clone();
        let login_busy = login_busy.clone();
        let login_error = login_error.clone();
        Callback::from(move |submit: LoginSubmit| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let login_busy = login_busy.clone();
            let login_error = login_error.clone();
            login_busy.set(true);
            yew::platform::spawn_local(async move {
                match client.login(&submit.email, &submit.password).await {
                    Ok(response) => {
                        SessionStore::new().set(&response.token);
                        dispatch.reduce_mut(|store| store.credential = Some(response.token));
                        login_error.set(None);
                        login_busy.set(false);
                        // Full navigation so a protected return path passes
                        // back through the edge guard.
                        navigate_to(submit.redirect.as_deref().unwrap_or("/"));
                    }
                    Err(error) => {
                        login_error.set(Some(describe_error(
                            &error,
                            "Sign-in failed. Please try again.",
                        )));
                        login_busy.set(false);
                    }
                }
            });
        })
    };

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            SessionStore::new().clear();
            dispatch.reduce_mut(|store| store.credential = None);
        })
    };

    let base_url = api_base_url();
    let login_busy_value = *login_busy;
    let login_error_value = (*login_error).clone();
    let api_ctx_value = (*api_ctx).clone();

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <AppShell authenticated={authenticated} on_logout={on_logout}>
                    <Switch<Route> render={move |route| {
                        match route {
                            Route::Home => html! {
                                <div class="placeholder">
                                    <h2>{"Mercato"}</h2>
                                    <p class="muted">{"Storefront catalogue lives here."}</p>
                                </div>
                            },
                            Route::Login => html! {
                                <LoginView
                                    on_submit={on_login.clone()}
                                    busy={login_busy_value}
                                    error={login_error_value.clone()}
                                />
                            },
                            Route::Admin => html! {
                                <AdminShell
                                    admin=true
                                    base_url={base_url.clone()}
                                    on_toast={push_toast_cb.clone()}
                                >
                                    <AdminHome />
                                </AdminShell>
                            },
                            Route::AdminOrders => html! {
                                <AdminShell
                                    admin=true
                                    base_url={base_url.clone()}
                                    on_toast={push_toast_cb.clone()}
                                >
                                    <OrdersView api={api_ctx_value.clone()} />
                                </AdminShell>
                            },
                            Route::NotFound => html! {
                                <div class="placeholder">
                                    <h2>{"Not found"}</h2>
                                    <p class="muted">{"Use the navigation to return to a supported view."}</p>
                                </div>
                            },
                        }
                    }} />
                </AppShell>
                <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn push_toast(toasts: &UseStateHandle<Vec<Toast>>, next_id: &UseStateHandle<u64>, request: ToastRequest) {
    let id = **next_id + 1;
    next_id.set(id);
    let mut list = (**toasts).clone();
    list.push(Toast {
        id,
        title: request.title,
        message: request.message,
        kind: request.kind,
        duration_ms: request.duration_ms,
    });
    if list.len() > 4 {
        let drain = list.len() - 4;
        list.drain(0..drain);
    }
    toasts.set(list);
}

fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().assign(path);
    }
}

fn api_base_url() -> String {
    let href = web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    if let Ok(url) = web_sys::Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("9000"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:9000".to_string()
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MercatoApp>::with_root(root).render();
    } else {
        yew::Renderer::<MercatoApp>::new().render();
    }
}
