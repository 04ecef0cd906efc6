//! Admin console shell and its thin views.
//!
//! The shell is the admin-flagged context that owns the notification
//! channel: it opens one connection on mount when a credential is available
//! and closes it unconditionally on teardown. List views subscribe to the
//! store's refresh tick instead of polling.

use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use mercato_api_models::AdminOrder;
use mercato_events::Notification;

use crate::app::api::ApiCtx;
use crate::app::stream::open_notifications;
use crate::core::store::AppStore;
use crate::logic::gateway::describe_error;
use crate::logic::notify::plan_dispatch;
use crate::models::{StreamState, ToastKind, ToastRequest};

#[derive(Properties, PartialEq)]
pub(crate) struct AdminShellProps {
    /// Whether this view declares itself an admin context.
    pub admin: bool,
    /// Base origin for the push stream connection.
    pub base_url: String,
    pub on_toast: Callback<ToastRequest>,
    pub children: Children,
}

#[function_component(AdminShell)]
pub(crate) fn admin_shell(props: &AdminShellProps) -> Html {
    let credential = use_selector(|store: &AppStore| store.credential.clone());
    let stream_state = use_selector(|store: &AppStore| store.stream.clone());

    {
        let base_url = props.base_url.clone();
        let on_toast = props.on_toast.clone();
        let admin = props.admin;
        use_effect_with_deps(
            move |(admin, credential): &(bool, std::rc::Rc<Option<String>>)| {
                let dispatch = Dispatch::<AppStore>::new();
                let on_notification = {
                    let on_toast = on_toast.clone();
                    let dispatch = dispatch.clone();
                    Callback::from(move |notification: Notification| {
                        let plan = plan_dispatch(notification.kind);
                        on_toast.emit(ToastRequest {
                            title: Some(notification.title),
                            message: notification.message,
                            kind: plan.kind,
                            duration_ms: plan.duration_ms,
                        });
                        if plan.refresh {
                            dispatch.reduce_mut(|store| store.orders_refresh += 1);
                        }
                    })
                };
                let on_connected = {
                    let on_toast = on_toast.clone();
                    let dispatch = dispatch.clone();
                    Callback::from(move |()| {
                        dispatch.reduce_mut(|store| store.stream = StreamState::Connected);
                        on_toast.emit(ToastRequest {
                            title: None,
                            message: "Realtime updates connected.".to_string(),
                            kind: ToastKind::Info,
                            duration_ms: crate::logic::notify::INFO_VISIBILITY_MS,
                        });
                    })
                };
                let on_closed = {
                    let dispatch = dispatch.clone();
                    Callback::from(move |reason: String| {
                        dispatch.reduce_mut(|store| store.stream = StreamState::Closed { reason });
                    })
                };
                let handle = open_notifications(
                    *admin,
                    (**credential).clone(),
                    base_url,
                    on_notification,
                    on_connected,
                    on_closed,
                );
                move || {
                    if let Some(handle) = handle {
                        handle.close();
                    }
                    Dispatch::<AppStore>::new().reduce_mut(|store| store.stream = StreamState::Idle);
                }
            },
            (admin, credential),
        );
    }

    html! {
        <section class="admin">
            {stream_badge(&stream_state)}
            {for props.children.iter()}
        </section>
    }
}

fn stream_badge(state: &StreamState) -> Html {
    match state {
        StreamState::Idle => html! {},
        StreamState::Connected => html! { <div class="pill subtle">{"live"}</div> },
        StreamState::Closed { reason } => html! {
            <div class="pill warn" title={reason.clone()}>{"updates paused"}</div>
        },
    }
}

/// Admin landing view.
#[function_component(AdminHome)]
pub(crate) fn admin_home() -> Html {
    html! {
        <div class="placeholder">
            <h2>{"Admin console"}</h2>
            <p class="muted">{"Pick a section from the navigation."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct OrdersViewProps {
    pub api: ApiCtx,
}

#[function_component(OrdersView)]
pub(crate) fn orders_view(props: &OrdersViewProps) -> Html {
    let orders = use_state(Vec::<AdminOrder>::new);
    let error = use_state(|| None::<String>);
    let refresh = use_selector(|store: &AppStore| store.orders_refresh);

    {
        let orders = orders.clone();
        let error = error.clone();
        let client = props.api.client.clone();
        use_effect_with_deps(
            move |_refresh| {
                yew::platform::spawn_local(async move {
                    match client.fetch_admin_orders().await {
                        Ok(list) => {
                            error.set(None);
                            orders.set(list);
                        }
                        Err(err) => {
                            error.set(Some(describe_error(&err, "Could not load orders.")));
                        }
                    }
                });
                || ()
            },
            *refresh,
        );
    }

    html! {
        <div class="orders">
            <h2>{"Orders"}</h2>
            {error.as_ref().map_or_else(|| html! {}, |message| html! {
                <p class="error">{message.clone()}</p>
            })}
            <table>
                <thead>
                    <tr><th>{"Order"}</th><th>{"Customer"}</th><th>{"Status"}</th><th>{"Total"}</th></tr>
                </thead>
                <tbody>
                    {for orders.iter().map(order_row)}
                </tbody>
            </table>
        </div>
    }
}

fn order_row(order: &AdminOrder) -> Html {
    html! {
        <tr key={order.id.to_string()}>
            <td class="mono">{order.id.to_string()}</td>
            <td>{order.customer.clone()}</td>
            <td>{order.status.clone()}</td>
            <td>{format_total(order.total_cents)}</td>
        </tr>
    }
}

fn format_total(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, (cents % 100).abs())
}
