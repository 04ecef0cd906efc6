//! Authentication entry point.
//!
//! Reads the guard's `redirect` and `error` query parameters so a denied
//! admin visit lands here with context-appropriate messaging, then hands the
//! submitted credentials and the return path back to the app shell.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use mercato_api_models::{GuardReason, QUERY_ERROR, QUERY_REDIRECT};

use crate::logic::session::guard_reason_message;

/// Submitted credentials plus the path to return to afterwards.
pub(crate) struct LoginSubmit {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) redirect: Option<String>,
}

#[derive(Properties, PartialEq)]
pub(crate) struct LoginViewProps {
    pub on_submit: Callback<LoginSubmit>,
    pub busy: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(LoginView)]
pub(crate) fn login_view(props: &LoginViewProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);

    let guard_message = use_memo(
        |_| {
            query_param(QUERY_ERROR)
                .and_then(|value| GuardReason::parse(&value))
                .map(guard_reason_message)
        },
        (),
    );

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };
    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(LoginSubmit {
                email: (*email).clone(),
                password: (*password).clone(),
                redirect: query_param(QUERY_REDIRECT),
            });
        })
    };

    html! {
        <div class="login">
            <h2>{"Sign in"}</h2>
            {(*guard_message).map_or_else(|| html! {}, |message| html! {
                <p class="notice">{message}</p>
            })}
            {props.error.as_ref().map_or_else(|| html! {}, |message| html! {
                <p class="error">{message.clone()}</p>
            })}
            <form {onsubmit}>
                <label>{"Email"}
                    <input type="email" value={(*email).clone()} oninput={on_email} required=true />
                </label>
                <label>{"Password"}
                    <input type="password" value={(*password).clone()} oninput={on_password} required=true />
                </label>
                <button type="submit" disabled={props.busy}>
                    {if props.busy { "Signing in…" } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name).filter(|value| !value.is_empty())
}
