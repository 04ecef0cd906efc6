//! Notification channel runner for admin contexts.
//!
//! # Design
//! - Use fetch streaming so the connection can be aborted on unmount.
//! - One connection per open view, no automatic reconnection: a closed
//!   stream stays closed until the owning context mounts again.
//! - Internal errors never escape: they become a closed connection plus a
//!   console line.

use gloo::console;
use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AbortController, AbortSignal, ReadableStream, ReadableStreamDefaultReader, Request,
    RequestInit, RequestMode, Response, TextDecoder,
};
use yew::Callback;

use mercato_events::{EVENT_CONNECTED, EVENT_NOTIFICATION, Notification};

use crate::logic::notify::build_stream_url;
use crate::logic::sse::{SseFrame, SseParser, decode_notification};

/// Active stream handle for cancellation on view teardown.
pub(crate) struct StreamHandle {
    controller: AbortController,
}

impl StreamHandle {
    pub(crate) fn close(&self) {
        self.controller.abort();
    }
}

/// Open the notification channel for an admin-flagged context.
///
/// Returns `None` without any connection attempt when the context is not an
/// admin one or no credential is available.
pub(crate) fn open_notifications(
    admin: bool,
    credential: Option<String>,
    base_url: String,
    on_notification: Callback<Notification>,
    on_connected: Callback<()>,
    on_closed: Callback<String>,
) -> Option<StreamHandle> {
    if !admin {
        return None;
    }
    let token = credential?;
    let controller = AbortController::new().ok()?;
    let signal = controller.signal();
    yew::platform::spawn_local(async move {
        run_stream(base_url, token, signal, on_notification, on_connected, on_closed).await;
    });
    Some(StreamHandle { controller })
}

async fn run_stream(
    base_url: String,
    token: String,
    signal: AbortSignal,
    on_notification: Callback<Notification>,
    on_connected: Callback<()>,
    on_closed: Callback<String>,
) {
    let url = build_stream_url(&base_url, &token);
    let mut reader = match open_stream(&url, &signal).await {
        Ok(reader) => reader,
        Err(error) => {
            if !signal.aborted() {
                console::warn!("notification stream unavailable", error.to_string());
                on_closed.emit(error.to_string());
            }
            return;
        }
    };
    let Ok(decoder) = TextDecoder::new() else {
        on_closed.emit("text decoder unavailable".to_string());
        return;
    };

    let mut parser = SseParser::default();
    let mut connected_seen = false;

    loop {
        if signal.aborted() {
            return;
        }
        match read_chunk(&mut reader).await {
            Ok(Some(bytes)) => {
                let text = match decoder.decode_with_js_u8_array(&bytes) {
                    Ok(text) => text,
                    Err(error) => {
                        console::warn!("undecodable stream chunk", format!("{error:?}"));
                        on_closed.emit("undecodable stream chunk".to_string());
                        return;
                    }
                };
                for frame in parser.push(&text) {
                    handle_frame(&frame, &on_notification, &on_connected, &mut connected_seen);
                }
            }
            Ok(None) => {
                if let Some(frame) = parser.finish() {
                    handle_frame(&frame, &on_notification, &on_connected, &mut connected_seen);
                }
                on_closed.emit("stream ended".to_string());
                return;
            }
            Err(error) => {
                if !signal.aborted() {
                    console::warn!("notification stream read failed", error.clone());
                    on_closed.emit(error);
                }
                return;
            }
        }
    }
}

fn handle_frame(
    frame: &SseFrame,
    on_notification: &Callback<Notification>,
    on_connected: &Callback<()>,
    connected_seen: &mut bool,
) {
    match frame.event.as_deref() {
        Some(EVENT_CONNECTED) => {
            if !*connected_seen {
                *connected_seen = true;
                on_connected.emit(());
            }
        }
        Some(EVENT_NOTIFICATION) => match decode_notification(frame) {
            Ok(notification) => on_notification.emit(notification),
            // Swallowed by contract: a malformed payload renders nothing.
            Err(error) => console::warn!("dropped undecodable notification", error.data),
        },
        _ => {}
    }
}

async fn open_stream(
    url: &str,
    signal: &AbortSignal,
) -> Result<ReadableStreamDefaultReader, ConnectError> {
    let window = web_sys::window().ok_or(ConnectError::Window)?;
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    init.set_signal(Some(signal));

    let request = Request::new_with_str_and_init(url, &init).map_err(|_| ConnectError::Request)?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ConnectError::Fetch)?;
    let response: Response = resp.dyn_into().map_err(|_| ConnectError::Fetch)?;
    if !response.ok() {
        return Err(ConnectError::Status(response.status()));
    }
    let stream: ReadableStream = response.body().ok_or(ConnectError::Stream)?;
    stream
        .get_reader()
        .dyn_into::<ReadableStreamDefaultReader>()
        .map_err(|_| ConnectError::Reader)
}

async fn read_chunk(
    reader: &mut ReadableStreamDefaultReader,
) -> Result<Option<Uint8Array>, String> {
    let chunk = JsFuture::from(reader.read())
        .await
        .map_err(|error| format!("read failed: {error:?}"))?;
    let done = Reflect::get(&chunk, &JsValue::from_str("done"))
        .map_err(|error| format!("chunk done lookup failed: {error:?}"))?
        .as_bool()
        .unwrap_or(false);
    if done {
        return Ok(None);
    }
    let value = Reflect::get(&chunk, &JsValue::from_str("value"))
        .map_err(|error| format!("chunk value lookup failed: {error:?}"))?;
    Ok(Some(Uint8Array::new(&value)))
}

#[derive(Debug)]
enum ConnectError {
    Window,
    Request,
    Fetch,
    Stream,
    Reader,
    Status(u16),
}

impl std::fmt::Display for ConnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Window => write!(f, "window unavailable"),
            Self::Request => write!(f, "request build failed"),
            Self::Fetch => write!(f, "fetch failed"),
            Self::Stream => write!(f, "stream response missing body"),
            Self::Reader => write!(f, "stream reader unavailable"),
            Self::Status(code) => write!(f, "http {code}"),
        }
    }
}
