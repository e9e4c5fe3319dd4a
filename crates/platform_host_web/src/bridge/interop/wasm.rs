use std::time::Duration;

use js_sys::{Function, Promise, Reflect};
use platform_host::{IntakeReply, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, RequestInit, Response, Window};

/// Aborts the owned controller unless the request settled first.
struct AbortOnDrop {
    controller: AbortController,
    settled: bool,
}

impl AbortOnDrop {
    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if !self.settled {
            self.controller.abort();
        }
    }
}

/// Clears the pending `setTimeout` handle unless it already fired.
struct ClearOnDrop {
    window: Window,
    handle: Option<i32>,
}

impl Drop for ClearOnDrop {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

fn js_field(value: &JsValue, key: &str) -> Option<String> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|field| field.as_string())
}

fn transport_error(value: JsValue) -> TransportError {
    if js_field(&value, "name").as_deref() == Some("AbortError") {
        return TransportError::Aborted;
    }
    TransportError::Network(
        js_field(&value, "message")
            .or_else(|| value.as_string())
            .unwrap_or_default(),
    )
}

pub async fn post_json(url: &str, body: &str) -> Result<IntakeReply, TransportError> {
    let window = web_sys::window()
        .ok_or_else(|| TransportError::Network("browser window is unavailable".to_string()))?;
    let controller = AbortController::new().map_err(transport_error)?;
    let signal = controller.signal();
    let guard = AbortOnDrop {
        controller,
        settled: false,
    };

    let headers = Headers::new().map_err(transport_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(transport_error)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(body));
    init.set_signal(Some(&signal));

    let response = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(transport_error)?;
    let response: Response = response.dyn_into().map_err(transport_error)?;
    let status = response.status();

    // The guard travels with the body read; dropping an unread body aborts the transfer.
    let body = Box::pin(async move {
        let text = match response.text() {
            Ok(text) => JsFuture::from(text)
                .await
                .ok()
                .and_then(|value| value.as_string()),
            Err(_) => None,
        };
        guard.settle();
        text
    });

    Ok(IntakeReply::new(status, body))
}

pub async fn sleep(duration: Duration) {
    let Some(window) = web_sys::window() else {
        console_warn("setTimeout unavailable; delay resolved immediately");
        return;
    };
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let mut handle = None;
    let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
        handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .ok();
    });
    let mut guard = ClearOnDrop { window, handle };
    let _ = JsFuture::from(promise).await;
    guard.handle = None;
}

fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
