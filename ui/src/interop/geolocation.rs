use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use futures::channel::oneshot;
use isukuhub_model::LatLng;
use wasm_bindgen::prelude::*;

type Reply = Rc<RefCell<Option<oneshot::Sender<anyhow::Result<LatLng>>>>>;

fn error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

/// One reading from the browser's geolocation API.
///
/// The browser calls exactly one of the two callbacks; each is freed when
/// called and the other leaks. Dropping the future early is harmless: the
/// late reply goes to a closed channel.
pub async fn current_position() -> anyhow::Result<LatLng> {
    let geolocation = web_sys::window()
        .context("no window")?
        .navigator()
        .geolocation()
        .map_err(|e| anyhow!("geolocation unsupported: {}", error_message(&e)))?;

    let (tx, rx) = oneshot::channel();
    let reply: Reply = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let reply = reply.clone();
        Closure::once_into_js(move |position: web_sys::Position| {
            let coords = position.coords();
            if let Some(tx) = reply.borrow_mut().take() {
                let _ = tx.send(Ok(LatLng::new(
                    coords.latitude(),
                    coords.longitude(),
                )));
            }
        })
    };
    let on_error = {
        let reply = reply.clone();
        Closure::once_into_js(move |err: JsValue| {
            if let Some(tx) = reply.borrow_mut().take() {
                let _ = tx.send(Err(anyhow!(
                    "position unavailable: {}",
                    error_message(&err)
                )));
            }
        })
    };

    geolocation
        .get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        )
        .map_err(|e| anyhow!("geolocation request failed: {}", error_message(&e)))?;

    rx.await.context("geolocation callback never ran")?
}
