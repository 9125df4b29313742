//! Browser binding of the node picker.
//!
//! The host page renders the area select and calls `mount` with the active
//! node:
//!
//! ```js
//! import init, { mount } from "./picker_web.js";
//! await init();
//! mount({ nodeID: "n1", nodeAreaID: "eu-west-n1" });
//! ```

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use picker::{NodePicker, PageConfig, PickerError, Selector, Transport};
use tracing::{error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, EventTarget};

pub mod dom;
pub mod http;
mod logging;

pub use dom::DomView;
pub use http::FetchTransport;

static MOUNTED: AtomicBool = AtomicBool::new(false);

fn to_js(err: PickerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    Ok(())
}

/// Binds the picker to the page and restores the active node's selection.
///
/// Waits for `DOMContentLoaded` when the document is still loading. Once a
/// mount has succeeded, later calls are no-ops; a failed mount can be retried.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<(), JsValue> {
    let config: PageConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| to_js(PickerError::Config(e.to_string())))?;
    logging::init(&config.log_level);

    if MOUNTED.swap(true, Ordering::SeqCst) {
        warn!("node picker already mounted");
        return Ok(());
    }

    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            MOUNTED.store(false, Ordering::SeqCst);
            return Err(err);
        }
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once(move |_: Event| {
            if let Err(err) = start_picker(config) {
                MOUNTED.store(false, Ordering::SeqCst);
                error!(error = %err, "node picker mount failed");
            }
        });
        if let Err(err) = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        ) {
            MOUNTED.store(false, Ordering::SeqCst);
            return Err(err);
        }
        on_ready.forget();
        return Ok(());
    }

    start_picker(config).map_err(|err| {
        MOUNTED.store(false, Ordering::SeqCst);
        to_js(err)
    })
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn start_picker(config: PageConfig) -> Result<(), PickerError> {
    let picker = attach(&config, FetchTransport::new())?;
    spawn_local(async move {
        if let Err(err) = picker.initialize(&config).await {
            error!(error = %err, "node picker initialization failed");
        }
    });
    Ok(())
}

/// Binds the configured elements and wires their events to a picker.
///
/// The active selection is not restored; `mount` does that on top.
pub fn attach<T>(
    config: &PageConfig,
    transport: T,
) -> Result<Rc<NodePicker<DomView, T>>, PickerError>
where
    T: Transport + 'static,
{
    let view = DomView::bind(&config.elements)?;
    let picker = Rc::new(NodePicker::new(view, transport, config.endpoints.clone()));
    wire_events(&picker).map_err(|e| PickerError::Config(format!("{e:?}")))?;
    Ok(picker)
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn wire_events<T>(picker: &Rc<NodePicker<DomView, T>>) -> Result<(), JsValue>
where
    T: Transport + 'static,
{
    let view = picker.view();

    let p = Rc::clone(picker);
    listen(view.select(Selector::Area), "change", move |_| {
        let p = Rc::clone(&p);
        spawn_local(async move {
            if let Err(err) = p.load_countries().await {
                error!(error = %err, "country reload failed");
            }
        });
    })?;

    let p = Rc::clone(picker);
    listen(view.select(Selector::Country), "change", move |_| {
        let p = Rc::clone(&p);
        spawn_local(async move {
            if let Err(err) = p.load_nodes().await {
                error!(error = %err, "node reload failed");
            }
        });
    })?;

    let p = Rc::clone(picker);
    listen(view.form(), "submit", move |event| {
        event.prevent_default();
        let p = Rc::clone(&p);
        spawn_local(async move {
            p.submit().await;
        });
    })?;

    Ok(())
}
