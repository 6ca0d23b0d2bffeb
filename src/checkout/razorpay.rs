//! Bindings to the hosted Razorpay checkout and its script loader.
//!
//! The provider ships one externally hosted script exposing a global
//! `Razorpay` constructor. [`ensure_loaded`] injects that script at most
//! once per page load; [`RazorpayGateway`] adapts the whole surface to the
//! [`WidgetGateway`] seam used by the checkout flow.

use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Object, Promise, Reflect};
use web_sys::{window, Document, HtmlScriptElement};

use crate::checkout::flow::{CheckoutConfig, CheckoutError, OutcomeHooks, WidgetGateway};
use crate::config;

#[wasm_bindgen]
extern "C" {
    /// Raw handle to the provider's client-side checkout object.
    #[wasm_bindgen(js_name = Razorpay)]
    pub type JsRazorpay;

    /// `new Razorpay(options)`
    #[wasm_bindgen(constructor, js_class = "Razorpay")]
    pub fn new(options: &JsValue) -> JsRazorpay;

    /// `rzp.open()` — opens the provider's modal UI.
    #[wasm_bindgen(method)]
    pub fn open(this: &JsRazorpay);

    /// `rzp.on(event, handler)` — event subscription; the failure event is
    /// `"payment.failed"` carrying `{ error: { description } }`.
    #[wasm_bindgen(method, js_name = on)]
    pub fn on(this: &JsRazorpay, event: &str, handler: &Function);
}

/// What [`ensure_loaded`] has to do, given what is already in the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoadAction {
    /// The global is present; nothing to inject.
    AlreadyLoaded,
    /// A script tag from an earlier call is still loading; wait for it
    /// instead of injecting a second one.
    AwaitExisting,
    /// First call on this page; inject the script.
    Inject,
}

pub(crate) fn classify_load(global_present: bool, script_tag_present: bool) -> LoadAction {
    if global_present {
        LoadAction::AlreadyLoaded
    } else if script_tag_present {
        LoadAction::AwaitExisting
    } else {
        LoadAction::Inject
    }
}

fn provider_global_present() -> bool {
    window()
        .map(|w| Reflect::has(w.as_ref(), &JsValue::from_str("Razorpay")).unwrap_or(false))
        .unwrap_or(false)
}

/// Idempotently makes sure the checkout script is present and executable.
/// Never injects a second tag, even when invoked from rapid repeated
/// submissions while the first injection is still in flight.
pub async fn ensure_loaded() -> Result<(), CheckoutError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(CheckoutError::WidgetUnavailable)?;
    let tag_present = document
        .get_element_by_id(config::CHECKOUT_SCRIPT_ID)
        .is_some();

    match classify_load(provider_global_present(), tag_present) {
        LoadAction::AlreadyLoaded => Ok(()),
        LoadAction::AwaitExisting => await_pending_injection().await,
        LoadAction::Inject => inject_script(&document).await,
    }
}

/// An earlier submission already injected the tag; poll for the global it
/// will register rather than racing it with a duplicate injection.
async fn await_pending_injection() -> Result<(), CheckoutError> {
    for _ in 0..50 {
        TimeoutFuture::new(100).await;
        if provider_global_present() {
            return Ok(());
        }
    }
    Err(CheckoutError::WidgetUnavailable)
}

async fn inject_script(document: &Document) -> Result<(), CheckoutError> {
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|_| CheckoutError::WidgetUnavailable)?
        .dyn_into()
        .map_err(|_| CheckoutError::WidgetUnavailable)?;
    script.set_id(config::CHECKOUT_SCRIPT_ID);
    script.set_src(config::CHECKOUT_SCRIPT_URL);
    script.set_async(true);

    let loaded = Promise::new(&mut |resolve: Function, reject: Function| {
        let onload = Closure::<dyn FnMut()>::new(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::<dyn FnMut()>::new(move || {
            let _ = reject.call0(&JsValue::NULL);
        });
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });

    document
        .body()
        .ok_or(CheckoutError::WidgetUnavailable)?
        .append_child(&script)
        .map_err(|_| CheckoutError::WidgetUnavailable)?;

    match JsFuture::from(loaded).await {
        Ok(_) => {
            info!("checkout script loaded");
            Ok(())
        }
        Err(err) => {
            gloo_console::error!("checkout script failed to load", err);
            Err(CheckoutError::WidgetUnavailable)
        }
    }
}

/// Live [`WidgetGateway`] over the injected provider script.
pub struct RazorpayGateway;

impl WidgetGateway for RazorpayGateway {
    async fn ensure_loaded(&self) -> Result<(), CheckoutError> {
        ensure_loaded().await
    }

    fn open(&self, config: CheckoutConfig, hooks: OutcomeHooks) {
        if let Err(err) = open_checkout(&config, hooks) {
            gloo_console::error!("failed to open checkout", err);
        }
    }
}

/// Builds the provider options object and opens the modal. The serializable
/// part of [`CheckoutConfig`] crosses the boundary through serde; the
/// `handler` and `modal.ondismiss` callbacks are attached by hand since
/// closures cannot be serialized.
fn open_checkout(config: &CheckoutConfig, hooks: OutcomeHooks) -> Result<(), JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let options = serde::Serialize::serialize(config, &serializer).map_err(JsValue::from)?;

    let on_success = hooks.on_success;
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        let payment_id = Reflect::get(&response, &JsValue::from_str("razorpay_payment_id"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        on_success.emit(payment_id);
    });
    Reflect::set(&options, &JsValue::from_str("handler"), handler.as_ref())?;
    handler.forget();

    let on_dismiss = hooks.on_dismiss;
    let ondismiss = Closure::<dyn FnMut()>::new(move || on_dismiss.emit(()));
    let modal = Object::new();
    Reflect::set(&modal, &JsValue::from_str("ondismiss"), ondismiss.as_ref())?;
    Reflect::set(&options, &JsValue::from_str("modal"), &modal)?;
    ondismiss.forget();

    let rzp = JsRazorpay::new(&options);

    let on_failure = hooks.on_failure;
    let failed = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        let description = Reflect::get(&response, &JsValue::from_str("error"))
            .ok()
            .and_then(|e| Reflect::get(&e, &JsValue::from_str("description")).ok())
            .and_then(|d| d.as_string());
        on_failure.emit(CheckoutError::ProviderDecline(description));
    });
    rzp.on("payment.failed", failed.as_ref().unchecked_ref());
    failed.forget();

    rzp.open();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_never_reinjects_once_global_is_present() {
        assert_eq!(classify_load(true, false), LoadAction::AlreadyLoaded);
        // Even with a stale tag around, a present global wins.
        assert_eq!(classify_load(true, true), LoadAction::AlreadyLoaded);
    }

    #[test]
    fn pending_injection_is_awaited_not_duplicated() {
        assert_eq!(classify_load(false, true), LoadAction::AwaitExisting);
    }

    #[test]
    fn first_call_injects() {
        assert_eq!(classify_load(false, false), LoadAction::Inject);
    }
}
