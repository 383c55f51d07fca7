//! Browser entry point and the functions exported to page scripts.
//!
//! DESIGN
//! ======
//! One controller per page lives in a thread-local. Server-rendered templates
//! call the exported functions (`addToCart`, `removeFromCart`, ...) from inline
//! handlers, so the export names match what those templates already use.
//! Each async operation is spawned onto the browser event loop and its
//! outcome is reflected on the page only.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DocumentReadyState, Event, HtmlFormElement, HtmlInputElement};

use crate::config::CartConfig;
use crate::controller::{CartController, QuantityForm};
use crate::net::browser::BrowserTransport;
use crate::net::types::{DEFAULT_QUANTITY, parse_quantity, quantity_from_number};
use crate::page::dom::DomPage;
use crate::stepper;

type BrowserController = CartController<BrowserTransport, DomPage>;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<BrowserController>>> = const { RefCell::new(None) };
}

fn controller() -> Option<Rc<BrowserController>> {
    let found = CONTROLLER.with(|slot| slot.borrow().clone());
    if found.is_none() {
        log::warn!("cart controller not started");
    }
    found
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let page = match DomPage::new() {
        Ok(page) => page,
        Err(e) => {
            log::error!("cart boot failed: {e}");
            return;
        }
    };
    let loading = page.document().ready_state() == DocumentReadyState::Loading;
    let document = page.document().clone();

    let controller = Rc::new(CartController::new(BrowserTransport, page, CartConfig::default()));
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&controller)));

    if loading {
        let on_ready = Closure::once_into_js(move |_event: Event| on_page_ready(&controller));
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::error!("DOMContentLoaded listener not attached: {e:?}");
        }
    } else {
        on_page_ready(&controller);
    }
}

fn on_page_ready(controller: &Rc<BrowserController>) {
    let c = Rc::clone(controller);
    spawn_local(async move { c.initialize().await });
    bind_quantity_forms(controller);
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    form.query_selector(&format!("input[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

fn bind_quantity_forms(controller: &Rc<BrowserController>) {
    let selector = controller.config().elements.quantity_form.clone();
    for form in controller.page().forms(&selector) {
        let c = Rc::clone(controller);
        let target = form.clone();
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let submitted = QuantityForm {
                product_id: field_value(&target, "product_id"),
                cantidad: field_value(&target, "cantidad"),
            };
            let c = Rc::clone(&c);
            spawn_local(async move {
                c.submit_quantity_form(submitted).await;
            });
        });
        if let Err(e) = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref()) {
            log::warn!("quantity form listener not attached: {e:?}");
        }
        on_submit.forget();
    }
}

/// Quantity passed in from a page script: a number or a numeric string.
fn js_quantity(value: &JsValue) -> Option<u32> {
    match value.as_f64() {
        Some(n) => quantity_from_number(n),
        None => value.as_string().as_deref().and_then(parse_quantity),
    }
}

#[wasm_bindgen(js_name = updateCartCount)]
pub fn update_cart_count() {
    if let Some(c) = controller() {
        spawn_local(async move {
            let _ = c.refresh_count().await;
        });
    }
}

#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(product_id: String, cantidad: JsValue) {
    let cantidad = if cantidad.is_undefined() || cantidad.is_null() {
        DEFAULT_QUANTITY
    } else {
        let Some(n) = js_quantity(&cantidad) else {
            log::warn!("addToCart({product_id}) ignored, bad quantity {cantidad:?}");
            return;
        };
        n
    };
    if let Some(c) = controller() {
        spawn_local(async move {
            c.add_to_cart(&product_id, cantidad).await;
        });
    }
}

#[wasm_bindgen(js_name = updateCartItem)]
pub fn update_cart_item(product_id: String, cantidad: JsValue) {
    let Some(cantidad) = js_quantity(&cantidad) else {
        log::warn!("updateCartItem({product_id}) ignored, bad quantity {cantidad:?}");
        return;
    };
    if let Some(c) = controller() {
        spawn_local(async move {
            c.update_cart_item(&product_id, cantidad).await;
        });
    }
}

#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(product_id: String) {
    if let Some(c) = controller() {
        spawn_local(async move {
            c.remove_from_cart(&product_id).await;
        });
    }
}

#[wasm_bindgen(js_name = incrementQuantity)]
pub fn increment_quantity(input_id: &str) {
    if let Some(c) = controller() {
        stepper::increment_quantity(c.page(), input_id);
    }
}

#[wasm_bindgen(js_name = decrementQuantity)]
pub fn decrement_quantity(input_id: &str) {
    if let Some(c) = controller() {
        stepper::decrement_quantity(c.page(), input_id);
    }
}
