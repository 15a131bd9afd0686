use super::Listener;
use crate::dom;
use scene_core::{Renderer, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Track the pointer anywhere on the page. Coordinates are normalized against
/// the window's inner size, not the container.
pub fn wire_pointermove<R: Renderer + 'static>(
    document: &web::Document,
    controller: Rc<RefCell<SceneController<R>>>,
) -> Result<Listener, JsValue> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = dom::window_viewport(&window);
        controller
            .borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32, viewport);
    }) as Box<dyn FnMut(_)>);

    Listener::attach(document.as_ref(), "pointermove", closure)
}
