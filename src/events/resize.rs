use super::Listener;
use crate::dom;
use scene_core::{Renderer, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Refit camera and renderer to the container on every window resize.
pub fn wire_resize<R: Renderer + 'static>(
    window: &web::Window,
    container: web::Element,
    controller: Rc<RefCell<SceneController<R>>>,
) -> Result<Listener, JsValue> {
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::container_size(&container);
        controller.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);

    Listener::attach(window.as_ref(), "resize", closure)
}
