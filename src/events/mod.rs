mod pointer;
mod resize;

pub use pointer::wire_pointermove;
pub use resize::wire_resize;

use std::any::Any;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A registered DOM listener. Dropping it unregisters the callback.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    callback: JsValue,
    _closure: Box<dyn Any>,
}

impl Listener {
    pub fn attach<F: ?Sized + 'static>(
        target: &web::EventTarget,
        kind: &'static str,
        closure: Closure<F>,
    ) -> Result<Self, JsValue> {
        let callback: JsValue = closure.as_ref().clone();
        target.add_event_listener_with_callback(kind, callback.unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
            _closure: Box::new(closure),
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.unchecked_ref());
    }
}
