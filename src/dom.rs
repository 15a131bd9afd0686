use crate::sizing::css_px;
use scene_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current client size of the host container in CSS pixels.
#[inline]
pub fn container_size(container: &web::Element) -> (u32, u32) {
    (
        container.client_width().max(0) as u32,
        container.client_height().max(0) as u32,
    )
}

/// The window's inner size, used to normalize pointer coordinates.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).map(css_px).unwrap_or(0)
    };
    Viewport::new(
        read(window.inner_width()) as f32,
        read(window.inner_height()) as f32,
    )
}

/// Create a canvas and append it to `container`.
pub fn append_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// Size the canvas: CSS box in `css_*` pixels, backing store in `backing_*`.
pub fn set_canvas_size(
    canvas: &web::HtmlCanvasElement,
    css_width: u32,
    css_height: u32,
    backing_width: u32,
    backing_height: u32,
) {
    canvas.set_width(backing_width);
    canvas.set_height(backing_height);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_width));
    _ = style.set_property("height", &format!("{}px", css_height));
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}
