#![cfg(target_arch = "wasm32")]
use scene_core::{SceneConfig, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod sizing;

// Everything that must stay alive while the scene runs.
struct App {
    loop_handle: frame::LoopHandle,
    listeners: Vec<events::Listener>,
    canvas: web::HtmlCanvasElement,
}

impl App {
    fn stop(self) {
        self.loop_handle.stop();
        drop(self.listeners);
        self.canvas.remove();
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop, detach listeners and remove the canvas.
#[wasm_bindgen]
pub fn stop_scene() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.stop();
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SceneConfig::default();
    let container = document
        .get_element_by_id(&config.container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", config.container_id))?;
    let (width, height) = dom::container_size(&container);

    let canvas = dom::append_canvas(&document, &container)?;
    let renderer = render::WgpuRenderer::new(canvas.clone()).await?;
    let controller = Rc::new(RefCell::new(SceneController::new(
        config, width, height, renderer,
    )?));

    let js_err = |e: JsValue| anyhow::anyhow!("add listener: {:?}", e);
    let listeners = vec![
        events::wire_resize(&window, container, controller.clone()).map_err(js_err)?,
        events::wire_pointermove(&document, controller.clone()).map_err(js_err)?,
    ];

    let loop_handle = frame::start_loop(controller);
    let previous = APP.with(|a| {
        a.borrow_mut().replace(App {
            loop_handle,
            listeners,
            canvas,
        })
    });
    if let Some(old) = previous {
        old.stop();
    }
    Ok(())
}
