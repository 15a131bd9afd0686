use instant::Instant;
use scene_core::{run_frame, CancelToken, FrameOutcome, FrameStats, Renderer, SceneController};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stops a loop started by [`start_loop`].
pub struct LoopHandle {
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl LoopHandle {
    /// Cancel the queued animation frame and stop rescheduling. Must not be
    /// called from inside the frame callback.
    pub fn stop(&self) {
        self.token.cancel();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Dropping the closure breaks its self-reference.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Drive `controller` from `requestAnimationFrame` until the returned handle
/// is stopped.
pub fn start_loop<R: Renderer + 'static>(
    controller: Rc<RefCell<SceneController<R>>>,
) -> LoopHandle {
    let token = CancelToken::new();
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Tick = Rc::new(RefCell::new(None));

    let token_tick = token.clone();
    let pending_tick = pending.clone();
    let tick_next = tick.clone();
    let mut stats = FrameStats::new(Instant::now());
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        let outcome = run_frame(&token_tick, &mut controller.borrow_mut(), || {
            pending_tick.set(request_frame(&tick_next));
        });
        if let FrameOutcome::Failed(e) = outcome {
            log::error!("render error: {}", e);
        }
        if let Some(fps) = stats.record(Instant::now()) {
            log::debug!("[frame] {:.1} fps", fps);
        }
    }) as Box<dyn FnMut()>));

    pending.set(request_frame(&tick));
    log::info!("[frame] loop started");
    LoopHandle {
        token,
        pending,
        tick,
    }
}
