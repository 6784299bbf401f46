use crate::core::{Clock, Scene, Show, WallClock};
use crate::render::CanvasSurface;
use crate::stage::DomStage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a single animation frame touches.
pub struct FrameContext {
    pub scene: Scene<CanvasSurface>,
    pub show: Show,
    pub stage: DomStage,
    pub clock: WallClock,
}

impl FrameContext {
    /// Fire due timeline cues, then redraw every active layer.
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let fired = self.show.poll(now, &mut self.scene, &mut self.stage);
        if fired > 0 {
            log::debug!("[frame] {} cues at {:?}", fired, now);
        }
        self.scene.frame();
    }

    /// Handle the start trigger; repeated triggers are ignored.
    pub fn start(&mut self) {
        let now = self.clock.now();
        if !self.show.start(now, &mut self.stage) {
            log::debug!("[frame] start ignored, already running");
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.scene.resize(width, height);
    }
}

/// Drive `frame` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
